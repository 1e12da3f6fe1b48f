pub mod merchant;
pub mod merchant_item;

pub use self::merchant::CreateMerchantRequest;
pub use self::merchant_item::ReplaceMerchantItemsRequest;
