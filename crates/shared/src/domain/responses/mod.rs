pub mod merchant;
pub mod merchant_item;

pub use self::merchant::MerchantResponse;
pub use self::merchant_item::{MerchantItemsResponse, MerchantSummaryResponse};
