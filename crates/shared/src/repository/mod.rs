mod merchant;
mod merchant_item;
mod transaction;

pub use self::merchant::MerchantCommandRepository;
pub use self::merchant_item::{MerchantItemCommandRepository, MerchantItemQueryRepository};
pub use self::transaction::TransactionQueryRepository;
