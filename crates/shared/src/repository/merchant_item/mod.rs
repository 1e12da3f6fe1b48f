mod command;
mod query;

pub use self::command::MerchantItemCommandRepository;
pub use self::query::MerchantItemQueryRepository;
