mod command;
mod query;
mod summary;

pub use self::command::MerchantItemCommandService;
pub use self::query::MerchantItemQueryService;
pub use self::summary::MerchantSummaryService;
