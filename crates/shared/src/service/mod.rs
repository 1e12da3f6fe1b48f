mod merchant;
mod merchant_item;

pub use self::merchant::MerchantCommandService;
pub use self::merchant_item::{
    MerchantItemCommandService, MerchantItemQueryService, MerchantSummaryService,
};

use crate::errors::{RepositoryError, ServiceError};

pub(crate) const MERCHANT_NOT_FOUND: &str = "Merchant not found";

/// Collapses a repository failure on a merchant lookup into the error the
/// caller sees: a missing row stays a 404, anything else becomes `failure`.
pub(crate) fn merchant_lookup_error(err: RepositoryError, failure: &str) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound(MERCHANT_NOT_FOUND.to_string()),
        _ => ServiceError::InternalServerError(failure.to_string()),
    }
}
