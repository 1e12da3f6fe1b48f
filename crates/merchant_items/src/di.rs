use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{
        merchant::{
            repository::DynMerchantCommandRepository, service::DynMerchantCommandService,
        },
        merchant_item::{
            repository::{
                command::DynMerchantItemCommandRepository, query::DynMerchantItemQueryRepository,
            },
            service::{
                command::DynMerchantItemCommandService, query::DynMerchantItemQueryService,
                summary::DynMerchantSummaryService,
            },
        },
        transaction::repository::DynTransactionQueryRepository,
    },
    config::ConnectionPool,
    repository::{
        MerchantCommandRepository, MerchantItemCommandRepository, MerchantItemQueryRepository,
        TransactionQueryRepository,
    },
    service::{
        MerchantCommandService, MerchantItemCommandService, MerchantItemQueryService,
        MerchantSummaryService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repositories {
    pub merchant_item_query: DynMerchantItemQueryRepository,
    pub merchant_item_command: DynMerchantItemCommandRepository,
    pub transaction_query: DynTransactionQueryRepository,
    pub merchant_command: DynMerchantCommandRepository,
}

impl Repositories {
    pub fn new(db: ConnectionPool) -> Self {
        let merchant_item_query = Arc::new(MerchantItemQueryRepository::new(db.clone()))
            as DynMerchantItemQueryRepository;
        let merchant_item_command = Arc::new(MerchantItemCommandRepository::new(db.clone()))
            as DynMerchantItemCommandRepository;
        let transaction_query =
            Arc::new(TransactionQueryRepository::new(db.clone())) as DynTransactionQueryRepository;
        let merchant_command =
            Arc::new(MerchantCommandRepository::new(db)) as DynMerchantCommandRepository;

        Self {
            merchant_item_query,
            merchant_item_command,
            transaction_query,
            merchant_command,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub merchant_item_query: DynMerchantItemQueryService,
    pub merchant_item_command: DynMerchantItemCommandService,
    pub merchant_summary: DynMerchantSummaryService,
    pub merchant_command: DynMerchantCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("merchant_item_query", &"MerchantItemQueryService")
            .field("merchant_item_command", &"MerchantItemCommandService")
            .field("merchant_summary", &"MerchantSummaryService")
            .field("merchant_command", &"MerchantCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repositories: Repositories, registry: &mut Registry) -> Self {
        let merchant_item_query = Arc::new(MerchantItemQueryService::new(
            repositories.merchant_item_query.clone(),
            registry,
        )) as DynMerchantItemQueryService;

        let merchant_item_command = Arc::new(MerchantItemCommandService::new(
            repositories.merchant_item_command,
            registry,
        )) as DynMerchantItemCommandService;

        let merchant_summary = Arc::new(MerchantSummaryService::new(
            repositories.merchant_item_query,
            repositories.transaction_query,
            registry,
        )) as DynMerchantSummaryService;

        let merchant_command = Arc::new(MerchantCommandService::new(
            repositories.merchant_command,
            registry,
        )) as DynMerchantCommandService;

        Self {
            merchant_item_query,
            merchant_item_command,
            merchant_summary,
            merchant_command,
        }
    }
}
