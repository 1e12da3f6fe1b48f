use async_trait::async_trait;
use axum::Router;
use merchant_items::{di::Repositories, handler::AppRouter, state::AppState};
use serde_json::Value;
use shared::{
    abstract_trait::{
        merchant::repository::{DynMerchantCommandRepository, MerchantCommandRepositoryTrait},
        merchant_item::repository::{
            command::{DynMerchantItemCommandRepository, MerchantItemCommandRepositoryTrait},
            query::{DynMerchantItemQueryRepository, MerchantItemQueryRepositoryTrait},
        },
        transaction::repository::{DynTransactionQueryRepository, TransactionQueryRepositoryTrait},
    },
    domain::requests::CreateMerchantRequest,
    errors::RepositoryError,
    model::{
        item::Item,
        merchant::MerchantModel,
        transaction::{PURCHASE_TYPE, TransactionModel},
        user::{MERCHANT_ROLE, MerchantUserModel},
    },
};
use sqlx::types::Json;
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicI32, Ordering},
    },
};

/// Stands in for the database behind every repository trait.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<String, MerchantUserModel>>,
    transactions: Mutex<Vec<TransactionModel>>,
    merchants: Mutex<HashMap<String, MerchantModel>>,
    next_id: AtomicI32,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn seed_user(
        &self,
        user_id: &str,
        role: &str,
        items: Option<Value>,
        wallet_balance: Option<f64>,
    ) {
        let items = items.map(|v| Json(serde_json::from_value::<Vec<Item>>(v).expect("items")));
        let user = MerchantUserModel {
            id: self.next_id(),
            user_id: user_id.to_string(),
            role: role.to_string(),
            items,
            wallet_id: wallet_balance.map(|_| format!("w-{user_id}")),
            wallet_balance,
            created_at: None,
            updated_at: None,
        };
        self.users
            .lock()
            .expect("users lock")
            .insert(user_id.to_string(), user);
    }

    pub fn seed_merchant(&self, user_id: &str, items: Option<Value>) {
        self.seed_user(user_id, MERCHANT_ROLE, items, None);
    }

    pub fn seed_transaction(&self, transaction_type: &str, merchant_id: &str, items: Value) {
        let transaction = TransactionModel {
            id: self.next_id(),
            transaction_type: transaction_type.to_string(),
            merchant_id: merchant_id.to_string(),
            items: Some(Json(items)),
            created_at: None,
        };
        self.transactions
            .lock()
            .expect("transactions lock")
            .push(transaction);
    }

    pub fn stored_items(&self, user_id: &str) -> Option<Vec<Item>> {
        self.users
            .lock()
            .expect("users lock")
            .get(user_id)
            .and_then(|user| user.items.as_ref().map(|items| items.0.clone()))
    }

    pub fn merchant_record(&self, merchant_id: &str) -> Option<MerchantModel> {
        self.merchants
            .lock()
            .expect("merchants lock")
            .get(merchant_id)
            .cloned()
    }

    pub fn fail_with_datastore_errors(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::Custom("connection reset by peer".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MerchantItemQueryRepositoryTrait for InMemoryStore {
    async fn find_merchant(&self, user_id: &str) -> Result<MerchantUserModel, RepositoryError> {
        self.check_available()?;
        self.users
            .lock()
            .expect("users lock")
            .get(user_id)
            .filter(|user| user.role == MERCHANT_ROLE)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_user(&self, user_id: &str) -> Result<MerchantUserModel, RepositoryError> {
        self.check_available()?;
        self.users
            .lock()
            .expect("users lock")
            .get(user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl MerchantItemCommandRepositoryTrait for InMemoryStore {
    async fn replace_items(
        &self,
        user_id: &str,
        items: &[Item],
    ) -> Result<MerchantUserModel, RepositoryError> {
        self.check_available()?;
        let mut users = self.users.lock().expect("users lock");
        let user = users
            .get_mut(user_id)
            .filter(|user| user.role == MERCHANT_ROLE)
            .ok_or(RepositoryError::NotFound)?;
        user.items = Some(Json(items.to_vec()));
        Ok(user.clone())
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for InMemoryStore {
    async fn find_purchases_by_merchant(
        &self,
        merchant_id: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        self.check_available()?;
        Ok(self
            .transactions
            .lock()
            .expect("transactions lock")
            .iter()
            .filter(|tx| tx.transaction_type == PURCHASE_TYPE && tx.merchant_id == merchant_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MerchantCommandRepositoryTrait for InMemoryStore {
    async fn create(
        &self,
        request: &CreateMerchantRequest,
    ) -> Result<MerchantModel, RepositoryError> {
        self.check_available()?;
        let mut merchants = self.merchants.lock().expect("merchants lock");
        if merchants.contains_key(&request.merchant_id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "merchant_id={}",
                request.merchant_id
            )));
        }

        let merchant = MerchantModel {
            id: self.next_id(),
            merchant_id: request.merchant_id.clone(),
            merchant_name: request.merchant_name.clone(),
            wallet_id: request.wallet_id.clone(),
            items: Json(Vec::new()),
            created_at: None,
            updated_at: None,
        };
        merchants.insert(request.merchant_id.clone(), merchant.clone());
        Ok(merchant)
    }
}

pub fn app(store: &Arc<InMemoryStore>) -> Router {
    let repositories = Repositories {
        merchant_item_query: store.clone() as DynMerchantItemQueryRepository,
        merchant_item_command: store.clone() as DynMerchantItemCommandRepository,
        transaction_query: store.clone() as DynTransactionQueryRepository,
        merchant_command: store.clone() as DynMerchantCommandRepository,
    };

    AppRouter::build(AppState::from_repositories(repositories))
}
