use crate::di::{DependenciesInject, Repositories};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(db: ConnectionPool) -> Self {
        Self::from_repositories(Repositories::new(db))
    }

    /// Wires services over any set of repositories. Service metrics are
    /// registered into a fresh registry owned by the returned state.
    pub fn from_repositories(repositories: Repositories) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(repositories, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
