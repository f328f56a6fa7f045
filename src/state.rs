use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AccountService, RenewalService, SeaOrmAccountService, SeaOrmRenewalService};
use crate::uploads::UploadStore;

/// Everything a request handler can reach. Built once at startup and
/// shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub accounts: Arc<dyn AccountService>,

    pub renewals: Arc<dyn RenewalService>,
}

impl AppState {
    /// Opens the database (applying migrations) and creates the upload
    /// directory.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let uploads = UploadStore::new(&config.uploads.upload_dir);
        uploads.ensure_exists().await?;

        Ok(Self::with_store(config, store, uploads))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store, uploads: UploadStore) -> Self {
        let accounts: Arc<dyn AccountService> = Arc::new(SeaOrmAccountService::new(store.clone()));
        let renewals: Arc<dyn RenewalService> =
            Arc::new(SeaOrmRenewalService::new(store.clone(), uploads));

        Self {
            config: Arc::new(config),
            store,
            accounts,
            renewals,
        }
    }
}
