use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;

use crate::catalog::{FoodCatalog, MockCatalog, MockRecommender, RecommendationProvider};
use crate::config::AppConfig;
use crate::session::Session;
use crate::storage::{KeyValueStore, MemoryStore, PgStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn KeyValueStore>,
    pub catalog: Arc<dyn FoodCatalog>,
    pub recommender: Arc<dyn RecommendationProvider>,
    /// The single active session; `None` while logged out.
    pub session: Arc<Mutex<Option<Session>>>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = match &config.database_url {
            Some(url) => {
                let db = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .connect(url)
                    .await
                    .context("connect to database")?;

                if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
                    tracing::warn!(error = %e, "migration failed; continuing");
                }
                tracing::info!("using postgres store");
                Arc::new(PgStore::new(db)) as Arc<dyn KeyValueStore>
            }
            None => {
                tracing::info!("DATABASE_URL not set; using in-memory store");
                Arc::new(MemoryStore::new()) as Arc<dyn KeyValueStore>
            }
        };

        Ok(Self::from_parts(
            config,
            store,
            Arc::new(MockCatalog::default()),
            Arc::new(MockRecommender::default()),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn FoodCatalog>,
        recommender: Arc<dyn RecommendationProvider>,
    ) -> Self {
        Self {
            config,
            store,
            catalog,
            recommender,
            session: Arc::new(Mutex::new(None)),
        }
    }

    /// In-memory store and built-in catalog, for tests.
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(MemoryStore::new()),
            Arc::new(MockCatalog::default()),
            Arc::new(MockRecommender::default()),
        )
    }
}
