use std::sync::Arc;

use crate::{background_tasks::EnrichmentWorker, database::Database, Config};

#[derive(Clone)]
pub struct RequestContext {
    pub config: Arc<Config>,
    pub database: Database,
    pub enrichment_worker: EnrichmentWorker,
}

impl RequestContext {
    #[must_use]
    pub fn new(config: Arc<Config>, database: Database, enrichment_worker: EnrichmentWorker) -> Self {
        Self {
            config,
            database,
            enrichment_worker,
        }
    }

    #[must_use]
    pub fn bot_username(&self) -> &str {
        &self.config.telegram_bot_username
    }
}

#[cfg(test)]
pub(crate) async fn test_context() -> (RequestContext, tempfile::TempDir) {
    use crate::background_tasks::PendingSource;

    let (database, dir) = crate::database::test_database().await;
    let config = Arc::new(super::test_config());
    let enrichment_worker =
        EnrichmentWorker::start(PendingSource, database.clone(), config.enrichment_queue_size);
    (RequestContext::new(config, database, enrichment_worker), dir)
}
