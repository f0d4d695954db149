use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{info, warn, Instrument};

use crate::{
    bot::{report_background_task_error, InternalError},
    database::Database,
    tags::default_set_keywords,
};

use super::StickerSetSource;

/// Tag every sticker of a set with its default keywords in the given group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichSet {
    pub set_name: String,
    pub group_id: i64,
}

/// Handle to the enrichment task. Submitting never waits for the job to run.
#[derive(Clone, Debug)]
pub struct EnrichmentWorker {
    tx: mpsc::Sender<EnrichSet>,
}

impl EnrichmentWorker {
    #[tracing::instrument(skip(source, database))]
    pub fn start<S: StickerSetSource>(source: S, database: Database, queue_size: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<EnrichSet>(queue_size.max(1));
        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let span = tracing::info_span!(
                    parent: tracing::Span::none(),
                    "enrich_sticker_set_background_task",
                    set_name = %job.set_name,
                    group_id = job.group_id
                );
                let result = enrich_sticker_set(&source, &database, &job)
                    .instrument(span)
                    .await;
                report_background_task_error(result);
            }
        });
        Self { tx }
    }

    pub fn submit(&self, job: EnrichSet) {
        match self.tx.try_send(job) {
            Ok(()) => {}
            Err(TrySendError::Full(job)) => {
                warn!(set_name = %job.set_name, "enrichment queue is full, dropping job");
            }
            Err(TrySendError::Closed(job)) => {
                warn!(set_name = %job.set_name, "enrichment worker stopped, dropping job");
            }
        }
    }
}

async fn enrich_sticker_set<S: StickerSetSource>(
    source: &S,
    database: &Database,
    job: &EnrichSet,
) -> Result<usize, InternalError> {
    if database.is_set_enriched(&job.set_name, job.group_id).await? {
        return Ok(0);
    }
    let set = source.get_sticker_set(&job.set_name).await?;
    let mut added = 0;
    for sticker in &set.stickers {
        let keywords = default_set_keywords(&set.name, &set.title, sticker.emoji.as_deref());
        added += database
            .add_keywords(&sticker.file_id, &keywords, job.group_id)
            .await?
            .count;
    }
    database
        .mark_set_enriched(&job.set_name, job.group_id)
        .await?;
    info!(added, stickers = set.stickers.len(), "enriched sticker set");
    Ok(added)
}
