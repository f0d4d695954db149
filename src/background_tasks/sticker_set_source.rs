use std::future::Future;

use teloxide::requests::Requester;

use crate::bot::{InternalError, Sticker};

#[derive(Debug, Clone)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub stickers: Vec<Sticker>,
}

impl From<teloxide::types::StickerSet> for StickerSet {
    fn from(set: teloxide::types::StickerSet) -> Self {
        Self {
            name: set.name,
            title: set.title,
            stickers: set
                .stickers
                .into_iter()
                .map(|sticker| Sticker {
                    file_id: sticker.file.id,
                    emoji: sticker.emoji,
                    set_name: sticker.set_name,
                })
                .collect(),
        }
    }
}

/// Where the enrichment worker looks up sticker sets.
pub trait StickerSetSource: Send + Sync + 'static {
    fn get_sticker_set(
        &self,
        set_name: &str,
    ) -> impl Future<Output = Result<StickerSet, InternalError>> + Send;
}

impl StickerSetSource for teloxide::Bot {
    #[tracing::instrument(skip(self), err(Debug))]
    async fn get_sticker_set(&self, set_name: &str) -> Result<StickerSet, InternalError> {
        let set = Requester::get_sticker_set(self, set_name).await?;
        Ok(set.into())
    }
}
