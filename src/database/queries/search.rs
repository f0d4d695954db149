use diesel::prelude::*;

use crate::database::{model::StickerMatch, query_builder::KeywordSearchQuery, SearchPage};
use crate::tags::normalize_keywords;

use super::{Database, DatabaseError, PoolExt};

const PAGE_SIZE: i64 = 50;

impl Database {
    /// Stickers of the group tagged with a keyword starting with each word of `query`.
    /// Stickers whose newest matching association is most recent come first.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn search_stickers(
        &self,
        query: &str,
        group_id: i64,
        offset: i64,
    ) -> Result<SearchPage, DatabaseError> {
        let tokens = normalize_keywords(query);
        if tokens.is_empty() {
            return Ok(SearchPage::default());
        }
        let offset = offset.max(0);
        self.pool
            .exec(move |conn| {
                let Some(query) = KeywordSearchQuery::new(tokens, group_id)
                    .limit(PAGE_SIZE + 1)
                    .offset(offset)
                    .generate()
                else {
                    return Ok(SearchPage::default());
                };
                let mut sticker_file_ids = query
                    .load::<StickerMatch>(conn)?
                    .into_iter()
                    .map(|sticker| sticker.file_id)
                    .collect::<Vec<_>>();
                let next_offset = if sticker_file_ids.len() as i64 > PAGE_SIZE {
                    sticker_file_ids.truncate(PAGE_SIZE as usize);
                    Some(offset + PAGE_SIZE)
                } else {
                    None
                };
                Ok(SearchPage {
                    sticker_file_ids,
                    next_offset,
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::queries::tests::test_database;

    #[tokio::test]
    async fn empty_query_returns_nothing() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group = db.get_or_create_group(1).await?;
        db.add_keywords("sticker", "cat", group).await?;
        assert_eq!(db.search_stickers("", group, 0).await?, SearchPage::default());
        assert_eq!(db.search_stickers("   ", group, 0).await?, SearchPage::default());
        Ok(())
    }

    #[tokio::test]
    async fn search_is_scoped_to_the_group() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group_a = db.get_or_create_group(1).await?;
        let group_b = db.get_or_create_group(2).await?;
        db.add_keywords("sticker-a", "x", group_a).await?;

        assert_eq!(db.search_stickers("x", group_a, 0).await?.sticker_file_ids, vec!["sticker-a"]);
        assert!(db.search_stickers("x", group_b, 0).await?.sticker_file_ids.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn all_tokens_must_match() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group = db.get_or_create_group(1).await?;
        db.add_keywords("sticker", "a b c", group).await?;
        db.add_keywords("other", "a d", group).await?;

        assert_eq!(db.search_stickers("a b c", group, 0).await?.sticker_file_ids, vec!["sticker"]);
        assert!(db.search_stickers("a b d", group, 0).await?.sticker_file_ids.is_empty());
        assert_eq!(db.search_stickers("d A", group, 0).await?.sticker_file_ids, vec!["other"]);
        Ok(())
    }

    #[tokio::test]
    async fn tokens_match_prefixes() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group = db.get_or_create_group(1).await?;
        db.add_keywords("sticker", "keyword-completed", group).await?;

        assert_eq!(db.search_stickers("keyword", group, 0).await?.sticker_file_ids, vec!["sticker"]);
        assert!(db.search_stickers("completed", group, 0).await?.sticker_file_ids.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn wildcards_are_literal() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group = db.get_or_create_group(1).await?;
        let literal = r"keyword-per\_\%\\x";
        db.add_keywords("escaped", literal, group).await?;
        db.add_keywords("plain", "keyword-perfect", group).await?;

        assert_eq!(db.search_stickers(literal, group, 0).await?.sticker_file_ids, vec!["escaped"]);
        assert!(db.search_stickers("keyword-per_", group, 0).await?.sticker_file_ids.is_empty());
        assert!(db.search_stickers("%", group, 0).await?.sticker_file_ids.is_empty());
        assert!(db.search_stickers("_", group, 0).await?.sticker_file_ids.is_empty());
        assert_eq!(
            db.search_stickers("keyword-per", group, 0).await?.sticker_file_ids,
            vec!["plain", "escaped"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn newest_association_first() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group = db.get_or_create_group(1).await?;
        db.add_keywords("s1", "cat", group).await?;
        db.add_keywords("s2", "cat", group).await?;
        assert_eq!(db.search_stickers("cat", group, 0).await?.sticker_file_ids, vec!["s2", "s1"]);

        db.remove_keywords("s1", "cat", group).await?;
        db.add_keywords("s1", "cat", group).await?;
        assert_eq!(db.search_stickers("cat", group, 0).await?.sticker_file_ids, vec!["s1", "s2"]);
        Ok(())
    }

    #[tokio::test]
    async fn pages_of_fifty() -> anyhow::Result<()> {
        let (db, _dir) = test_database().await;
        let group = db.get_or_create_group(1).await?;
        for i in 0..51 {
            db.add_keywords(&format!("sticker-{i}"), "shared", group).await?;
        }

        let first = db.search_stickers("shared", group, 0).await?;
        assert_eq!(first.sticker_file_ids.len(), 50);
        assert_eq!(first.sticker_file_ids[0], "sticker-50");
        assert_eq!(first.next_offset, Some(50));

        let second = db.search_stickers("shared", group, 50).await?;
        assert_eq!(second.sticker_file_ids, vec!["sticker-0"]);
        assert_eq!(second.next_offset, None);
        Ok(())
    }
}
