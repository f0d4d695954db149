use diesel::{delete, insert_into, prelude::*};

use crate::database::TagChange;
use crate::tags::{escape_like, normalize_keywords};

use super::super::schema::*;
use super::{with_retries, Database, DatabaseError, PoolExt};

impl Database {
    /// Attaches the keywords to the sticker within the group; keywords that are already
    /// attached are skipped and not counted.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn add_keywords(
        &self,
        sticker_file_id: &str,
        keywords: &str,
        group_id: i64,
    ) -> Result<TagChange, DatabaseError> {
        let keywords = normalize_keywords(keywords);
        if keywords.is_empty() {
            return Ok(TagChange::no_change());
        }
        let sticker_file_id = sticker_file_id.to_string();
        self.pool
            .exec(move |conn| {
                conn.immediate_transaction::<_, DatabaseError, _>(|conn| {
                    let sticker_id = ensure_sticker(conn, &sticker_file_id)?;
                    let mut added = 0;
                    for keyword in &keywords {
                        let keyword_id = ensure_keyword(conn, keyword)?;
                        added += insert_into(sticker_keywords::table)
                            .values((
                                sticker_keywords::sticker_id.eq(sticker_id),
                                sticker_keywords::keyword_id.eq(keyword_id),
                                sticker_keywords::group_id.eq(group_id),
                            ))
                            .on_conflict_do_nothing()
                            .execute(conn)?;
                    }
                    Ok(TagChange::from_count(added))
                })
            })
            .await
    }

    /// Every token removes all keywords of the sticker that start with it.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn remove_keywords(
        &self,
        sticker_file_id: &str,
        keywords: &str,
        group_id: i64,
    ) -> Result<TagChange, DatabaseError> {
        let patterns = normalize_keywords(keywords)
            .iter()
            .map(|keyword| format!("{}%", escape_like(keyword)))
            .collect::<Vec<_>>();
        if patterns.is_empty() {
            return Ok(TagChange::no_change());
        }
        let sticker_file_id = sticker_file_id.to_string();
        self.pool
            .exec(move |conn| {
                conn.immediate_transaction::<_, DatabaseError, _>(|conn| {
                    let Some(sticker_id) = find_sticker(conn, &sticker_file_id)? else {
                        return Ok(TagChange::no_change());
                    };
                    let mut removed = 0;
                    for pattern in patterns {
                        let matching_keywords = keywords::table
                            .filter(keywords::keyword.like(pattern).escape('\\'))
                            .select(keywords::id);
                        removed += delete(
                            sticker_keywords::table
                                .filter(sticker_keywords::sticker_id.eq(sticker_id))
                                .filter(sticker_keywords::group_id.eq(group_id))
                                .filter(sticker_keywords::keyword_id.eq_any(matching_keywords)),
                        )
                        .execute(conn)?;
                    }
                    Ok(TagChange::from_count(removed))
                })
            })
            .await
    }

    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn get_keywords_for_sticker(
        &self,
        sticker_file_id: &str,
        group_id: i64,
    ) -> Result<Vec<String>, DatabaseError> {
        let sticker_file_id = sticker_file_id.to_string();
        self.pool
            .exec(move |conn| {
                Ok(sticker_keywords::table
                    .inner_join(keywords::table)
                    .inner_join(stickers::table)
                    .filter(stickers::file_id.eq(sticker_file_id))
                    .filter(sticker_keywords::group_id.eq(group_id))
                    .order_by(sticker_keywords::id)
                    .select(keywords::keyword)
                    .load(conn)?)
            })
            .await
    }
}

fn find_sticker(conn: &mut SqliteConnection, file_id: &str) -> Result<Option<i64>, DatabaseError> {
    Ok(stickers::table
        .filter(stickers::file_id.eq(file_id))
        .select(stickers::id)
        .first(conn)
        .optional()?)
}

pub(super) fn ensure_sticker(conn: &mut SqliteConnection, file_id: &str) -> Result<i64, DatabaseError> {
    with_retries(|| {
        if let Some(id) = find_sticker(conn, file_id)? {
            return Ok(Some(id));
        }
        Ok(insert_into(stickers::table)
            .values(stickers::file_id.eq(file_id))
            .on_conflict_do_nothing()
            .returning(stickers::id)
            .get_result(conn)
            .optional()?)
    })
}

fn ensure_keyword(conn: &mut SqliteConnection, keyword: &str) -> Result<i64, DatabaseError> {
    with_retries(|| {
        let existing = keywords::table
            .filter(keywords::keyword.eq(keyword))
            .select(keywords::id)
            .first(conn)
            .optional()?;
        if existing.is_some() {
            return Ok(existing);
        }
        Ok(insert_into(keywords::table)
            .values(keywords::keyword.eq(keyword))
            .on_conflict_do_nothing()
            .returning(keywords::id)
            .get_result(conn)
            .optional()?)
    })
}
