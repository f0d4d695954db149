use diesel::{
    query_builder::{BoxedSqlQuery, SqlQuery},
    sql_query,
    sql_types::{BigInt, Text},
    sqlite::Sqlite,
};

use crate::tags::escape_like;

/// Stickers of one group that carry a keyword starting with every token, newest association first.
#[derive(Debug)]
pub(super) struct KeywordSearchQuery {
    tokens: Vec<String>,
    group_id: i64,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl KeywordSearchQuery {
    #[must_use]
    pub(super) fn new(tokens: Vec<String>, group_id: i64) -> Self {
        Self {
            tokens,
            group_id,
            limit: None,
            offset: None,
        }
    }

    #[must_use]
    pub(super) const fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub(super) const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// `None` when there is nothing to search for.
    #[must_use]
    pub(super) fn generate(&self) -> Option<BoxedSqlQuery<'static, Sqlite, SqlQuery>> {
        let (first, rest) = self.tokens.split_first()?;

        let mut q = sql_query("")
            .into_boxed::<Sqlite>()
            .sql("SELECT k1.file_id AS file_id FROM (")
            .sql("SELECT s.id AS sticker_id, s.file_id AS file_id, sk.id AS association_id ")
            .sql("FROM keywords k JOIN sticker_keywords sk ON sk.keyword_id = k.id ")
            .sql("JOIN stickers s ON sk.sticker_id = s.id ")
            .sql("WHERE sk.group_id = ?")
            .bind::<BigInt, _>(self.group_id)
            .sql(" AND k.keyword LIKE ?")
            .bind::<Text, _>(prefix_pattern(first))
            .sql(" ESCAPE '\\') AS k1");

        for (index, token) in rest.iter().enumerate() {
            let alias = format!("k{}", index + 2);
            q = q
                .sql(" JOIN (SELECT sk.sticker_id AS sticker_id ")
                .sql("FROM keywords k JOIN sticker_keywords sk ON sk.keyword_id = k.id ")
                .sql("WHERE sk.group_id = ?")
                .bind::<BigInt, _>(self.group_id)
                .sql(" AND k.keyword LIKE ?")
                .bind::<Text, _>(prefix_pattern(token))
                .sql(format!(
                    " ESCAPE '\\') AS {alias} ON k1.sticker_id = {alias}.sticker_id"
                ));
        }

        Some(
            q.sql(" GROUP BY k1.file_id ORDER BY MAX(k1.association_id) DESC LIMIT ?")
                .bind::<BigInt, _>(self.limit.unwrap_or(50))
                .sql(" OFFSET ?")
                .bind::<BigInt, _>(self.offset.unwrap_or_default()),
        )
    }
}

fn prefix_pattern(token: &str) -> String {
    format!("{}%", escape_like(token))
}
