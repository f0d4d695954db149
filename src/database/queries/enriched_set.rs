use diesel::{dsl::exists, insert_into, prelude::*, select};

use super::super::schema::enriched_sets;
use super::{Database, DatabaseError, PoolExt};

impl Database {
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn is_set_enriched(
        &self,
        set_name: &str,
        group_id: i64,
    ) -> Result<bool, DatabaseError> {
        let set_name = set_name.to_string();
        self.pool
            .exec(move |conn| {
                Ok(select(exists(
                    enriched_sets::table
                        .filter(enriched_sets::set_name.eq(set_name))
                        .filter(enriched_sets::group_id.eq(group_id)),
                ))
                .get_result::<bool>(conn)?)
            })
            .await
    }

    /// Remembers that the set's default keywords were added to the group.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn mark_set_enriched(
        &self,
        set_name: &str,
        group_id: i64,
    ) -> Result<(), DatabaseError> {
        let set_name = set_name.to_string();
        self.pool
            .exec(move |conn| {
                insert_into(enriched_sets::table)
                    .values((
                        enriched_sets::set_name.eq(set_name),
                        enriched_sets::group_id.eq(group_id),
                    ))
                    .on_conflict_do_nothing()
                    .execute(conn)?;
                Ok(())
            })
            .await
    }
}
