use diesel::{insert_into, prelude::*, update};
use uuid::Uuid;

use crate::database::OperationStatus;

use super::super::schema::*;
use super::{with_retries, Database, DatabaseError, PoolExt};

impl Database {
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn get_or_create_group(&self, chat_id: i64) -> Result<i64, DatabaseError> {
        self.pool
            .exec(move |conn| ensure_group(conn, chat_id))
            .await
    }

    /// Shareable identifier of the chat's group, `None` if the chat never talked to the bot.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn get_group_uuid(&self, chat_id: i64) -> Result<Option<String>, DatabaseError> {
        self.pool
            .exec(move |conn| {
                Ok(sessions::table
                    .inner_join(groups::table)
                    .filter(sessions::chat_id.eq(chat_id))
                    .select(groups::uuid)
                    .first(conn)
                    .optional()?)
            })
            .await
    }

    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn assign_to_group(
        &self,
        chat_id: i64,
        group_uuid: String,
    ) -> Result<OperationStatus, DatabaseError> {
        let Some(group_uuid) = parse_group_uuid(&group_uuid) else {
            return Ok(OperationStatus::InvalidFormat);
        };
        self.pool
            .exec(move |conn| {
                conn.immediate_transaction::<_, DatabaseError, _>(|conn| {
                    ensure_group(conn, chat_id)?;
                    let target: Option<i64> = groups::table
                        .filter(groups::uuid.eq(&group_uuid))
                        .select(groups::id)
                        .first(conn)
                        .optional()?;
                    let Some(target) = target else {
                        return Ok(OperationStatus::NoChange);
                    };
                    let updated_rows = update(sessions::table)
                        .filter(sessions::chat_id.eq(chat_id))
                        .filter(sessions::group_id.ne(target))
                        .set(sessions::group_id.eq(target))
                        .execute(conn)?;
                    Ok(if updated_rows == 0 {
                        OperationStatus::NoChange
                    } else {
                        OperationStatus::Success
                    })
                })
            })
            .await
    }
}

/// Only the canonical hyphenated form is accepted.
fn parse_group_uuid(text: &str) -> Option<String> {
    let uuid = Uuid::try_parse(text.trim()).ok()?;
    let canonical = uuid.hyphenated().to_string();
    (canonical == text.trim().to_lowercase()).then_some(canonical)
}

pub(super) fn find_group(conn: &mut SqliteConnection, chat_id: i64) -> Result<Option<i64>, DatabaseError> {
    Ok(sessions::table
        .find(chat_id)
        .select(sessions::group_id)
        .first(conn)
        .optional()?)
}

/// Returns the chat's group, creating a group and a session for it on first contact.
pub(super) fn ensure_group(conn: &mut SqliteConnection, chat_id: i64) -> Result<i64, DatabaseError> {
    with_retries(|| {
        if let Some(group_id) = find_group(conn, chat_id)? {
            return Ok(Some(group_id));
        }
        create_session(conn, chat_id)
    })
}

/// `None` when another writer created the session first; the new group is rolled back then.
fn create_session(conn: &mut SqliteConnection, chat_id: i64) -> Result<Option<i64>, DatabaseError> {
    let created = conn.transaction::<_, DatabaseError, _>(|conn| {
        let group_id: i64 = insert_into(groups::table)
            .values(groups::uuid.eq(Uuid::new_v4().hyphenated().to_string()))
            .returning(groups::id)
            .get_result(conn)?;
        let session_group: Option<i64> = insert_into(sessions::table)
            .values((
                sessions::chat_id.eq(chat_id),
                sessions::group_id.eq(group_id),
            ))
            .on_conflict_do_nothing()
            .returning(sessions::group_id)
            .get_result(conn)
            .optional()?;
        session_group.ok_or(DatabaseError::NoRowsAffected)
    });
    match created {
        Ok(group_id) => Ok(Some(group_id)),
        Err(DatabaseError::NoRowsAffected) => Ok(None),
        Err(err) => Err(err),
    }
}
