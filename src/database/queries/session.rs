use diesel::{prelude::*, update};

use crate::database::{model::parse_mode, Mode, UserState};

use super::super::schema::*;
use super::group::ensure_group;
use super::keyword::ensure_sticker;
use super::{Database, DatabaseError, PoolExt};

impl Database {
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn get_user_state(&self, chat_id: i64) -> Result<UserState, DatabaseError> {
        self.pool
            .exec(move |conn| {
                let state: Option<(Option<String>, Option<String>)> = sessions::table
                    .find(chat_id)
                    .select((sessions::file_id, sessions::mode))
                    .first(conn)
                    .optional()?;
                Ok(state
                    .map(|(sticker_file_id, mode)| UserState {
                        sticker_file_id,
                        mode: parse_mode(mode),
                    })
                    .unwrap_or_default())
            })
            .await
    }

    /// Returns the chat's group and the sticker that is currently being tagged, if any.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn set_mode(
        &self,
        chat_id: i64,
        mode: Mode,
    ) -> Result<(i64, Option<String>), DatabaseError> {
        self.pool
            .exec(move |conn| {
                conn.immediate_transaction::<_, DatabaseError, _>(|conn| {
                    let group_id = ensure_group(conn, chat_id)?;
                    let sticker_file_id: Option<String> = update(sessions::table.find(chat_id))
                        .set(sessions::mode.eq(mode.as_str()))
                        .returning(sessions::file_id)
                        .get_result(conn)?;
                    Ok((group_id, sticker_file_id))
                })
            })
            .await
    }

    /// Makes the sticker the one that subsequent keyword messages apply to.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn set_active_sticker_and_get_mode(
        &self,
        chat_id: i64,
        sticker_file_id: String,
    ) -> Result<(i64, Mode), DatabaseError> {
        self.pool
            .exec(move |conn| {
                conn.immediate_transaction::<_, DatabaseError, _>(|conn| {
                    let group_id = ensure_group(conn, chat_id)?;
                    ensure_sticker(conn, &sticker_file_id)?;
                    let mode: Option<String> = update(sessions::table.find(chat_id))
                        .set(sessions::file_id.eq(&sticker_file_id))
                        .returning(sessions::mode)
                        .get_result(conn)?;
                    Ok((group_id, parse_mode(mode).unwrap_or_default()))
                })
            })
            .await
    }
}
