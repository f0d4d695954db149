use super::{BotError, InternalError};

pub fn report_background_task_error<T>(result: Result<T, InternalError>) {
    match result {
        Ok(_) => {}
        Err(err) if err.is_timeout_error() => tracing::warn!("background task timed out: {err:?}"),
        Err(err) => tracing::error!("background task error: {err:?}"),
    }
}

pub fn report_internal_error(error: &InternalError) {
    tracing::error!("handler error: {error:?}");
}

pub fn report_bot_error(error: &BotError) {
    match error {
        BotError::InternalError(error) => report_internal_error(error),
        BotError::UserError(error) => tracing::debug!("user error: {error}"),
    }
}
