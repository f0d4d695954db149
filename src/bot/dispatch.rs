use crate::{inline::inline_query_handler_wrapper, message::message_handler_wrapper};

use super::{InternalError, RequestContext, Update, WebhookReply};

/// Routes an update to its handler. `None` if it carries neither a message nor an inline query.
#[tracing::instrument(skip_all)]
pub async fn dispatch_update(
    update: Update,
    request_context: RequestContext,
) -> Result<Option<WebhookReply>, InternalError> {
    match update {
        Update {
            message: Some(message),
            ..
        } => message_handler_wrapper(message, request_context)
            .await
            .map(Some),
        Update {
            inline_query: Some(inline_query),
            ..
        } => inline_query_handler_wrapper(inline_query, request_context)
            .await
            .map(Some),
        _ => {
            tracing::warn!("unhandled update");
            Ok(None)
        }
    }
}
