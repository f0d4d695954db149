use actix_web::{http::header::ContentType, post, web, HttpResponse};
use tracing::warn;

use crate::{
    bot::{dispatch_update, Update},
    text::Text,
};

use super::AppState;

const PARSE_ERROR: &str = "error while parsing update";
const UNHANDLED_UPDATE: &str = "unable to process request: neither message nor inline query found";

/// Telegram posts every update here. The reply action goes back in the response body.
#[post("/{secret}")]
pub(super) async fn webhook(
    secret: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> HttpResponse {
    if secret.into_inner() != data.request_context.config.webhook_secret() {
        return HttpResponse::NotFound().finish();
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(err) => {
            warn!("could not parse update: {err}");
            return plain_text(PARSE_ERROR.to_string());
        }
    };

    match dispatch_update(update, data.request_context.clone()).await {
        Ok(Some(reply)) => HttpResponse::Ok().json(reply),
        Ok(None) => plain_text(UNHANDLED_UPDATE.to_string()),
        // already reported by the handler
        Err(_) => HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body(Text::internal_error()),
    }
}

fn plain_text(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}
