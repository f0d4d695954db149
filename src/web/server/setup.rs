use actix_web::{web, App, HttpServer};

use crate::bot::RequestContext;

use super::service;

pub struct AppState {
    pub request_context: RequestContext,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(service::webhook);
}

/// Serves the webhook until the server is stopped.
pub async fn run_server(request_context: RequestContext) -> anyhow::Result<()> {
    let addr = request_context.config.http_listen_address.clone();
    tracing::info!("listening on http://{}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(web::Data::new(AppState {
                request_context: request_context.clone(),
            }))
            .configure(configure)
    })
    .bind(addr)?
    .run();
    server.await?;
    Ok(())
}
