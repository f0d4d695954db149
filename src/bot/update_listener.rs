use std::sync::Arc;
use std::time::Duration;

use teloxide::net::default_reqwest_settings;
use teloxide::prelude::*;
use teloxide::types::{AllowedUpdate, MenuButton};
use tracing::info;
use url::Url;

use crate::background_tasks::EnrichmentWorker;
use crate::bot::config::Config;
use crate::database::Database;
use crate::message::list_visible_user_commands;

use super::RequestContext;

pub struct UpdateListener {
    bot: teloxide::Bot,
    request_context: RequestContext,
}

impl UpdateListener {
    #[tracing::instrument(name = "UpdateListener::new", skip(config), err(Debug))]
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let client = default_reqwest_settings()
            .connect_timeout(Duration::from_secs(20))
            .timeout(Duration::from_secs(60))
            .build()?;
        let bot = teloxide::Bot::with_client(config.telegram_bot_token.clone(), client)
            .set_api_url(Url::parse(&config.telegram_api_url)?);
        let database = Database::new(config.db()).await?;
        let enrichment_worker = EnrichmentWorker::start(
            bot.clone(),
            database.clone(),
            config.enrichment_queue_size,
        );
        let request_context = RequestContext::new(Arc::new(config), database, enrichment_worker);

        Ok(Self {
            bot,
            request_context,
        })
    }

    pub async fn setup_buttons(&self) -> anyhow::Result<()> {
        self.bot
            .set_my_commands(list_visible_user_commands())
            .await?;
        self.bot
            .set_chat_menu_button()
            .menu_button(MenuButton::Commands)
            .await?;

        Ok(())
    }

    /// Registers `{webhook_url}/{secret}` with telegram, if a webhook url is configured.
    pub async fn setup_webhook(&self) -> anyhow::Result<()> {
        let config = &self.request_context.config;
        let Some(webhook_url) = &config.webhook_url else {
            info!("no webhook url configured, expecting the webhook to be registered elsewhere");
            return Ok(());
        };
        let url = Url::parse(&format!(
            "{}/{}",
            webhook_url.trim_end_matches('/'),
            config.webhook_secret()
        ))?;
        self.bot
            .set_webhook(url)
            .allowed_updates(vec![AllowedUpdate::Message, AllowedUpdate::InlineQuery])
            .await?;
        info!("webhook registered");
        Ok(())
    }

    pub async fn listen(&self) -> anyhow::Result<()> {
        info!("Listening ...");
        crate::web::server::run_server(self.request_context.clone()).await
    }
}
