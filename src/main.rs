use anyhow::Result;
use std::future::Future;
use stickerman_bot::{Config, UpdateListener};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rust's default thread stack size of 2MiB doesn't allow sufficient recursion depth.
pub fn with_enough_stack<T>(fut: impl Future<Output = T> + Send) -> T {
    let stack_size = 10 * 1024 * 1024; // 10MiB

    // Stack frames are generally larger in debug mode.
    #[cfg(debug_assertions)]
    let stack_size = stack_size * 2;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_stack_size(stack_size)
        .build()
        .expect("runtime to initialize")
        .block_on(fut)
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn init() -> Result<()> {
    let settings = config::Config::builder()
        .set_default("http_listen_address", "0.0.0.0:8085")?
        .set_default("telegram_api_url", "https://api.telegram.org")?
        .set_default("enrichment_queue_size", 100)?
        .add_source(config::File::with_name("./config").required(false))
        .add_source(config::Environment::with_prefix("STICKERMAN"))
        .build()?;

    let config: Config = settings.try_deserialize()?;

    serve_bot_command(config).await
}

async fn serve_bot_command(config: Config) -> Result<()> {
    let update_listener = UpdateListener::new(config).await?;
    update_listener.setup_buttons().await?;
    update_listener.setup_webhook().await?;
    update_listener.listen().await
}

fn main() -> anyhow::Result<()> {
    setup_logging();
    with_enough_stack(init())
}
