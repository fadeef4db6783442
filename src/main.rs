use order_queue_backend_rs::{
    app::App,
    jobs,
    types::{Config, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let ctx = Arc::new(config.to_context().await);
    let app = App::new(ctx.clone());

    // The scheduled job never finishes on its own; stop it once the server exits.
    let result = tokio::select! {
        result = app.serve() => result,
        _ = jobs::monitor(ctx.clone()), if ctx.app.process_interval.is_some() => Ok(()),
    };

    if let Err(err) = result {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
