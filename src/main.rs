// src/main.rs
use anyhow::{Context, Result};
use health_status_view::{
    config::{self, Config},
    HealthStatusView, HttpHealthSource, Screen,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, screens to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("health_status_view=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            config::load_config(&path).await?
        }
        None => Config::default(),
    };

    let source = HttpHealthSource::new(&config.endpoint)
        .context("Failed to create HTTP client")?;
    let view = Arc::new(HealthStatusView::new(
        Arc::new(source),
        config.view.stale_responses,
    ));

    info!("Watching {}", config.endpoint.url);

    let mut screens = view.subscribe();
    draw(&view.screen());
    view.mount();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = screens.changed() => {
                if changed.is_err() {
                    break;
                }
                let screen = health_status_view::render(&screens.borrow_and_update());
                draw(&screen);
            }
            line = lines.next_line() => {
                match line.context("Failed to read from stdin")? {
                    Some(input) if input.trim() == "q" => break,
                    Some(_) => match view.screen().action() {
                        Some(action) => {
                            view.trigger(action);
                        }
                        None => warn!("Refresh already in progress"),
                    },
                    None => break,
                }
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}

fn draw(screen: &Screen) {
    println!("{}", screen);
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
