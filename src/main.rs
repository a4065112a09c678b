mod bot;
mod config;
mod irc;
mod logging;
mod lookup;
mod namegen;

use crate::bot::action::Action;
use crate::bot::event::BotEvent;
use crate::bot::handler::{self, BotContext};
use crate::bot::suggest::suggest_names;
use crate::irc::manager::IrcManager;
use crate::logging::CommandLogger;
use crate::lookup::HttpPlayerLookup;
use crate::namegen::fetch::HttpNameSource;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cfg = config::load_config()?;
    run_bot(cfg).await
}

async fn run_bot(cfg: config::AppConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<BotEvent>();

    let mut manager = IrcManager::new(event_tx.clone());
    let mut command_logger = CommandLogger::new(&cfg.logging);

    info!(host = %cfg.server.host, port = cfg.server.port, "connecting");
    manager.connect(&cfg.server).await?;

    let ctx = BotContext {
        prefix: cfg.commands.prefix.clone(),
        nickname: cfg.server.nickname.clone(),
    };

    // Main event loop
    loop {
        let event = tokio::select! {
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                event
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                manager.send_quit(None);
                break;
            }
        };

        for action in handler::handle_event(&ctx, event) {
            match action {
                Action::Suggest {
                    target,
                    length,
                    sender,
                } => {
                    let request = match length {
                        Some(length) => format!("suggestname {}", length),
                        None => "suggestname".to_string(),
                    };
                    command_logger.log_command(&sender, &target, &request);

                    let Some(replier) = manager.replier(&target) else {
                        continue;
                    };
                    let generator = cfg.generator.clone();
                    let lookup = cfg.lookup.clone();
                    // One short-lived task per invocation; the HTTP clients
                    // live only as long as the command does.
                    tokio::spawn(async move {
                        let source = HttpNameSource::new(
                            generator.url_template,
                            Duration::from_secs(generator.timeout_secs),
                        );
                        let lookup = HttpPlayerLookup::new(
                            lookup.url_template,
                            Duration::from_secs(lookup.timeout_secs),
                        );
                        let reply = suggest_names(&source, &lookup, length).await;
                        if let Err(e) = replier.reply(&reply) {
                            warn!(target = %replier.target(), error = %e, "failed to send reply");
                        }
                    });
                }
                Action::Reply { target, text } => {
                    if let Some(replier) = manager.replier(&target) {
                        if let Err(e) = replier.reply(&text) {
                            warn!(target = %target, error = %e, "failed to send reply");
                        }
                    }
                }
                Action::Shutdown { reason } => {
                    warn!(%reason, "disconnected");
                    return Ok(());
                }
            }
        }
    }

    Ok(())
}
