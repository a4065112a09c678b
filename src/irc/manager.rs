use crate::bot::event::BotEvent;
use crate::config::ServerConfig;
use crate::irc::connection::{spawn_connection, IrcConnection};
use anyhow::Result;
use tokio::sync::mpsc;

/// Owns the single live IRC connection.
pub struct IrcManager {
    connection: Option<IrcConnection>,
    event_tx: mpsc::UnboundedSender<BotEvent>,
}

impl IrcManager {
    pub fn new(event_tx: mpsc::UnboundedSender<BotEvent>) -> Self {
        Self {
            connection: None,
            event_tx,
        }
    }

    pub async fn connect(&mut self, server: &ServerConfig) -> Result<()> {
        let conn = spawn_connection(server, self.event_tx.clone()).await?;
        self.connection = Some(conn);
        Ok(())
    }

    /// Reply handle for one command invocation. `None` if not connected.
    pub fn replier(&self, target: &str) -> Option<Replier> {
        self.connection.as_ref().map(|conn| Replier {
            sender: conn.sender.clone(),
            target: target.to_string(),
        })
    }

    pub fn send_quit(&mut self, message: Option<&str>) {
        if let Some(conn) = self.connection.take() {
            let _ = conn.sender.send_quit(message.unwrap_or("Leaving"));
        }
    }
}

/// Outbound reply channel for a single command invocation. The suggestion
/// pipeline calls [`Replier::reply`] exactly once.
#[derive(Clone)]
pub struct Replier {
    sender: irc::client::Sender,
    target: String,
}

impl Replier {
    pub fn reply(&self, text: &str) -> Result<()> {
        // Validate: no CTCP injection in outbound messages
        let clean = text.replace('\x01', "");
        self.sender.send_privmsg(&self.target, &clean)?;
        Ok(())
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}
