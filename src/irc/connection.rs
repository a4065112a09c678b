use crate::bot::event::BotEvent;
use crate::config::ServerConfig;
use anyhow::Result;
use futures::StreamExt;
use irc::client::prelude::*;
use tokio::sync::mpsc;

pub struct IrcConnection {
    pub sender: irc::client::Sender,
}

/// Connect to the configured server and forward every inbound message into
/// the event channel from a background task.
pub async fn spawn_connection(
    server: &ServerConfig,
    event_tx: mpsc::UnboundedSender<BotEvent>,
) -> Result<IrcConnection> {
    let config = Config {
        server: Some(server.host.clone()),
        port: Some(server.port),
        use_tls: Some(server.tls),
        nickname: Some(server.nickname.clone()),
        username: server.username.clone(),
        realname: server.realname.clone(),
        password: server.password.clone(),
        nick_password: server.nick_password.clone(),
        channels: server.channels.clone(),
        dangerously_accept_invalid_certs: Some(server.accept_invalid_certs),
        ..Config::default()
    };

    let mut client = Client::from_config(config).await?;
    client.identify()?;

    let sender = client.sender();
    let mut stream = client.stream()?;

    let _ = event_tx.send(BotEvent::Connected);

    tokio::spawn(async move {
        while let Some(result) = stream.next().await {
            match result {
                Ok(message) => {
                    if event_tx.send(BotEvent::Message(message)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = event_tx.send(BotEvent::Error(e.to_string()));
                    break;
                }
            }
        }
        let _ = event_tx.send(BotEvent::Disconnected {
            reason: "Connection closed".to_string(),
        });
    });

    Ok(IrcConnection { sender })
}
