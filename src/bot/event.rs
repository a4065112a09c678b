//! Events flowing from the IRC connection task into the main loop.

#[derive(Debug)]
pub enum BotEvent {
    Connected,
    Message(irc::client::prelude::Message),
    Error(String),
    Disconnected { reason: String },
}
