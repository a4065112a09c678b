//! Event routing: turns inbound IRC traffic into [`Action`]s.

use crate::bot::action::Action;
use crate::bot::commands::{self, ParsedCommand};
use crate::bot::event::BotEvent;
use irc::client::prelude::{Command, Message};
use tracing::{info, warn};

pub const USAGE: &str =
    "Usage: suggestname [short|medium|long] - suggest unused character names";

/// Immutable per-connection context the handler needs to interpret messages.
pub struct BotContext {
    pub prefix: String,
    pub nickname: String,
}

pub fn handle_event(ctx: &BotContext, event: BotEvent) -> Vec<Action> {
    match event {
        BotEvent::Connected => {
            info!("connected to server");
            vec![]
        }
        BotEvent::Message(message) => handle_message(ctx, message),
        BotEvent::Error(error) => {
            warn!(%error, "connection error");
            vec![]
        }
        BotEvent::Disconnected { reason } => vec![Action::Shutdown { reason }],
    }
}

fn handle_message(ctx: &BotContext, message: Message) -> Vec<Action> {
    let sender = message.source_nickname().map(|s| s.to_string());
    let Command::PRIVMSG(ref target, ref text) = message.command else {
        return vec![];
    };
    let Some(sender) = sender else {
        return vec![];
    };

    // Direct queries are addressed to our nick; reply to the sender there.
    let reply_target = if target.eq_ignore_ascii_case(&ctx.nickname) {
        sender.clone()
    } else {
        target.clone()
    };

    match commands::parse_command(&ctx.prefix, text) {
        Some(ParsedCommand::SuggestName { length }) => {
            info!(from = %sender, target = %reply_target, ?length, "suggestname command");
            vec![Action::Suggest {
                target: reply_target,
                length,
                sender,
            }]
        }
        Some(ParsedCommand::Help) => vec![Action::Reply {
            target: reply_target,
            text: USAGE.to_string(),
        }],
        None => vec![],
    }
}
