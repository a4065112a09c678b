//! Side effects the event handler requests from the main loop.

use crate::namegen::NameLength;

#[derive(Debug, PartialEq)]
pub enum Action {
    /// Run the suggestion pipeline and reply to `target` with the result.
    Suggest {
        target: String,
        length: Option<NameLength>,
        sender: String,
    },
    /// Send a fixed reply (usage text).
    Reply { target: String, text: String },
    /// Connection is gone; shut the bot down.
    Shutdown { reason: String },
}
