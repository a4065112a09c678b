//! The suggestion pipeline behind the `suggestname` command.
//!
//! A single invocation runs straight through: pick a length, fetch the
//! generator page, extract candidates, probe each one against the player
//! lookup, render the reply. Any failure ends the invocation with a specific
//! user message; nothing is retried.

use crate::bot::render::render_suggestions;
use crate::lookup::{probe_availability, PlayerLookup};
use crate::namegen::extract::extract_names;
use crate::namegen::fetch::NameSource;
use crate::namegen::{FetchError, NameLength};
use tracing::{debug, error};

pub const TRANSPORT_REPLY: &str =
    "There was an unexpected error calling the name API. Please try again later.";
pub const TIMEOUT_REPLY: &str = "Timeout calling the name API. Please try again later.";
pub const NO_NAMES_REPLY: &str =
    "No names were found. If this occurs too often, please contact the author of the module.";

/// Run one `suggestname` invocation and produce the reply text.
///
/// Always returns exactly one message, error or suggestion list; the caller
/// sends it to the reply channel as-is.
pub async fn suggest_names<S, L>(source: &S, lookup: &L, length: Option<NameLength>) -> String
where
    S: NameSource + Sync,
    L: PlayerLookup + Sync,
{
    let length = length.unwrap_or_else(NameLength::random);

    let html = match source.fetch(length).await {
        Ok(html) => html,
        Err(FetchError::Timeout) => {
            error!(%length, "name generator fetch timed out");
            return TIMEOUT_REPLY.to_string();
        }
        Err(e) => {
            error!(%length, error = %e, "name generator fetch failed");
            return TRANSPORT_REPLY.to_string();
        }
    };

    let candidates = extract_names(&html);
    if candidates.is_empty() {
        error!(%length, "generator page contained no extractable names");
        return NO_NAMES_REPLY.to_string();
    }
    debug!(%length, count = candidates.len(), "probing candidate names");

    match probe_availability(lookup, &candidates).await {
        Ok(available) => render_suggestions(&available),
        Err(e) => {
            // Every lookup failed: the lookup service itself is broken, so
            // surface its error instead of a generic message.
            error!(error = %e, "all player lookups failed");
            e.to_string()
        }
    }
}
