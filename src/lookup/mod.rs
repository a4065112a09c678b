//! Player lookup: the external existence check for character names, and the
//! concurrent availability probe built on top of it.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("player lookup failed: {0}")]
    Service(String),
    #[error("player lookup returned a malformed record: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Service(e.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Malformed(e.to_string())
    }
}

/// Record returned by the lookup API for a taken name.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub profession: Option<String>,
}

/// External existence check for a single character name.
///
/// `Ok(None)` means the name is available, `Ok(Some(_))` means it is taken,
/// and an error means its availability is indeterminate.
#[async_trait]
pub trait PlayerLookup {
    async fn lookup_by_name(&self, name: &str) -> Result<Option<PlayerRecord>, LookupError>;
}

/// Queries the player lookup API over HTTP. A 404 means the name is unknown
/// to the service, i.e. available.
pub struct HttpPlayerLookup {
    client: reqwest::Client,
    url_template: String,
    timeout: Duration,
}

impl HttpPlayerLookup {
    pub fn new(url_template: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url_template,
            timeout,
        }
    }

    fn url_for(&self, name: &str) -> String {
        self.url_template.replace("{name}", name)
    }
}

#[async_trait]
impl PlayerLookup for HttpPlayerLookup {
    async fn lookup_by_name(&self, name: &str) -> Result<Option<PlayerRecord>, LookupError> {
        let url = self.url_for(name);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.error_for_status()?.text().await?;
        // Some deployments answer 200 with an empty or null body for unknown
        // names instead of a 404.
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }
        let record: PlayerRecord = serde_json::from_str(body)?;
        Ok(Some(record))
    }
}

/// Probe every candidate concurrently and return the available subset, in
/// source order.
///
/// All lookups are dispatched at once and joined as a barrier: the result is
/// only meaningful once every queried name has settled. A name whose lookup
/// failed is excluded, never assumed available. If every lookup failed the
/// first error is returned, so a broken lookup service is distinguishable
/// from "nobody is available". Callers must not invoke this with zero
/// candidates; they are expected to have bailed out already.
pub async fn probe_availability<L>(
    lookup: &L,
    candidates: &[String],
) -> Result<Vec<String>, LookupError>
where
    L: PlayerLookup + Sync,
{
    debug_assert!(!candidates.is_empty());

    let results =
        futures::future::join_all(candidates.iter().map(|name| lookup.lookup_by_name(name))).await;

    let mut available = Vec::new();
    let mut first_error = None;
    let mut any_succeeded = false;
    for (name, result) in candidates.iter().zip(results) {
        match result {
            Ok(None) => {
                any_succeeded = true;
                available.push(name.clone());
            }
            Ok(Some(record)) => {
                any_succeeded = true;
                debug!(
                    name = %record.name,
                    level = ?record.level,
                    profession = ?record.profession,
                    "name is taken"
                );
            }
            Err(e) => {
                warn!(name = %name, error = %e, "player lookup failed, excluding candidate");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if !any_succeeded {
        if let Some(e) = first_error {
            return Err(e);
        }
    }
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Canned per-name outcomes: `Some(true)` = taken, `Some(false)` =
    /// available, `None` = the lookup errors.
    struct FakeLookup {
        outcomes: HashMap<String, Option<bool>>,
    }

    impl FakeLookup {
        fn new(outcomes: &[(&str, Option<bool>)]) -> Self {
            Self {
                outcomes: outcomes
                    .iter()
                    .map(|(n, o)| (n.to_string(), *o))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PlayerLookup for FakeLookup {
        async fn lookup_by_name(&self, name: &str) -> Result<Option<PlayerRecord>, LookupError> {
            match self.outcomes.get(name) {
                Some(Some(true)) => Ok(Some(PlayerRecord {
                    name: name.to_string(),
                    level: Some(42),
                    profession: None,
                })),
                Some(Some(false)) => Ok(None),
                _ => Err(LookupError::Service(format!("lookup down for {}", name))),
            }
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failed_lookup_is_excluded_not_assumed_available() {
        let lookup = FakeLookup::new(&[
            ("Anna", Some(true)),
            ("Belos", Some(false)),
            ("Corin", None),
        ]);
        let available = probe_availability(&lookup, &names(&["Anna", "Belos", "Corin"]))
            .await
            .unwrap();
        assert_eq!(available, vec!["Belos".to_string()]);
    }

    #[tokio::test]
    async fn test_all_failed_propagates_first_error() {
        let lookup = FakeLookup::new(&[("Anna", None), ("Belos", None)]);
        let err = probe_availability(&lookup, &names(&["Anna", "Belos"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "player lookup failed: lookup down for Anna");
    }

    #[tokio::test]
    async fn test_all_taken_is_empty_not_an_error() {
        let lookup = FakeLookup::new(&[("Anna", Some(true)), ("Belos", Some(true))]);
        let available = probe_availability(&lookup, &names(&["Anna", "Belos"]))
            .await
            .unwrap();
        assert!(available.is_empty());
    }

    #[tokio::test]
    async fn test_preserves_source_order() {
        let lookup = FakeLookup::new(&[
            ("Zeph", Some(false)),
            ("Anna", Some(false)),
            ("Mira", Some(false)),
        ]);
        let available = probe_availability(&lookup, &names(&["Zeph", "Anna", "Mira"]))
            .await
            .unwrap();
        assert_eq!(available, vec!["Zeph", "Anna", "Mira"]);
    }

    #[test]
    fn test_record_parses_with_missing_optional_fields() {
        let record: PlayerRecord = serde_json::from_str(r#"{"name":"Anna"}"#).unwrap();
        assert_eq!(record.name, "Anna");
        assert_eq!(record.level, None);
        assert_eq!(record.profession, None);
    }

    #[test]
    fn test_lookup_url_substitution() {
        let lookup = HttpPlayerLookup::new(
            "https://people.example.com/character/name/{name}/".to_string(),
            Duration::from_secs(10),
        );
        assert_eq!(
            lookup.url_for("Vorix"),
            "https://people.example.com/character/name/Vorix/"
        );
    }
}
