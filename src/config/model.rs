//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the bot works out of the box,
//! apart from picking a channel worth listening on.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            commands: CommandsConfig::default(),
            generator: GeneratorConfig::default(),
            lookup: LookupConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// The IRC server the bot connects to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub tls: bool,
    #[serde(default = "default_nickname")]
    pub nickname: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub realname: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub nick_password: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tls: true,
            nickname: default_nickname(),
            username: None,
            realname: None,
            password: None,
            nick_password: None,
            channels: vec![],
            accept_invalid_certs: true,
        }
    }
}

/// Chat command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

/// Name generator endpoint. `{length}` in the template is replaced by the
/// requested length category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_url")]
    pub url_template: String,
    #[serde(default = "default_generator_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            url_template: default_generator_url(),
            timeout_secs: default_generator_timeout(),
        }
    }
}

/// Player lookup endpoint. `{name}` in the template is replaced by the
/// candidate name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_lookup_url")]
    pub url_template: String,
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            url_template: default_lookup_url(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

/// Command audit logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_host() -> String {
    "irc.libera.chat".to_string()
}
fn default_port() -> u16 {
    6697
}
fn default_true() -> bool {
    true
}
fn default_nickname() -> String {
    "NameBot".to_string()
}
fn default_prefix() -> String {
    "!".to_string()
}
fn default_generator_url() -> String {
    "https://www.fantasynamegen.com/sf/{length}/".to_string()
}
fn default_generator_timeout() -> u64 {
    5
}
fn default_lookup_url() -> String {
    "https://people.anarchy-online.com/character/name/{name}/?data_type=json".to_string()
}
fn default_lookup_timeout() -> u64 {
    10
}
fn default_log_dir() -> String {
    "~/.local/share/namebot/logs".to_string()
}
