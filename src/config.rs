//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, optional YAML file
//! (`--config`/`CONFIG_FILE`, falling back to `./config.yaml`),
//! `FRONTDESK_`-prefixed environment variables (`__` separator, e.g.
//! `FRONTDESK_SERVER__PORT=8000`), CLI flags.

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

/// Default welcome message, shown as the first bot bubble of every
/// transcript. Reproduces the greeting of the service this UI was built
/// for; deployments fronting a different bot override `chat.welcome`.
pub const DEFAULT_WELCOME: &str = "Hello! Welcome to the University Admission Chatbot. \u{1f44b}\n\nI can help you with:\n\u{2022} Available programs\n\u{2022} Admission requirements\n\u{2022} Application deadlines\n\u{2022} Tuition fees\n\nHow can I assist you today?";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the external chat service
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    /// Base URL of the external vehicle API
    #[arg(long, env = "VEHICLE_BASE_URL")]
    pub vehicle_base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub chat_base_url: String,
    pub vehicle_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Cosmetic delay before a successful reply renders, in milliseconds.
    pub reply_delay_ms: u64,
    /// Welcome message seeded into every new transcript.
    pub welcome: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.chat_base_url", "http://127.0.0.1:8001")?
            .set_default("upstream.vehicle_base_url", "http://127.0.0.1:8002")?
            .set_default("chat.reply_delay_ms", 500)?
            .set_default("chat.welcome", DEFAULT_WELCOME)?;

        // Config file: explicit path wins, otherwise ./config.yaml if present.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("FRONTDESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their bound env vars) override everything.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(base) = cli.chat_base_url {
            builder = builder.set_override("upstream.chat_base_url", base)?;
        }
        if let Some(base) = cli.vehicle_base_url {
            builder = builder.set_override("upstream.vehicle_base_url", base)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject base URLs that would fail on first use.
    fn validate(&self) -> Result<(), config::ConfigError> {
        for (key, value) in [
            ("upstream.chat_base_url", &self.upstream.chat_base_url),
            ("upstream.vehicle_base_url", &self.upstream.vehicle_base_url),
        ] {
            Url::parse(value)
                .map_err(|e| config::ConfigError::Message(format!("invalid {key}: {e}")))?;
        }
        Ok(())
    }
}
