//! Process configuration, read once from the environment at startup.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use chorebot_core::participants::ParticipantList;
use chorebot_state_store::file_state_store::DEFAULT_STATE_FILE;

use crate::error::AppError;

const DEFAULT_PARTICIPANTS: &str = "Pessoa1,Pessoa2";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 80;

/// Immutable bot configuration.
#[derive(Clone)]
pub struct Config {
    /// Bearer token for the messaging API.
    pub whapi_token: String,
    /// Base URL of the messaging API.
    pub api_url: String,
    /// The only chat the bot answers in.
    pub target_group_id: String,
    /// People sharing the chore, in rotation order.
    pub participants: ParticipantList,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Location of the durable rotation state.
    pub state_file: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("whapi_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("target_group_id", &self.target_group_id)
            .field("participants", &self.participants)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("state_file", &self.state_file)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `WHAPI_TOKEN`, `API_URL` or
    /// `TARGET_GROUP_ID` is missing or blank, if `PORT` is not a valid
    /// `u16`, or if `PARTICIPANTS` names nobody.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} environment variable must be set")))
        };

        let whapi_token = required("WHAPI_TOKEN")?;
        let api_url = required("API_URL")?;
        let target_group_id = required("TARGET_GROUP_ID")?;

        let participants = ParticipantList::parse_csv(
            &lookup("PARTICIPANTS").unwrap_or_else(|| DEFAULT_PARTICIPANTS.to_owned()),
        )
        .map_err(|e| AppError::Config(format!("PARTICIPANTS: {e}")))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let state_file = lookup("STATE_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_STATE_FILE), PathBuf::from);

        Ok(Self {
            whapi_token,
            api_url,
            target_group_id,
            participants,
            host,
            port,
            state_file,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
