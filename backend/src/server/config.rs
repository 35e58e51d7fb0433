//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags and `USERLAB_*` environment variables, falling
//! back to the defaults below.

use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

/// Rejected `log_format` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format `{0}`; expected `json` or `pretty`")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        })
    }
}

/// Listener and logging settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERLAB")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// `json` or `pretty`.
    pub log_format: Option<String>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address pair handed to the listener.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }

    /// Configured log format, falling back to JSON.
    ///
    /// # Errors
    /// Returns [`UnknownLogFormat`] for values other than `json` or `pretty`.
    pub fn log_format(&self) -> Result<LogFormat, UnknownLogFormat> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), str::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("userlab")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("USERLAB_HOST", None::<String>),
            ("USERLAB_PORT", None::<String>),
            ("USERLAB_LOG_FORMAT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), (DEFAULT_HOST.to_owned(), DEFAULT_PORT));
        assert_eq!(settings.log_format(), Ok(LogFormat::Json));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERLAB_HOST", Some("127.0.0.1".to_owned())),
            ("USERLAB_PORT", Some("9090".to_owned())),
            ("USERLAB_LOG_FORMAT", Some("pretty".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("127.0.0.1".to_owned(), 9090));
        assert_eq!(settings.log_format(), Ok(LogFormat::Pretty));
    }

    #[rstest]
    fn unknown_log_format_is_rejected() {
        let _guard = lock_env([
            ("USERLAB_HOST", None::<String>),
            ("USERLAB_PORT", None::<String>),
            ("USERLAB_LOG_FORMAT", Some("xml".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.log_format(),
            Err(UnknownLogFormat("xml".to_owned()))
        );
    }

    #[rstest]
    #[case("JSON", LogFormat::Json)]
    #[case(" pretty ", LogFormat::Pretty)]
    fn log_format_parsing_ignores_case_and_padding(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>(), Ok(expected));
    }
}
