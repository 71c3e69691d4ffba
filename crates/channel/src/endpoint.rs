//! Where to connect, and whether to echo traffic.

use mcpi_link_protocol::types::{DEFAULT_HOST, DEFAULT_PORT};

/// Environment variable overriding the host.
pub const ENV_HOST: &str = "JRP_API_HOST";
/// Environment variable overriding the port. Ignored unless it parses as a port.
pub const ENV_PORT: &str = "JRP_API_PORT";
/// Environment variable naming a wire transcript file.
pub const ENV_LOG_PATH: &str = "JRP_API_LOG_PATH";

/// Connection endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    /// Echo every sent and received line to the `mcpi_link::wire` log target.
    pub debug: bool,
    /// Append every sent and received line to this file.
    pub log_path: Option<String>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            log_path: None,
        }
    }
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `JRP_API_HOST`, `JRP_API_PORT` and `JRP_API_LOG_PATH` on top of
    /// the current values.
    pub fn with_env_overrides(self) -> Self {
        use std::env;

        self.with_overrides(
            env::var(ENV_HOST).ok(),
            env::var(ENV_PORT).ok(),
            env::var(ENV_LOG_PATH).ok(),
        )
    }

    /// Apply raw override values. An unparsable port keeps the current one.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<String>,
        log_path: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port.and_then(|s| s.trim().parse().ok()) {
            self.port = port;
        }
        if let Some(path) = log_path
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            self.log_path = Some(path);
        }
        self
    }

    /// `host:port`, suitable for `TcpStream::connect`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
