//! Server configuration loaded from the environment and overridden by CLI flags.

use std::path::PathBuf;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Launch table to load at startup (from LAUNCH_DASH_DATA)
    pub data_path: PathBuf,
    /// Interface to bind (from LAUNCH_DASH_HOST)
    pub host: String,
    /// Port to bind (from LAUNCH_DASH_PORT)
    pub port: u16,
}

impl DashboardConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup("LAUNCH_DASH_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let host = lookup("LAUNCH_DASH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("LAUNCH_DASH_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid LAUNCH_DASH_PORT '{}'", raw);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            data_path,
            host,
            port,
        }
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port`, resolved by the listener so hostnames work too.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
