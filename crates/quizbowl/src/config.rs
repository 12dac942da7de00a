//! Server configuration from the command line and environment.

use std::path::PathBuf;

use clap::Parser;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 5000;

/// Origin allowed by CORS by default (the browser bundle's dev server).
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Settings for the `quizbowl` binary.
///
/// Every flag can also be set through the environment variable named
/// next to it.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "quizbowl", version, about = "Quiz Bowl HTTP server")]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory served for every path the API does not claim
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,
}

impl ServerConfig {
    /// `host:port`, ready for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("public"),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
