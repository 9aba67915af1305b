use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 3567;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "relay-edge")]
#[command(about = "A small HTTP edge service: URL relay, remote template rendering, upstream proxy")]
pub struct ServerConfig {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Upstream base URL proxied under /wordpress.
    #[arg(long, env = "WORDPRESS_URL", default_value = "https://example.com")]
    pub wordpress_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("wordpress_url", &self.wordpress_url)
    }
}
