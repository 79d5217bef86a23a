//! Server configuration from flags and environment.

use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plateshare-backend",
    about = "Surplus food donation coordination service"
)]
pub struct ServerConfig {
    /// Socket address for the HTTP listener.
    #[arg(long, env = "PLATESHARE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Secret used to sign bearer tokens. Rotating it invalidates every
    /// outstanding session.
    #[arg(long, env = "PLATESHARE_TOKEN_SECRET")]
    pub token_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_the_secret_is_given() {
        let config =
            ServerConfig::try_parse_from(["plateshare-backend", "--token-secret", "hunter2secret"])
                .expect("parse");
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.token_secret, "hunter2secret");
    }

    #[test]
    fn missing_secret_is_an_error() {
        let result = ServerConfig::try_parse_from(["plateshare-backend"]);
        assert!(result.is_err());
    }

    #[test]
    fn bind_flag_overrides_the_default() {
        let config = ServerConfig::try_parse_from([
            "plateshare-backend",
            "--token-secret",
            "hunter2secret",
            "--bind",
            "127.0.0.1:9000",
        ])
        .expect("parse");
        assert_eq!(config.bind.to_string(), "127.0.0.1:9000");
    }
}
