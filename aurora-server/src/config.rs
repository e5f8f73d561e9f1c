use aurora_narrative::core::pipeline::{GenerateError, NarrativeGenerator};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Server settings, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "aurora-server", version, about = "HTTP API for Aurora narrative generation")]
pub struct ServerConfig {
    #[arg(long, env = "AURORA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "AURORA_PORT", default_value_t = 3000)]
    pub port: u16,

    /// RON phrase bank overriding the built-in phrases
    #[arg(long, env = "AURORA_PHRASE_BANK")]
    pub phrase_bank: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, env = "AURORA_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn build_generator(&self) -> Result<NarrativeGenerator, GenerateError> {
        let mut builder = NarrativeGenerator::builder();
        if let Some(ref path) = self.phrase_bank {
            builder = builder.phrase_bank_path(path);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["aurora-server"]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.phrase_bank.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "aurora-server",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn build_generator_with_missing_bank_fails() {
        let config = ServerConfig::try_parse_from([
            "aurora-server",
            "--phrase-bank",
            "/nonexistent/bank.ron",
        ])
        .unwrap();
        assert!(config.build_generator().is_err());
    }
}
