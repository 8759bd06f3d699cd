use crate::config::toml_config::ServiceConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "calc-service")]
#[command(about = "HTTP service computing count/mean/min/max over a list of numbers")]
pub struct CliConfig {
    #[arg(long, short, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Socket address to listen on [default: 127.0.0.1:8000]")]
    pub bind: Option<String>,

    #[arg(long, help = "Largest accepted request body in bytes")]
    pub max_body_bytes: Option<usize>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut ServiceConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(max_body_bytes) = self.max_body_bytes {
            config.server.max_body_bytes = max_body_bytes;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "calc-service",
            "--bind",
            "0.0.0.0:8080",
            "--log-format",
            "json",
            "-v",
        ]);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = CliConfig::default().resolve().unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind = \"127.0.0.1:7000\"\nmax_body_bytes = 8192\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_path_buf()),
            bind: Some("127.0.0.1:7100".to_string()),
            ..CliConfig::default()
        };
        let config = cli.resolve().unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:7100");
        assert_eq!(config.server.max_body_bytes, 8192);
        assert!(!config.logging.verbose);
    }
}
