//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Errors raised while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT `{value}`: expected 1-65535")]
    InvalidPort { value: String },

    /// `BIND_HOST` is set but empty.
    #[error("BIND_HOST must not be empty")]
    EmptyBindHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_host: String,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_host = parse_bind_host(std::env::var("BIND_HOST").ok().as_deref())?;
        Ok(Self { bind_host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_bind_host(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_BIND_HOST.to_owned()),
        Some("") => Err(ConfigError::EmptyBindHost),
        Some(host) => Ok(host.to_owned()),
    }
}
