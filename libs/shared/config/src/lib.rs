use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub graphiql_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            graphiql_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using default {}", DEFAULT_HOST);
                    DEFAULT_HOST.to_string()
                }),
            port: Self::parse_port(env::var("PORT").ok()),
            graphiql_enabled: Self::parse_flag("GRAPHIQL_ENABLED", env::var("GRAPHIQL_ENABLED").ok(), true),
        }
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self.host.parse::<IpAddr>().unwrap_or_else(|_| {
            warn!("HOST {} is not a valid IP address, binding to {}", self.host, DEFAULT_HOST);
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.port)
    }

    fn parse_port(raw: Option<String>) -> u16 {
        match raw {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!("PORT {} is not a valid port, using default {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => {
                warn!("PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        }
    }

    fn parse_flag(name: &str, raw: Option<String>, default: bool) -> bool {
        match raw.as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("yes") | Some("on") => true,
            Some("0") | Some("false") | Some("no") | Some("off") => false,
            Some(other) => {
                warn!("{} has unrecognised value {}, using default {}", name, other, default);
                default
            }
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_port_4000() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:4000".parse::<SocketAddr>().unwrap());
        assert!(config.graphiql_enabled);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(AppConfig::parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(AppConfig::parse_port(Some(" 8080 ".to_string())), 8080);
        assert_eq!(AppConfig::parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(!AppConfig::parse_flag("X", Some("false".to_string()), true));
        assert!(AppConfig::parse_flag("X", Some("on".to_string()), false));
        assert!(AppConfig::parse_flag("X", Some("maybe".to_string()), true));
        assert!(!AppConfig::parse_flag("X", None, false));
    }

    #[test]
    fn test_invalid_host_binds_unspecified() {
        let config = AppConfig {
            host: "localhost.invalid".to_string(),
            port: 5000,
            graphiql_enabled: false,
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }
}
