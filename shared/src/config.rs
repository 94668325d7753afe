use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub insight: InsightConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // 環境変数の読み出し元を差し替えられるようにしておく
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = match get("HOST") {
            Some(v) => v
                .parse::<IpAddr>()
                .with_context(|| format!("HOST is not an IP address: {v}"))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT is not a port number: {v}"))?,
            None => 8080,
        };
        let server = ServerConfig { host, port };

        let insight = InsightConfig {
            // 空文字はキーなしとみなす
            api_key: get("GEMINI_API_KEY").filter(|key| !key.is_empty()),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
            endpoint: get("GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.into()),
        };

        Ok(Self { server, insight })
    }
}

#[derive(Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// キーがなければ外部 API は呼ばない。インサイトは定型文、レポートはエラーになる
#[derive(Clone)]
pub struct InsightConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 18080,
        };
        assert_eq!(server.addr().to_string(), "127.0.0.1:18080");
    }

    #[test]
    fn defaults_apply_when_unset() -> Result<()> {
        let config = load(&[])?;
        assert_eq!(config.server.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.insight.api_key, None);
        assert_eq!(config.insight.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.insight.endpoint, DEFAULT_GEMINI_ENDPOINT);
        Ok(())
    }

    #[test]
    fn values_override_defaults() -> Result<()> {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-test"),
            ("GEMINI_ENDPOINT", "http://localhost:1234"),
        ])?;
        assert_eq!(config.server.addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.insight.api_key.as_deref(), Some("secret"));
        assert_eq!(config.insight.model, "gemini-test");
        assert_eq!(config.insight.endpoint, "http://localhost:1234");
        Ok(())
    }

    #[test]
    fn empty_api_key_counts_as_unset() -> Result<()> {
        let config = load(&[("GEMINI_API_KEY", "")])?;
        assert_eq!(config.insight.api_key, None);
        Ok(())
    }

    #[test]
    fn malformed_host_or_port_is_an_error() {
        assert!(load(&[("PORT", "abc")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("HOST", "nope")]).is_err());
    }
}
