use contracts::domain::common::ScopeId;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base url; when absent the page host plus `port` is used
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub storage_key: String,
    pub max_age_days: u32,
    pub secure: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Scope used when an empresa has no configuration of its own
    pub configuracion_id: i64,
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "auth_token".to_string(),
            storage_key: "auth_token".to_string(),
            max_age_days: 30,
            secure: true,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            configuracion_id: 1,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[session]
cookie_name = "auth_token"
storage_key = "auth_token"
max_age_days = 30
secure = true

[defaults]
configuracion_id = 1
"#;

/// Parse `override_toml` when given, falling back to the embedded default
/// if it is missing or invalid
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<ConsoleConfig> {
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        match toml::from_str::<ConsoleConfig>(contents) {
            Ok(config) => {
                log::info!("Using console configuration override");
                return Ok(config);
            }
            Err(e) => log::warn!("Invalid console configuration, using default: {}", e),
        }
    }

    let config: ConsoleConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl ConsoleConfig {
    /// Base url of the REST API. `protocol` is `"http:"` or `"https:"` as
    /// reported by `window.location`.
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        match self.api.base_url.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("{}//{}:{}", protocol, hostname, self.api.port),
        }
    }

    pub fn fallback_scope(&self) -> ScopeId {
        ScopeId(self.defaults.configuracion_id)
    }
}

impl SessionConfig {
    /// `document.cookie` assignment storing the token. `Secure` is only added
    /// on `https:` pages, plain-http development hosts would drop the cookie.
    pub fn cookie_header(&self, token: &str, protocol: &str) -> String {
        let max_age = u64::from(self.max_age_days) * 24 * 60 * 60;
        let mut cookie = format!(
            "{}={}; Max-Age={}; Path=/; SameSite=Strict",
            self.cookie_name,
            urlencoding::encode(token),
            max_age
        );
        if self.secure && protocol == "https:" {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// `document.cookie` assignment expiring the token
    pub fn cookie_clear_header(&self) -> String {
        format!("{}=; Max-Age=0; Path=/; SameSite=Strict", self.cookie_name)
    }

    /// Token from a `document.cookie` string
    pub fn token_from_cookies(&self, cookies: &str) -> Option<String> {
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|value| value.into_owned())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ConsoleConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.session, SessionConfig::default());
        assert_eq!(config.fallback_scope(), ScopeId(1));
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[api\nport = ")).unwrap();
        assert_eq!(config.api.port, 3000);

        let config = load_config(Some("[api]\nbase_url = \"https://api.cidson.pe/\"\n")).unwrap();
        assert_eq!(config.api_base("http:", "localhost"), "https://api.cidson.pe");
        assert_eq!(config.session.cookie_name, "auth_token");
    }

    #[test]
    fn test_api_base_from_location() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api_base("http:", "localhost"), "http://localhost:3000");
    }

    #[test]
    fn test_cookie_round_trip() {
        let session = SessionConfig {
            secure: false,
            ..SessionConfig::default()
        };
        let header = session.cookie_header("a b|c", "https:");
        assert_eq!(header, "auth_token=a%20b%7Cc; Max-Age=2592000; Path=/; SameSite=Strict");
        assert!(SessionConfig::default().cookie_header("x", "https:").ends_with("; Secure"));

        let cookies = "theme=dark; auth_token=a%20b%7Cc";
        assert_eq!(session.token_from_cookies(cookies).as_deref(), Some("a b|c"));
        assert_eq!(session.token_from_cookies("auth_token="), None);
    }

    #[test]
    fn test_secure_cookie_only_over_https() {
        let session = SessionConfig::default();
        assert!(!session.cookie_header("x", "http:").contains("Secure"));
        assert!(session.cookie_header("x", "https:").ends_with("; Secure"));
    }
}
