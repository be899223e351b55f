use std::borrow::Cow;

use crate::helper::{encode_url, from_env_or, parse_env_or};

const DEFAULT_DOMAIN: &str = "your.domain.com";
const DEFAULT_CLIENT_ID: &str = "YOUR_CLIENT_ID";
const DEFAULT_CALLBACK_URL: &str = "YOUR_CALLBACK_URL";

/// Settings handed to the authentication provider at startup.
///
/// The defaults are placeholders to be replaced for every deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthConfig {
    pub domain: String,
    pub client_id: String,
    pub callback_url: String,
    pub callback_on_location_hash: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.into(),
            client_id: DEFAULT_CLIENT_ID.into(),
            callback_url: DEFAULT_CALLBACK_URL.into(),
            callback_on_location_hash: true,
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            domain: from_env_or("AUTH_DOMAIN", DEFAULT_DOMAIN).into_owned(),
            client_id: from_env_or("AUTH_CLIENT_ID", DEFAULT_CLIENT_ID).into_owned(),
            callback_url: from_env_or("AUTH_CALLBACK_URL", DEFAULT_CALLBACK_URL).into_owned(),
            callback_on_location_hash: parse_env_or("AUTH_CALLBACK_ON_LOCATION_HASH", true)?,
        })
    }
}

/// Client side of the hosted authentication provider.
///
/// Only knows how to send the user to the provider's pages, the protocol
/// itself happens between the browser and the provider.
#[derive(Debug)]
pub(crate) struct Provider {
    config: AuthConfig,
}

impl Provider {
    pub fn init(config: AuthConfig) -> Self {
        tracing::info!(
            domain = %config.domain,
            client_id = %config.client_id,
            callback_url = %config.callback_url,
            callback_on_location_hash = config.callback_on_location_hash,
            "initializing authentication provider"
        );
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn base_url(&self) -> Result<Cow<'_, str>, UrlError> {
        let domain = self.config().domain.trim();
        let host = domain.split_once("://").map_or(domain, |(_, host)| host);
        if host.trim_end_matches('/').is_empty() {
            return Err(UrlError::MissingDomain);
        }
        let domain = domain.trim_end_matches('/');
        Ok(if domain.contains("://") {
            Cow::Borrowed(domain)
        } else {
            Cow::Owned(format!("https://{domain}"))
        })
    }

    fn client_id(&self) -> Result<&str, UrlError> {
        let client_id = self.config().client_id.trim();
        if client_id.is_empty() {
            Err(UrlError::MissingClientId)
        } else {
            Ok(client_id)
        }
    }

    fn response_type(&self) -> &'static str {
        if self.config().callback_on_location_hash {
            "token"
        } else {
            "code"
        }
    }

    pub fn authorize_url(&self) -> Result<String, UrlError> {
        let target = format!("{}/authorize", self.base_url()?);
        let mut params = vec![
            ("client_id", self.client_id()?),
            ("redirect_uri", self.config().callback_url.as_str()),
            ("response_type", self.response_type()),
            ("scope", "openid"),
        ];
        if self.config().callback_on_location_hash {
            params.push(("response_mode", "fragment"));
        }
        Ok(encode_url(&target, params.into_iter())?.into_owned())
    }

    pub fn logout_url(&self) -> Result<String, UrlError> {
        let target = format!("{}/v2/logout", self.base_url()?);
        let params = [
            ("client_id", self.client_id()?),
            ("returnTo", self.config().callback_url.as_str()),
        ];
        Ok(encode_url(&target, params.into_iter())?.into_owned())
    }
}

/// Reasons a link to the provider can't be produced.
#[derive(Debug)]
pub(crate) enum UrlError {
    MissingDomain,
    MissingClientId,
    Encoding(serde_urlencoded::ser::Error),
}

impl From<serde_urlencoded::ser::Error> for UrlError {
    fn from(value: serde_urlencoded::ser::Error) -> Self {
        Self::Encoding(value)
    }
}

impl std::fmt::Display for UrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDomain => f.write_str("no authentication domain configured"),
            Self::MissingClientId => f.write_str("no authentication client id configured"),
            Self::Encoding(inner) => write!(f, "unable to encode provider url: {inner}"),
        }
    }
}

impl std::error::Error for UrlError {}

#[cfg(test)]
mod tests {
    use super::{AuthConfig, Provider, UrlError};

    fn config() -> AuthConfig {
        AuthConfig {
            domain: "tenant.example.com".into(),
            client_id: "my-client".into(),
            callback_url: "http://localhost:3010/".into(),
            callback_on_location_hash: true,
        }
    }

    #[test]
    fn should_default_to_placeholders() {
        let config = AuthConfig::default();
        assert_eq!(config.domain, "your.domain.com");
        assert_eq!(config.client_id, "YOUR_CLIENT_ID");
        assert_eq!(config.callback_url, "YOUR_CALLBACK_URL");
        assert!(config.callback_on_location_hash);
    }

    #[test]
    fn should_override_placeholders_from_env() {
        std::env::set_var("AUTH_DOMAIN", "tenant.example.com");
        std::env::set_var("AUTH_CLIENT_ID", "my-client");
        std::env::set_var("AUTH_CALLBACK_URL", "http://localhost:3010/");
        std::env::set_var("AUTH_CALLBACK_ON_LOCATION_HASH", "true");
        let loaded = AuthConfig::from_env().unwrap();
        std::env::set_var("AUTH_CALLBACK_ON_LOCATION_HASH", "maybe");
        let invalid = AuthConfig::from_env();
        for name in [
            "AUTH_DOMAIN",
            "AUTH_CLIENT_ID",
            "AUTH_CALLBACK_URL",
            "AUTH_CALLBACK_ON_LOCATION_HASH",
        ] {
            std::env::remove_var(name);
        }
        assert_eq!(loaded, config());
        assert!(invalid.is_err());
    }

    #[test]
    fn should_keep_config_unmodified() {
        let provider = Provider::init(config());
        assert_eq!(provider.config(), &config());
    }

    #[test]
    fn should_request_token_on_location_hash() {
        let provider = Provider::init(config());
        assert_eq!(
            provider.authorize_url().unwrap(),
            "https://tenant.example.com/authorize?client_id=my-client&redirect_uri=http%3A%2F%2Flocalhost%3A3010%2F&response_type=token&scope=openid&response_mode=fragment"
        );
    }

    #[test]
    fn should_request_code_without_location_hash() {
        let provider = Provider::init(AuthConfig {
            callback_on_location_hash: false,
            ..config()
        });
        assert_eq!(
            provider.authorize_url().unwrap(),
            "https://tenant.example.com/authorize?client_id=my-client&redirect_uri=http%3A%2F%2Flocalhost%3A3010%2F&response_type=code&scope=openid"
        );
    }

    #[test]
    fn should_keep_explicit_scheme() {
        let provider = Provider::init(AuthConfig {
            domain: "http://localhost:8080/".into(),
            ..config()
        });
        assert!(provider
            .logout_url()
            .unwrap()
            .starts_with("http://localhost:8080/v2/logout?"));
    }

    #[test]
    fn should_reject_missing_domain() {
        for domain in ["", "  ", "https://"] {
            let provider = Provider::init(AuthConfig {
                domain: domain.into(),
                ..config()
            });
            assert!(matches!(
                provider.authorize_url(),
                Err(UrlError::MissingDomain)
            ));
            assert!(matches!(provider.logout_url(), Err(UrlError::MissingDomain)));
        }
    }

    #[test]
    fn should_reject_missing_client_id() {
        let provider = Provider::init(AuthConfig {
            client_id: " ".into(),
            ..config()
        });
        let err = provider.authorize_url().unwrap_err();
        assert!(matches!(err, UrlError::MissingClientId));
        assert_eq!(err.to_string(), "no authentication client id configured");
        assert!(matches!(
            provider.logout_url(),
            Err(UrlError::MissingClientId)
        ));
    }

    #[test]
    fn should_build_logout_url() {
        let provider = Provider::init(config());
        assert_eq!(
            provider.logout_url().unwrap(),
            "https://tenant.example.com/v2/logout?client_id=my-client&returnTo=http%3A%2F%2Flocalhost%3A3010%2F"
        );
    }
}
