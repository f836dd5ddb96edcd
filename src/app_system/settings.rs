use std::num::NonZeroUsize;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The REST service at `base_url`.
    Http,
    /// An in-process service, empty at start.
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub backend: Backend,
    pub base_url: Url,
    pub timeout_secs: Option<u64>,
}

impl GatewaySettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewSettings {
    pub page_size: NonZeroUsize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub gateway: GatewaySettings,
    pub view: ViewSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Defaults, then `contact_book.toml` if present, then
    /// `CONTACT_BOOK_<SECTION>__<KEY>` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(
                File::with_name("contact_book")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix("CONTACT_BOOK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("gateway.backend", "http")?
            .set_default("gateway.base_url", "http://localhost:3000/data")?
            .set_default("view.page_size", 5_i64)?
            .set_default("log.filter", "info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Settings::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.gateway.backend, Backend::Http);
        assert_eq!(settings.gateway.base_url.as_str(), "http://localhost:3000/data");
        assert_eq!(settings.gateway.timeout(), None);
        assert_eq!(settings.view.page_size.get(), 5);
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn test_file_overrides() {
        let settings = from_toml(
            r#"
            [gateway]
            backend = "memory"
            base_url = "http://example.test/contacts"
            timeout_secs = 10

            [view]
            page_size = 20
            "#,
        )
        .unwrap();
        assert_eq!(settings.gateway.backend, Backend::Memory);
        assert_eq!(settings.gateway.base_url.path(), "/contacts");
        assert_eq!(settings.gateway.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(settings.view.page_size.get(), 20);
    }

    #[test]
    fn test_environment_overrides() {
        let vars: config::Map<String, String> = [
            ("CONTACT_BOOK_GATEWAY__BASE_URL", "http://env.test:8080/people"),
            ("CONTACT_BOOK_VIEW__PAGE_SIZE", "12"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings: Settings = Settings::defaults()
            .unwrap()
            .add_source(Settings::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.gateway.base_url.as_str(), "http://env.test:8080/people");
        assert_eq!(settings.view.page_size.get(), 12);
        assert_eq!(settings.gateway.backend, Backend::Http);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(from_toml("[view]\npage_size = 0").is_err());
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        assert!(from_toml("[gateway]\nbase_url = \"not a url\"").is_err());
    }
}
