use crm_api::constant;
use educe::Educe;
use figment::Figment;
use figment::providers::{Format, Json, Serialized};
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Api {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Educe, PartialEq, Eq)]
#[educe(Default)]
#[serde(default)]
pub struct Brand {
    #[educe(Default(expression = constant::APP_NAME.to_owned()))]
    pub name: String,
    #[educe(Default(expression = constant::APP_TAGLINE.to_owned()))]
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Educe, PartialEq, Eq)]
#[educe(Default)]
#[serde(default)]
pub struct Log {
    #[educe(Default(expression = "info".to_owned()))]
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub api: Api,
    pub brand: Brand,
    pub log: Log,
}

impl Config {
    /// Overrides baked in at build time, as a JSON object.
    pub const BUILD_OVERRIDE: Option<&'static str> = option_env!("CRM_FRONTEND_CONFIG");

    pub fn figment(overrides: &str) -> Figment {
        Figment::new().merge(Serialized::defaults(Self::default())).merge(Json::string(overrides))
    }

    pub fn extract(overrides: &str) -> Result<Self, Error> {
        Ok(Self::figment(overrides).extract()?)
    }

    pub fn load() -> Result<Self, Error> {
        Self::extract(Self::BUILD_OVERRIDE.unwrap_or("{}"))
    }
}

#[cfg(test)]
#[coverage(off)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::extract("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.brand.name, "SolarCRM");
        assert_eq!(config.brand.tagline, "Sales Management");
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_override() {
        let config = Config::extract(
            r#"{ "api": { "base_url": "https://crm.example.com" }, "log": { "filter": "debug" } }"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://crm.example.com");
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.brand, Brand::default());
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(Config::extract("not json"), Err(Error::Config(_))));
        assert!(matches!(
            Config::extract(r#"{ "log": { "filter": [1] } }"#),
            Err(Error::Config(_))
        ));
    }
}
