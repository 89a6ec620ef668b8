//! Voucher and promo code registry loader from TOML configuration

use chauffeur_domain::repository::PromoCode;
use chauffeur_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PromoRegistryConfig {
    #[serde(default)]
    codes: Vec<PromoCode>,
}

/// Registered codes keyed by normalized code
#[derive(Debug, Default)]
pub struct PromoRegistryLoader {
    codes: HashMap<String, PromoCode>,
}

impl PromoRegistryLoader {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Promo registry not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), codes = loader.count(), "promo registry loaded");
        Ok(loader)
    }

    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: PromoRegistryConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse promo registry TOML: {}",
                e
            )))
        })?;

        let mut codes = HashMap::with_capacity(config.codes.len());
        for code in config.codes {
            let key = normalize_code(&code.code);
            if codes.contains_key(&key) {
                return Err(Error::Config(ConfigError::ParseError(format!(
                    "Duplicate code in promo registry: {}",
                    code.code
                ))));
            }
            codes.insert(key, code);
        }
        Ok(Self { codes })
    }

    /// Look up a code, ignoring case and surrounding whitespace
    pub fn get(&self, code: &str) -> Option<&PromoCode> {
        self.codes.get(&normalize_code(code))
    }

    pub fn count(&self) -> usize {
        self.codes.len()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
