//! File-based implementation of PromoCodeRegistry

use std::path::PathBuf;

use chauffeur_domain::repository::{PromoCode, PromoCodeRegistry};
use chauffeur_types::Error;

use crate::promo_registry_loader::PromoRegistryLoader;

/// File-based code registry (TOML)
pub struct FilePromoCodeRegistry {
    loader: PromoRegistryLoader,
}

impl FilePromoCodeRegistry {
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = PromoRegistryLoader::load_from_file(&toml_path)?;
        Ok(Self { loader })
    }
}

impl PromoCodeRegistry for FilePromoCodeRegistry {
    fn lookup(&self, code: &str) -> Result<Option<PromoCode>, Error> {
        Ok(self.loader.get(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lookup_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("promos.toml");
        fs::write(&path, "[[codes]]\ncode = \"RIDE10\"\npercentage = 10.0\n").unwrap();

        let registry = FilePromoCodeRegistry::new(path).unwrap();
        let code = registry.lookup("ride10").unwrap().unwrap();
        assert!((code.percentage - 10.0).abs() < f64::EPSILON);
        assert!(registry.lookup("OTHER").unwrap().is_none());
    }
}
