//! Plan generation configuration

use serde::Deserialize;

use crate::domain::generator::GeneratorConfig;

use super::error::ValidationError;

/// Plan generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Upper bound the universal filler tops plans up to
    #[serde(default = "default_universal_cap")]
    pub universal_cap: usize,
}

impl GeneratorSettings {
    /// Converts the settings into the domain generator configuration.
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            universal_cap: self.universal_cap,
        }
    }

    /// Validate generation settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.universal_cap == 0 || self.universal_cap > 100 {
            return Err(ValidationError::InvalidActionCap);
        }
        Ok(())
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            universal_cap: default_universal_cap(),
        }
    }
}

fn default_universal_cap() -> usize {
    35
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_matches_domain_default() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.to_config(), GeneratorConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_cap_is_rejected() {
        let settings = GeneratorSettings { universal_cap: 0 };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn oversized_cap_is_rejected() {
        let settings = GeneratorSettings { universal_cap: 500 };
        assert!(settings.validate().is_err());
    }
}
