//! Action categories with legacy alias normalization and display metadata.
//!
//! Older saved plans carry snake_case category values; the hyphenated forms
//! replaced them. Normalization happens in exactly one place, [`FromStr`],
//! which the serde boundary and all filter logic route through.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Category tag on an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Commercial,
    Management,
    Marketing,
    Finance,
    HumanResources,
    Operations,
    Technology,
    Culture,
    CustomerSuccess,
    Innovation,
}

/// Display metadata for a category (label, icon name, accent color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Category {
    /// All categories, in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Commercial,
            Category::Management,
            Category::Marketing,
            Category::Finance,
            Category::HumanResources,
            Category::Operations,
            Category::Technology,
            Category::Culture,
            Category::CustomerSuccess,
            Category::Innovation,
        ]
    }

    /// Canonical wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Commercial => "commercial",
            Category::Management => "management",
            Category::Marketing => "marketing",
            Category::Finance => "finance",
            Category::HumanResources => "human-resources",
            Category::Operations => "operations",
            Category::Technology => "technology",
            Category::Culture => "culture",
            Category::CustomerSuccess => "customer-success",
            Category::Innovation => "innovation",
        }
    }

    /// Display metadata, table-driven.
    pub fn meta(&self) -> CategoryMeta {
        match self {
            Category::Commercial => CategoryMeta {
                label: "Comercial",
                icon: "trending-up",
                color: "#2563eb",
            },
            Category::Management => CategoryMeta {
                label: "Gestão",
                icon: "clipboard",
                color: "#7c3aed",
            },
            Category::Marketing => CategoryMeta {
                label: "Marketing",
                icon: "megaphone",
                color: "#db2777",
            },
            Category::Finance => CategoryMeta {
                label: "Financeiro",
                icon: "dollar-sign",
                color: "#059669",
            },
            Category::HumanResources => CategoryMeta {
                label: "Pessoas",
                icon: "users",
                color: "#d97706",
            },
            Category::Operations => CategoryMeta {
                label: "Operações",
                icon: "settings",
                color: "#4b5563",
            },
            Category::Technology => CategoryMeta {
                label: "Tecnologia",
                icon: "cpu",
                color: "#0891b2",
            },
            Category::Culture => CategoryMeta {
                label: "Cultura",
                icon: "heart",
                color: "#dc2626",
            },
            Category::CustomerSuccess => CategoryMeta {
                label: "Sucesso do Cliente",
                icon: "smile",
                color: "#65a30d",
            },
            Category::Innovation => CategoryMeta {
                label: "Inovação",
                icon: "lightbulb",
                color: "#9333ea",
            },
        }
    }

    /// Returns true if `raw` names this category, canonical or legacy.
    pub fn matches(&self, raw: &str) -> bool {
        Category::from_str(raw).map(|c| c == *self).unwrap_or(false)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// The single shared normalization table. Legacy snake_case values of
    /// renamed categories are accepted as synonyms of their replacements.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s {
            "commercial" => Category::Commercial,
            "management" => Category::Management,
            "marketing" => Category::Marketing,
            "finance" => Category::Finance,
            "human-resources" | "human_resources" => Category::HumanResources,
            "operations" => Category::Operations,
            "technology" => Category::Technology,
            "culture" => Category::Culture,
            "customer-success" | "customer_success" => Category::CustomerSuccess,
            "innovation" => Category::Innovation,
            other => {
                return Err(ValidationError::invalid_format(
                    "category",
                    format!("unknown category '{}'", other),
                ))
            }
        };
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Category::from_str(&raw).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values_round_trip() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn legacy_aliases_normalize_to_replacements() {
        assert_eq!(
            "human_resources".parse::<Category>().unwrap(),
            Category::HumanResources
        );
        assert_eq!(
            "customer_success".parse::<Category>().unwrap(),
            Category::CustomerSuccess
        );
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!("logistics".parse::<Category>().is_err());
    }

    #[test]
    fn serde_emits_canonical_and_accepts_legacy() {
        let json = serde_json::to_string(&Category::HumanResources).unwrap();
        assert_eq!(json, "\"human-resources\"");

        let legacy: Category = serde_json::from_str("\"human_resources\"").unwrap();
        assert_eq!(legacy, Category::HumanResources);
    }

    #[test]
    fn matches_treats_alias_as_synonym() {
        assert!(Category::CustomerSuccess.matches("customer_success"));
        assert!(Category::CustomerSuccess.matches("customer-success"));
        assert!(!Category::CustomerSuccess.matches("marketing"));
    }

    #[test]
    fn every_category_has_meta() {
        for category in Category::all() {
            let meta = category.meta();
            assert!(!meta.label.is_empty());
            assert!(meta.color.starts_with('#'));
        }
    }
}
