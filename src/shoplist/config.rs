use crate::error::{Result, ShoplistError};
use crate::filter::ANY_KEYWORD;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// The shop and category catalog, loaded once at startup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShoplistConfig {
    /// Shops a product can be bought at, in display order
    #[serde(default = "default_shops")]
    pub shops: Vec<String>,

    /// Product categories, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_shops() -> Vec<String> {
    ["Ethos", "Jumbo", "Kruidvat", "Lidl"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_categories() -> Vec<String> {
    ["Bakery", "Butcher", "Fruit", "Vegetable"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ShoplistConfig {
    fn default() -> Self {
        Self {
            shops: default_shops(),
            categories: default_categories(),
        }
    }
}

impl ShoplistConfig {
    /// Load and validate config from a file that must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(ShoplistError::Io)?;
        let config: ShoplistConfig =
            serde_json::from_str(&content).map_err(ShoplistError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.json` from the given directory, or return defaults if not found
    pub fn load_from_dir<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load(config_path)
    }

    pub fn validate(&self) -> Result<()> {
        validate_labels("shops", &self.shops)?;
        validate_labels("categories", &self.categories)
    }

    /// Case-insensitive lookup returning the canonical shop label.
    pub fn resolve_shop(&self, input: &str) -> Result<&str> {
        find_label(&self.shops, input).ok_or_else(|| ShoplistError::UnknownShop(input.to_string()))
    }

    /// Case-insensitive lookup returning the canonical category label.
    pub fn resolve_category(&self, input: &str) -> Result<&str> {
        find_label(&self.categories, input)
            .ok_or_else(|| ShoplistError::UnknownCategory(input.to_string()))
    }
}

fn find_label<'a>(labels: &'a [String], input: &str) -> Option<&'a str> {
    let wanted = input.trim().to_lowercase();
    labels
        .iter()
        .find(|l| l.to_lowercase() == wanted)
        .map(String::as_str)
}

fn validate_labels(kind: &str, labels: &[String]) -> Result<()> {
    if labels.is_empty() {
        return Err(ShoplistError::InvalidConfig(format!("{} cannot be empty", kind)));
    }

    let mut seen = HashSet::new();
    for label in labels {
        let key = label.trim().to_lowercase();
        if key.is_empty() {
            return Err(ShoplistError::InvalidConfig(format!(
                "{} contains a blank entry",
                kind
            )));
        }
        if key == ANY_KEYWORD {
            return Err(ShoplistError::InvalidConfig(format!(
                "\"{}\" is reserved and cannot be used in {}",
                label, kind
            )));
        }
        if !seen.insert(key) {
            return Err(ShoplistError::InvalidConfig(format!(
                "{} lists \"{}\" more than once",
                kind, label
            )));
        }
    }
    Ok(())
}
