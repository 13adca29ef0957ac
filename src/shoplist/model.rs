use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of the id shown in tables.
pub const SHORT_ID_LEN: usize = 8;

/// Opaque product identifier, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn short(&self) -> String {
        self.0.to_string()[..SHORT_ID_LEN].to_string()
    }

    /// Case-insensitive prefix match against the hyphenated form.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.to_string().starts_with(&prefix.to_lowercase())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub shop: String,
    pub category: String,
    pub is_bought: bool,
    pub added_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, shop: String, category: String) -> Self {
        Self {
            id: ProductId::new(),
            name,
            shop,
            category,
            is_bought: false,
            added_at: Utc::now(),
        }
    }
}

/// The three required inputs of a new product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Shop,
    Category,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Name => write!(f, "name"),
            DraftField::Shop => write!(f, "shop"),
            DraftField::Category => write!(f, "category"),
        }
    }
}

/// The in-progress values for a product that has not been added yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub shop: Option<String>,
    pub category: Option<String>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.shop.is_none() && self.category.is_none()
    }

    /// Fields that would block an add, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(DraftField::Name);
        }
        if !is_set(&self.shop) {
            missing.push(DraftField::Shop);
        }
        if !is_set(&self.category) {
            missing.push(DraftField::Category);
        }
        missing
    }

    /// Returns a copy where every field set in `other` replaces ours.
    pub fn overlay(&self, other: &Draft) -> Draft {
        Draft {
            name: if other.name.is_empty() {
                self.name.clone()
            } else {
                other.name.clone()
            },
            shop: other.shop.clone().or_else(|| self.shop.clone()),
            category: other.category.clone().or_else(|| self.category.clone()),
        }
    }

    /// Turns a complete draft into a product. Callers check `missing_fields` first.
    pub(crate) fn into_product(self) -> Product {
        Product::new(
            self.name.trim().to_string(),
            self.shop.unwrap_or_default(),
            self.category.unwrap_or_default(),
        )
    }
}

fn is_set(field: &Option<String>) -> bool {
    matches!(field.as_deref(), Some(v) if !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> Draft {
        Draft {
            name: "Milk".into(),
            shop: Some("Lidl".into()),
            category: Some("Fruit".into()),
        }
    }

    #[test]
    fn new_product_is_not_bought() {
        let p = Product::new("Milk".into(), "Lidl".into(), "Fruit".into());
        assert!(!p.is_bought);
    }

    #[test]
    fn ids_are_distinct() {
        let a = ProductId::new();
        let b = ProductId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn short_id_is_a_prefix() {
        let id = ProductId::new();
        assert_eq!(id.short().len(), SHORT_ID_LEN);
        assert!(id.matches_prefix(&id.short()));
        assert!(id.matches_prefix(&id.short().to_uppercase()));
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn complete_draft_has_no_missing_fields() {
        assert!(full_draft().missing_fields().is_empty());
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let draft = Draft {
            name: "   ".into(),
            shop: None,
            category: Some("Fruit".into()),
        };
        assert_eq!(
            draft.missing_fields(),
            vec![DraftField::Name, DraftField::Shop]
        );
        assert_eq!(
            Draft::default().missing_fields(),
            vec![DraftField::Name, DraftField::Shop, DraftField::Category]
        );
    }

    #[test]
    fn overlay_prefers_set_fields() {
        let base = full_draft();
        let other = Draft {
            name: "Bread".into(),
            shop: None,
            category: Some("Bakery".into()),
        };
        let merged = base.overlay(&other);
        assert_eq!(merged.name, "Bread");
        assert_eq!(merged.shop.as_deref(), Some("Lidl"));
        assert_eq!(merged.category.as_deref(), Some("Bakery"));
    }
}
