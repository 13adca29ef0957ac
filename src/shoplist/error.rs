use crate::model::{DraftField, ProductId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShoplistError {
    #[error("Please fill in all fields! (missing: {})", join_fields(.0))]
    MissingFields(Vec<DraftField>),

    #[error("Unknown shop: {0}")]
    UnknownShop(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Product already exists: {0}")]
    DuplicateId(ProductId),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ShoplistError>;
