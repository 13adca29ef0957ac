use crate::index::DisplayProduct;
use crate::model::Product;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<DisplayProduct>,
    /// Completion flag, only meaningful on results that carry a view
    pub all_bought: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<DisplayProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_all_bought(mut self, all_bought: bool) -> Self {
        self.all_bought = all_bought;
        self
    }
}
