//! The read-only remote catalog used to seed an empty store.

mod http;

pub use http::HttpCatalog;

use crate::model::{Product, ProductId, Rating};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_REMOTE_URL: &str = "https://fakestoreapi.com/products";

/// A source of products outside this process.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Reads the whole catalog once. Every failure is [`ProductError::RemoteLoad`].
    async fn fetch_products(&self) -> Result<Vec<RemoteProduct>, ProductError>;
}

/// Remote ids arrive as JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    Number(u64),
    Text(String),
}

impl From<RemoteId> for ProductId {
    fn from(id: RemoteId) -> Self {
        match id {
            RemoteId::Number(n) => ProductId::from(n.to_string()),
            RemoteId::Text(s) => ProductId::from(s),
        }
    }
}

/// A product as the remote catalog describes it. There is no like flag on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteProduct {
    pub id: RemoteId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl RemoteProduct {
    /// Converts to a local product. Remote products always start unliked.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id.into(),
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            rating: self.rating,
            is_liked: false,
        }
    }
}
