//! The catalog's single entity and the DTOs used to create, edit and select it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique product identifier.
///
/// Locally created products get a random UUID; products seeded from the remote catalog keep
/// the remote id in its decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub rating: Rating,
    #[serde(default)]
    pub is_liked: bool,
}

impl Product {
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            price: new.price,
            category: new.category,
            image: new.image,
            rating: new.rating,
            is_liked: new.is_liked,
        }
    }
}

/// Payload for adding a product: everything except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub is_liked: bool,
}

/// Partial edit. `None` fields are left untouched; the id cannot be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rate: Option<f64>,
    pub count: Option<u32>,
    pub is_liked: Option<bool>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the present fields into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(rate) = self.rate {
            product.rating.rate = rate;
        }
        if let Some(count) = self.count {
            product.rating.count = count;
        }
        if let Some(is_liked) = self.is_liked {
            product.is_liked = is_liked;
        }
    }
}

/// Which collection a listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Liked,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => f.write_str("all"),
            FilterMode::Liked => f.write_str("liked"),
        }
    }
}

/// Selection applied to the collection: filter first, then search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub filter: FilterMode,
    pub search: String,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn liked() -> Self {
        Self {
            filter: FilterMode::Liked,
            search: String::new(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if self.filter == FilterMode::Liked && !product.is_liked {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&product.title, &product.description, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product {
            id: ProductId::from("p1"),
            title: "Blue Pen".into(),
            description: "Writes smoothly".into(),
            price: 1.5,
            category: "Stationery".into(),
            image: "pen.png".into(),
            rating: Rating { rate: 4.0, count: 2 },
            is_liked: false,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let product = pen();
        for needle in ["blue", "SMOOTH", "stationery", "n"] {
            let query = ProductQuery {
                filter: FilterMode::All,
                search: needle.into(),
            };
            assert!(query.matches(&product), "{needle} should match");
        }

        let miss = ProductQuery {
            filter: FilterMode::All,
            search: "pencil".into(),
        };
        assert!(!miss.matches(&product));
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let query = ProductQuery {
            filter: FilterMode::All,
            search: " pen ".into(),
        };
        assert!(!query.matches(&pen()));
    }

    #[test]
    fn test_liked_filter_applies_before_search() {
        let mut product = pen();
        let query = ProductQuery {
            filter: FilterMode::Liked,
            search: "pen".into(),
        };
        assert!(!query.matches(&product));

        product.is_liked = true;
        assert!(query.matches(&product));
        assert!(ProductQuery::liked().matches(&product));
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut product = pen();
        ProductUpdate {
            price: Some(2.0),
            count: Some(10),
            ..Default::default()
        }
        .apply(&mut product);

        assert_eq!(product.price, 2.0);
        assert_eq!(product.rating.count, 10);
        assert_eq!(product.rating.rate, 4.0);
        assert_eq!(product.title, "Blue Pen");
        assert_eq!(product.id.as_str(), "p1");
    }

    #[test]
    fn test_serde_uses_camel_case_and_defaults_is_liked() {
        let json = serde_json::to_value(pen()).unwrap();
        assert_eq!(json["isLiked"], false);
        assert_eq!(json["rating"]["rate"], 4.0);

        let parsed: Product = serde_json::from_str(
            r#"{"id":"x","title":"t","description":"d","price":1.0,
                "category":"c","image":"i","rating":{"rate":1.0,"count":1}}"#,
        )
        .unwrap();
        assert!(!parsed.is_liked);
        assert_eq!(parsed.id, ProductId::from("x"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ProductId::generate(), ProductId::generate());
    }
}
