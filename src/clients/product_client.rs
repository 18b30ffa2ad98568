//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{NewProduct, Product, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{
    ActorClient, FrameworkError, Generation, ReplaceOutcome, ResourceClient, StoreStats,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}

impl ProductClient {
    /// Adds a product under a fresh id and returns the id.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product: NewProduct) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(product).await.map_err(Self::map_error)
    }

    /// Returns the edited product, or `None` if `id` is unknown.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Flips the like flag. Returns the new value, or `None` if `id` is unknown.
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, id: ProductId) -> Result<Option<bool>, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::ToggleLike)
            .await
            .map_err(Self::map_error)?
        {
            Some(ProductActionResult::ToggleLike(liked)) => Ok(Some(liked)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<StoreStats, ProductError> {
        self.inner.stats().await.map_err(Self::map_error)
    }

    /// Swaps in `products` unless something committed after `expected_generation`.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn replace_all(
        &self,
        products: Vec<Product>,
        expected_generation: Generation,
    ) -> Result<ReplaceOutcome, ProductError> {
        debug!("Sending request");
        self.inner
            .replace(products, expected_generation)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductQuery, Rating};
    use actor_framework::mock::{
        create_mock_client, expect_action, expect_create, expect_replace, MockClient,
    };

    fn pen() -> NewProduct {
        NewProduct {
            title: "Pen".into(),
            description: "Blue ink".into(),
            price: 1.5,
            category: "Stationery".into(),
            image: "pen.png".into(),
            rating: Rating::default(),
            is_liked: false,
        }
    }

    #[tokio::test]
    async fn test_toggle_like_returns_new_value() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task =
            tokio::spawn(async move { product_client.toggle_like(ProductId::from("p1")).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProductId::from("p1"));
        assert_eq!(action, ProductAction::ToggleLike);

        responder
            .send(Ok(Some(ProductActionResult::ToggleLike(true))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_toggle_like_unknown_id_is_none() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId::from("missing")).return_ok(None);

        let client = ProductClient::new(mock.client());
        let result = client.toggle_like(ProductId::from("missing")).await;

        assert_eq!(result.unwrap(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_product_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.add_product(pen()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.title, "Pen");
        responder.send(Ok(ProductId::from("new-id"))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), ProductId::from("new-id"));
    }

    #[tokio::test]
    async fn test_replace_all_sends_expected_generation() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task =
            tokio::spawn(async move { product_client.replace_all(Vec::new(), 7).await });

        let (items, expected_generation, responder) = expect_replace(&mut receiver)
            .await
            .expect("Expected Replace request");
        assert!(items.is_empty());
        assert_eq!(expected_generation, 7);
        responder
            .send(Ok(ReplaceOutcome::Stale { current: 8 }))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap(),
            ReplaceOutcome::Stale { current: 8 }
        );
    }

    #[tokio::test]
    async fn test_framework_errors_become_communication_errors() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);

        let client = ProductClient::new(mock.client());
        let result = client.list(ProductQuery::all()).await;

        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
