use super::{RemoteCatalog, RemoteProduct};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// [`RemoteCatalog`] over HTTP: a single parameterless `GET` returning a JSON array.
///
/// No timeout and no retry are applied.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn remote_error(e: reqwest::Error) -> ProductError {
    ProductError::RemoteLoad(e.to_string())
}

#[async_trait]
impl RemoteCatalog for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_products(&self) -> Result<Vec<RemoteProduct>, ProductError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(remote_error)?
            .error_for_status()
            .map_err(remote_error)?;

        let products: Vec<RemoteProduct> = response.json().await.map_err(remote_error)?;
        debug!(count = products.len(), "Fetched remote catalog");
        Ok(products)
    }
}
