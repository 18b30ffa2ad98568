use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::model::{
    FilterMode, NewProduct, Page, Product, ProductId, ProductQuery, ProductUpdate,
    DEFAULT_PAGE_SIZE,
};
use crate::product_actor::{ProductError, LOAD_FAILED_MESSAGE};
use crate::remote::{HttpCatalog, RemoteCatalog, RemoteProduct};
use crate::storage::JsonFileStorage;
use actor_framework::{ActorClient, Persistence, ReplaceOutcome};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Status of the most recent remote load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
        }
    }

    fn failed() -> Self {
        Self {
            is_loading: false,
            error: Some(LOAD_FAILED_MESSAGE.to_string()),
        }
    }
}

/// What [`ProductStore::load_remote`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store already held products; the remote was not contacted.
    Skipped,
    /// The remote catalog replaced the empty collection.
    Loaded(usize),
    /// A local mutation committed while the remote read was in flight; the remote result
    /// was dropped.
    Discarded,
}

/// The product catalog: one product actor plus the view state and load status around it.
///
/// # Architecture
///
/// - The **product actor** owns the collection and its snapshot file. Every mutation is
///   applied and persisted there, one message at a time.
/// - The **view** (filter mode and search query) and the **load status** live here in
///   `watch` channels, so any task holding `&ProductStore` can read or change them.
/// - The **remote catalog** is consulted only by [`load_remote`](Self::load_remote).
///
/// # Example
///
/// ```ignore
/// let store = ProductStore::from_config(&config);
/// store.load_remote().await?;
/// store.set_search_query("pen");
/// let page = store.page(1).await?;
/// store.shutdown().await?;
/// ```
pub struct ProductStore {
    client: ProductClient,
    remote: Arc<dyn RemoteCatalog>,
    view: watch::Sender<ProductQuery>,
    load_state: watch::Sender<LoadState>,
    page_size: usize,
    handle: JoinHandle<()>,
}

impl ProductStore {
    /// Spawns the product actor on `storage` and wires the store around it.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(
        storage: impl Persistence<Product> + 'static,
        remote: Arc<dyn RemoteCatalog>,
    ) -> Self {
        let (actor, client) = crate::product_actor::new();
        let handle = tokio::spawn(actor.with_persistence(storage).run(()));

        Self {
            client,
            remote,
            view: watch::Sender::new(ProductQuery::default()),
            load_state: watch::Sender::new(LoadState::default()),
            page_size: DEFAULT_PAGE_SIZE,
            handle,
        }
    }

    /// Starts a store on the configured snapshot file and remote URL.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let storage = JsonFileStorage::new(&config.data_file);
        let remote = HttpCatalog::new(&config.remote_url);
        info!(
            data_file = %storage.path().display(),
            remote_url = remote.url(),
            "Starting product store"
        );
        Self::start(storage, Arc::new(remote)).with_page_size(config.page_size)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The underlying client, for callers that need the raw actor API.
    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    // --- Mutations ---

    /// Prepends a product under a fresh id.
    pub async fn add(&self, product: NewProduct) -> Result<ProductId, ProductError> {
        self.client.add_product(product).await
    }

    /// Merges `update` into the product. `None` if `id` is unknown.
    pub async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ProductError> {
        self.client.update_product(id, update).await
    }

    /// Whether a product was removed.
    pub async fn delete(&self, id: ProductId) -> Result<bool, ProductError> {
        self.client.delete(id).await
    }

    /// The new like flag, or `None` if `id` is unknown.
    pub async fn toggle_like(&self, id: ProductId) -> Result<Option<bool>, ProductError> {
        self.client.toggle_like(id).await
    }

    // --- View ---

    pub fn set_filter(&self, filter: FilterMode) {
        self.view.send_modify(|query| query.filter = filter);
    }

    pub fn set_search_query(&self, search: impl Into<String>) {
        let search = search.into();
        self.view.send_modify(|query| query.search = search);
    }

    /// Current filter mode and search query.
    pub fn view(&self) -> ProductQuery {
        self.view.borrow().clone()
    }

    /// The collection under the current filter and search, in store order.
    pub async fn filtered_products(&self) -> Result<Vec<Product>, ProductError> {
        self.client.list(self.view()).await
    }

    /// Every liked product, in store order, regardless of the current view.
    pub async fn liked_products(&self) -> Result<Vec<Product>, ProductError> {
        self.client.list(ProductQuery::liked()).await
    }

    /// Page `number` of [`filtered_products`](Self::filtered_products).
    pub async fn page(&self, number: usize) -> Result<Page<Product>, ProductError> {
        let products = self.filtered_products().await?;
        Ok(Page::paginate(products, number, self.page_size))
    }

    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.client.get(id).await
    }

    /// Looks `id` up, seeding the store from the remote catalog first if it is missing.
    #[instrument(skip(self))]
    pub async fn resolve(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        if let Some(product) = self.get_by_id(id.clone()).await? {
            return Ok(Some(product));
        }
        debug!("Not in store, trying remote load");
        self.load_remote().await?;
        self.get_by_id(id).await
    }

    // --- Remote load ---

    /// Seeds an empty store from the remote catalog.
    ///
    /// The emptiness check reads the store generation; the replace is conditioned on it, so
    /// anything committed while the remote read is in flight wins over the remote data.
    #[instrument(skip(self))]
    pub async fn load_remote(&self) -> Result<LoadOutcome, ProductError> {
        let stats = self.client.stats().await?;
        if stats.len > 0 {
            debug!(size = stats.len, "Store not empty, skipping remote load");
            return Ok(LoadOutcome::Skipped);
        }

        self.load_state.send_replace(LoadState::loading());

        let remote = match self.remote.fetch_products().await {
            Ok(remote) => remote,
            Err(e) => {
                warn!(error = %e, "Remote load failed");
                self.load_state.send_replace(LoadState::failed());
                return Err(e);
            }
        };

        let products: Vec<Product> = remote.into_iter().map(RemoteProduct::into_product).collect();
        let outcome = self.client.replace_all(products, stats.generation).await;
        self.load_state.send_replace(LoadState::default());

        match outcome? {
            ReplaceOutcome::Applied { len } => {
                info!(size = len, "Loaded remote catalog");
                Ok(LoadOutcome::Loaded(len))
            }
            ReplaceOutcome::Stale { current } => {
                warn!(
                    expected = stats.generation,
                    current, "Store changed during remote load, keeping local data"
                );
                Ok(LoadOutcome::Discarded)
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state.borrow().clone()
    }

    /// Observes every load status change.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.load_state.subscribe()
    }

    /// Stops the actor and waits for it to finish. All snapshot writes are complete when
    /// this returns.
    ///
    /// Clones of [`client`](Self::client) keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), ProductError> {
        info!("Shutting down product store...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(ProductError::ActorCommunicationError(format!(
                "Actor task failed: {e}"
            )));
        }

        info!("Product store shutdown complete.");
        Ok(())
    }
}
