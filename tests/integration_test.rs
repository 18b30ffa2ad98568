use actor_framework::MemoryPersistence;
use async_trait::async_trait;
use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::{LoadOutcome, ProductStore};
use product_catalog::model::{FilterMode, NewProduct, Product, ProductId, ProductUpdate, Rating};
use product_catalog::product_actor::ProductError;
use product_catalog::remote::{RemoteCatalog, RemoteProduct};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Fixtures ---

/// Remote that counts calls and always returns nothing.
#[derive(Default)]
struct CountingCatalog {
    calls: AtomicUsize,
}

#[async_trait]
impl RemoteCatalog for CountingCatalog {
    async fn fetch_products(&self) -> Result<Vec<RemoteProduct>, ProductError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

fn new_product(title: &str, category: &str) -> NewProduct {
    NewProduct {
        title: title.into(),
        description: format!("A fine {}", title.to_lowercase()),
        price: 2.5,
        category: category.into(),
        image: "https://example.test/image.png".into(),
        rating: Rating { rate: 4.0, count: 1 },
        is_liked: false,
    }
}

fn start() -> (ProductStore, MemoryPersistence<Product>) {
    let storage = MemoryPersistence::new();
    let store = ProductStore::start(storage.clone(), Arc::new(CountingCatalog::default()));
    (store, storage)
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

// --- Tests ---

/// Empty store, add a pen, like it, delete it.
#[tokio::test]
async fn test_pen_scenario() {
    let (store, _) = start();

    let id = store.add(new_product("Pen", "Stationery")).await.unwrap();
    let all = store.filtered_products().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert!(!id.as_str().is_empty());

    assert_eq!(store.toggle_like(id.clone()).await.unwrap(), Some(true));
    let liked = store.liked_products().await.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, id);

    assert!(store.delete(id).await.unwrap());
    assert!(store.filtered_products().await.unwrap().is_empty());
    assert!(store.liked_products().await.unwrap().is_empty());

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_then_get_returns_fields_and_id() {
    let (store, _) = start();
    let input = new_product("Notebook", "Paper");

    let id = store.add(input.clone()).await.unwrap();
    let product = store.get_by_id(id.clone()).await.unwrap().unwrap();

    assert_eq!(product, Product::from_new(id, input));
}

#[tokio::test]
async fn test_products_are_newest_first() {
    let (store, _) = start();
    for title in ["First", "Second", "Third"] {
        store.add(new_product(title, "misc")).await.unwrap();
    }

    let all = store.filtered_products().await.unwrap();
    assert_eq!(titles(&all), vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let (store, _) = start();
    let id = store.add(new_product("Pen", "Stationery")).await.unwrap();

    assert!(store.delete(id.clone()).await.unwrap());
    assert!(store.get_by_id(id.clone()).await.unwrap().is_none());
    // A second delete is a no-op.
    assert!(!store.delete(id.clone()).await.unwrap());
    assert!(store.get_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_toggle_like_twice_restores_state() {
    let (store, _) = start();
    let id = store.add(new_product("Pen", "Stationery")).await.unwrap();

    assert_eq!(store.toggle_like(id.clone()).await.unwrap(), Some(true));
    assert_eq!(store.toggle_like(id.clone()).await.unwrap(), Some(false));

    let product = store.get_by_id(id).await.unwrap().unwrap();
    assert!(!product.is_liked);
    assert!(store.liked_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_ids_are_no_ops() {
    let (store, storage) = start();
    let ghost = ProductId::from("ghost");

    let update = ProductUpdate {
        title: Some("Renamed".into()),
        ..Default::default()
    };
    assert!(store.update(ghost.clone(), update).await.unwrap().is_none());
    assert!(!store.delete(ghost.clone()).await.unwrap());
    assert_eq!(store.toggle_like(ghost).await.unwrap(), None);
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn test_edits_show_up_in_liked_view() {
    let (store, _) = start();
    let id = store.add(new_product("Pen", "Stationery")).await.unwrap();
    store.toggle_like(id.clone()).await.unwrap();

    let update = ProductUpdate {
        title: Some("Fountain Pen".into()),
        rate: Some(5.0),
        ..Default::default()
    };
    let updated = store.update(id, update).await.unwrap().unwrap();
    assert_eq!(updated.rating.rate, 5.0);
    assert_eq!(updated.rating.count, 1);

    let liked = store.liked_products().await.unwrap();
    assert_eq!(titles(&liked), vec!["Fountain Pen"]);
}

#[tokio::test]
async fn test_liked_filter_is_subset_of_all() {
    let (store, _) = start();
    let mut ids = Vec::new();
    for title in ["A", "B", "C", "D"] {
        ids.push(store.add(new_product(title, "misc")).await.unwrap());
    }
    store.toggle_like(ids[0].clone()).await.unwrap();
    store.toggle_like(ids[2].clone()).await.unwrap();

    let all = store.filtered_products().await.unwrap();
    store.set_filter(FilterMode::Liked);
    let liked = store.filtered_products().await.unwrap();

    assert_eq!(titles(&liked), vec!["C", "A"]);
    assert!(liked.iter().all(|p| p.is_liked));
    assert!(liked.iter().all(|p| all.contains(p)));
}

#[tokio::test]
async fn test_search_matches_title_description_and_category() {
    let (store, _) = start();
    store.add(new_product("Pen", "Stationery")).await.unwrap();
    store.add(new_product("Mug", "Kitchen")).await.unwrap();
    store.add(new_product("Lamp", "Lighting")).await.unwrap();

    store.set_search_query("PEN");
    assert_eq!(titles(&store.filtered_products().await.unwrap()), vec!["Pen"]);

    store.set_search_query("fine mug");
    assert_eq!(titles(&store.filtered_products().await.unwrap()), vec!["Mug"]);

    store.set_search_query("light");
    assert_eq!(titles(&store.filtered_products().await.unwrap()), vec!["Lamp"]);

    store.set_search_query("");
    assert_eq!(store.filtered_products().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_applies_within_liked_filter() {
    let (store, _) = start();
    let pen = store.add(new_product("Pen", "Stationery")).await.unwrap();
    store.add(new_product("Pencil", "Stationery")).await.unwrap();
    store.toggle_like(pen).await.unwrap();

    store.set_filter(FilterMode::Liked);
    store.set_search_query("pen");

    assert_eq!(titles(&store.filtered_products().await.unwrap()), vec!["Pen"]);
    assert_eq!(store.view().filter, FilterMode::Liked);
}

#[tokio::test]
async fn test_pages_follow_the_filtered_view() {
    let (store, _) = start();
    for i in 1..=10 {
        store.add(new_product(&format!("Item {i}"), "misc")).await.unwrap();
    }

    let first = store.page(1).await.unwrap();
    assert_eq!(first.items.len(), 8);
    assert_eq!(first.items[0].title, "Item 10");
    assert_eq!(first.total_pages, 2);

    let second = store.page(2).await.unwrap();
    assert_eq!(titles(&second.items), vec!["Item 2", "Item 1"]);

    let clamped = store.page(50).await.unwrap();
    assert_eq!(clamped.number, 2);

    let small = start().0.with_page_size(3);
    small.add(new_product("Only", "misc")).await.unwrap();
    assert_eq!(small.page(1).await.unwrap().per_page, 3);
}

#[tokio::test]
async fn test_every_commit_writes_one_snapshot() {
    let (store, storage) = start();

    let id = store.add(new_product("Pen", "Stationery")).await.unwrap();
    assert_eq!(storage.save_count(), 1);

    let update = ProductUpdate {
        price: Some(3.0),
        ..Default::default()
    };
    store.update(id.clone(), update).await.unwrap();
    assert_eq!(storage.save_count(), 2);

    store.toggle_like(id.clone()).await.unwrap();
    assert_eq!(storage.save_count(), 3);

    // View changes and reads never write.
    store.set_filter(FilterMode::Liked);
    store.set_search_query("pen");
    store.filtered_products().await.unwrap();
    store.get_by_id(id.clone()).await.unwrap();
    assert_eq!(storage.save_count(), 3);

    let saved = storage.snapshot().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].price, 3.0);
    assert!(saved[0].is_liked);

    store.delete(id).await.unwrap();
    assert_eq!(storage.save_count(), 4);
    assert!(storage.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_store_hydrates_from_saved_snapshot() {
    let saved = Product::from_new(ProductId::from("saved-1"), new_product("Saved", "misc"));
    let storage = MemoryPersistence::seeded(vec![saved.clone()]);
    let remote = Arc::new(CountingCatalog::default());
    let store = ProductStore::start(storage.clone(), remote.clone());

    assert_eq!(store.filtered_products().await.unwrap(), vec![saved]);
    assert_eq!(store.load_remote().await.unwrap(), LoadOutcome::Skipped);
    assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn test_state_survives_restart_through_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig {
        data_file: dir.path().join("catalog/products.json"),
        remote_url: "http://127.0.0.1:9/products".into(),
        page_size: 2,
    };

    let store = ProductStore::from_config(&config);
    let pen = store.add(new_product("Pen", "Stationery")).await.unwrap();
    store.add(new_product("Mug", "Kitchen")).await.unwrap();
    store.toggle_like(pen.clone()).await.unwrap();
    store.shutdown().await.unwrap();

    let reopened = ProductStore::from_config(&config);
    assert_eq!(reopened.page_size(), 2);
    let all = reopened.filtered_products().await.unwrap();
    assert_eq!(titles(&all), vec!["Mug", "Pen"]);

    let liked = reopened.liked_products().await.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, pen);
    reopened.shutdown().await.unwrap();
}
