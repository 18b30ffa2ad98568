//! Table output for listings and single products.

use crate::lifecycle::LoadState;
use crate::model::{FilterMode, Page, Product, ProductQuery};
use tabled::builder::Builder;
use tabled::settings::{object::Columns, Style, Width};

const TITLE_WIDTH: usize = 40;

fn liked_marker(liked: bool) -> &'static str {
    if liked {
        "♥"
    } else {
        ""
    }
}

pub fn products_table(products: &[Product]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Title", "Category", "Price", "Rating", "Liked"]);
    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.category.clone(),
            format!("{:.2}", product.price),
            format!("{:.1} ({})", product.rating.rate, product.rating.count),
            liked_marker(product.is_liked).to_string(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Columns::one(1), Width::truncate(TITLE_WIDTH).suffix("…"));
    table.to_string()
}

/// A listing page with a footer describing the view and position.
pub fn page(page: &Page<Product>, view: &ProductQuery) -> String {
    if page.total_items == 0 {
        return match (view.filter, view.search.is_empty()) {
            (FilterMode::Liked, true) => "No liked products yet.".to_string(),
            (_, false) => format!("No products match \"{}\".", view.search),
            (FilterMode::All, true) => "No products.".to_string(),
        };
    }

    let mut out = products_table(&page.items);
    out.push('\n');
    out.push_str(&format!(
        "Page {} of {} · {} {} product(s)",
        page.number, page.total_pages, page.total_items, view.filter
    ));
    if !view.search.is_empty() {
        out.push_str(&format!(" matching \"{}\"", view.search));
    }
    out
}

pub fn product_detail(product: &Product) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID".to_string(), product.id.to_string()]);
    builder.push_record(["Title".to_string(), product.title.clone()]);
    builder.push_record(["Description".to_string(), product.description.clone()]);
    builder.push_record(["Category".to_string(), product.category.clone()]);
    builder.push_record(["Price".to_string(), format!("{:.2}", product.price)]);
    builder.push_record([
        "Rating".to_string(),
        format!("{:.1} ({} reviews)", product.rating.rate, product.rating.count),
    ]);
    builder.push_record(["Image".to_string(), product.image.clone()]);
    builder.push_record([
        "Liked".to_string(),
        if product.is_liked { "yes" } else { "no" }.to_string(),
    ]);
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn load_state(state: &LoadState) -> String {
    match (state.is_loading, &state.error) {
        (true, _) => "loading".to_string(),
        (false, Some(error)) => format!("error: {error}"),
        (false, None) => "idle".to_string(),
    }
}
