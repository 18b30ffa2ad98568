//! The `catalog` command set, run against a [`ProductStore`].

pub mod form;
pub mod render;

pub use form::{EditForm, ProductForm};

use crate::lifecycle::{LoadOutcome, ProductStore};
use crate::model::{FilterMode, ProductId};
use crate::product_actor::ProductError;
use clap::Subcommand;
use std::io::Write;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, newest first
    List {
        /// Only liked products
        #[arg(long)]
        liked: bool,
        /// Case-insensitive text to find in title, description or category
        #[arg(short, long)]
        search: Option<String>,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one product
    Show { id: String },
    /// Add a product
    Add(ProductForm),
    /// Change fields of a product
    Edit {
        id: String,
        #[command(flatten)]
        form: EditForm,
    },
    /// Delete a product
    Delete { id: String },
    /// Like or unlike a product
    Like { id: String },
    /// Seed an empty catalog from the remote source
    Load,
    /// Show catalog counts and the last load status
    Status,
}

/// Runs `command`, writing human-readable output to `out`.
pub async fn run(
    store: &ProductStore,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::List {
            liked,
            search,
            page,
        } => {
            store.set_filter(if liked {
                FilterMode::Liked
            } else {
                FilterMode::All
            });
            store.set_search_query(search.unwrap_or_default());

            let listing = store.page(page).await?;
            writeln!(out, "{}", render::page(&listing, &store.view()))?;
        }
        Command::Show { id } => {
            let product = store
                .resolve(ProductId::from(id.clone()))
                .await?
                .ok_or(ProductError::NotFound(id))?;
            writeln!(out, "{}", render::product_detail(&product))?;
        }
        Command::Add(form) => {
            let id = store.add(form.validate()?).await?;
            writeln!(out, "Added product {id}")?;
        }
        Command::Edit { id, form } => {
            let update = form.validate()?;
            let product = store
                .update(ProductId::from(id.clone()), update)
                .await?
                .ok_or(ProductError::NotFound(id))?;
            writeln!(out, "{}", render::product_detail(&product))?;
        }
        Command::Delete { id } => {
            if !store.delete(ProductId::from(id.clone())).await? {
                return Err(ProductError::NotFound(id).into());
            }
            writeln!(out, "Deleted product {id}")?;
        }
        Command::Like { id } => {
            let liked = store
                .toggle_like(ProductId::from(id.clone()))
                .await?
                .ok_or_else(|| ProductError::NotFound(id.clone()))?;
            let verb = if liked { "Liked" } else { "Unliked" };
            writeln!(out, "{verb} product {id}")?;
        }
        Command::Load => match store.load_remote().await? {
            LoadOutcome::Skipped => writeln!(out, "Catalog already has products; nothing loaded")?,
            LoadOutcome::Loaded(count) => writeln!(out, "Loaded {count} products")?,
            LoadOutcome::Discarded => {
                writeln!(out, "Catalog changed during load; remote products discarded")?
            }
        },
        Command::Status => {
            let stats = store.client().stats().await?;
            let liked = store.liked_products().await?.len();
            writeln!(out, "Products:    {}", stats.len)?;
            writeln!(out, "Liked:       {liked}")?;
            writeln!(out, "Page size:   {}", store.page_size())?;
            writeln!(out, "Load status: {}", render::load_state(&store.load_state()))?;
        }
    }
    Ok(())
}
