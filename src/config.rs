//! Command-line and environment configuration.

use crate::cli::Command;
use crate::model::DEFAULT_PAGE_SIZE;
use crate::remote::DEFAULT_REMOTE_URL;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "products-store.json";

/// Product catalog command line.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Manage a local product catalog", long_about = None)]
pub struct CliArgs {
    /// Snapshot file holding the catalog
    #[arg(long, env = "CATALOG_DATA_FILE", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_file: PathBuf,

    /// Remote catalog used to seed an empty store
    #[arg(long, env = "CATALOG_REMOTE_URL", default_value = DEFAULT_REMOTE_URL, global = true)]
    pub remote_url: String,

    /// Products per listing page
    #[arg(
        long,
        env = "CATALOG_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = parse_page_size,
        global = true
    )]
    pub page_size: usize,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    /// Splits the parsed arguments into the store configuration and the command to run.
    pub fn into_parts(self) -> (CatalogConfig, Command) {
        let config = CatalogConfig {
            data_file: self.data_file,
            remote_url: self.remote_url,
            page_size: self.page_size,
        };
        (config, self.command)
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a whole number"))?;
    if size == 0 {
        return Err("page size must be at least 1".to_string());
    }
    Ok(size)
}

/// Everything [`ProductStore::from_config`](crate::lifecycle::ProductStore::from_config)
/// needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_file: PathBuf,
    pub remote_url: String,
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags_become_config() {
        let args = CliArgs::try_parse_from([
            "catalog",
            "--data-file",
            "catalog.json",
            "--remote-url",
            "http://localhost:8080/products",
            "--page-size",
            "5",
            "status",
        ])
        .unwrap();
        let (config, command) = args.into_parts();

        assert_eq!(
            config,
            CatalogConfig {
                data_file: PathBuf::from("catalog.json"),
                remote_url: "http://localhost:8080/products".into(),
                page_size: 5,
            }
        );
        assert!(matches!(command, Command::Status));
    }

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "catalog",
            "list",
            "--page-size",
            "3",
            "--data-file",
            "/tmp/catalog.json",
        ])
        .unwrap();

        assert_eq!(args.page_size, 3);
        assert_eq!(args.data_file, PathBuf::from("/tmp/catalog.json"));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = CliArgs::try_parse_from(["catalog", "--page-size", "0", "status"]);
        assert!(result.is_err());
    }
}
