//! Durable storage for the product collection.

mod json_file;

pub use json_file::JsonFileStorage;
