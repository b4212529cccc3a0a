//! Degrees Storage - Dataset loaders
//!
//! Reads people, movies, and star links into an in-memory
//! [`Dataset`](degrees_core::Dataset).

pub mod csv;
pub mod error;
pub mod traits;

pub use crate::csv::CsvSource;
pub use error::{StorageError, StorageResult};
pub use traits::DatasetSource;
