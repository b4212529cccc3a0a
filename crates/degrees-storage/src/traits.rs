//! Dataset source trait definitions

use crate::error::StorageResult;
use degrees_core::Dataset;

/// Anything that can produce a fully loaded [`Dataset`]
pub trait DatasetSource {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Load the complete dataset
    fn load(&self) -> StorageResult<Dataset>;
}
