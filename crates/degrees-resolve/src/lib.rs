//! Degrees Resolve - Turning typed names into person ids
//!
//! Provides exact (case-insensitive) resolution and fuzzy "did you mean"
//! suggestions (nucleo).

pub mod exact;
pub mod traits;

#[cfg(feature = "fuzzy")]
pub mod fuzzy;

pub use exact::ExactResolver;
pub use traits::{Candidate, NameResolver, Resolution};

#[cfg(feature = "fuzzy")]
pub use fuzzy::FuzzyResolver;
