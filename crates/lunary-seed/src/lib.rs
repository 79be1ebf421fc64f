//! Deterministic seeded selection for Lunary.
//!
//! Picks an item from a fixed, ordered catalog for a given context (a day, a
//! label) and optional personal identity, so that the same inputs always give
//! the same item and different inputs spread evenly over the catalog.
//!
//! The pipeline is pure: [`SeedContext`] normalizes the inputs into a
//! canonical seed string, [`SeededRng`] turns that string into a reproducible
//! float stream, [`select_index`] maps the first float onto the catalog, and
//! [`Catalog`] hands back the item. Nothing is cached or persisted here.

/// Validated, ordered collections of selectable items.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Seed normalization: dates, labels, and personal identity fields.
pub mod normalize;
/// String-keyed deterministic random stream.
pub mod rng;
/// Mapping from a random float to a catalog index.
pub mod select;
/// Putting the pieces together: context in, item out.
pub mod selection;

/// Re-export catalog types.
pub use catalog::{Catalog, CatalogItem, Entry};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export normalization types.
pub use normalize::{DEFAULT_BASE, SEED_DELIMITER, SeedBase, SeedContext, normalize_seed};
/// Re-export the seeded generator.
pub use rng::SeededRng;
/// Re-export the index selector.
pub use select::select_index;
/// Re-export the selection entry points.
pub use selection::{Selection, index_for_seed, pick_from_slice, select};
