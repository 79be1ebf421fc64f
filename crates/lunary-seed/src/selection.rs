//! Context in, item out.
//!
//! Normalize the context, seed the generator, take its first float, map it to
//! an index, look the item up. No state survives between calls, so any number
//! of threads can select from the same catalog at once.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CatalogItem};
use crate::normalize::SeedContext;
use crate::rng::SeededRng;
use crate::select::select_index;

/// The outcome of one selection.
///
/// Recomputed on demand. Callers that want to keep "today's card" store it
/// themselves.
#[derive(Debug, Clone, Serialize)]
pub struct Selection<'a, T> {
    /// The canonical seed the selection was keyed on.
    pub seed: String,
    /// Position of the item in its catalog.
    pub index: usize,
    /// The selected item.
    pub item: &'a T,
}

impl<'a, T: CatalogItem> Selection<'a, T> {
    pub(crate) fn resolve(catalog: &'a Catalog<T>, seed: String) -> Self {
        let index = index_for_seed(&seed, catalog.len());
        let item = &catalog.items()[index];
        debug!(%seed, index, item = item.name(), "selected catalog item");
        Self { seed, index, item }
    }
}

/// Index into a collection of `len` items for a canonical seed string.
pub fn index_for_seed(seed: &str, len: usize) -> usize {
    select_index(SeededRng::new(seed).next_f64(), len)
}

/// Select from `catalog` by base, identity, and secondary field.
///
/// The three call shapes are: base only (a shared pick for everyone), base and
/// identity, and base, identity and secondary (a per-person pick that stays
/// put all day). Blank personal fields count as absent.
pub fn select<'a, T: CatalogItem>(
    catalog: &'a Catalog<T>,
    base: &str,
    identity: Option<&str>,
    secondary: Option<&str>,
) -> &'a T {
    catalog.pick(base, identity, secondary)
}

/// Pick from a plain slice using `seed` as the base of a context.
///
/// For ad-hoc pools (captions, quotes, hooks) that are not worth a
/// [`Catalog`]. Returns `None` for an empty slice.
pub fn pick_from_slice<'a, T>(items: &'a [T], seed: &str) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let canonical = SeedContext::new(seed).canonical();
    items.get(index_for_seed(&canonical, items.len()))
}
