//! Fixed, ordered collections that selections index into.
//!
//! A [`Catalog`] is validated once when it is built and never changes
//! afterwards. Item order is the selection order: reordering a catalog changes
//! which item every seed maps to, so loaders must keep it stable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::normalize::SeedContext;
use crate::selection::Selection;

/// Anything that can live in a [`Catalog`].
pub trait CatalogItem {
    /// The item's unique, human-readable name.
    fn name(&self) -> &str;
}

/// A plain catalog record: a name, descriptive keywords, and free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique name.
    pub name: String,
    /// Short descriptive tags, most important first.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Free-text description.
    #[serde(default)]
    pub information: String,
}

impl Entry {
    /// Create an entry with no keywords or description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
            information: String::new(),
        }
    }
}

impl CatalogItem for Entry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogItem for String {
    fn name(&self) -> &str {
        self
    }
}

impl CatalogItem for &str {
    fn name(&self) -> &str {
        self
    }
}

/// An ordered, non-empty set of uniquely named items.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    by_name: HashMap<String, usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, keeping `items` in the given order.
    ///
    /// Fails if there are no items, a name is blank, or two names collide
    /// after trimming and lower-casing.
    pub fn new(items: Vec<T>) -> CatalogResult<Self> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut by_name = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let key = name_key(item.name());
            if key.is_empty() {
                return Err(CatalogError::BlankName(index));
            }
            if by_name.insert(key, index).is_some() {
                return Err(CatalogError::DuplicateName(item.name().trim().to_string()));
            }
        }
        debug!(items = items.len(), "catalog loaded");
        Ok(Self { items, by_name })
    }

    /// Look up an item by name, ignoring case and surrounding whitespace.
    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.index_of(name).map(|index| &self.items[index])
    }

    /// Position of the named item.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name_key(name)).copied()
    }

    /// Select the item for `context`.
    pub fn select(&self, context: &SeedContext) -> Selection<'_, T> {
        Selection::resolve(self, context.canonical())
    }

    /// Select the item for the loose string form of a context.
    pub fn pick(&self, base: &str, identity: Option<&str>, secondary: Option<&str>) -> &T {
        self.select(&SeedContext::from_parts(base, identity, secondary))
            .item
    }
}

impl<T> Catalog<T> {
    /// All items in selection order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items. Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; catalogs are never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the items in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
