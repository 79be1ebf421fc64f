/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building a catalog.
///
/// Selection itself never fails; every check happens once, when the catalog
/// is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no items to select from.
    #[error("catalog is empty")]
    Empty,

    /// An item has a name that is empty after trimming.
    #[error("item at position {0} has a blank name")]
    BlankName(usize),

    /// Two items share a name (compared case- and whitespace-insensitively).
    #[error("duplicate item name: \"{0}\"")]
    DuplicateName(String),
}
