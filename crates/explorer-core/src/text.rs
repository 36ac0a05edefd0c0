// crates/explorer-core/src/text.rs
//! Case-insensitive comparison helpers shared by the filter engine.

/// Convert a string into a folded key suitable for comparison.
///
/// Unicode lower-casing only; accents are kept, so `"Åland"` does not match
/// `"aland"`.
///
/// ```rust
/// use explorer_core::text::fold_key;
///
/// assert_eq!(fold_key("GERmany"), "germany");
/// assert_eq!(fold_key("ÅLAND"), "åland");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get:
/// - [`NameMatch::name_contains`]: substring match ignoring case
/// - [`NameMatch::name_contains_folded`]: same, for a needle already passed
///   through [`fold_key`]
///
/// # Examples
/// ```rust
/// use explorer_core::text::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Ghana").name_contains("HAN"));
/// assert!(Place("Ghana").name_contains_folded("han"));
/// assert!(Place("Ghana").name_contains(""));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    /// An empty query is contained in every name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        fold_key(self.name_str()).contains(folded)
    }
}

impl NameMatch for crate::model::Country {
    fn name_str(&self) -> &str {
        &self.common_name
    }
}
