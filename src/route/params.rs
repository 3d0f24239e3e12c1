/// The path parameters bound by a successful route lookup.
///
/// Bindings keep the left-to-right order of the parameter segments in the
/// matched path. A name bound twice appears twice.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub(crate) fn push(&mut self, name: String, value: String) {
        self.0.push((name, value));
    }

    /// Returns the value of the first binding named `name`.
    ///
    /// # Example
    ///
    /// ```
    /// use trie_router::{endpoint::make_sync, Router};
    ///
    /// let app = Router::new().get(
    ///     "/ping/:id",
    ///     make_sync(|req| req.params().get("id").unwrap_or_default().to_string()),
    /// );
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over the `(name, value)` bindings in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
