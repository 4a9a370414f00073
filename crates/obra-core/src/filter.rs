use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Free-text filter over typed field accessors.
///
/// Callers name the fields a query runs against; there is no reflection over
/// the item. Matching is case-insensitive and accent-insensitive, so
/// "configuracion" finds "Configuración".
pub struct TextSearch<T> {
    accessors: Vec<Box<dyn Fn(&T) -> String + Send + Sync>>,
}

impl<T> TextSearch<T> {
    pub fn new() -> Self {
        Self {
            accessors: Vec::new(),
        }
    }

    /// Add a field accessor to search over.
    pub fn field<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.accessors.push(Box::new(accessor));
        self
    }

    /// True if any registered field of `item` contains `query`.
    /// An empty query matches everything.
    pub fn matches(&self, item: &T, query: &str) -> bool {
        let query = fold(query);
        if query.is_empty() {
            return true;
        }
        self.accessors
            .iter()
            .any(|accessor| fold(&accessor(item)).contains(&query))
    }

    /// Filter a slice down to the matching items, preserving order.
    pub fn apply<'a>(&self, items: &'a [T], query: &str) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item, query)).collect()
    }
}

impl<T> Default for TextSearch<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase and strip diacritics (NFD, drop combining marks).
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
