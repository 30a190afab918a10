//! Query parameter capture and merging.

use url::Url;
use url::form_urlencoded;

/// Query keys that identify the routing target rather than request state.
/// Never carried over into pagination links.
pub const ROUTING_KEYS: [&str; 2] = ["action", "controller"];

/// The query parameters of one navigation request, minus routing keys.
///
/// Captured once per incoming request and reused for every link in one
/// rendered control, so all links share the same base and differ only in
/// their `page` value. Pairs keep their original order, and repeated keys
/// survive verbatim; merging a page number never drops or reorders anything
/// else the caller had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pairs: Vec<(String, String)>,
}

impl RequestParameters {
    /// Captures the query parameters of a request URL.
    pub fn capture(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
    }

    /// Builds the parameter set from raw key/value pairs.
    ///
    /// Routing keys are dropped here, so every later derivation starts from
    /// an already-clean base.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !ROUTING_KEYS.contains(&k.as_str()))
            .collect();
        Self { pairs }
    }

    /// Returns the pairs in their original order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the first value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Derives the parameter set for a target page.
    ///
    /// An existing `page` pair is overwritten in place (keeping its position;
    /// later duplicates of `page` are dropped); otherwise the pair is
    /// appended. Every other pair is preserved verbatim.
    pub fn with_page(&self, page: usize) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut replaced = false;
        for (k, v) in &self.pairs {
            if k == "page" {
                if !replaced {
                    pairs.push((k.clone(), page.to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            pairs.push(("page".to_string(), page.to_string()));
        }
        Self { pairs }
    }

    /// Serializes the pairs as a form-urlencoded query string.
    ///
    /// Deterministic for equal input: pair order is preserved, so the same
    /// parameters always produce byte-identical output.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}
