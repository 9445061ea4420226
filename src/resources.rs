//! Image resource resolution.

use std::collections::HashMap;

/// Maps a logical image reference to the path written into the document.
pub trait ResourceResolver {
    fn resolve(&self, uri: &str) -> String;
}

/// Writes image references unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl ResourceResolver for IdentityResolver {
    fn resolve(&self, uri: &str) -> String {
        uri.to_string()
    }
}

/// Looks references up in a map; unknown references pass through.
impl ResourceResolver for HashMap<String, String> {
    fn resolve(&self, uri: &str) -> String {
        self.get(uri).cloned().unwrap_or_else(|| uri.to_string())
    }
}
