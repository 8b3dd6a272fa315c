//! Catalog and wishlist views and the navigation links that select them

use serde::Serialize;

/// Top-level view selected from the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Catalog,
    Wishlist,
}

impl View {
    /// Resolve a navigation link's destination fragment
    ///
    /// Only `#book-list`/`#catalog` and `#wishlist` are recognised.
    pub fn from_href(href: &str) -> Option<View> {
        match href {
            "#book-list" | "#catalog" => Some(View::Catalog),
            "#wishlist" => Some(View::Wishlist),
            _ => None,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            View::Catalog => "#book-list",
            View::Wishlist => "#wishlist",
        }
    }
}
