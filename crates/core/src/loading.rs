//! Loading and error signalling around the catalog fetch
//!
//! The fetch itself is I/O and lives in the shell. These functions are the
//! surface side of it: raise the loading indicator before the request and
//! settle the indicators once the outcome is known.

use crate::book::Book;
use crate::surface::{Region, Surface};

/// The only failure message a user ever sees for a load
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load books. Please try again later.";

/// Loading indicator on, error indicator off
pub fn begin(surface: &mut dyn Surface) {
    surface.set_visible(Region::Loading, true);
    surface.set_visible(Region::Error, false);
}

/// Settle the indicators for a finished fetch and hand back the catalog
///
/// Every failure shows [`LOAD_ERROR_MESSAGE`]. The loading indicator is
/// cleared whatever the outcome. A detached surface is left untouched and
/// yields no catalog.
pub fn complete<E>(surface: &mut dyn Surface, result: Result<Vec<Book>, E>) -> Option<Vec<Book>> {
    if !surface.is_attached() {
        return None;
    }

    let catalog = match result {
        Ok(books) => Some(books),
        Err(_) => {
            surface.set_text(Region::Error, LOAD_ERROR_MESSAGE);
            surface.set_visible(Region::Error, true);
            None
        }
    };

    surface.set_visible(Region::Loading, false);
    catalog
}
