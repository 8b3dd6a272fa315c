//! Rendering surface abstraction
//!
//! The browser never draws anything itself. It mutates named regions of a
//! [`Surface`]: visibility, text, input value and child elements. The shell
//! decides what a region looks like on screen; [`MemorySurface`] just records
//! the state, which is what tests and JSON output read back.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::book::BookCard;

/// Named regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Loading,
    Error,
    SearchInput,
    GenreSelect,
    BookList,
    Pagination,
    Wishlist,
    Navbar,
}

/// Child element of a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Element {
    Book(BookCard),
    PageButton { page: usize },
    GenreOption { value: String, label: String },
}

pub trait Surface {
    fn set_visible(&mut self, region: Region, visible: bool);

    fn set_text(&mut self, region: Region, text: &str);

    /// Value of an input region (search box, genre select)
    fn set_value(&mut self, region: Region, value: &str);

    fn replace_children(&mut self, region: Region, children: Vec<Element>);

    /// Relabel the wishlist toggle of the book card with `book_id`, wherever it
    /// is currently rendered
    fn set_toggle_label(&mut self, book_id: u64, label: &'static str);

    /// Whether the surface still exists; a torn-down surface must not be
    /// mutated
    fn is_attached(&self) -> bool {
        true
    }
}

/// Recorded state of one region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionState {
    pub visible: bool,
    pub text: String,
    pub value: String,
    pub children: Vec<Element>,
}

/// Surface that keeps region state in memory
#[derive(Debug, Clone, Serialize)]
pub struct MemorySurface {
    regions: BTreeMap<Region, RegionState>,
    #[serde(skip)]
    attached: bool,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            regions: BTreeMap::new(),
            attached: true,
        }
    }

    pub fn region(&self, region: Region) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.regions.get(&region).is_some_and(|r| r.visible)
    }

    pub fn text(&self, region: Region) -> &str {
        self.regions.get(&region).map_or("", |r| r.text.as_str())
    }

    pub fn value(&self, region: Region) -> &str {
        self.regions.get(&region).map_or("", |r| r.value.as_str())
    }

    pub fn children(&self, region: Region) -> &[Element] {
        self.regions.get(&region).map_or(&[], |r| r.children.as_slice())
    }

    /// Book cards rendered in `region`
    pub fn cards(&self, region: Region) -> Vec<&BookCard> {
        self.children(region)
            .iter()
            .filter_map(|element| match element {
                Element::Book(card) => Some(card),
                _ => None,
            })
            .collect()
    }

    /// Mark the surface as torn down
    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn entry(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_default()
    }
}

impl Surface for MemorySurface {
    fn set_visible(&mut self, region: Region, visible: bool) {
        self.entry(region).visible = visible;
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.entry(region).text = text.to_string();
    }

    fn set_value(&mut self, region: Region, value: &str) {
        self.entry(region).value = value.to_string();
    }

    fn replace_children(&mut self, region: Region, children: Vec<Element>) {
        self.entry(region).children = children;
    }

    fn set_toggle_label(&mut self, book_id: u64, label: &'static str) {
        for state in self.regions.values_mut() {
            for element in state.children.iter_mut() {
                if let Element::Book(card) = element {
                    if card.id == book_id && card.toggle_label.is_some() {
                        card.toggle_label = Some(label);
                    }
                }
            }
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
