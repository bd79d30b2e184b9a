//! Categories

use tracing::debug;

use crate::session::Notice;

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable category id (e.g. `fruits`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Icon identifier (e.g. `Apple`), resolved to a glyph by the UI
    pub icon: String,

    /// Category image
    pub image_url: String,
}

/// The single, nullable category filter selected by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: Option<String>,
}

impl CategorySelection {
    /// Current selection, `None` meaning "all products".
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `category_id` is the selected category.
    pub fn is_selected(&self, category_id: &str) -> bool {
        self.selected.as_deref() == Some(category_id)
    }

    /// Select `category_id`, or clear the selection when it is already
    /// selected.
    ///
    /// Returns a notice when a new category became selected.
    pub fn toggle(&mut self, category_id: &str) -> Option<Notice> {
        if self.is_selected(category_id) {
            debug!(category_id, "category filter cleared");

            self.selected = None;

            return None;
        }

        debug!(category_id, "category filter selected");

        self.selected = Some(category_id.to_string());

        Some(Notice::info(
            "Category Selected",
            "Browsing products in selected category",
        ))
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
