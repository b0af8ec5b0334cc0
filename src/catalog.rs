//! Stateless catalog filtering and search.
//!
//! Kept as a pure projection with no fields, in the same spirit as
//! [`crate::bracket::BracketProjection`].

use crate::model::{NameId, NameItem};

/// Visibility filter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityFilter {
    /// Only items with `is_hidden == false`.
    Visible,
    /// Only items with `is_hidden == true`.
    Hidden,
    /// Both — requires `admin_scope`.
    All,
}

/// Selection filter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFilter {
    /// No constraint on selection membership.
    All,
    /// Only items in the selection set.
    Selected,
    /// Only items not in the selection set.
    Unselected,
}

/// Filter configuration for one [`CatalogView::project`] call.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Visibility subset to include.
    pub visibility: VisibilityFilter,
    /// Selection subset to include.
    pub selection: SelectionFilter,
    /// When true, equivalent to `selection = Selected`.
    pub show_selected_only: bool,
    /// Case-insensitive substring over `name` + `description`. Empty means
    /// no constraint.
    pub search: String,
    /// When false, `visibility` is coerced to `Visible` regardless of the
    /// requested value.
    pub admin_scope: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            visibility: VisibilityFilter::Visible,
            selection: SelectionFilter::All,
            show_selected_only: false,
            search: String::new(),
            admin_scope: false,
        }
    }
}

/// Stateless projection of a catalog through visibility, selection, and
/// search filters. Holds no state and performs no I/O.
pub struct CatalogView;

impl CatalogView {
    /// Filter `catalog` according to `config` and `selected`, preserving
    /// the catalog's natural (caller-supplied) order.
    pub fn project(
        catalog: &[NameItem],
        config: &FilterConfig,
        selected: &[NameId],
    ) -> Vec<NameItem> {
        let visibility = if config.admin_scope {
            config.visibility
        } else {
            VisibilityFilter::Visible
        };

        let selection = if config.show_selected_only {
            SelectionFilter::Selected
        } else {
            config.selection
        };

        let search = config.search.to_lowercase();

        catalog
            .iter()
            .filter(|item| match visibility {
                VisibilityFilter::Visible => !item.is_hidden,
                VisibilityFilter::Hidden => item.is_hidden,
                VisibilityFilter::All => true,
            })
            .filter(|item| {
                let is_selected = selected.iter().any(|id| id == &item.id);
                match selection {
                    SelectionFilter::All => true,
                    SelectionFilter::Selected => is_selected,
                    SelectionFilter::Unselected => !is_selected,
                }
            })
            .filter(|item| {
                if search.is_empty() {
                    return true;
                }
                let haystack = format!(
                    "{} {}",
                    item.name,
                    item.description.as_deref().unwrap_or("")
                )
                .to_lowercase();
                haystack.contains(&search)
            })
            .cloned()
            .collect()
    }
}
