use yew::prelude::*;

use crate::models::filter::FilterSelection;

/// Handle returned by `use_filter` hook
#[derive(Clone, PartialEq)]
pub struct FilterHandle {
    pub selection: FilterSelection,
    pub set_selection: Callback<FilterSelection>,
}

/// Holds the district/room selection for the current page.
/// Updates always replace the whole selection.
#[hook]
pub fn use_filter() -> FilterHandle {
    let selection = use_state(FilterSelection::default);

    let set_selection = {
        let selection = selection.clone();
        Callback::from(move |next: FilterSelection| selection.set(next))
    };

    FilterHandle {
        selection: (*selection).clone(),
        set_selection,
    }
}
