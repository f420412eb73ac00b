use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::{
    filter::{ALL, DistrictSelector, FilterSelection, RoomSelector},
    room::RoomCategory,
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub districts: Vec<AttrValue>,
    pub selection: FilterSelection,
    /// Receives the complete new selection, never a single field
    pub on_change: Callback<FilterSelection>,
}

/// District and room-count selectors
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_district = {
        let callback = props.on_change.clone();
        let selection = props.selection.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(selection.with_district(DistrictSelector::from_value(&target.value())));
        })
    };

    let on_room = {
        let callback = props.on_change.clone();
        let selection = props.selection.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(selection.with_room(RoomSelector::from_value(&target.value())));
        })
    };

    let selected_district = props.selection.district.value();
    let selected_room = props.selection.room.value();

    html! {
        <div class="filter-bar">
            <select
                class="district-selector"
                onchange={on_district}
                aria-label="Select district"
                title="Select district"
            >
                <option value={ALL} selected={selected_district == ALL}>{"All districts"}</option>
                {
                    props.districts.iter().map(|d| {
                        let selected = d.as_str() == selected_district;
                        html! {
                            <option value={d.clone()} {selected}>{d.to_string()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>

            <select
                class="room-selector"
                onchange={on_room}
                aria-label="Select room count"
                title="Select room count"
            >
                <option value={ALL} selected={selected_room == ALL}>{"All room counts"}</option>
                {
                    RoomCategory::all().iter().map(|c| {
                        let selected = c.code() == selected_room;
                        html! {
                            <option value={c.code()} {selected}>{c.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}
