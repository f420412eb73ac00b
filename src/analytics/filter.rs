use crate::models::{
    filter::{DistrictSelector, FilterSelection},
    market::Districted,
};

/// Restricts a table to the selected district.
///
/// Rows are borrowed, never copied or mutated. `All` keeps every row in its
/// original order; an unknown district yields an empty view. The room part of
/// the selection does not remove rows, it only decides which columns a view
/// surfaces later on.
pub fn filter_rows<'a, T: Districted>(rows: &'a [T], selection: &FilterSelection) -> Vec<&'a T> {
    match &selection.district {
        DistrictSelector::All => rows.iter().collect(),
        DistrictSelector::District(name) => rows
            .iter()
            .filter(|r| r.district() == name.as_str())
            .collect(),
    }
}
