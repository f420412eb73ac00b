use crate::analytics::view::TableRow;
use crate::models::room::RoomCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DistrictTableProps {
    pub rows: Vec<TableRow>,
}

#[function_component(DistrictTable)]
pub fn district_table(props: &DistrictTableProps) -> Html {
    html! {
        <table class="district-table">
            <thead>
                <tr>
                    <th>{"District"}</th>
                    <th>{"Listings"}</th>
                    <th>{"Price per m²"}</th>
                    { for RoomCategory::all().iter().map(|c| html! { <th>{c.label()}</th> }) }
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().enumerate().map(|(i, row)| html! {
                    <tr key={row_key(i, row)}>
                        <td class="district-name">{&row.district}</td>
                        <td>{&row.total}</td>
                        <td>{&row.price_per_area}</td>
                        { for row.counts.iter().map(|(_, count)| html! { <td>{count.to_string()}</td> }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

/// Districts may repeat in the source table, so the position is part of the key.
fn row_key(index: usize, row: &TableRow) -> String {
    format!("{index}-{}", row.district)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::ByRoom;
    use std::collections::HashSet;

    fn row(district: &str) -> TableRow {
        TableRow {
            district: district.to_string(),
            total: "0".to_string(),
            price_per_area: "—".to_string(),
            counts: ByRoom::default(),
        }
    }

    #[test]
    fn test_row_keys_unique_for_repeated_districts() {
        let rows = vec![row("A"), row("A"), row("B")];
        let keys: HashSet<String> = rows.iter().enumerate().map(|(i, r)| row_key(i, r)).collect();
        assert_eq!(keys.len(), 3);
    }
}
