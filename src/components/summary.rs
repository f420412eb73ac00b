use crate::analytics::aggregate::MarketSummary;
use crate::analytics::view::{format_price_per_area, format_thousands};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub summary: MarketSummary,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="data-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Listings"}</h3>
                    <p class="summary-value">{format_thousands(summary.total_inventory as f64)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Average price per m²"}</h3>
                    <p class="summary-value">{format_price_per_area(summary.avg_price_per_area)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Districts"}</h3>
                    <p class="summary-value">{summary.district_count.to_string()}</p>
                </div>
            </div>
        </div>
    }
}
