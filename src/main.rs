use yew::prelude::*;

use realty_dashboard::analytics::view::DashboardView;
use realty_dashboard::components::{
    ChartKind, DistrictTable, FilterBar, RoomChart, ShareChart, status::Status, summary::Summary,
};
use realty_dashboard::hooks::{use_filter::use_filter, use_market::use_market_data};
use realty_dashboard::services::api::ApiConfig;

#[function_component(App)]
fn app() -> Html {
    let market = use_market_data(ApiConfig::default());
    let filter = use_filter();

    let data = market.state.data.clone();
    let load = market.state.load.clone();
    let view = use_memo((data.clone(), filter.selection.clone()), |(data, selection)| {
        DashboardView::build(data, selection)
    });
    let districts: Vec<AttrValue> = data
        .districts()
        .into_iter()
        .map(|d| AttrValue::from(d.to_string()))
        .collect();

    let has_loaded_once = load.loaded_at().is_some() || !data.inventory.is_empty();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Real Estate Market"}</h1>
            </header>

            <main class="app-main">
                <section class="status-section">
                    <Status state={load.clone()} on_retry={market.refresh.clone()} />
                </section>

                if has_loaded_once && data.is_empty() {
                    <section class="empty-section">
                        <h2>{"No data"}</h2>
                        <p>{"The data service returned no listings to display."}</p>
                    </section>
                } else if has_loaded_once {
                    <section class="data-section">
                        <Summary summary={view.summary.clone()} />
                    </section>

                    <section class="filter-section">
                        <FilterBar
                            {districts}
                            selection={filter.selection.clone()}
                            on_change={filter.set_selection.clone()}
                        />
                    </section>

                    <section class="chart-section">
                        <RoomChart
                            id="inventory-chart"
                            title="Listings by district"
                            series={view.inventory.clone()}
                            kind={ChartKind::StackedBar}
                        />
                        <RoomChart
                            id="price-per-area-chart"
                            title="Price per m²"
                            series={view.price_per_area.clone()}
                            kind={ChartKind::Line}
                            y_axis_name="₴/m²"
                        />
                        <ShareChart slices={view.share.clone()} />
                        <RoomChart
                            id="unit-price-chart"
                            title="Average unit price"
                            series={view.unit_price.clone()}
                            kind={ChartKind::GroupedBar}
                            y_axis_name="М ₴"
                            divisor={1_000_000.0}
                        />
                    </section>

                    <section class="table-section">
                        <h2>{"District breakdown"}</h2>
                        <DistrictTable rows={view.table.clone()} />
                    </section>
                }
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
