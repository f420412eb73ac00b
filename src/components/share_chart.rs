use charming::{
    Chart as CharmingChart,
    component::Title,
    element::{Color, TextStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Pie,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::chart::container_style;
use crate::analytics::view::{ShareSlice, palette_color};
use crate::config::Config;
use crate::utils::debounce::on_resize_settled;

const CHART_ID: &str = "share-chart";

#[derive(Properties, PartialEq)]
pub struct ShareChartProps {
    pub slices: Vec<ShareSlice>,
}

/// Pie of inventory share per district.
#[function_component(ShareChart)]
pub fn share_chart(props: &ShareChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (props.slices.clone(), container_ref),
            |(slices, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, slices);

                    let slices = slices.clone();
                    on_resize_settled(
                        move || render_chart(&container, &slices),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" style={container_style()} ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, slices: &[ShareSlice]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || slices.is_empty() {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &build_chart(slices)) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(slices: &[ShareSlice]) -> CharmingChart {
    let labels: Vec<String> = slices
        .iter()
        .map(|s| format!("{} {}%", s.label, s.percent))
        .collect();
    let data: Vec<(f64, &str)> = slices
        .iter()
        .zip(&labels)
        .map(|(s, label)| (s.value as f64, label.as_str()))
        .collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Share of listings")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#e4e4e7")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .color(
            slices
                .iter()
                .map(|s| Color::from(palette_color(s.color_index)))
                .collect(),
        )
        .series(Pie::new().name("Listings").data(data))
}
