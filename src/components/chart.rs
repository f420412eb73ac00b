use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line},
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::analytics::view::{ChartSeries, palette_color};
use crate::config::Config;
use crate::utils::debounce::on_resize_settled;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChartKind {
    /// One stacked bar per district, a segment per room category
    StackedBar,
    /// Side-by-side bars per room category
    GroupedBar,
    Line,
}

#[derive(Properties, PartialEq)]
pub struct RoomChartProps {
    /// DOM id of the render target; must be unique on the page
    pub id: AttrValue,
    pub title: AttrValue,
    pub series: ChartSeries,
    pub kind: ChartKind,
    #[prop_or_default]
    pub y_axis_name: AttrValue,
    /// Values are divided by this before plotting (e.g. 1e6 for prices in millions)
    #[prop_or(1.0)]
    pub divisor: f64,
}

/// Renders a district-by-room-category chart.
#[function_component(RoomChart)]
pub fn room_chart(props: &RoomChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let spec = ChartSpec {
            id: props.id.clone(),
            title: props.title.clone(),
            series: props.series.clone(),
            kind: props.kind,
            y_axis_name: props.y_axis_name.clone(),
            divisor: props.divisor,
        };

        use_effect_with((spec, container_ref), |(spec, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                render_chart(&container, spec);

                let spec = spec.clone();
                on_resize_settled(
                    move || render_chart(&container, &spec),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    if props.series.is_empty() {
        return html! {
            <div class="chart-container empty" style={container_style()}>
                <p>{"No data for the selected district"}</p>
            </div>
        };
    }

    html! {
        <div class="chart-container" style={container_style()} ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

/// Inline size for a chart container. The renderer reads the container's
/// client size and skips drawing while either side is zero.
pub fn container_style() -> String {
    format!("width:100%;height:{}px", Config::CHART_HEIGHT_PX)
}

#[derive(Clone, PartialEq)]
struct ChartSpec {
    id: AttrValue,
    title: AttrValue,
    series: ChartSeries,
    kind: ChartKind,
    y_axis_name: AttrValue,
    divisor: f64,
}

fn render_chart(container: &HtmlElement, spec: &ChartSpec) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(spec);
    if let Err(e) = WasmRenderer::new(width, height).render(&spec.id, &chart) {
        gloo::console::error!(format!("Render error in {}: {e:?}", spec.id));
    }
}

fn build_chart(spec: &ChartSpec) -> CharmingChart {
    let (title_color, axis_color, grid_color) = ("#e4e4e7", "#a1a1aa", "#404040");

    let mut chart = CharmingChart::new()
        .title(
            Title::new()
                .text(spec.title.to_string())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().bottom("2%"))
        .color(
            spec.series
                .series
                .iter()
                .map(|s| Color::from(palette_color(s.category.index())))
                .collect(),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(spec.series.labels.clone())
                .axis_label(AxisLabel::new().rotate(30).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(spec.y_axis_name.to_string())
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for room in &spec.series.series {
        let values: Vec<f64> = room.values.iter().map(|v| v / spec.divisor).collect();
        chart = match spec.kind {
            ChartKind::StackedBar => {
                chart.series(Bar::new().name(room.name).stack("rooms").data(values))
            }
            ChartKind::GroupedBar => chart.series(Bar::new().name(room.name).data(values)),
            ChartKind::Line => chart.series(Line::new().name(room.name).data(values)),
        };
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_has_non_zero_size() {
        assert_eq!(container_style(), "width:100%;height:350px");
        assert!(Config::CHART_HEIGHT_PX > 0);
    }
}
