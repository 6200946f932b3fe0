use yew::prelude::*;

/// A single plotted point. `label` feeds the x axis and the hover tooltip.
#[derive(Clone, PartialEq, Debug)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub points: Vec<ChartPoint>,
    #[prop_or_else(|| AttrValue::from("#a78bfa"))]
    pub stroke: AttrValue,
    #[prop_or_else(|| AttrValue::from("Time (s)"))]
    pub y_label: AttrValue,
    #[prop_or(640)]
    pub width: u32,
    #[prop_or(300)]
    pub height: u32,
}

const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// SVG line chart scaled from zero to the series maximum, with light
/// gridlines and a native tooltip per point.
#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    if props.points.is_empty() {
        return html! {
            <div class={classes!("text-center", "text-gray-400", "py-8")}>
                {"No data to plot"}
            </div>
        };
    }

    let width = props.width as f64;
    let height = props.height as f64;
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;

    let max_value = props
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0, f64::max)
        .max(1.0);

    let n = props.points.len();
    let x_at = |i: usize| {
        if n == 1 {
            MARGIN_LEFT + plot_w / 2.0
        } else {
            MARGIN_LEFT + (i as f64 / (n - 1) as f64) * plot_w
        }
    };
    let y_at = |value: f64| MARGIN_TOP + (1.0 - value / max_value) * plot_h;

    let path = props
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let prefix = if i == 0 { "M" } else { "L" };
            format!("{} {:.1},{:.1}", prefix, x_at(i), y_at(p.value))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let gridlines = (0..=4).map(|step| {
        let value = max_value * step as f64 / 4.0;
        let y = y_at(value);
        html! {
            <g>
                <line
                    x1={MARGIN_LEFT.to_string()}
                    y1={y.to_string()}
                    x2={(width - MARGIN_RIGHT).to_string()}
                    y2={y.to_string()}
                    stroke="#ffffff33"
                    stroke-dasharray="3 3"
                />
                <text
                    x={(MARGIN_LEFT - 6.0).to_string()}
                    y={(y + 4.0).to_string()}
                    text-anchor="end"
                    font-size="10"
                    fill="currentColor"
                >
                    {format!("{:.0}", value)}
                </text>
            </g>
        }
    });

    // Thin out x labels once they would start overlapping.
    let label_stride = (n + 9) / 10;
    let x_labels = props.points.iter().enumerate().filter_map(|(i, p)| {
        if i % label_stride != 0 && i != n - 1 {
            return None;
        }
        Some(html! {
            <text
                x={x_at(i).to_string()}
                y={(height - MARGIN_BOTTOM + 16.0).to_string()}
                text-anchor="middle"
                font-size="10"
                fill="currentColor"
            >
                {p.label.clone()}
            </text>
        })
    });

    let dots = props.points.iter().enumerate().map(|(i, p)| {
        html! {
            <circle
                cx={x_at(i).to_string()}
                cy={y_at(p.value).to_string()}
                r="3"
                fill={props.stroke.clone()}
            >
                <title>{format!("{}: {:.0}", p.label, p.value)}</title>
            </circle>
        }
    });

    html! {
        <svg
            width="100%"
            height={props.height.to_string()}
            viewBox={format!("0 0 {} {}", props.width, props.height)}
            role="img"
        >
            { for gridlines }
            <text
                x="14"
                y={(height / 2.0).to_string()}
                text-anchor="middle"
                font-size="11"
                fill="currentColor"
                transform={format!("rotate(-90, 14, {})", height / 2.0)}
            >
                {props.y_label.clone()}
            </text>
            <path d={path} fill="none" stroke={props.stroke.clone()} stroke-width="2" />
            { for dots }
            { for x_labels }
        </svg>
    }
}
