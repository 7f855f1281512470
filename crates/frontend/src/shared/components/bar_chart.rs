//! SVG bar chart. The geometry is computed by [`BarChart::layout`] so it can
//! be checked without a DOM.

use leptos::prelude::*;

const PLOT_TOP: f64 = 16.0;
const PLOT_BOTTOM_GAP: f64 = 56.0;
const PLOT_LEFT: f64 = 56.0;
const PLOT_RIGHT_GAP: f64 = 12.0;
const BAR_GAP_RATIO: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub series_label: String,
    pub color: String,
    pub bars: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarChart {
    pub fn new(title: impl Into<String>, series_label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series_label: series_label.into(),
            color: color.into(),
            bars: Vec::new(),
        }
    }

    pub fn with_bars(mut self, bars: Vec<(String, f64)>) -> Self {
        self.bars = bars;
        self
    }

    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Bars scaled into a `width` x `height` viewport. Negative or
    /// non-finite values get zero height.
    pub fn layout(&self, width: f64, height: f64) -> Vec<BarGeometry> {
        if self.bars.is_empty() {
            return Vec::new();
        }
        let plot_w = (width - PLOT_LEFT - PLOT_RIGHT_GAP).max(1.0);
        let plot_h = (height - PLOT_TOP - PLOT_BOTTOM_GAP).max(1.0);
        let baseline = PLOT_TOP + plot_h;
        let max = self.max_value();

        let slot = plot_w / self.bars.len() as f64;
        let bar_w = slot * (1.0 - BAR_GAP_RATIO);

        self.bars
            .iter()
            .enumerate()
            .map(|(idx, (label, value))| {
                let ratio = if max > 0.0 && value.is_finite() && *value > 0.0 {
                    value / max
                } else {
                    0.0
                };
                let h = plot_h * ratio;
                BarGeometry {
                    label: label.clone(),
                    value: *value,
                    x: PLOT_LEFT + slot * idx as f64 + (slot - bar_w) / 2.0,
                    y: baseline - h,
                    width: bar_w,
                    height: h,
                }
            })
            .collect()
    }
}

fn short_label(label: &str) -> String {
    const MAX: usize = 12;
    if label.chars().count() <= MAX {
        label.to_string()
    } else {
        let cut: String = label.chars().take(MAX - 1).collect();
        format!("{}…", cut)
    }
}

#[component]
pub fn BarChartView(
    #[prop(into)] chart: Signal<BarChart>,
    #[prop(default = 640.0)] width: f64,
    #[prop(default = 320.0)] height: f64,
) -> impl IntoView {
    let baseline = height - PLOT_BOTTOM_GAP;

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{move || chart.with(|c| c.title.clone())}</h3>
            <svg
                class="bar-chart"
                viewBox=format!("0 0 {} {}", width, height)
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                <line
                    x1=PLOT_LEFT y1=baseline
                    x2=width - PLOT_RIGHT_GAP y2=baseline
                    stroke="#999" stroke-width="1"
                />
                <text x=4.0 y=PLOT_TOP + 4.0 font-size="10" fill="#666">
                    {move || chart.with(|c| format!("{:.0}", c.max_value()))}
                </text>
                {move || {
                    let c = chart.get();
                    let color = c.color.clone();
                    let series = c.series_label.clone();
                    c.layout(width, height)
                        .into_iter()
                        .map(|bar| {
                            let label_x = bar.x + bar.width / 2.0;
                            let tooltip = format!("{}: {} {:.2}", bar.label, series, bar.value);
                            view! {
                                <g>
                                    <rect
                                        x=bar.x y=bar.y
                                        width=bar.width height=bar.height
                                        fill=color.clone()
                                    >
                                        <title>{tooltip}</title>
                                    </rect>
                                    <text
                                        x=label_x y=baseline + 14.0
                                        font-size="10" fill="#444" text-anchor="middle"
                                    >
                                        {short_label(&bar.label)}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}
