use crate::api::RiskItem;
use leptos::*;

// Bar chart layout constants (SVG coordinate space within viewBox="0 0 400 220")
pub(crate) const CHART_LEFT: f64 = 40.0;
pub(crate) const CHART_WIDTH: f64 = 350.0;
pub(crate) const CHART_RIGHT: f64 = CHART_LEFT + CHART_WIDTH; // 390
pub(crate) const CHART_BOTTOM: f64 = 170.0;
pub(crate) const CHART_HEIGHT: f64 = 140.0;

// Pie geometry (viewBox="0 0 220 220")
pub(crate) const PIE_CX: f64 = 110.0;
pub(crate) const PIE_CY: f64 = 110.0;
pub(crate) const PIE_R: f64 = 90.0;

/// Horizontal slot for bar `index` of `count`: returns (x, width).
///
/// Bars take 60% of their slot, centered, so any count from one to a dozen
/// lays out without overlap.
pub(crate) fn bar_slot(index: usize, count: usize) -> (f64, f64) {
    let step = CHART_WIDTH / count.max(1) as f64;
    let width = step * 0.6;
    (CHART_LEFT + index as f64 * step + (step - width) / 2.0, width)
}

/// Bar height for a percentage value, clamped to the 0–100 scale.
pub(crate) fn bar_height(value: u8) -> f64 {
    CHART_HEIGHT * f64::from(value.min(100)) / 100.0
}

/// Cumulative (start, end) fractions of the full circle, one pair per risk,
/// proportional to `value`. Empty when the values sum to zero.
pub(crate) fn slice_fractions(risks: &[RiskItem]) -> Vec<(f64, f64)> {
    let total: f64 = risks.iter().map(|r| f64::from(r.value)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    risks
        .iter()
        .map(|risk| {
            let end = start + f64::from(risk.value) / total;
            let pair = (start, end);
            start = end;
            pair
        })
        .collect()
}

/// Point on the pie circumference for a fraction of the circle, measured
/// clockwise from 12 o'clock.
fn point_on_circle(frac: f64) -> (f64, f64) {
    let angle = std::f64::consts::TAU * frac - std::f64::consts::FRAC_PI_2;
    (PIE_CX + PIE_R * angle.cos(), PIE_CY + PIE_R * angle.sin())
}

/// SVG path for one pie slice spanning [start, end] of the circle.
pub(crate) fn pie_slice_path(start: f64, end: f64) -> String {
    // A full-circle arc has coincident endpoints and renders as nothing;
    // back off a hair and accept the hairline gap.
    let end = end.min(start + 0.9999);
    let (sx, sy) = point_on_circle(start);
    let (ex, ey) = point_on_circle(end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {PIE_CX:.2} {PIE_CY:.2} L {sx:.2} {sy:.2} A {PIE_R:.2} {PIE_R:.2} 0 {large_arc} 1 {ex:.2} {ey:.2} Z"
    )
}

/// Bar chart of risk percentages, one bar per category, colored by level.
#[component]
pub fn RiskBarChart(risks: Memo<Vec<RiskItem>>) -> impl IntoView {
    view! {
        <div class="chart">
            <svg
                viewBox="0 0 400 220"
                class="risk-chart"
                role="img"
                aria-label="Bar chart of risk percentages by category"
            >
                // Percent gridlines
                <text x="5" y="34" class="axis-label">"100%"</text>
                <text x="5" y="104" class="axis-label">"50%"</text>
                <text x="5" y="174" class="axis-label">"0%"</text>
                <line x1=CHART_LEFT y1="30" x2=CHART_RIGHT y2="30" class="grid-line"/>
                <line x1=CHART_LEFT y1="100" x2=CHART_RIGHT y2="100" class="grid-line"/>
                <line x1=CHART_LEFT y1=CHART_BOTTOM x2=CHART_RIGHT y2=CHART_BOTTOM class="grid-line baseline"/>

                {move || {
                    let items = risks.get();
                    let count = items.len();
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(i, risk)| {
                            let (x, width) = bar_slot(i, count);
                            let height = bar_height(risk.value);
                            let y = CHART_BOTTOM - height;
                            let center = x + width / 2.0;
                            let value_y = y - 6.0;
                            let label_y = CHART_BOTTOM + 18.0;
                            view! {
                                <rect
                                    x=x
                                    y=y
                                    width=width
                                    height=height
                                    rx="4"
                                    class=format!("bar-fill {}", risk.level.css_class())
                                />
                                <text x=center y=value_y text-anchor="middle" class="bar-value">
                                    {format!("{}%", risk.value)}
                                </text>
                                <text x=center y=label_y text-anchor="middle" class="bar-label">
                                    {risk.name}
                                </text>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}

/// Pie chart of the risk distribution, slices proportional to value,
/// legend below.
#[component]
pub fn RiskPieChart(risks: Memo<Vec<RiskItem>>) -> impl IntoView {
    view! {
        <div class="chart pie-wrap">
            <svg
                viewBox="0 0 220 220"
                class="risk-chart pie"
                role="img"
                aria-label="Pie chart of risk distribution"
            >
                {move || {
                    let items = risks.get();
                    let fractions = slice_fractions(&items);
                    items
                        .into_iter()
                        .zip(fractions)
                        .map(|(risk, (start, end))| view! {
                            <path
                                d=pie_slice_path(start, end)
                                class=format!("pie-slice {}", risk.level.css_class())
                            />
                        })
                        .collect_view()
                }}
            </svg>
            <div class="chart-legend">
                {move || {
                    risks
                        .get()
                        .into_iter()
                        .map(|risk| view! {
                            <span class=format!("legend-item {}", risk.level.css_class())>
                                {format!("{}: {}%", risk.name, risk.value)}
                            </span>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RiskLevel;

    fn risk(name: &str, value: u8) -> RiskItem {
        RiskItem {
            name: name.into(),
            value,
            level: RiskLevel::Medium,
        }
    }

    #[test]
    fn bar_height_scales_and_clamps() {
        assert_eq!(bar_height(0), 0.0);
        assert_eq!(bar_height(50), CHART_HEIGHT / 2.0);
        assert_eq!(bar_height(100), CHART_HEIGHT);
        // Out-of-contract values cannot poke above the chart.
        assert_eq!(bar_height(250), CHART_HEIGHT);
    }

    #[test]
    fn bars_stay_inside_the_plot_and_do_not_overlap() {
        let count = 5;
        let mut prev_right = CHART_LEFT;
        for i in 0..count {
            let (x, width) = bar_slot(i, count);
            assert!(width > 0.0);
            assert!(x >= prev_right - 1e-9, "bar {i} overlaps its neighbor");
            assert!(x + width <= CHART_RIGHT + 1e-9);
            prev_right = x + width;
        }
    }

    #[test]
    fn single_bar_is_centered() {
        let (x, width) = bar_slot(0, 1);
        let center = x + width / 2.0;
        assert!((center - (CHART_LEFT + CHART_WIDTH / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn slice_fractions_are_contiguous_and_cover_the_circle() {
        let risks = vec![risk("Flood", 20), risk("Heat", 30), risk("Wind", 50)];
        let fractions = slice_fractions(&risks);
        assert_eq!(fractions.len(), 3);
        assert_eq!(fractions[0].0, 0.0);
        for window in fractions.windows(2) {
            assert!((window[0].1 - window[1].0).abs() < 1e-12, "slices must be contiguous");
        }
        assert!((fractions.last().unwrap().1 - 1.0).abs() < 1e-12);
        // 20/100 of the circle for the first slice.
        assert!((fractions[0].1 - 0.2).abs() < 1e-12);
    }

    #[test]
    fn zero_total_yields_no_slices() {
        let risks = vec![risk("Flood", 0), risk("Heat", 0)];
        assert!(slice_fractions(&risks).is_empty());
    }

    #[test]
    fn pie_path_picks_the_large_arc_flag_past_half() {
        let minor = pie_slice_path(0.0, 0.25);
        let major = pie_slice_path(0.0, 0.75);
        assert!(minor.contains(" 0 0 1 "), "quarter slice uses the small arc: {minor}");
        assert!(major.contains(" 0 1 1 "), "three-quarter slice uses the large arc: {major}");
    }

    #[test]
    fn pie_path_starts_at_the_center() {
        let path = pie_slice_path(0.0, 0.5);
        assert!(path.starts_with(&format!("M {PIE_CX:.2} {PIE_CY:.2} ")));
        assert!(path.ends_with('Z'));
    }
}
