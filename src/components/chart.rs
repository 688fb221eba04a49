//! Inline SVG pie chart for a post's sentiment breakdown.

use std::f64::consts::{PI, TAU};

use maud::{html, Markup, Render};

use crate::posts::SentimentBreakdown;

const SIZE: f64 = 220.0;
const CENTER: f64 = SIZE / 2.0;
const OUTER_RADIUS: f64 = 80.0;
const LABEL_RADIUS: f64 = OUTER_RADIUS + 16.0;

pub const POSITIVE_COLOR: &str = "#4ade80";
pub const NEUTRAL_COLOR: &str = "#facc15";
pub const NEGATIVE_COLOR: &str = "#f87171";

/// One slice of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slice {
    label: &'static str,
    value: f64,
    color: &'static str,
}

impl Slice {
    /// Value used for geometry. Negative magnitudes take no space.
    fn weight(&self) -> f64 {
        self.value.max(0.0)
    }
}

/// Three-slice sentiment pie chart with a legend.
#[derive(Debug, Clone, Copy)]
pub struct SentimentChart {
    slices: [Slice; 3],
}

impl SentimentChart {
    #[must_use]
    pub const fn new(breakdown: SentimentBreakdown) -> Self {
        Self {
            slices: [
                Slice {
                    label: "Positive",
                    value: breakdown.positive,
                    color: POSITIVE_COLOR,
                },
                Slice {
                    label: "Neutral",
                    value: breakdown.neutral,
                    color: NEUTRAL_COLOR,
                },
                Slice {
                    label: "Negative",
                    value: breakdown.negative,
                    color: NEGATIVE_COLOR,
                },
            ],
        }
    }

    fn total(&self) -> f64 {
        self.slices.iter().map(Slice::weight).sum()
    }

    /// Share of the chart taken by each slice, in percent.
    #[must_use]
    pub fn percentages(&self) -> [f64; 3] {
        let total = self.total();
        self.slices.map(|s| {
            if total > 0.0 {
                s.weight() / total * 100.0
            } else {
                0.0
            }
        })
    }

    fn render_pie(&self) -> Markup {
        let total = self.total();
        if total <= 0.0 {
            return html! {
                circle class="chart-empty" cx=(CENTER) cy=(CENTER) r=(OUTER_RADIUS)
                    fill="none" stroke="#d4d4d8" stroke-width="2" {}
            };
        }

        let mut start = 0.0;
        let mut arcs = Vec::with_capacity(self.slices.len());
        for (slice, percent) in self.slices.iter().zip(self.percentages()) {
            if slice.weight() <= 0.0 {
                continue;
            }
            let sweep = slice.weight() / total * TAU;
            arcs.push((slice, percent, start, sweep));
            start += sweep;
        }

        html! {
            @for (slice, percent, start, sweep) in arcs {
                @let (lx, ly) = point(LABEL_RADIUS, start + sweep / 2.0);
                g class="chart-slice" data-label=(slice.label)
                    data-value=(format_value(slice.value))
                    data-percent=(format!("{percent:.1}")) {
                    title { (slice.label) ": " (format_value(slice.value)) }
                    @if sweep >= TAU {
                        circle cx=(CENTER) cy=(CENTER) r=(OUTER_RADIUS) fill=(slice.color) {}
                    } @else {
                        path d=(arc_path(start, start + sweep)) fill=(slice.color) {}
                    }
                    text x=(format!("{lx:.2}")) y=(format!("{ly:.2}"))
                        text-anchor="middle" dominant-baseline="middle"
                        font-size="12" fill=(slice.color) {
                        (format_value(slice.value))
                    }
                }
            }
        }
    }

    fn render_legend() -> Markup {
        // Legend lists negative first.
        let entries = [
            ("Negative", "text-red-400", "bg-red-400"),
            ("Neutral", "text-yellow-400", "bg-yellow-400"),
            ("Positive", "text-green-400", "bg-green-400"),
        ];
        html! {
            div class="chart-legend" {
                @for (label, text_class, swatch_class) in entries {
                    div class={ "legend-item " (text_class) } {
                        span class={ "legend-swatch " (swatch_class) } {}
                        (label)
                    }
                }
            }
        }
    }
}

impl Render for SentimentChart {
    fn render(&self) -> Markup {
        html! {
            div class="sentiment-chart" {
                svg xmlns="http://www.w3.org/2000/svg"
                    width=(SIZE) height=(SIZE)
                    viewBox=(format!("0 0 {SIZE} {SIZE}"))
                    role="img" aria-label="Sentiment breakdown" {
                    (self.render_pie())
                }
                (Self::render_legend())
            }
        }
    }
}

/// Point on a circle around the chart center. Angles run clockwise from
/// twelve o'clock.
fn point(radius: f64, angle: f64) -> (f64, f64) {
    (
        CENTER + radius * angle.sin(),
        CENTER - radius * angle.cos(),
    )
}

fn arc_path(start: f64, end: f64) -> String {
    let (x0, y0) = point(OUTER_RADIUS, start);
    let (x1, y1) = point(OUTER_RADIUS, end);
    let large_arc = u8::from(end - start > PI);

    format!(
        "M {CENTER} {CENTER} L {x0:.2} {y0:.2} A {OUTER_RADIUS} {OUTER_RADIUS} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

/// Whole numbers without a trailing `.0`, everything else to one decimal.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(positive: f64, neutral: f64, negative: f64) -> SentimentBreakdown {
        SentimentBreakdown {
            positive,
            neutral,
            negative,
        }
    }

    #[test]
    fn test_percentages_proportional() {
        let chart = SentimentChart::new(breakdown(7.0, 2.0, 1.0));
        let [p, n, g] = chart.percentages();

        assert!((p - 70.0).abs() < 1e-9);
        assert!((n - 20.0).abs() < 1e-9);
        assert!((g - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_has_three_slices_and_colors() {
        let html = SentimentChart::new(breakdown(70.0, 20.0, 10.0))
            .render()
            .into_string();

        assert_eq!(html.matches(r#"class="chart-slice""#).count(), 3);
        assert!(html.contains(r##"fill="#4ade80""##));
        assert!(html.contains(r##"fill="#facc15""##));
        assert!(html.contains(r##"fill="#f87171""##));
        assert!(html.contains(r#"data-label="Positive" data-value="70" data-percent="70.0""#));
        assert!(html.contains(r#"data-label="Neutral" data-value="20" data-percent="20.0""#));
        assert!(html.contains(r#"data-label="Negative" data-value="10" data-percent="10.0""#));
    }

    #[test]
    fn test_legend_order() {
        let html = SentimentChart::new(breakdown(1.0, 1.0, 1.0))
            .render()
            .into_string();

        let negative = html.find(">Negative</div>").unwrap();
        let neutral = html.find(">Neutral</div>").unwrap();
        let positive = html.find(">Positive</div>").unwrap();
        assert!(negative < neutral && neutral < positive);
    }

    #[test]
    fn test_zero_total_renders_empty_ring() {
        let html = SentimentChart::new(breakdown(0.0, 0.0, 0.0))
            .render()
            .into_string();

        assert!(html.contains("chart-empty"));
        assert!(!html.contains("chart-slice"));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let html = SentimentChart::new(breakdown(0.0, 5.0, 0.0))
            .render()
            .into_string();

        assert_eq!(html.matches(r#"class="chart-slice""#).count(), 1);
        assert!(html.contains(r##"<circle cx="110" cy="110" r="80" fill="#facc15">"##));
        assert!(!html.contains("<path"));
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(arc_path(0.0, PI * 1.5).contains(" 0 1 1 "));
        assert!(arc_path(0.0, PI * 0.5).contains(" 0 0 1 "));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(70.0), "70");
        assert_eq!(format_value(33.333), "33.3");
        assert_eq!(format_value(-2.0), "-2");
    }
}
