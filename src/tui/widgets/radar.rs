//! Radar (spider) chart drawn on a braille canvas.

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block,
    },
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Radius of the label ring, relative to the 100% ring.
const LABEL_RADIUS: f64 = 1.18;

/// Grid rings, as fractions of the full radius.
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Unit-circle position of spoke `index` out of `count`, starting at 12
/// o'clock and running clockwise.
#[must_use]
pub fn spoke_direction(index: usize, count: usize) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64;
    (angle.cos(), angle.sin())
}

/// Vertex positions for 0-100 values; out-of-range values are pinned to
/// the chart.
#[must_use]
pub fn radar_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let r = if value.is_finite() {
                value.clamp(0.0, 100.0) / 100.0
            } else {
                0.0
            };
            let (dx, dy) = spoke_direction(i, values.len());
            (dx * r, dy * r)
        })
        .collect()
}

fn closed_edges(points: &[(f64, f64)]) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
    points
        .iter()
        .copied()
        .zip(points.iter().copied().cycle().skip(1))
}

/// Render a radar chart of labelled 0-100 values.
pub fn render_radar(frame: &mut Frame, area: Rect, axes: &[(&'static str, f64)], block: Block) {
    let scheme = colors();
    let values: Vec<f64> = axes.iter().map(|(_, v)| *v).collect();
    let vertices = radar_points(&values);
    let count = axes.len();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-2.0, 2.0])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            for ring in RINGS {
                let ring_points: Vec<(f64, f64)> = (0..count)
                    .map(|i| {
                        let (dx, dy) = spoke_direction(i, count);
                        (dx * ring, dy * ring)
                    })
                    .collect();
                for ((x1, y1), (x2, y2)) in closed_edges(&ring_points) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, scheme.chart_grid));
                }
            }
            for i in 0..count {
                let (dx, dy) = spoke_direction(i, count);
                ctx.draw(&CanvasLine::new(0.0, 0.0, dx, dy, scheme.chart_grid));
            }

            ctx.layer();

            for ((x1, y1), (x2, y2)) in closed_edges(&vertices) {
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, scheme.chart_area));
            }
            for (&(x, y), value) in vertices.iter().zip(&values) {
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color: scheme.value_color(*value),
                });
            }

            for (i, (label, _)) in axes.iter().enumerate() {
                let (dx, dy) = spoke_direction(i, count);
                // Nudge left-hand labels so they end at the spoke.
                let x = if dx < -0.2 {
                    dx * LABEL_RADIUS - 0.045 * label.len() as f64
                } else if dx > 0.2 {
                    dx * LABEL_RADIUS
                } else {
                    dx * LABEL_RADIUS - 0.02 * label.len() as f64
                };
                ctx.print(
                    x,
                    dy * LABEL_RADIUS,
                    Span::styled(*label, Style::default().fg(scheme.text_muted)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_spoke_points_up() {
        let (x, y) = spoke_direction(0, 8);
        assert!(close(x, 0.0) && close(y, 1.0));
        let (x, y) = spoke_direction(2, 8);
        assert!(close(x, 1.0) && close(y, 0.0), "clockwise: ({x}, {y})");
    }

    #[test]
    fn test_radar_points_scale_and_pin() {
        let points = radar_points(&[100.0, 50.0, 250.0, f64::NAN]);
        assert!(close(points[0].1, 1.0));
        let (x, y) = points[1];
        assert!(close(x.hypot(y), 0.5));
        let (x, y) = points[2];
        assert!(close(x.hypot(y), 1.0));
        assert_eq!(points[3], (0.0, 0.0));
    }

    #[test]
    fn test_closed_edges_wraps() {
        let pts = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        let edges: Vec<_> = closed_edges(&pts).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], ((1.0, 1.0), (0.0, 0.0)));
    }

    #[test]
    fn test_render_radar_smoke() {
        use ratatui::{backend::TestBackend, Terminal};
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_radar(
                    frame,
                    area,
                    &[("DSA", 80.0), ("CGPA", 40.0), ("Projects", 60.0)],
                    Block::default(),
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("DSA"));
        assert!(text.contains("CGPA"));
    }
}
