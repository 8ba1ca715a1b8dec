//! Percentage bar widget.

use crate::reports::filled_cells;
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

const VALUE_WIDTH: usize = 7;

/// A one-line labelled bar for a 0-100 value, coloured by its band.
pub struct HorizontalBar {
    label: String,
    value: f64,
    color: Color,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: colors().value_color(value),
        }
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let label_width = 15.min(area.width as usize / 3);
        let bar_width = (area.width as usize).saturating_sub(label_width + VALUE_WIDTH + 2);

        let y = area.y;
        let right = area.x + area.width;
        let mut x = area.x;

        let label: String = format!("{:width$}", self.label, width = label_width)
            .chars()
            .take(label_width)
            .collect();
        for ch in label.chars() {
            if x < right {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(Style::default().fg(colors().text));
                }
                x += 1;
            }
        }

        x += 1;

        let filled = filled_cells(self.value, bar_width);
        for i in 0..bar_width {
            if x < right {
                let (ch, style) = if i < filled {
                    ('█', Style::default().fg(self.color))
                } else {
                    ('░', Style::default().fg(colors().muted))
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(style);
                }
                x += 1;
            }
        }

        x += 1;

        let text = format!("{:>5.1}%", self.value);
        for ch in text.chars() {
            if x < right {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch)
                        .set_style(Style::default().fg(self.color).bold());
                }
                x += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_bar_renders_label_and_value() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("DSA", 50.0).render(area, &mut buf);
        let line = row(&buf, 0);
        assert!(line.starts_with("DSA"));
        assert!(line.contains('█'));
        assert!(line.contains('░'));
        assert!(line.trim_end().ends_with("50.0%"));
    }

    #[test]
    fn test_bar_too_narrow_is_blank() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("DSA", 50.0).render(area, &mut buf);
        assert_eq!(row(&buf, 0).trim(), "");
    }

    #[test]
    fn test_bar_uses_band_color() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("CGPA", 30.0).render(area, &mut buf);

        let filled = (0..area.width)
            .find(|&x| buf[(x, 0)].symbol() == "█")
            .unwrap();
        assert_eq!(buf[(filled, 0)].fg, colors().weak);
        let last = area.width - 1;
        assert_eq!(buf[(last, 0)].symbol(), "%");
        assert_eq!(buf[(last, 0)].fg, colors().weak);
    }
}
