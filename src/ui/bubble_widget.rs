use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::bubbles::bubble::Bubble;
use crate::format::{format_metric, truncate_name};
use crate::system::process::SortMode;
use crate::ui::theme::Theme;

const OUTLINE_GLYPH: char = '\u{25CB}'; // ○
const OUTLINE_ANGLE_STEP: f64 = 0.1;
const NAME_MAX_CHARS: usize = 12;

/// Rasterizes packed bubbles onto the frame buffer: circle outlines in the
/// bucket color, then a centered name+metric label per bubble. Every write
/// is bounds-checked, so off-canvas geometry is simply invisible and
/// rendering cannot fail. Draw order is rank order; labels may legally run
/// over a neighbor's outline.
pub struct BubbleWidget<'a> {
    bubbles: &'a [Bubble<'a>],
    mode: SortMode,
    theme: &'a Theme,
}

impl<'a> BubbleWidget<'a> {
    pub fn new(bubbles: &'a [Bubble<'a>], mode: SortMode, theme: &'a Theme) -> Self {
        Self {
            bubbles,
            mode,
            theme,
        }
    }
}

impl Widget for BubbleWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for bubble in self.bubbles {
            draw_outline(buf, area, bubble, self.theme);
            draw_label(buf, area, bubble, self.mode, self.theme);
        }
    }
}

fn draw_outline(buf: &mut Buffer, area: Rect, bubble: &Bubble<'_>, theme: &Theme) {
    let style = Style::default().fg(theme.bucket_color(bubble.bucket));

    // Dense enough angular stepping that adjacent cells may be hit twice;
    // overwriting is harmless since the color is bubble-invariant.
    let mut angle = 0.0_f64;
    while angle < std::f64::consts::TAU {
        let x = bubble.x as f64 + bubble.radius * angle.cos();
        let y = bubble.y as f64 + bubble.radius * angle.sin();
        set_cell(buf, area, x.round() as i32, y.round() as i32, OUTLINE_GLYPH, style);
        angle += OUTLINE_ANGLE_STEP;
    }
}

fn draw_label(buf: &mut Buffer, area: Rect, bubble: &Bubble<'_>, mode: SortMode, theme: &Theme) {
    let style = Style::default().fg(theme.bucket_color(bubble.bucket));
    let label = format!(
        "{} {}",
        truncate_name(&bubble.sample.name, NAME_MAX_CHARS),
        format_metric(bubble.value, mode)
    );

    let mut col = bubble.x - (label.width() / 2) as i32;
    for ch in label.chars() {
        set_cell(buf, area, col, bubble.y, ch, style);
        col += ch.width().unwrap_or(0) as i32;
    }
}

fn set_cell(buf: &mut Buffer, area: Rect, x: i32, y: i32, ch: char, style: Style) {
    if x < 0 || y < 0 || x >= area.width as i32 || y >= area.height as i32 {
        return;
    }
    let pos = (area.x + x as u16, area.y + y as u16);
    if let Some(cell) = buf.cell_mut(pos) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}
