use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, total_processes: usize, theme: &Theme) {
    let line = Line::from(Span::styled(
        format!(
            "Total: {total_processes} | [c]PU [m]emory [t]hreads | +/- adjust count | [q]uit"
        ),
        Style::default().fg(theme.footer_fg),
    ));

    frame.render_widget(Paragraph::new(line), area);
}
