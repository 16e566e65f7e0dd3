use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::system::process::SortMode;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, sort_mode: SortMode, max_bubbles: usize, theme: &Theme) {
    let style = Style::default()
        .fg(theme.header_fg)
        .bg(theme.header_bg)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(Span::styled(
        format!(
            " Process Bubbles - Sorted by {} | Showing: {}",
            sort_mode.label(),
            max_bubbles
        ),
        style,
    ));

    frame.render_widget(Paragraph::new(line).style(style), area);
}
