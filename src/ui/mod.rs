pub mod bubble_widget;
pub mod header;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::bubbles::pack::pack;
use crate::ui::bubble_widget::BubbleWidget;

pub fn draw(frame: &mut Frame, app: &App) {
    // A sticky provider failure replaces the whole view until the next
    // batch result overwrites it.
    if let Some(err) = &app.last_error {
        let lines = vec![
            Line::from(format!("Error: {err}")),
            Line::from(""),
            Line::from("Press q to quit."),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(app.theme.error_fg)),
            frame.area(),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app.sort_mode, app.max_bubbles, &app.theme);

    let canvas = chunks[1];
    let bubbles = pack(
        &app.samples,
        app.sort_mode,
        app.max_bubbles,
        canvas.width,
        canvas.height,
    );
    frame.render_widget(
        BubbleWidget::new(&bubbles, app.sort_mode, &app.theme),
        canvas,
    );

    statusbar::render(frame, chunks[2], app.samples.len(), &app.theme);
}

#[cfg(test)]
mod tests;
