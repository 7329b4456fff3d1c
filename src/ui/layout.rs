//! Layout components (form area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the centered form column
const FORM_WIDTH: u16 = 60;

/// Create the main layout: a centered form column with the bottom line
/// reserved for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(FORM_WIDTH);
    let x = content.x + content.width.saturating_sub(width) / 2;
    Rect {
        x,
        y: content.y,
        width,
        height: content.height,
    }
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if app.config.show_help() {
        spans.push(Span::styled(
            " Tab: next field  Space: toggle  ←/→: pick gender  Enter: submit  Esc: quit",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, status_area);
}
