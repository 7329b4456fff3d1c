//! Signup form rendering

use crate::app::App;
use crate::state::{
    FormField, Gender, FIELD_AGREE_TERMS, FIELD_EMAIL, FIELD_GENDER, FIELD_NAME, SUBMIT_ROW,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a bordered field row
const FIELD_HEIGHT: u16 = 3;
/// One line below each field for its validation message
const ERROR_HEIGHT: u16 = 1;

/// Draw the signup form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(ERROR_HEIGHT),
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(ERROR_HEIGHT),
            Constraint::Length(FIELD_HEIGHT), // Agree to terms
            Constraint::Length(ERROR_HEIGHT),
            Constraint::Length(FIELD_HEIGHT), // Gender
            Constraint::Length(ERROR_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let active = app.form.active_field_index;

    draw_text_field(frame, chunks[0], &app.form.name, active == FIELD_NAME);
    draw_error_line(frame, chunks[1], app.errors.name);

    draw_text_field(frame, chunks[2], &app.form.email, active == FIELD_EMAIL);
    draw_error_line(frame, chunks[3], app.errors.email);

    draw_checkbox(
        frame,
        chunks[4],
        &app.form.agree_terms,
        active == FIELD_AGREE_TERMS,
    );
    draw_error_line(frame, chunks[5], app.errors.agree_terms);

    draw_radio_group(frame, chunks[6], &app.form.gender, active == FIELD_GENDER);
    draw_error_line(frame, chunks[7], app.errors.gender);

    let button_area = Rect {
        width: 12.min(chunks[8].width),
        ..chunks[8]
    };
    render_button(frame, button_area, "Submit", active == SUBMIT_ROW);
}

/// Draw a single-line text field with a cursor glyph when active
fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };

    // Placeholder text when empty, like the reference inputs
    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.label.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the agree-to-terms checkbox row
fn draw_checkbox(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mark = if field.is_checked() { "[x]" } else { "[ ]" };
    let content = Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::raw(field.label.clone()),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(style);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the gender radio group as two mutually exclusive options
fn draw_radio_group(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let selected = field.selected();
    let option = |gender: Gender| {
        let mark = if selected == Some(gender) { "(o)" } else { "( )" };
        format!("{mark} {}", gender.label())
    };

    let content = Line::from(vec![
        Span::styled(option(Gender::Male), style),
        Span::raw("   "),
        Span::styled(option(Gender::Female), style),
    ]);

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw a field's validation message, if any
fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&'static str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}
