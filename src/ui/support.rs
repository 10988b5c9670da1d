//! Support page rendering

use crate::app::App;
use crate::state::{FormField, SupportForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the support content gets, so the form stays readable on wide terminals
const MAX_CONTENT_WIDTH: u16 = 72;

/// Draw the support page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content_width = area.width.min(MAX_CONTENT_WIDTH);
    let content = Rect {
        x: area.x + (area.width - content_width) / 2,
        y: area.y,
        width: content_width,
        height: area.height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title and breadcrumb
            Constraint::Min(0),    // Form or confirmation
        ])
        .split(content);

    draw_page_header(frame, chunks[0]);

    let form = &app.state.support_form;
    if form.is_submitted() {
        draw_confirmation(frame, chunks[1]);
    } else {
        draw_form(frame, chunks[1], form);
    }
}

/// Draw the page title with the breadcrumb trail on the right
fn draw_page_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "Support",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    let breadcrumb = Paragraph::new(Line::from(vec![
        Span::styled("Dashboard", Style::default().fg(Color::DarkGray)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::raw("Support"),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(breadcrumb, area);
}

/// Draw the support form fields and actions
fn draw_form(frame: &mut Frame, area: Rect, form: &SupportForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Min(6),                // Problem description
            Constraint::Length(BUTTON_HEIGHT), // Actions
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    // Form is focused while a field is active (not on the actions row)
    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Support Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let draft = form.draft();
    draw_field(frame, chunks[0], &draft.name, form.active_field_index == 0);
    draw_field(frame, chunks[1], &draft.email, form.active_field_index == 1);
    draw_field(frame, chunks[2], &draft.problem, form.active_field_index == 2);

    draw_actions(frame, chunks[3], form);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("^S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

/// Draw a form field with its label, placeholder and cursor
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_str = if field.is_empty() && !is_active {
        field.placeholder.clone()
    } else {
        field.as_text().to_string()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the Clear and Submit Request buttons, right-aligned
fn draw_actions(frame: &mut Frame, area: Rect, form: &SupportForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Left padding (flex)
            Constraint::Length(9),  // Clear
            Constraint::Length(1),  // Gap
            Constraint::Length(18), // Submit Request
        ])
        .split(area);

    let on_actions = form.is_buttons_row_active();
    render_button(
        frame,
        chunks[1],
        "Clear",
        on_actions && form.selected_button == 0,
        Color::Gray,
    );
    render_button(
        frame,
        chunks[3],
        "Submit Request",
        on_actions && form.selected_button == 1,
        Color::Green,
    );
}

/// Draw the post-submit confirmation shown in place of the form
fn draw_confirmation(frame: &mut Frame, area: Rect) {
    let panel_width = area.width.min(44);
    let panel_height = 5u16;
    let panel = Rect {
        x: area.x + (area.width.saturating_sub(panel_width)) / 2,
        y: area.y + (area.height.saturating_sub(panel_height)) / 2,
        width: panel_width,
        height: panel_height.min(area.height),
    };

    let content = vec![
        Line::from(Span::styled(
            "✔  Thank You!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your support request has been sent.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(dialog, panel);
}
