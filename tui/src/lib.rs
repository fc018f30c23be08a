//! TUI rendering for formnav using ratatui.

mod app;
mod input;
mod theme;

pub use app::{App, StatusKind, StatusMessage};
pub use input::{handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Sections + detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_sections(frame, app, body[0], &palette, &glyphs);
    if app.state().is_at_summary() {
        draw_summary(frame, app, body[1], &palette, &glyphs);
    } else {
        draw_active_section(frame, app, body[1], &palette);
    }
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

fn panel(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {title} "), styles::title(palette)))
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let state = app.state();
    let progress = state.progress();

    let position = if state.is_at_summary() {
        Span::styled(
            format!("{} Summary", glyphs.summary),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        let step = state.active_index().map_or(0, |index| index + 1);
        Span::styled(
            format!("Step {step} of {}", progress.total),
            Style::default().fg(palette.accent),
        )
    };

    let line = Line::from(vec![
        position,
        Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(
            format!("{}/{} complete", progress.completed, progress.total),
            Style::default().fg(palette.text_secondary),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(panel(app.form().title(), palette)),
        area,
    );
}

fn draw_sections(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines: Vec<Line> = app
        .form()
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let status = app.section_status(section);
            let selected = index == app.cursor();
            let cursor = if selected { glyphs.cursor } else { " " };
            let mut style = styles::section(palette, status);
            if selected {
                style = style.bg(palette.bg_highlight);
            }
            Line::from(vec![
                Span::styled(format!("{cursor} "), Style::default().fg(palette.peach)),
                Span::styled(format!("{} ", glyphs.for_status(status)), style),
                Span::styled(section.title().to_string(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel("Sections", palette)), area);
}

fn draw_active_section(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let lines = match app.active_section() {
        Some(section) => {
            let mut lines = vec![Line::from(Span::styled(
                section.title().to_string(),
                styles::title(palette),
            ))];
            if let Some(description) = section.description() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    description.to_string(),
                    Style::default().fg(palette.text_secondary),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Enter", styles::key_highlight(palette)),
                Span::styled(" to submit this section", styles::key_hint(palette)),
            ]));
            lines
        }
        None => vec![Line::from(Span::styled(
            "Unknown section",
            Style::default().fg(palette.warning),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Current section", palette)),
        area,
    );
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines = vec![Line::from(Span::styled(
        "Review your answers",
        styles::title(palette),
    ))];
    lines.push(Line::from(""));
    for section in app.form().sections() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.editable),
                Style::default().fg(palette.success),
            ),
            Span::styled(
                section.title().to_string(),
                Style::default().fg(palette.text_primary),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("e", styles::key_highlight(palette)),
        Span::styled(" to edit the highlighted section", styles::key_hint(palette)),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Summary", palette)),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = match app.status() {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => palette.accent,
                StatusKind::Warning => palette.warning,
            };
            Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
        }
        None => {
            let hints = [
                ("Enter", "next"),
                ("e", "edit"),
                ("j/k", "select"),
                ("r", "reset"),
                ("q", "quit"),
            ];
            let mut spans = Vec::with_capacity(hints.len() * 3);
            for (index, (key, label)) in hints.into_iter().enumerate() {
                if index > 0 {
                    spans.push(Span::styled(
                        format!(" {} ", glyphs.separator),
                        styles::key_hint(palette),
                    ));
                }
                spans.push(Span::styled(key, styles::key_highlight(palette)));
                spans.push(Span::styled(format!(" {label}"), styles::key_hint(palette)));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
