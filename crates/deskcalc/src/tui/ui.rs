//! Rendering: lays the session state out as ratatui widgets.
//!
//! This layer owns layout and styling only; all state lives in the session
//! and the app wrapper.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::display::DisplayBuffer;
use crate::core::history::History;
use crate::store::StateStore;
use crate::theme::Theme;

/// Style set derived from the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window background
    pub base: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text
    pub dim: Color,
    /// Borders and operators
    pub accent: Color,
    /// Result highlight
    pub ok: Color,
    /// Error highlight
    pub err: Color,
    /// Pressed-button and selection background
    pub highlight: Color,
}

impl Palette {
    /// Builds the style set for a theme
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_light() {
            Self {
                base: Color::White,
                text: Color::Black,
                dim: Color::DarkGray,
                accent: Color::Blue,
                ok: Color::Green,
                err: Color::Red,
                highlight: Color::Yellow,
            }
        } else {
            Self {
                base: Color::Black,
                text: Color::White,
                dim: Color::Gray,
                accent: Color::Cyan,
                ok: Color::Green,
                err: Color::Red,
                highlight: Color::Yellow,
            }
        }
    }
}

/// Renders the calculator UI and records the keypad area for hit-testing
pub fn render<S: StateStore>(app: &mut CalculatorApp<S>, frame: &mut Frame) {
    let area = frame.area();
    let theme = app.session().theme();
    let palette = Palette::for_theme(theme);

    // Paint the themed background over the whole terminal
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.base).fg(palette.text)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // previous-expression label
            Constraint::Length(3), // display
            Constraint::Min(12),   // keypad / history
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(theme, palette, rows[0], frame);
    render_previous(app.session().display(), palette, rows[1], frame);
    render_display(app.session().display(), palette, rows[2], frame);

    let history_open = app.session().history_open();
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if history_open {
            [Constraint::Length(22), Constraint::Min(20)]
        } else {
            [Constraint::Length(22), Constraint::Min(0)]
        })
        .split(rows[3]);

    app.set_keypad_area(body[0]);
    frame.render_widget(KeypadWidget::new(app.keypad(), palette), body[0]);

    if history_open {
        render_history(app.session().history(), app.selected(), palette, body[1], frame);
    }

    render_footer(history_open, palette, rows[4], frame);
}

fn render_header(theme: Theme, palette: Palette, area: Rect, frame: &mut Frame) {
    let line = Line::from(vec![
        Span::styled(
            "deskcalc",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(theme.indicator(), Style::default().fg(palette.dim)),
        Span::styled(
            format!(" {theme}"),
            Style::default().fg(palette.dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_previous(display: &DisplayBuffer, palette: Palette, area: Rect, frame: &mut Frame) {
    let widget = Paragraph::new(Span::styled(
        display.previous().to_string(),
        Style::default().fg(palette.dim),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(widget, area);
}

fn render_display(display: &DisplayBuffer, palette: Palette, area: Rect, frame: &mut Frame) {
    let style = if display.is_sentinel() {
        Style::default().fg(palette.err).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    };

    let widget = Paragraph::new(Span::styled(display.text().to_string(), style))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(widget, area);
}

fn render_history(
    history: &History,
    selected: usize,
    palette: Palette,
    area: Rect,
    frame: &mut Frame,
) {
    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Span::styled(
            "No history yet",
            Style::default().fg(palette.dim),
        ))]
    } else {
        history
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == selected {
                    Style::default().fg(palette.base).bg(palette.highlight)
                } else {
                    Style::default().fg(palette.text)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.clone(), style),
                    Span::styled(" = ", style),
                    Span::styled(entry.result.clone(), style.add_modifier(Modifier::BOLD)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(list, area);
}

fn render_footer(history_open: bool, palette: Palette, area: Rect, frame: &mut Frame) {
    let hints = if history_open {
        "Up/Down select  Enter recall  x clear history  Esc close"
    } else {
        "0-9 . + - * / %  Enter =  Bksp del  h history  t theme  Esc clear  Ctrl+C quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(palette.dim))),
        area,
    );
}
