//! Terminal UI rendering for the demo.
//!
//! Layout, top to bottom:
//! - navbar: logo, site links, NEW badge, search hint
//! - terminal window: title bar, mode panel, hint strip
//! - status line: mode name and pending-key indicator
//!
//! Everything here renders from a `RenderState` snapshot and never mutates
//! application state.

use ansi_to_tui::IntoText;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::modal::Mode;
use crate::navbar::{CommandPalette, NAV_ITEMS};
use crate::panels::{hints, QUIT_TITLE, WELCOME_TITLE};
use crate::render::RenderState;
use crate::tea::{Notification, NotificationLevel};

// Color tokens
const COLOR_ACCENT: Color = Color::Magenta;
const COLOR_PRIMARY: Color = Color::Cyan;
const COLOR_SUCCESS: Color = Color::Green;
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_BORDER: Color = Color::DarkGray;

const PALETTE_WIDTH: u16 = 64;
const PALETTE_HEIGHT: u16 = 12;

pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(Paragraph::new(navbar_line(chunks[0].width)), chunks[0]);
    render_terminal_window(frame, state, chunks[2]);
    frame.render_widget(Paragraph::new(status_line(state)), chunks[3]);

    if let Some(ref palette) = state.palette {
        render_palette(frame, palette, area);
    }

    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, area);
    }
}

/// Top navigation bar. Links are padded out; the search hint is
/// right-aligned when there is room.
pub fn navbar_line(width: u16) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            " FKvim ",
            Style::default()
                .fg(Color::White)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for item in NAV_ITEMS.iter().filter(|i| i.in_bar) {
        let style = if item.active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_TEXT_DIMMED)
        };
        spans.push(Span::styled(item.label, style));
        if item.is_new {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                " NEW ",
                Style::default()
                    .fg(Color::White)
                    .bg(COLOR_ACCENT)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        spans.push(Span::raw("  "));
    }

    let search = " Search...  Ctrl+K ";
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let spacer = (width as usize)
        .saturating_sub(used)
        .saturating_sub(search.len());
    if spacer > 0 {
        spans.push(Span::raw(" ".repeat(spacer)));
        spans.push(Span::styled(
            search,
            Style::default().fg(COLOR_TEXT_MUTED).bg(Color::Black),
        ));
    }

    Line::from(spans)
}

fn render_terminal_window(frame: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title_top(title_dots())
        .title_top(
            Line::from(Span::styled(
                " Terminal ",
                Style::default().fg(COLOR_TEXT_DIMMED),
            ))
            .centered(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(hint_height(state.mode)),
    ])
    .split(inner);

    match state.panels.art(state.mode) {
        Some(art) => render_art(frame, art, chunks[0]),
        None => frame.render_widget(Paragraph::new(prompt_lines(state)), chunks[0]),
    }

    frame.render_widget(Paragraph::new(hint_lines(state.mode)), chunks[1]);
}

fn title_dots() -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw(" "),
    ])
}

/// Draw ANSI art, keeping the top of the panel when it is taller than the
/// area.
fn render_art(frame: &mut Frame, art: &str, area: Rect) {
    let text: Text = art.into_text().unwrap_or_else(|_| Text::raw(art.to_string()));
    let lines: Vec<Line> = text.lines.into_iter().take(area.height as usize).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Welcome / Quit text form with the launch prompt.
pub fn prompt_lines(state: &RenderState) -> Vec<Line<'static>> {
    let title = if state.mode == Mode::Quit {
        QUIT_TITLE
    } else {
        WELCOME_TITLE
    };
    let command_style = Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(COLOR_TEXT_MUTED);

    let mut invite = vec![Span::styled("Type ", muted)];
    let count = state.launch_commands.len();
    for (idx, command) in state.launch_commands.iter().enumerate() {
        if idx > 0 {
            let sep = if idx + 1 == count { ", or " } else { ", " };
            invite.push(Span::styled(sep, muted));
        }
        invite.push(Span::styled(command.clone(), command_style));
    }
    let tail = if state.mode == Mode::Quit {
        " to start again"
    } else {
        " to get started"
    };
    invite.push(Span::styled(tail, muted));

    let mut prompt = vec![
        Span::styled("→ ", Style::default().fg(COLOR_SUCCESS)),
        Span::raw(state.input.clone()),
    ];
    if state.cursor_visible {
        prompt.push(Span::styled(" ", Style::default().bg(Color::White)));
    }

    vec![
        Line::from(Span::styled("→", Style::default().fg(COLOR_SUCCESS))),
        Line::from(title),
        Line::default(),
        Line::from(invite),
        Line::default(),
        Line::from(prompt),
    ]
}

fn hint_height(mode: Mode) -> u16 {
    hints(mode).len() as u16
}

/// One line per hint, e.g. "Press Space + e for file explorer".
pub fn hint_lines(mode: Mode) -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(COLOR_PRIMARY)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(COLOR_TEXT_MUTED);

    hints(mode)
        .iter()
        .map(|hint| {
            let mut spans = vec![Span::styled("Press ", text_style)];
            for (idx, key) in hint.keys.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled(" + ", text_style));
                }
                spans.push(Span::styled(format!(" {} ", key), key_style));
            }
            spans.push(Span::styled(format!(" to {}", hint.action), text_style));
            Line::from(spans)
        })
        .collect()
}

/// Bottom line: current mode on the left, pending indicator next to it.
pub fn status_line(state: &RenderState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", state.mode.name().to_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(COLOR_SUCCESS)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(pending) = state.pending {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("{}…", pending.label()),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(
        "   Ctrl+C exit",
        Style::default().fg(COLOR_TEXT_MUTED),
    ));
    Line::from(spans)
}

fn render_palette(frame: &mut Frame, palette: &CommandPalette, area: Rect) {
    let rect = centered_rect(PALETTE_WIDTH, PALETTE_HEIGHT, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title_top(" Search ");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(COLOR_PRIMARY)),
            Span::raw(palette.query.clone()),
        ]),
        Line::default(),
    ];

    let matches = palette.matches();
    if matches.is_empty() {
        lines.push(Line::from(Span::styled(
            "No results found.",
            Style::default().fg(COLOR_TEXT_MUTED),
        )));
    }
    for (idx, item) in matches.iter().enumerate() {
        let style = if idx == palette.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", item.label), style),
            Span::styled(
                format!("  {}", item.url),
                Style::default().fg(COLOR_TEXT_MUTED),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Single-line notification on the bottom row.
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let notification_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, notification_area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
        NotificationLevel::Info => Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    frame.render_widget(Paragraph::new(line), notification_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
