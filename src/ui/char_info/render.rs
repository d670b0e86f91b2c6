//! Rendering for the character info panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{
    HEADER_SEPARATOR, HEADER_TEXT, LINK_SECONDARY, MARVEL_RED, PANEL_BORDER, SKELETON,
    STATUS_ERROR, STATUS_OK,
};

use super::state::{CharInfoPhase, CharInfoState};
use super::view::ContentView;

pub const PLACEHOLDER_TEXT: &str = "Please select a character to see information";
pub const LOADING_TEXT: &str = "Loading character...";
pub const ERROR_TEXT: &str = "Something went wrong. The character could not be loaded.";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the panel into `area`.
pub fn render_char_info(frame: &mut Frame, area: Rect, state: &CharInfoState) {
    let block = Block::default()
        .title(" Character ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match &state.phase {
        CharInfoPhase::Ready(record) => content_lines(&ContentView::from_record(record)),
        CharInfoPhase::Error => error_lines(),
        CharInfoPhase::Loading => loading_lines(state.animation_tick),
        CharInfoPhase::Placeholder => placeholder_lines(inner.width),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn placeholder_lines(width: u16) -> Vec<Line<'static>> {
    let bar = |w: u16| Span::styled("▒".repeat(w as usize), Style::default().fg(SKELETON));
    let inner_width = width.saturating_sub(2).max(1);

    vec![
        Line::from(vec![Span::styled(
            format!(" {}", PLACEHOLDER_TEXT),
            Style::default().fg(HEADER_TEXT),
        )]),
        Line::from(""),
        Line::from(vec![Span::raw(" "), bar(4), Span::raw(" "), bar(inner_width / 3)]),
        Line::from(""),
        Line::from(vec![Span::raw(" "), bar(inner_width)]),
        Line::from(vec![Span::raw(" "), bar(inner_width)]),
        Line::from(vec![Span::raw(" "), bar(inner_width)]),
    ]
}

fn loading_lines(animation_tick: u8) -> Vec<Line<'static>> {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
        ]),
    ]
}

fn error_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ✗ ", Style::default().fg(STATUS_ERROR)),
            Span::styled(ERROR_TEXT, Style::default().fg(STATUS_ERROR)),
        ]),
    ]
}

fn content_lines(view: &ContentView) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let dim = Style::default().fg(HEADER_SEPARATOR);
    let button = |label: &'static str, bg: Color| {
        Span::styled(
            format!(" {} ", label.to_uppercase()),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Image: ", dim),
            Span::styled(view.thumbnail_url.clone(), text),
            Span::styled(format!(" ({})", view.image_fit.as_str()), dim),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", view.name.to_uppercase()),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(" "),
            button(view.links[0].label, MARVEL_RED),
            Span::raw("  "),
            button(view.links[1].label, LINK_SECONDARY),
        ]),
    ];

    for link in &view.links {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}: ", link.label), dim),
            Span::styled(link.url.clone(), dim),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(format!(" {}", view.description), text)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Comics:",
        text.add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        view.comics
            .iter()
            .map(|name| Line::from(Span::styled(format!("  • {}", name), text))),
    );

    lines
}
