use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MARVEL_RED, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the id being typed and the id on display.
pub struct Header<'a> {
    input: &'a str,
    current_id: Option<u32>,
    input_error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(input: &'a str, current_id: Option<u32>, input_error: Option<&'a str>) -> Self {
        Self {
            input,
            current_id,
            input_error,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let current = self
            .current_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string());

        let mut spans = vec![
            Span::styled(
                " MARVEL ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(MARVEL_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Character id: ", text_style),
            Span::styled(format!("{}_", self.input), text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Showing: {}", current), text_style),
        ];
        if let Some(error) = self.input_error {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
