//! Rendering for the summarize page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::{busy_button, button, panel, placeholder};

use super::state::SummarizeState;

const INPUT_PLACEHOLDER: &str = "Drop in a few paragraphs...";
const SUMMARY_PLACEHOLDER: &str = "Your summary will appear here...";

pub fn render_summarize_page(
    frame: &mut Frame,
    area: Rect,
    state: &SummarizeState,
    animation_tick: u8,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(columns[0]);

    render_input(frame, left[0], state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} characters left", state.characters_left()),
            Style::default().fg(MUTED_TEXT),
        )),
        left[1],
    );
    if let Some(message) = state.error_message() {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(STATUS_ERROR)))
                .wrap(Wrap { trim: true }),
            left[2],
        );
    }

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(columns[1]);

    let mut buttons = if state.is_generating() {
        busy_button("Summarizing...", animation_tick)
    } else {
        button("Generate summary", "Ctrl+G", state.can_generate(), true)
    };
    buttons.push(Span::raw("   "));
    buttons.extend(button("Clear", "Ctrl+L", state.can_clear(), false));
    frame.render_widget(Paragraph::new(Line::from(buttons)), right[0]);

    let summary = match state.summary() {
        Some(text) => Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        None => placeholder(SUMMARY_PLACEHOLDER),
    };
    frame.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: false })
            .block(panel("Summary")),
        right[1],
    );
}

fn render_input(frame: &mut Frame, area: Rect, state: &SummarizeState) {
    let block = panel("Text");
    let lines: Vec<Line> = if state.input.is_empty() {
        vec![placeholder(INPUT_PLACEHOLDER)]
    } else {
        let mut lines: Vec<Line> = state
            .input
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(MUTED_TEXT)));
        }
        lines
    };

    // Keep the end of the input (where typing happens) in view.
    let inner_height = block.inner(area).height as usize;
    let skip = lines.len().saturating_sub(inner_height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    frame.render_widget(
        Paragraph::new(visible)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
