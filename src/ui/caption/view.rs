//! Rendering for the caption page.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::preview::{Preview, PreviewStore, Thumbnail};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::{busy_button, button, panel, placeholder};

use super::state::CaptionState;

const CAPTION_PLACEHOLDER: &str = "Your AI-generated caption will appear here...";

pub fn render_caption_page(
    frame: &mut Frame,
    area: Rect,
    state: &CaptionState,
    store: &PreviewStore,
    animation_tick: u8,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(columns[0]);

    let preview = state.preview.and_then(|id| store.resolve(id));
    render_drop_zone(frame, left[0], preview.as_deref());
    render_status(frame, left[1], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(columns[1]);

    render_buttons(frame, right[0], state, animation_tick);
    render_caption(frame, right[1], state);
}

fn render_drop_zone(frame: &mut Frame, area: Rect, preview: Option<&Preview>) {
    let block = panel("Image");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(preview) = preview else {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Drop image here",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "or press Ctrl+O to browse files",
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(""),
            placeholder("PNG, JPG, GIF up to 10MB"),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
        return;
    };

    if inner.height == 0 {
        return;
    }
    let image_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let label_area = Rect {
        y: inner.y + image_area.height,
        height: 1,
        ..inner
    };

    match &preview.thumbnail {
        Some(thumbnail) => draw_thumbnail(frame.buffer_mut(), image_area, thumbnail),
        None => frame.render_widget(
            Paragraph::new(placeholder("Preview unavailable")).alignment(Alignment::Center),
            image_area,
        ),
    }

    let mut label = vec![
        Span::styled(
            preview.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", preview.size_label),
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    if let Some((w, h)) = preview.dimensions {
        label.push(Span::styled(
            format!("  {w}x{h}"),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), label_area);
}

/// Paint `thumbnail` centred in `area`, two pixels per cell using the
/// upper half block.
fn draw_thumbnail(buf: &mut Buffer, area: Rect, thumbnail: &Thumbnail) {
    let (w, h) = thumbnail.fit(area.width, area.height);
    if w == 0 || h == 0 {
        return;
    }
    let rows = h.div_ceil(2) as u16;
    let x0 = area.x + (area.width.saturating_sub(w as u16)) / 2;
    let y0 = area.y + (area.height.saturating_sub(rows)) / 2;

    for row in 0..rows {
        for col in 0..w {
            let top = thumbnail.sample(col, row as u32 * 2, w, h);
            let bottom = thumbnail.sample(col, row as u32 * 2 + 1, w, h);
            let Some(cell) = buf.cell_mut((x0 + col as u16, y0 + row)) else {
                continue;
            };
            cell.set_char('▀');
            if let Some([r, g, b]) = top {
                cell.set_fg(Color::Rgb(r, g, b));
            }
            match bottom {
                Some([r, g, b]) => cell.set_bg(Color::Rgb(r, g, b)),
                None => cell.set_bg(Color::Reset),
            };
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &CaptionState) {
    let mut lines = Vec::new();
    if let Some(prompt) = &state.prompt {
        lines.push(Line::from(vec![
            Span::styled("Open: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(format!("{prompt}▏"), Style::default().fg(HEADER_TEXT)),
        ]));
    }
    if let Some(message) = state.error_message() {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(STATUS_ERROR),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_buttons(frame: &mut Frame, area: Rect, state: &CaptionState, animation_tick: u8) {
    let mut spans = if state.is_generating() {
        busy_button("Generating...", animation_tick)
    } else {
        button("Generate Caption", "Enter", state.can_generate(), true)
    };
    spans.push(Span::raw("   "));
    spans.extend(button("Remove", "Ctrl+R", state.can_remove(), false));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_caption(frame: &mut Frame, area: Rect, state: &CaptionState) {
    let line = match state.caption() {
        Some(caption) => Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        None => placeholder(CAPTION_PLACEHOLDER),
    };
    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .block(panel("Generated Caption")),
        area,
    );
}
