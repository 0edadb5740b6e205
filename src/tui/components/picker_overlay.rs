//! Picker overlay component.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::picker::{FocusTarget, PickerCell, PickerController, Presentation, TextMeasure};
use crate::tui::theme::*;

/// Render the picker overlay.
///
/// A pushed picker takes the whole area; a modal one is a centered popup
/// drawn over whatever is behind it.
pub fn render_picker_overlay(
    frame: &mut Frame,
    area: Rect,
    picker: &mut PickerController,
    measure: &dyn TextMeasure,
    list_height: u16,
) {
    let has_subtitle = picker.subtitle().is_some();
    // title, subtitle, gap, list, gap, cancel
    let content_height = 1 + u16::from(has_subtitle) + 1 + list_height + 1 + 1;

    let (overlay, block) = match picker.presentation() {
        Some(Presentation::Modal) => {
            let popup_width = area.width.saturating_sub(8).max(20).min(area.width);
            let popup_height = (content_height + 4).min(area.height);
            let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
            let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(OVERLAY_BORDER))
                .style(Style::new().bg(Color::Black));
            (Rect::new(x, y, popup_width, popup_height), block)
        }
        _ => (area, Block::default().style(Style::new().bg(Color::Black))),
    };

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay);
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),                       // Title
        Constraint::Length(u16::from(has_subtitle)), // Subtitle
        Constraint::Length(1),                       // Gap
        Constraint::Length(list_height),             // Cells
        Constraint::Length(1),                       // Gap
        Constraint::Length(1),                       // Cancel
        Constraint::Fill(1),
    ])
    .horizontal_margin(2)
    .split(inner);

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                picker.title(),
                Style::new().fg(TITLE_WHITE).bold(),
            ))
            .centered(),
        ),
        rows[1],
    );

    if let Some(subtitle) = picker.subtitle() {
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(subtitle, Style::new().fg(SUBTITLE_DIM))).centered(),
            ),
            rows[2],
        );
    }

    render_cells(frame, rows[4], picker, measure);
    render_cancel(frame, rows[6], picker);
}

fn render_cells(
    frame: &mut Frame,
    area: Rect,
    picker: &mut PickerController,
    measure: &dyn TextMeasure,
) {
    picker.layout(f64::from(area.width), f64::from(area.height), measure);

    let now = Instant::now();
    let offset = picker.scroll_offset();
    let area_width = f64::from(area.width);
    let area_height = f64::from(area.height);

    for (_, cell_frame, cell) in picker.visible_cells() {
        let scale = cell.scale_at(now);
        let width = cell_frame.width * scale;
        let height = (cell_frame.height * scale).round().clamp(1.0, area_height.max(1.0));
        let center = cell_frame.center() - offset;

        // Clip to the list area
        let left = (center - width / 2.0).round().max(0.0);
        let right = (center + width / 2.0).round().min(area_width);
        if right - left < 1.0 {
            continue;
        }
        let top = ((area_height - height) / 2.0).round().max(0.0);

        let rect = Rect::new(
            area.x + left as u16,
            area.y + top as u16,
            (right - left) as u16,
            height as u16,
        )
        .intersection(area);

        render_cell(frame, rect, cell);
    }
}

fn render_cell(frame: &mut Frame, rect: Rect, cell: &PickerCell) {
    let label = cell.label().unwrap_or_default();
    let style = if cell.is_highlighted() {
        Style::new().fg(CELL_FOCUS_FG).bg(CELL_FOCUS_BG).bold()
    } else {
        Style::new().fg(CELL_TEXT)
    };

    if rect.height < 3 {
        render_label(frame, rect, label, style);
        return;
    }

    let border = if cell.is_highlighted() {
        CELL_FOCUS_BG
    } else {
        CELL_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border))
        .style(style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    render_label(frame, inner, label, style);
}

fn render_label(frame: &mut Frame, area: Rect, label: &str, style: Style) {
    // Vertically center a single line
    let pad = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::raw(""); pad as usize];
    lines.push(Line::from(Span::styled(label, style)).centered());
    frame.render_widget(Paragraph::new(lines).style(style), area);
}

fn render_cancel(frame: &mut Frame, area: Rect, picker: &PickerController) {
    let focused = picker.focus() == FocusTarget::Cancel;
    let style = match (focused, picker.is_cancel_pressed()) {
        (true, true) => Style::new().fg(CELL_FOCUS_FG).bg(CANCEL_PRESSED).bold(),
        (true, false) => Style::new().fg(CELL_FOCUS_FG).bg(CELL_FOCUS_BG).bold(),
        (false, _) => Style::new().fg(CANCEL_IDLE),
    };

    let label = format!("  {}  ", picker.cancel_title());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style)).centered()),
        area,
    );
}
