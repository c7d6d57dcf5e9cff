//! Bar chart pane
//!
//! Draws one bar per array element, scaled against the largest input value so
//! heights stay comparable from frame to frame. The primary and secondary
//! indices of the current step get their own colors.
//!
//! Quick sort frames may hold only a sub-array; those are drawn as-is and the
//! title says how much of the array is shown.

use crate::algorithms::{Algorithm, SortError};
use crate::ui::app::FrameView;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the bar pane
pub struct BarsRenderData<'a> {
    pub algorithm: Algorithm,
    pub view: FrameView<'a>,
    /// Length of the full input array
    pub full_len: usize,
    /// Height of a full-size bar
    pub scale_max: u64,
    pub error: Option<&'a SortError>,
}

/// Role of one bar in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Primary,
    Secondary,
    Plain,
}

impl BarRole {
    /// Primary wins when both indices point at the same bar
    pub fn of(index: usize, view: &FrameView<'_>) -> Self {
        if view.primary == Some(index) {
            BarRole::Primary
        } else if view.secondary == Some(index) {
            BarRole::Secondary
        } else {
            BarRole::Plain
        }
    }

    fn color(self, theme: &Theme) -> ratatui::style::Color {
        match self {
            BarRole::Primary => theme.primary_bar,
            BarRole::Secondary => theme.secondary_bar,
            BarRole::Plain => theme.bar,
        }
    }
}

/// Width of each bar and the gap between bars for `count` bars in `width` columns
pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let gap = if width >= count.saturating_mul(2) { 1 } else { 0 };
    let width_per_bar = width.saturating_sub(gap * count.saturating_sub(1)) / count;
    (width_per_bar.max(1), gap)
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, theme: &Theme) {
    let mut title = format!(" Sorting Visualization for: {} ", data.algorithm.name());
    if data.error.is_none() && data.view.values.len() != data.full_len {
        title.push_str(&format!(
            "(sub-array: {} of {}) ",
            data.view.values.len(),
            data.full_len
        ));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg).fg(theme.fg));

    if let Some(error) = data.error {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(error.to_string()),
            Line::from(""),
            Line::from("press r for a new array or a to switch algorithm"),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(paragraph, area);
        return;
    }

    if data.view.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_layout(inner_width, data.view.values.len());

    let bars: Vec<Bar> = data
        .view
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = BarRole::of(i, &data.view).color(theme);
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.bg).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(data.scale_max.max(1));

    frame.render_widget(chart, area);
}
