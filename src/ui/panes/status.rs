//! Status bar rendering with keybindings and playback indicators

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Zero-based frame index; frame 0 is the unsorted input
    pub current_frame: usize,
    pub total_frames: usize,
    pub is_error: bool,
    pub is_playing: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData, theme: &Theme) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let step_text = format!(" Step {}/{} ", data.current_frame, data.total_frames - 1);

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_error {
                    theme.error
                } else {
                    theme.accent
                })
                .fg(theme.key_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.status_bg).fg(theme.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(theme.status_bg)
                .fg(if data.is_error { theme.error } else { theme.fg }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(theme.key_bg).fg(theme.key_fg);
    let desc_style = Style::default().bg(theme.status_bg).fg(theme.fg);
    let sep_style = Style::default().bg(theme.status_bg).fg(theme.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" a ", key_style),
        Span::styled(" algorithm ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" t ", key_style),
        Span::styled(" theme ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = data.current_frame == 0;
    let is_at_end = data.current_frame + 1 >= data.total_frames;

    let indicator = if data.is_error {
        Some((" ERROR ", theme.error))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", theme.warning))
    } else if is_at_end {
        Some((" END ", theme.error))
    } else if is_at_start {
        Some((" START ", theme.success))
    } else {
        None
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(theme.key_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
