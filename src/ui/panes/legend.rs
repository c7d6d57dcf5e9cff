//! Legend line explaining the highlight colors

use crate::algorithms::Algorithm;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the primary and secondary indices mean for `algorithm`
pub fn role_labels(algorithm: Algorithm) -> (Option<&'static str>, Option<&'static str>) {
    match algorithm {
        Algorithm::Bubble => (Some("Compared (j)"), Some("Compared (j+1)")),
        Algorithm::Selection => (Some("Current Index"), Some("Minimum Index")),
        Algorithm::Insertion => (Some("Current Index"), Some("Insertion Point")),
        Algorithm::Heap => (Some("Parent"), Some("Larger Child")),
        Algorithm::Merge | Algorithm::Counting | Algorithm::Radix => {
            (Some("Write Index"), None)
        }
        Algorithm::Quick | Algorithm::Bucket => (None, None),
    }
}

pub fn render_legend(frame: &mut Frame, area: Rect, algorithm: Algorithm, theme: &Theme) {
    let text_style = Style::default().fg(theme.fg);
    let mut spans = vec![Span::styled(" ", text_style)];

    let (primary, secondary) = role_labels(algorithm);
    for (label, color) in [(primary, theme.primary_bar), (secondary, theme.secondary_bar)] {
        if let Some(label) = label {
            spans.push(Span::styled("■ ", Style::default().fg(color)));
            spans.push(Span::styled(format!("{}   ", label), text_style));
        }
    }
    if primary.is_none() && secondary.is_none() {
        spans.push(Span::styled(
            "no highlighted indices for this algorithm",
            Style::default().fg(theme.comment),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
    frame.render_widget(paragraph, area);
}
