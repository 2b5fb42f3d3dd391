//! Current step pane
//!
//! Shows the action tag, the narrative for the step under the cursor, and
//! the result once the algorithm has recorded one. The block title names the
//! problem and approach being played.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the step pane
pub fn render_step_pane(frame: &mut Frame, area: Rect, title: &str, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no steps recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let tone = DEFAULT_THEME.tone(snapshot.action.tone());
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", snapshot.action.label()),
                Style::default()
                    .bg(tone)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                snapshot.description.as_str(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    if !snapshot.detail.is_empty() {
        lines.push(Line::from(Span::styled(
            snapshot.detail.as_str(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    if let Some(result) = &snapshot.result {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("result ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                result.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.result)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
