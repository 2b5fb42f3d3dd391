//! Trace pane: every recorded step, with the current one highlighted

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll position of the trace pane
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceScrollState {
    pub offset: usize,
    /// Keep the cursor in view; cleared when the user scrolls by hand
    pub follow: bool,
}

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    snapshots: &[Snapshot],
    cursor: usize,
    is_focused: bool,
    scroll: &mut TraceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Trace ({}) ", snapshots.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders
    let number_width = snapshots.len().to_string().len();

    if scroll.follow {
        if cursor < scroll.offset {
            scroll.offset = cursor;
        } else if cursor >= scroll.offset + visible_height {
            scroll.offset = cursor + 1 - visible_height;
        }
    }
    let max_scroll = snapshots.len().saturating_sub(visible_height);
    scroll.offset = scroll.offset.min(max_scroll);

    let items: Vec<ListItem> = snapshots
        .iter()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|snapshot| {
            let is_current = snapshot.index == cursor;
            let marker = if is_current { "→ " } else { "  " };
            let base = if is_current {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(marker, base.fg(DEFAULT_THEME.border_focused)),
                Span::styled(
                    format!("{:>width$} ", snapshot.step_number(), width = number_width),
                    base.fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<14} ", snapshot.action.label()),
                    base.fg(DEFAULT_THEME.tone(snapshot.action.tone())),
                ),
                Span::styled(snapshot.description.as_str(), base.fg(DEFAULT_THEME.fg)),
            ]);
            ListItem::new(line).style(base)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
