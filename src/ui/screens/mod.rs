pub(crate) mod budget;
pub(crate) mod dashboard;
pub(crate) mod expenses;
pub(crate) mod goals;
pub(crate) mod loan;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Bordered panel with a dim bold title, shared by every screen.
pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

/// Centered placeholder text inside a titled panel.
pub(crate) fn render_message(f: &mut Frame, area: Rect, title: &str, lines: &[&str]) {
    let mut text = vec![Line::from("")];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push(Line::from(""));
        }
        text.push(Line::from(Span::styled(line.to_string(), theme::dim_style())));
    }
    f.render_widget(Paragraph::new(text).centered().block(panel(title)), area);
}
