use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::render::{BoardRenderer, StandardSymbols};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let notification = Paragraph::new(app.session.notification())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(notification, chunks[0]);

    if app.session.board_active() {
        let renderer = BoardRenderer::new(StandardSymbols);
        let lines: Vec<Line> = renderer
            .render(app.session.mirror(), app.session.overlay(), Some(app.cursor))
            .into_iter()
            .map(Line::from)
            .collect();
        let board = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
        frame.render_widget(board, chunks[1]);
    } else {
        let mut lines = vec![Line::from("Waiting for the match to start...")];
        if app.session.invite_visible() {
            lines.push(Line::from(""));
            lines.push(Line::from(app.share.invite_line()));
            lines.push(Line::from("Press c to copy the invite link"));
        }
        let splash = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
        frame.render_widget(splash, chunks[1]);
    }

    let help = Paragraph::new("1-9 or arrows+enter: move   r: rematch   c: copy invite   q: quit")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(help, chunks[2]);
}
