//! Stateless UI rendering.

use super::app::App;
use crate::game::{GameEngine, GameStatus, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const SQUARE_WIDTH: usize = 3;

const KEY_HELP: &str = "arrows move | enter place | +/- size | [/] win length | j/k history | s sort | r reset | q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, body, status, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let engine = app.engine();
    let config = engine.config();
    let heading = format!(
        "m,n,k-game  Board: ({w}x{w})  Moves to win: {k}",
        w = config.width(),
        k = config.win_length()
    );
    frame.render_widget(
        Paragraph::new(heading)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        title,
    );

    let [board_area, history_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(42)]).areas(body);
    draw_board(frame, board_area, engine, app.cursor());
    draw_history(frame, history_area, engine);
    draw_status(frame, status, engine, app.message());

    frame.render_widget(
        Paragraph::new(KEY_HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        help,
    );
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue),
        Player::O => Style::default().fg(Color::Red),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: usize) {
    let board = engine.current_board();
    let width = board.width();
    let winning = engine.winning_line();

    let lines: Vec<Line> = board
        .squares()
        .chunks(width)
        .enumerate()
        .map(|(row, squares)| {
            let spans: Vec<Span> = squares
                .iter()
                .enumerate()
                .map(|(col, square)| {
                    let index = row * width + col;
                    let mut style = match square.player() {
                        None => Style::default().fg(Color::DarkGray),
                        Some(player) => player_style(player).add_modifier(Modifier::BOLD),
                    };
                    if winning.is_some_and(|line| line.contains(index)) {
                        style = style.bg(Color::Green);
                    }
                    if index == cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", square.symbol()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    // Keep the cursor inside the viewport when the board outgrows the pane.
    let visible_rows = usize::from(area.height.saturating_sub(2));
    let visible_cols = usize::from(area.width.saturating_sub(2)) / SQUARE_WIDTH;
    let scrolled = width > visible_cols || width > visible_rows;
    let row_offset = scroll_offset(cursor / width.max(1), visible_rows);
    let col_offset = scroll_offset(cursor % width.max(1), visible_cols) * SQUARE_WIDTH;
    let alignment = if scrolled { Alignment::Left } else { Alignment::Center };

    let block = Block::default().borders(Borders::ALL).title("Board");
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(alignment)
            .scroll((to_u16(row_offset), to_u16(col_offset)))
            .block(block),
        area,
    );
}

/// First visible line or column so that `pos` stays in a window of `visible`.
fn scroll_offset(pos: usize, visible: usize) -> usize {
    match visible {
        0 => 0,
        _ => pos.saturating_sub(visible - 1),
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn draw_history(frame: &mut Frame, area: Rect, engine: &GameEngine) {
    let order = engine.history_order();
    let items: Vec<ListItem> = order
        .iter()
        .filter_map(|&step| {
            let label = engine.history_label(step)?;
            Some(ListItem::new(label).style(player_style(Player::for_step(step))))
        })
        .collect();

    let sort = if engine.sort_ascending() { "ASC" } else { "DESC" };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("History ({})", sort)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let selected = order.iter().position(|&step| step == engine.current_step());
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, engine: &GameEngine, message: Option<&str>) {
    let status = engine.status();
    let style = match status {
        GameStatus::Won(player) | GameStatus::NextPlayer(player) => player_style(player),
        GameStatus::Draw => Style::default().fg(Color::Yellow),
    };

    let mut spans = vec![Span::styled(status.to_string(), style.add_modifier(Modifier::BOLD))];
    if let Some(message) = message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
