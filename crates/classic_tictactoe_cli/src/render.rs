//! Text rendering of game views.

use classic_tictactoe::{GameMode, GameView, Position, Square};

const HIGHLIGHT_ON: &str = "\x1b[7m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// Renders the board, marking winning cells in reverse video.
pub fn board(view: &GameView) -> String {
    if view.winning_line().is_none() {
        return view.board().display();
    }

    let mut result = String::new();
    for (i, pos) in Position::ALL.iter().enumerate() {
        let symbol = match view.board().get(*pos) {
            Square::Empty => (i + 1).to_string(),
            Square::Occupied(mark) if view.is_highlighted(*pos) => {
                format!("{HIGHLIGHT_ON}{mark}{HIGHLIGHT_OFF}")
            }
            Square::Occupied(mark) => mark.to_string(),
        };
        result.push_str(&symbol);
        match i {
            2 | 5 => result.push_str("\n-+-+-\n"),
            8 => {}
            _ => result.push('|'),
        }
    }
    result
}

/// Renders the status line and, while a game runs, the undo hint.
pub fn status(view: &GameView) -> String {
    if *view.ai_pending() {
        return "AI is thinking...".to_string();
    }
    if view.can_undo() {
        format!("{}    [u] {}", view.status(), view.undo_label())
    } else {
        view.status().clone()
    }
}

/// Mode selection menu.
pub fn menu() -> &'static str {
    "Choose a mode:\n  1) Two Player Game\n  2) Play with AI\n  q) Quit"
}

/// Key help for a running game.
pub fn help(mode: GameMode) -> String {
    let undo = match mode {
        GameMode::VsAi => "undo your last turn",
        _ => "undo",
    };
    format!(
        "Enter a cell 1-9 or a name like 'center'. [u] {undo}  [r] restart  [m] Back to Menu  [j] json  [h] help  [q] quit"
    )
}
