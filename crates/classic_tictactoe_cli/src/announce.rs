//! Announcements shown when a game ends.

use classic_tictactoe::{GameMode, GameResult, Role};
use derive_more::Display;
use rand::Rng;
use rand::seq::SliceRandom;

/// Emojis for a win worth celebrating.
pub const CHEER_EMOJIS: [&str; 3] = ["😊", "🥰", "😇"];

/// Messages for a win worth celebrating.
pub const CHEER_TEXTS: [&str; 5] = ["Amazing!", "Incredible!", "Brilliant!", "Well Played!", "Fantastic!"];

/// Emojis for a loss to the computer.
pub const CONSOLE_EMOJIS: [&str; 4] = ["😭", "🥶", "🤯", "😰"];

/// Messages for a loss to the computer.
pub const CONSOLE_TEXTS: [&str; 4] = ["Try again", "Darn it", "Better Luck Next Time", "Try Harder"];

/// End-of-game message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Announcement {
    /// A human won.
    #[display("{emoji} {text}")]
    Cheer {
        /// Emoji drawn from [`CHEER_EMOJIS`].
        emoji: &'static str,
        /// Message drawn from [`CHEER_TEXTS`].
        text: &'static str,
    },
    /// The computer won.
    #[display("{emoji} {text}")]
    Console {
        /// Emoji drawn from [`CONSOLE_EMOJIS`].
        emoji: &'static str,
        /// Message drawn from [`CONSOLE_TEXTS`].
        text: &'static str,
    },
    /// Nobody won.
    #[display("It's a Draw! 🤝")]
    Draw,
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Picks the announcement for a finished game, or `None` while it runs.
///
/// In two-player mode every win is cheered.
pub fn announce<R: Rng + ?Sized>(mode: GameMode, result: &GameResult, rng: &mut R) -> Option<Announcement> {
    match result {
        GameResult::InProgress => None,
        GameResult::Draw => Some(Announcement::Draw),
        GameResult::Won { mark, .. } if mode == GameMode::VsAi && Role::of(*mark) == Role::Ai => {
            Some(Announcement::Console {
                emoji: pick(&CONSOLE_EMOJIS, rng),
                text: pick(&CONSOLE_TEXTS, rng),
            })
        }
        GameResult::Won { .. } => Some(Announcement::Cheer {
            emoji: pick(&CHEER_EMOJIS, rng),
            text: pick(&CHEER_TEXTS, rng),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classic_tictactoe::{Mark, WinLine};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn won(mark: Mark) -> GameResult {
        GameResult::Won {
            mark,
            line: WinLine::TopRow,
        }
    }

    #[test]
    fn test_nothing_while_in_progress() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(announce(GameMode::VsAi, &GameResult::InProgress, &mut rng), None);
    }

    #[test]
    fn test_draw() {
        let mut rng = StepRng::new(0, 0);
        let announcement = announce(GameMode::TwoPlayer, &GameResult::Draw, &mut rng).unwrap();
        assert_eq!(announcement.to_string(), "It's a Draw! 🤝");
    }

    #[test]
    fn test_human_win_is_cheered() {
        let mut rng = StepRng::new(0, 0);
        let announcement = announce(GameMode::VsAi, &won(Mark::X), &mut rng).unwrap();
        assert_eq!(
            announcement,
            Announcement::Cheer {
                emoji: "😊",
                text: "Amazing!"
            }
        );
        assert_eq!(announcement.to_string(), "😊 Amazing!");
    }

    #[test]
    fn test_ai_win_is_consoled() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            match announce(GameMode::VsAi, &won(Mark::O), &mut rng) {
                Some(Announcement::Console { emoji, text }) => {
                    assert!(CONSOLE_EMOJIS.contains(&emoji));
                    assert!(CONSOLE_TEXTS.contains(&text));
                }
                other => panic!("expected consolation, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_two_player_o_win_is_cheered() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            match announce(GameMode::TwoPlayer, &won(Mark::O), &mut rng) {
                Some(Announcement::Cheer { emoji, text }) => {
                    assert!(CHEER_EMOJIS.contains(&emoji));
                    assert!(CHEER_TEXTS.contains(&text));
                }
                other => panic!("expected cheer, got {:?}", other),
            }
        }
    }
}
