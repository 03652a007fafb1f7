use reversi_core::engine::Choice;
use serde::{Deserialize, Serialize};

/// Per-turn message from the game server: the raw wire encoding of the
/// position. Cell and player values are validated by the core's
/// boundary checks, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnMessage {
    pub player: u8,
    pub board: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "player-one-won")]
    PlayerOneWon,
    #[serde(rename = "player-two-won")]
    PlayerTwoWon,
    /// Ties and any result string this build does not know about.
    #[serde(other)]
    Other,
}

/// Event on the benchmark feed. Only `game-over` events carry a
/// result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub status: String,
    #[serde(rename = "gameResult", default)]
    pub game_result: Option<GameResult>,
}

impl GameOutcome {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == "game-over"
    }
}

/// Encodes a root choice as the newline-terminated wire payload. A
/// move becomes a JSON coordinate pair; the protocol has no notion of
/// pass versus game over, both go out as the null move.
#[must_use]
pub fn prepare_response(choice: &Choice) -> String {
    match choice {
        Choice::Move(mv) => format!("[{},{}]\n", mv.row, mv.col),
        Choice::Pass | Choice::GameOver => "null\n".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::engine::Move;

    #[test]
    fn move_encodes_as_bare_json_pair() {
        let choice = Choice::Move(Move { row: 2, col: 3 });
        assert_eq!(prepare_response(&choice), "[2,3]\n");
    }

    #[test]
    fn pass_and_game_over_encode_as_null() {
        assert_eq!(prepare_response(&Choice::Pass), "null\n");
        assert_eq!(prepare_response(&Choice::GameOver), "null\n");
    }

    #[test]
    fn turn_message_parses_from_server_json() {
        let json = r#"{"player": 1, "board": [[0,0],[1,2]]}"#;
        let msg: TurnMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.player, 1);
        assert_eq!(msg.board[1], vec![1, 2]);
    }

    #[test]
    fn game_outcome_parses_known_and_unknown_results() {
        let json = r#"{"status": "game-over", "gameResult": "player-one-won"}"#;
        let outcome: GameOutcome = serde_json::from_str(json).unwrap();
        assert!(outcome.is_game_over());
        assert_eq!(outcome.game_result, Some(GameResult::PlayerOneWon));

        let json = r#"{"status": "game-over", "gameResult": "stalemate"}"#;
        let outcome: GameOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.game_result, Some(GameResult::Other));

        let json = r#"{"status": "in-progress"}"#;
        let outcome: GameOutcome = serde_json::from_str(json).unwrap();
        assert!(!outcome.is_game_over());
        assert_eq!(outcome.game_result, None);
    }
}
