pub use dissimilar::diff as __diff;

use crate::console_interface::render_game_to_string;
use crate::core::{Direction, GameState, GameUpdate, Level, advance, parse};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub game_state: GameState,
    pub level: Level,
}

impl GameTestState {
    pub fn new(plan: &str) -> Self {
        let level = parse(plan).expect("test level must parse");
        let game_state = level.initial_state();
        Self { game_state, level }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.level, &self.game_state)
            .trim_matches('\n')
            .into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> GameUpdate {
        let update = advance(&self.level, &self.game_state, direction);
        let GameUpdate::NextState(new_state, _change_type) = &update else {
            panic!(
                "Expected NextState update, got {:?}, in map {}",
                update,
                self.game_to_string()
            );
        };

        self.game_state = new_state.clone();
        update
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn try_step(&mut self, direction: Direction) -> GameUpdate {
        let update = advance(&self.level, &self.game_state, direction);
        if let GameUpdate::NextState(new_state, _change_type) = &update {
            self.game_state = new_state.clone();
        };

        update
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
