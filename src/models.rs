use crate::core::{GameChangeType, GameState};

/// Everything the display adapter needs to draw one frame.
pub struct GameRenderState {
    pub game: GameState,
    pub level_name: String,
    /// 1-based position in the catalog.
    pub level_number: usize,
    pub level_count: usize,
    /// Accepted moves since the level was entered, net of undos.
    pub moves: usize,
    pub last_change: Option<GameChangeType>,
    pub help_visible: bool,
}
