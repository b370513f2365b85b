mod model_helpers;
mod models;
mod parse;
mod undo;
mod update;

pub use models::{
    Actor, Direction, GameChangeType, GameState, GameUpdate, Level, Occupancy, Status, Tile,
    UserAction, Vec2,
};
pub use parse::{MalformedLevelError, parse};
pub use undo::UndoHistory;
pub use update::advance;
