#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Floor,
    Wall,
    Hole,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn plus(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn scale(self, factor: i32) -> Vec2 {
        Vec2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupancy {
    Free,
    Seated,
}

/// A movable entity. The static tile grid never records actors; their
/// positions live here so they can move independently of the geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Actor {
    Player { pos: Vec2, facing: Direction },
    Box { pos: Vec2, occupancy: Occupancy },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}

/// Static geometry of one stage plus the actors it starts with.
/// Built once by the parser and read-only afterwards.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` entries.
    pub grid: Vec<Tile>,
    pub start_actors: Vec<Actor>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    Playing,
    Finished,
}

/// One snapshot of play. `status` is `Finished` exactly when every box
/// actor is seated.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub actors: Vec<Actor>,
    pub status: Status,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerTurn,
    PlayerMove,
    PlayerAndBoxMove,
}
