use crate::core::{Actor, Direction, GameState, Level, Occupancy, Status, Tile, Vec2};

/// `Finished` exactly when every box actor is seated. The player never
/// participates in the predicate, so a box-free level counts as finished.
pub(crate) fn status_of(actors: &[Actor]) -> Status {
    let all_seated = actors.iter().all(|actor| match actor {
        Actor::Box { occupancy, .. } => *occupancy == Occupancy::Seated,
        Actor::Player { .. } => true,
    });
    if all_seated {
        Status::Finished
    } else {
        Status::Playing
    }
}

impl Level {
    /// Tile at `pos`. Positions outside the grid read as `Wall`, so the
    /// border always blocks.
    pub fn tile(&self, pos: Vec2) -> Tile {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width as i32 || pos.y >= self.height as i32 {
            return Tile::Wall;
        }
        self.grid[pos.y as usize * self.width + pos.x as usize]
    }

    pub fn initial_state(&self) -> GameState {
        let actors = self.start_actors.clone();
        let status = status_of(&actors);
        GameState { actors, status }
    }
}

impl Actor {
    pub fn pos(&self) -> Vec2 {
        match self {
            Actor::Player { pos, .. } => *pos,
            Actor::Box { pos, .. } => *pos,
        }
    }
}

impl GameState {
    /// Index of the player actor. The parser guarantees exactly one exists.
    pub fn player_index(&self) -> usize {
        self.actors
            .iter()
            .position(|actor| matches!(actor, Actor::Player { .. }))
            .expect("level invariant: exactly one player")
    }

    pub fn player(&self) -> (Vec2, Direction) {
        match self.actors[self.player_index()] {
            Actor::Player { pos, facing } => (pos, facing),
            Actor::Box { .. } => unreachable!("player_index points at a player"),
        }
    }

    /// Index of the box standing on `pos`, if any.
    pub fn box_at(&self, pos: Vec2) -> Option<usize> {
        self.actors
            .iter()
            .position(|actor| matches!(actor, Actor::Box { pos: p, .. } if *p == pos))
    }

    pub fn occupied(&self, pos: Vec2) -> bool {
        self.actors.iter().any(|actor| actor.pos() == pos)
    }

    pub fn is_won(&self) -> bool {
        status_of(&self.actors) == Status::Finished
    }
}
