use crate::core::model_helpers::status_of;
use crate::core::{
    Actor, Direction, GameChangeType, GameState, GameUpdate, Level, Occupancy, Tile, Vec2,
};

/// Derive the successor of `state` for one directional input. Never mutates
/// its input; a fully rejected turn is reported as `NoChange` instead of an
/// equal-but-new state.
pub fn advance(level: &Level, state: &GameState, direction: Direction) -> GameUpdate {
    let player_index = state.player_index();
    let Actor::Player { pos, facing } = state.actors[player_index] else {
        unreachable!("player_index points at a player");
    };

    let candidate = pos.plus(direction.unit());

    if level.tile(candidate) == Tile::Wall {
        // Bumping a wall turns the player in place; nothing else moves.
        if facing == direction {
            return GameUpdate::NoChange;
        }
        return finish_turn(state, player_index, pos, direction, GameChangeType::PlayerTurn);
    }

    if let Some(box_index) = state.box_at(candidate) {
        let beyond = pos.plus(direction.unit().scale(2));
        // Obstruction checks use pre-move positions. A box never pushes
        // another box, and the whole turn is rejected when blocked.
        if level.tile(beyond) == Tile::Wall || state.occupied(beyond) {
            return GameUpdate::NoChange;
        }
        let occupancy = if level.tile(beyond) == Tile::Hole {
            Occupancy::Seated
        } else {
            Occupancy::Free
        };

        let mut actors = state.actors.clone();
        actors[box_index] = Actor::Box {
            pos: beyond,
            occupancy,
        };
        actors[player_index] = Actor::Player {
            pos: candidate,
            facing: direction,
        };
        let status = status_of(&actors);
        return GameUpdate::NextState(
            GameState { actors, status },
            GameChangeType::PlayerAndBoxMove,
        );
    }

    finish_turn(
        state,
        player_index,
        candidate,
        direction,
        GameChangeType::PlayerMove,
    )
}

fn finish_turn(
    state: &GameState,
    player_index: usize,
    pos: Vec2,
    facing: Direction,
    change: GameChangeType,
) -> GameUpdate {
    let mut actors = state.actors.clone();
    actors[player_index] = Actor::Player { pos, facing };
    let status = status_of(&actors);
    GameUpdate::NextState(GameState { actors, status }, change)
}
