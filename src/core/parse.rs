use thiserror::Error;

use crate::core::{Actor, Direction, Level, Occupancy, Tile, Vec2};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLevelError {
    #[error("level plan has no rows")]
    EmptyPlan,
    #[error("row {row} is {got} tiles wide, expected {expected}")]
    UnevenRows {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("unrecognized symbol '{symbol}' at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
    #[error("level plan contains no player")]
    NoPlayer,
    #[error("level plan contains more than one player")]
    ExtraPlayer,
}

/// Parse a level plan into static geometry plus its starting actors.
///
/// Symbols:
/// - `.` = floor
/// - `#` = wall
/// - `O` = hole
/// - `@` = floor with the player on it (facing down)
/// - `=` = floor with a free box on it
/// - `+` = hole with a box already seated in it
///
/// Lines are trimmed before reading (plans are written indented in source)
/// and blank lines are not rows. Every row must match the first row's width.
pub fn parse(plan: &str) -> Result<Level, MalformedLevelError> {
    let rows: Vec<&str> = plan
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(MalformedLevelError::EmptyPlan);
    }

    let width = rows[0].chars().count();
    let height = rows.len();
    let mut grid = Vec::with_capacity(width * height);
    let mut start_actors = Vec::new();
    let mut player_seen = false;

    for (y, row) in rows.iter().enumerate() {
        let row_width = row.chars().count();
        if row_width != width {
            return Err(MalformedLevelError::UnevenRows {
                row: y,
                got: row_width,
                expected: width,
            });
        }
        for (x, symbol) in row.chars().enumerate() {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            let tile = match symbol {
                '.' => Tile::Floor,
                '#' => Tile::Wall,
                'O' => Tile::Hole,
                '@' => {
                    if player_seen {
                        return Err(MalformedLevelError::ExtraPlayer);
                    }
                    player_seen = true;
                    start_actors.push(Actor::Player {
                        pos,
                        facing: Direction::Down,
                    });
                    Tile::Floor
                }
                '=' => {
                    start_actors.push(Actor::Box {
                        pos,
                        occupancy: Occupancy::Free,
                    });
                    Tile::Floor
                }
                '+' => {
                    start_actors.push(Actor::Box {
                        pos,
                        occupancy: Occupancy::Seated,
                    });
                    Tile::Hole
                }
                other => {
                    return Err(MalformedLevelError::UnknownSymbol {
                        symbol: other,
                        x,
                        y,
                    });
                }
            };
            grid.push(tile);
        }
    }

    if !player_seen {
        return Err(MalformedLevelError::NoPlayer);
    }

    Ok(Level {
        width,
        height,
        grid,
        start_actors,
    })
}
