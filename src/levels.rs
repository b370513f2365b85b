use crate::core::{Level, MalformedLevelError, parse};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One level as it appears in a pack file: a display name and the
/// symbol-grid plan that [`parse`] understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    pub name: String,
    pub plan: String,
}

/// A level that has already been through the parser.
#[derive(Debug, Clone)]
pub struct LoadedLevel {
    pub name: String,
    pub level: Level,
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("could not read level pack: {0}")]
    Io(#[from] std::io::Error),
    #[error("level pack is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level pack contains no levels")]
    Empty,
    #[error("level {name:?} is malformed: {source}")]
    BadLevel {
        name: String,
        source: MalformedLevelError,
    },
}

/// The bundled catalog, played when no pack file is given.
pub fn builtin_levels() -> Vec<LevelSpec> {
    let plans = [
        (
            "First push",
            r#"
#######
#.....#
#.@=O.#
#.....#
#######"#,
        ),
        (
            "Around the corner",
            r#"
########
#..O...#
#..=...#
#...@..#
#......#
########"#,
        ),
        (
            "Both sides",
            r#"
#########
#.......#
#.O=@=O.#
#.......#
#########"#,
        ),
        (
            "Already home",
            r#"
#########
#...#...#
#.@=.O..#
#...#.+.#
#.......#
#########"#,
        ),
        (
            "Three in a row",
            r#"
##########
#........#
#..OOO...#
#..===...#
#....@...#
##########"#,
        ),
    ];
    plans
        .into_iter()
        .map(|(name, plan)| LevelSpec {
            name: name.to_string(),
            plan: plan.to_string(),
        })
        .collect()
}

/// Decode a pack from its JSON text: an array of `{"name", "plan"}` objects.
pub fn parse_level_pack(json: &str) -> Result<Vec<LevelSpec>, PackError> {
    let specs: Vec<LevelSpec> = serde_json::from_str(json)?;
    if specs.is_empty() {
        return Err(PackError::Empty);
    }
    Ok(specs)
}

pub fn load_level_pack(path: &Path) -> Result<Vec<LevelSpec>, PackError> {
    let json = std::fs::read_to_string(path)?;
    parse_level_pack(&json)
}

/// Parse every plan up front so a bad level is reported by name before
/// the terminal is taken over.
pub fn compile_levels(specs: &[LevelSpec]) -> Result<Vec<LoadedLevel>, PackError> {
    specs
        .iter()
        .map(|spec| match parse(&spec.plan) {
            Ok(level) => Ok(LoadedLevel {
                name: spec.name.clone(),
                level,
            }),
            Err(source) => Err(PackError::BadLevel {
                name: spec.name.clone(),
                source,
            }),
        })
        .collect()
}
