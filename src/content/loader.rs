//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::movement::MovementTuning;
use crate::world::Obstacle;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

fn parse<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse movement tuning. Omitted fields keep their defaults.
pub fn parse_tuning(file: &str, contents: &str) -> Result<MovementTuning, ContentLoadError> {
    parse(file, contents)
}

/// Parse a level file into obstacles, in file order.
pub fn parse_level(
    file: &str,
    contents: &str,
    grid_size: f32,
) -> Result<Vec<Obstacle>, ContentLoadError> {
    let data: DataFile<ObstacleDef> = parse(file, contents)?;
    Ok(data
        .items
        .iter()
        .map(|def| def.to_obstacle(grid_size))
        .collect())
}

pub fn load_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let contents = read_file(path)?;
    parse_tuning(&path.display().to_string(), &contents)
}

pub fn load_level(path: &Path, grid_size: f32) -> Result<Vec<Obstacle>, ContentLoadError> {
    let contents = read_file(path)?;
    parse_level(&path.display().to_string(), &contents, grid_size)
}
