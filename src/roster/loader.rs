use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::settings::RosterSettings;
use crate::domain::RoleRating;
use crate::errors::{parse_context, read_context};

/// Load every role rating for the requested players, one CSV file per
/// player under the configured data directory. Rows carry `player`, `role`
/// and `tier` columns.
pub fn load_roster(players: &[String], settings: &RosterSettings) -> Result<Vec<RoleRating>> {
    let mut ratings = Vec::new();

    for name in players {
        let path = roster_path(name, settings);
        ratings.extend(load_player_file(&path)?);
    }

    Ok(ratings)
}

fn roster_path(name: &str, settings: &RosterSettings) -> PathBuf {
    settings.data_dir.join(format!("{name}.{}", settings.extension))
}

fn load_player_file(path: &Path) -> Result<Vec<RoleRating>> {
    let mut reader = csv::Reader::from_path(path).with_context(|| read_context(path))?;
    let mut ratings = Vec::new();

    for row in reader.deserialize() {
        let rating: RoleRating = row.with_context(|| parse_context(path))?;
        ratings.push(rating);
    }

    Ok(ratings)
}
