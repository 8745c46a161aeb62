use anyhow::Result;
use log::info;

use crate::balance::make_teams;
use crate::config::settings::AppConfig;
use crate::roster::load_roster;
use crate::services::report;

pub struct BuildService {
    config: AppConfig,
}

impl BuildService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, players: &[String]) -> Result<()> {
        let ratings = load_roster(players, &self.config.roster)?;
        info!(
            "Loaded {} role ratings from {} roster files",
            ratings.len(),
            players.len()
        );

        let mut rng = rand::thread_rng();
        let (team_a, team_b) = make_teams(&ratings, &mut rng)?;
        info!(
            "Teams built: {} vs {} total tier",
            team_a.tier_sum(),
            team_b.tier_sum()
        );

        report::print_teams(&team_a, &team_b);
        Ok(())
    }
}
