pub mod balance;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod roster;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::build::BuildService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_make(players: &[String]) -> Result<()> {
    let config = AppConfig::new();
    let service = BuildService::new(config);
    service.run(players)
}
