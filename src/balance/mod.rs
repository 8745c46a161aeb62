pub mod builder;
mod errors;
mod selection;

pub use builder::make_teams;
pub use errors::BalanceError;
