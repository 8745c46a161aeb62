use std::collections::HashSet;

use rand::Rng;

use super::errors::BalanceError;
use super::selection::{pick_side, select_for_team, Side};
use crate::domain::{RoleRating, Team};

const ROSTER_SIZE: usize = 10;

/// Split the rated pool into two balanced five-player teams.
///
/// The pool is sorted by tier descending, each team is seeded with one
/// random record, and the remaining slots are filled greedily: every turn
/// the team with the lower tier sum picks the next acceptable record its
/// cursor has not passed yet. Outputs vary run to run with `rng`; only the
/// structural invariants are stable.
pub fn make_teams(
    ratings: &[RoleRating],
    rng: &mut impl Rng,
) -> Result<(Team, Team), BalanceError> {
    validate_roster(ratings)?;

    let pool = sort_by_tier(ratings);
    let mut team_a = Team::new();
    let mut team_b = Team::new();
    let mut assigned = HashSet::new();

    seed_teams(&mut team_a, &mut team_b, &pool, &mut assigned, rng);
    fill_teams(&mut team_a, &mut team_b, &pool, &mut assigned)?;

    Ok((team_a, team_b))
}

fn validate_roster(ratings: &[RoleRating]) -> Result<(), BalanceError> {
    let distinct: HashSet<&str> = ratings.iter().map(|r| r.player.as_str()).collect();

    if distinct.len() != ROSTER_SIZE {
        return Err(BalanceError::RosterSize {
            found: distinct.len(),
        });
    }

    Ok(())
}

fn sort_by_tier(ratings: &[RoleRating]) -> Vec<RoleRating> {
    let mut pool = ratings.to_vec();
    // Stable sort: equal tiers keep their input order.
    pool.sort_by(|a, b| b.tier.cmp(&a.tier));
    pool
}

/// Give each team one random record from the whole pool. Randomizing the
/// first pick also keeps the top-tier players from always landing their
/// best role.
fn seed_teams(
    team_a: &mut Team,
    team_b: &mut Team,
    pool: &[RoleRating],
    assigned: &mut HashSet<String>,
    rng: &mut impl Rng,
) {
    let first = &pool[rng.gen_range(0..pool.len())];
    assigned.insert(first.player.clone());
    team_a.add(first.clone());

    loop {
        let candidate = &pool[rng.gen_range(0..pool.len())];
        if !assigned.contains(&candidate.player) {
            assigned.insert(candidate.player.clone());
            team_b.add(candidate.clone());
            break;
        }
    }
}

fn fill_teams(
    team_a: &mut Team,
    team_b: &mut Team,
    pool: &[RoleRating],
    assigned: &mut HashSet<String>,
) -> Result<(), BalanceError> {
    let mut cursor_a = 0;
    let mut cursor_b = 0;

    while !(team_a.is_full() && team_b.is_full()) {
        if cursor_a >= pool.len() && cursor_b >= pool.len() {
            return Err(BalanceError::UnsatisfiableRoles);
        }

        let side = pick_side(
            team_a,
            team_b,
            cursor_a >= pool.len(),
            cursor_b >= pool.len(),
        );
        match side {
            Side::A => cursor_a = select_for_team(team_a, pool, cursor_a, assigned),
            Side::B => cursor_b = select_for_team(team_b, pool, cursor_b, assigned),
        }
    }

    Ok(())
}
