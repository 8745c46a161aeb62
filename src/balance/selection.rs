use std::collections::HashSet;

use crate::domain::{RoleRating, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    A,
    B,
}

/// The team with the strictly lower tier sum acts; on a tie, Team B acts.
/// A team whose cursor is exhausted yields its turn to the other team.
pub(crate) fn pick_side(
    team_a: &Team,
    team_b: &Team,
    a_exhausted: bool,
    b_exhausted: bool,
) -> Side {
    if a_exhausted {
        return Side::B;
    }
    if b_exhausted {
        return Side::A;
    }
    if team_a.tier_sum() < team_b.tier_sum() {
        Side::A
    } else {
        Side::B
    }
}

/// Scan the sorted pool from `cursor` and add the first record whose player
/// is unassigned and whose role the team still needs. Returns the new cursor,
/// which has moved past every record scanned this turn. A full team takes no
/// record and its cursor jumps past the end.
pub(crate) fn select_for_team(
    team: &mut Team,
    pool: &[RoleRating],
    mut cursor: usize,
    assigned: &mut HashSet<String>,
) -> usize {
    if team.is_full() {
        return pool.len();
    }

    while cursor < pool.len() {
        let candidate = &pool[cursor];
        cursor += 1;

        if !assigned.contains(&candidate.player) && !team.has_role(candidate.role) {
            assigned.insert(candidate.player.clone());
            team.add(candidate.clone());
            break;
        }
    }

    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn rating(player: &str, role: Role, tier: i32) -> RoleRating {
        RoleRating {
            player: player.to_string(),
            role,
            tier,
        }
    }

    fn team_with(ratings: &[RoleRating]) -> Team {
        let mut team = Team::new();
        for r in ratings {
            team.add(r.clone());
        }
        team
    }

    #[test]
    fn test_weaker_team_acts() {
        let team_a = team_with(&[rating("ann", Role::Top, 2)]);
        let team_b = team_with(&[rating("bob", Role::Top, 5)]);

        assert_eq!(pick_side(&team_a, &team_b, false, false), Side::A);
        assert_eq!(pick_side(&team_b, &team_a, false, false), Side::B);
    }

    #[test]
    fn test_tie_goes_to_team_b() {
        let team_a = team_with(&[rating("ann", Role::Top, 3)]);
        let team_b = team_with(&[rating("bob", Role::Mid, 3)]);

        assert_eq!(pick_side(&team_a, &team_b, false, false), Side::B);
    }

    #[test]
    fn test_exhausted_side_yields_turn() {
        let team_a = team_with(&[rating("ann", Role::Top, 1)]);
        let team_b = team_with(&[rating("bob", Role::Top, 9)]);

        // Team A is weaker but has no candidates left.
        assert_eq!(pick_side(&team_a, &team_b, true, false), Side::B);
        assert_eq!(pick_side(&team_a, &team_b, false, true), Side::A);
    }

    #[test]
    fn test_select_skips_assigned_players_and_taken_roles() {
        let pool = vec![
            rating("ann", Role::Top, 5),
            rating("bob", Role::Mid, 4),
            rating("cat", Role::Mid, 3),
        ];
        let mut team = team_with(&[rating("dan", Role::Top, 2)]);
        let mut assigned: HashSet<String> = ["dan".to_string(), "bob".to_string()].into();

        // "ann" is skipped (top taken), "bob" is skipped (already assigned),
        // "cat" lands.
        let cursor = select_for_team(&mut team, &pool, 0, &mut assigned);

        assert_eq!(cursor, 3);
        assert_eq!(team.get(Role::Mid).unwrap().player, "cat");
        assert!(assigned.contains("cat"));
    }

    #[test]
    fn test_select_stops_after_first_pick() {
        let pool = vec![
            rating("ann", Role::Top, 5),
            rating("bob", Role::Mid, 4),
        ];
        let mut team = Team::new();
        let mut assigned = HashSet::new();

        let cursor = select_for_team(&mut team, &pool, 0, &mut assigned);

        assert_eq!(cursor, 1);
        assert_eq!(team.filled_roles(), 1);
        assert_eq!(team.get(Role::Top).unwrap().player, "ann");
    }

    #[test]
    fn test_full_team_exhausts_cursor() {
        let pool = vec![rating("ann", Role::Top, 5)];
        let mut team = Team::new();
        for (i, &role) in crate::domain::ALL_ROLES.iter().enumerate() {
            team.add(rating(&format!("p{i}"), role, 1));
        }
        let mut assigned = HashSet::new();

        let cursor = select_for_team(&mut team, &pool, 0, &mut assigned);

        assert_eq!(cursor, pool.len());
        assert!(assigned.is_empty());
    }
}
