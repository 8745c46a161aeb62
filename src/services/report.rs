use colored::Colorize;

use crate::domain::Team;

pub fn print_teams(team_a: &Team, team_b: &Team) {
    print_team("Team A", team_a);
    println!();
    print_team("Team B", team_b);
}

fn print_team(label: &str, team: &Team) {
    println!("{}", header(label, team).bold());
    println!("{team}");
}

fn header(label: &str, team: &Team) -> String {
    format!("{label} (Total tier = {})", team.tier_sum())
}
