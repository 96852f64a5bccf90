//! Terminal output for the one-shot CLI flow
//!
//! Rendering is intentionally thin: plain styled lines, no widgets or
//! layout. The formatting helpers are pure so they can be tested without
//! a terminal.

use crossterm::style::{Color, Stylize};

use crate::api::models::{BasicLeague, LeagueDetail, Roster};
use crate::scoring::DisplayableSetting;
use crate::session::Session;

/// Formats a scoring value without trailing zeros (1.0 -> "1", 0.04 -> "0.04").
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// One line of the league list.
pub fn format_league_line(league: &BasicLeague) -> String {
    format!("  {}  {} ({})", league.league_id, league.name, league.season)
}

/// One line of the curated scoring list.
pub fn format_setting_line(setting: &DisplayableSetting) -> String {
    format!("  {:<28} {}", setting.label, format_value(setting.value))
}

/// One standings line, ranked by fantasy points.
pub fn format_standings_line(rank: usize, roster: &Roster) -> String {
    let owner = roster
        .owner_display_name
        .as_deref()
        .unwrap_or("Team Available / CPU");
    let record = format!(
        "{}-{}-{}",
        roster.wins.unwrap_or(0),
        roster.losses.unwrap_or(0),
        roster.ties.unwrap_or(0)
    );
    match roster.fpts {
        Some(fpts) => format!("  {rank:>2}. {owner:<24} {record:>7}  {fpts:.2}"),
        None => format!("  {rank:>2}. {owner:<24} {record:>7}  -"),
    }
}

/// Header line for a loaded league detail.
pub fn format_detail_header(detail: &LeagueDetail) -> String {
    let mut header = format!(
        "{} — season {}, {} rosters, {}",
        detail.name, detail.season, detail.total_rosters, detail.status
    );
    if let Some(kind) = detail.league_type_name() {
        header.push_str(&format!(" ({kind})"));
    }
    header
}

/// Prints the whole session state: identity, leagues, and (when loaded)
/// league detail with curated scoring settings and standings. Stage
/// errors print in place of the stage's content; earlier stages render
/// normally.
pub fn print_session(session: &Session) {
    match (session.identity(), session.identity_error()) {
        (Some(user), _) => {
            println!(
                "{} {} ({})",
                "Resolved:".with(Color::Green),
                user.display_name,
                user.user_id
            );
        }
        (None, Some(error)) => {
            println!("{}", error.to_string().with(Color::Red));
            return;
        }
        (None, None) => return,
    }

    println!();
    if let Some(error) = session.leagues_error() {
        println!("{}", error.to_string().with(Color::Red));
    } else if session.has_no_leagues() {
        println!(
            "{}",
            format!("No leagues found for season {}.", session.season()).with(Color::Yellow)
        );
    } else {
        println!("Leagues for season {}:", session.season());
        for league in session.leagues() {
            println!("{}", format_league_line(league));
        }
    }

    if let Some(error) = session.detail_error() {
        println!();
        println!("{}", error.to_string().with(Color::Red));
        return;
    }
    let Some(detail) = session.detail() else {
        return;
    };

    println!();
    println!("{}", format_detail_header(detail).with(Color::Cyan));

    let summary = session.scoring_summary();
    println!();
    if summary.is_empty() {
        println!("  No notable scoring settings.");
    } else {
        println!("Scoring highlights:");
        for setting in &summary {
            println!("{}", format_setting_line(setting));
        }
    }

    if !detail.rosters.is_empty() {
        println!();
        println!("Standings by points:");
        for (i, roster) in detail.rosters_by_fpts().iter().enumerate() {
            println!("{}", format_standings_line(i + 1, roster));
        }
    }
}
