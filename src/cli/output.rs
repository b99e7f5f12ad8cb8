//! Output formatting for CLI

use crate::{
    pipeline::TrainingResult,
    tictactoe::{GameOutcome, Position},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print win/draw/loss counts with percentages
pub fn print_result(result: &TrainingResult) {
    print_kv("Games", &format_number(result.total_games));
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", format_number(result.wins), result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", format_number(result.draws), result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", format_number(result.losses), result.loss_rate * 100.0),
    );
}

/// Print the board followed by a one-line result
pub fn print_final(position: &Position, outcome: GameOutcome) {
    println!("\n{}", position.board);
    match outcome {
        GameOutcome::Win(player) => println!("Game result: {player} wins"),
        GameOutcome::Draw => println!("Game result: draw"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549_946), "549,946");
    }
}
