#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_command_help_lists_each_command_once() {
    let entries = command_help();
    let quit: Vec<_> = entries.iter().filter(|(_, d)| *d == "Quit FinBoard").collect();
    assert_eq!(quit, vec![&("quit", "Quit FinBoard")]);
    assert!(entries.iter().any(|(name, _)| *name == "import-txns"));
}

#[test]
fn test_command_help_skips_single_letter_aliases() {
    assert!(command_help().iter().all(|(name, _)| name.len() > 1));
}

#[test]
fn test_command_help_is_sorted_by_name() {
    let names: Vec<&str> = command_help().iter().map(|(name, _)| *name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_centered_popup_fits_small_terminal() {
    let area = Rect::new(0, 0, 40, 10);
    let popup = centered(area, 84, 30);
    assert_eq!(popup, Rect::new(2, 1, 36, 8));
}
