mod cli;
mod tui;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

/// Expand a leading `~/` to `$HOME`.
pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::shellexpand;

    #[test]
    fn test_shellexpand_leaves_plain_paths() {
        assert_eq!(shellexpand("budget.csv"), "budget.csv");
        assert_eq!(shellexpand("/tmp/~/x.csv"), "/tmp/~/x.csv");
    }

    #[test]
    fn test_shellexpand_home() {
        let expanded = shellexpand("~/budget.csv");
        assert!(expanded.ends_with("/budget.csv"));
        assert!(!expanded.starts_with('~'));
    }
}
