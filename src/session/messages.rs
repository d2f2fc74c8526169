//! Lines printed to the normal screen around an interactive session.

use crate::consts::cli_consts::KEY_HINTS;
use crate::theme::ThemeState;

pub fn starting_message() -> String {
    format!("Opening social-pulse dashboard ({})", KEY_HINTS)
}

/// The theme is not persisted, so the next run starts light again.
pub fn exit_message(theme: ThemeState) -> String {
    if theme.is_dark {
        format!(
            "Dashboard closed in {} theme; the next run opens in light theme",
            theme.name()
        )
    } else {
        format!("Dashboard closed in {} theme", theme.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_message_lists_keys() {
        let message = starting_message();
        assert!(message.contains("[T] Toggle theme"));
        assert!(message.contains("[Q] Quit"));
    }

    #[test]
    fn test_exit_message_names_final_theme() {
        assert_eq!(
            exit_message(ThemeState::default()),
            "Dashboard closed in light theme"
        );
        let dark = exit_message(ThemeState { is_dark: true });
        assert!(dark.starts_with("Dashboard closed in dark theme"));
        assert!(dark.ends_with("opens in light theme"));
    }
}
