//! Line-based input parsing for the launcher prompt.

use portal_core::Move;

/// An action parsed from one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Launch the application at a 1-based cell number on the current page.
    LaunchNumber(usize),
    /// Launch the currently selected application.
    LaunchSelected,
    /// Move the cursor on the grid.
    Cursor(Move),
    NextPage,
    PrevPage,
    /// Drop the session.
    SignOut,
    /// Discard the view and fetch the catalog again.
    Reload,
    Help,
    Quit,
    /// Anything unrecognised; echoed back with the help hint.
    Unknown(String),
}

/// Parse a single input line into an [`Action`].
pub fn parse_line(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::LaunchSelected;
    }
    if let Ok(n) = line.parse::<usize>()
        && n > 0
    {
        return Action::LaunchNumber(n);
    }
    match line {
        "a" | "h" | "left" => Action::Cursor(Move::Left),
        "d" | "l" | "right" => Action::Cursor(Move::Right),
        "w" | "k" | "up" => Action::Cursor(Move::Up),
        "s" | "j" | "down" => Action::Cursor(Move::Down),
        "n" | "next" => Action::NextPage,
        "p" | "prev" => Action::PrevPage,
        "signout" | "logout" => Action::SignOut,
        "r" | "reload" | "remount" => Action::Reload,
        "?" | "help" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => Action::Unknown(other.to_string()),
    }
}

/// The help text shown for `?` and unknown input.
pub const HELP: &str = "\
Commands:
  <enter>     launch the selected application
  1..9        launch by cell number
  w/a/s/d     move the cursor (also h/j/k/l, up/down/left/right)
  n, p        next / previous page
  r           reload the catalog
  signout     drop the session (launches become unauthenticated)
  ?           this help
  q           quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_launches_selection() {
        assert_eq!(parse_line(""), Action::LaunchSelected);
        assert_eq!(parse_line("   "), Action::LaunchSelected);
    }

    #[test]
    fn numbers_launch_by_cell() {
        assert_eq!(parse_line("1"), Action::LaunchNumber(1));
        assert_eq!(parse_line(" 12 "), Action::LaunchNumber(12));
    }

    #[test]
    fn zero_is_not_a_cell() {
        assert_eq!(parse_line("0"), Action::Unknown("0".to_string()));
    }

    #[test]
    fn cursor_keys() {
        assert_eq!(parse_line("a"), Action::Cursor(Move::Left));
        assert_eq!(parse_line("d"), Action::Cursor(Move::Right));
        assert_eq!(parse_line("w"), Action::Cursor(Move::Up));
        assert_eq!(parse_line("s"), Action::Cursor(Move::Down));
        assert_eq!(parse_line("k"), Action::Cursor(Move::Up));
        assert_eq!(parse_line("right"), Action::Cursor(Move::Right));
    }

    #[test]
    fn paging_and_meta() {
        assert_eq!(parse_line("n"), Action::NextPage);
        assert_eq!(parse_line("prev"), Action::PrevPage);
        assert_eq!(parse_line("signout"), Action::SignOut);
        assert_eq!(parse_line("r"), Action::Reload);
        assert_eq!(parse_line("remount"), Action::Reload);
        assert_eq!(parse_line("?"), Action::Help);
        assert_eq!(parse_line("q"), Action::Quit);
    }

    #[test]
    fn unknown_input_is_preserved() {
        assert_eq!(parse_line("launch all"), Action::Unknown("launch all".to_string()));
    }
}
