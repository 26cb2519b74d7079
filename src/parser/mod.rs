mod types;

pub use types::*;

/// Length of a trailing `(YYYY)` group
const YEAR_GROUP_LEN: usize = 6;

/// Extract a title/year guess from a folder name.
///
/// The year is only recognised as a whitespace-separated `(YYYY)` group at
/// the very end of the name. Anything else, including a year group followed
/// by more text, returns the raw name untouched as the title.
pub fn parse_folder_name(raw: &str) -> ParsedGuess {
    match split_trailing_year(raw) {
        Some((title, year)) => ParsedGuess::new(title, Some(year.to_string())),
        None => ParsedGuess::new(raw, None),
    }
}

fn split_trailing_year(raw: &str) -> Option<(&str, &str)> {
    if raw.len() < YEAR_GROUP_LEN {
        return None;
    }

    let split_at = raw.len() - YEAR_GROUP_LEN;
    // A multi-byte character straddling the boundary cannot be part of "(YYYY)"
    if !raw.is_char_boundary(split_at) {
        return None;
    }

    let (head, group) = raw.split_at(split_at);
    let digits = group.strip_prefix('(')?.strip_suffix(')')?;

    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let title = head.trim_end();
    if title.len() == head.len() {
        // No whitespace between the title and the year group
        return None;
    }

    Some((title, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_year() {
        let guess = parse_folder_name("Beverly Hills Cop Axel F (2024)");
        assert_eq!(guess.title, "Beverly Hills Cop Axel F");
        assert_eq!(guess.year(), Some("2024"));
    }

    #[test]
    fn test_parse_without_year() {
        let guess = parse_folder_name("Some Movie");
        assert_eq!(guess.title, "Some Movie");
        assert!(guess.year.is_none());
    }

    #[test]
    fn test_year_in_middle_is_not_matched() {
        let guess = parse_folder_name("Movie (2024) Extended");
        assert_eq!(guess.title, "Movie (2024) Extended");
        assert!(guess.year.is_none());
    }

    #[test]
    fn test_only_last_group_is_the_year() {
        let guess = parse_folder_name("Blade Runner (1982) (2017)");
        assert_eq!(guess.title, "Blade Runner (1982)");
        assert_eq!(guess.year(), Some("2017"));
    }

    #[test]
    fn test_other_parentheticals_stay_in_title() {
        let guess = parse_folder_name("Nosferatu (Remastered) (1922)");
        assert_eq!(guess.title, "Nosferatu (Remastered)");
        assert_eq!(guess.year(), Some("1922"));

        let guess = parse_folder_name("Nosferatu (Remastered)");
        assert_eq!(guess.title, "Nosferatu (Remastered)");
        assert!(guess.year.is_none());
    }

    #[test]
    fn test_boundary_shapes_are_rejected() {
        for raw in [
            "Movie (202)",
            "Movie (20245)",
            "Movie ()",
            "Movie (abcd)",
            "Movie(2024)",
            "Movie (2024) ",
            "Movie (2024).",
            "Movie [2024]",
            "(2024)",
            "2024",
        ] {
            let guess = parse_folder_name(raw);
            assert_eq!(guess.title, raw, "raw: {:?}", raw);
            assert!(guess.year.is_none(), "raw: {:?}", raw);
        }
    }

    #[test]
    fn test_whitespace_run_before_year_is_stripped() {
        let guess = parse_folder_name("Heat  \t(1995)");
        assert_eq!(guess.title, "Heat");
        assert_eq!(guess.year(), Some("1995"));
    }

    #[test]
    fn test_empty_title_with_year() {
        let guess = parse_folder_name(" (1999)");
        assert_eq!(guess.title, "");
        assert_eq!(guess.year(), Some("1999"));
    }

    #[test]
    fn test_non_ascii_titles() {
        let guess = parse_folder_name("Amélie (2001)");
        assert_eq!(guess.title, "Amélie");
        assert_eq!(guess.year(), Some("2001"));

        // Full-width digits are not a year
        let guess = parse_folder_name("Movie (２０２４)");
        assert_eq!(guess.title, "Movie (２０２４)");
        assert!(guess.year.is_none());

        let guess = parse_folder_name("東京物語");
        assert_eq!(guess.title, "東京物語");
        assert!(guess.year.is_none());
    }

    #[test]
    fn test_round_trip_property() {
        let titles = ["Heat", "Se7en", "The Thing (Uncut)", "2001: A Space Odyssey"];
        let years = ["1982", "1995", "2001", "0000"];

        for title in titles {
            for year in years {
                let raw = format!("{} ({})", title, year);
                let guess = parse_folder_name(&raw);
                assert_eq!(guess.title, title);
                assert_eq!(guess.year(), Some(year));
            }
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            parse_folder_name("Heat (1995)").describe(),
            "\"Heat\" (1995)"
        );
        assert_eq!(parse_folder_name("Heat").describe(), "\"Heat\"");
    }
}
