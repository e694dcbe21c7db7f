use super::types::{RiotId, StatsError};

/// Invisible direction marks. The LoL client wraps copied Riot IDs in U+2066/U+2069.
const BIDI_CONTROLS: [char; 11] = [
    '\u{200E}', '\u{200F}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
    '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}',
];

/// Splits `Name#Tag` on the first `#`.
pub fn parse_riot_id(raw: &str) -> Result<RiotId, StatsError> {
    let cleaned: String = raw.chars().filter(|c| !BIDI_CONTROLS.contains(c)).collect();

    let (game_name, tag_line) = match cleaned.split_once('#') {
        Some((name, tag)) => (name.trim(), Some(tag.trim())),
        None => (cleaned.trim(), None),
    };

    if game_name.is_empty() {
        return Err(StatsError::MissingName);
    }
    let tag_line = tag_line.ok_or(StatsError::MissingTag)?;

    Ok(RiotId {
        game_name: game_name.to_string(),
        tag_line: tag_line.to_string(),
    })
}

/// `Alice's` but `Chaos` (no trailing `'s` after an s).
pub fn possessive(name: &str) -> String {
    if name.ends_with('s') || name.ends_with('S') {
        name.to_string()
    } else {
        format!("{}'s", name)
    }
}

pub fn format_duration(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

pub fn format_kda(kda: f64) -> String {
    format!("{:.2}", kda)
}

/// Fraction to a whole percentage, halves rounded away from zero.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", (fraction * 100.0).round())
}

/// Farm per minute, truncated (not rounded) to one decimal.
pub fn cs_per_minute(cs: u32, duration_seconds: u64) -> f64 {
    if duration_seconds == 0 {
        return 0.0;
    }
    let minutes = duration_seconds as f64 / 60.0;
    ((cs as f64 / minutes) * 10.0).trunc() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_tag() {
        assert_eq!(
            parse_riot_id("Name#Tag").unwrap(),
            RiotId {
                game_name: "Name".to_string(),
                tag_line: "Tag".to_string()
            }
        );
    }

    #[test]
    fn strips_direction_marks_before_splitting() {
        let id = parse_riot_id("\u{2066}Alice\u{2069}#\u{2066}EUW\u{2069}").unwrap();
        assert_eq!(id.game_name, "Alice");
        assert_eq!(id.tag_line, "EUW");

        let id = parse_riot_id("\u{200F}Bob#\u{202E}1234").unwrap();
        assert_eq!(id.game_name, "Bob");
        assert_eq!(id.tag_line, "1234");
    }

    #[test]
    fn splits_on_the_first_hash_only() {
        let id = parse_riot_id("Name#Tag#Extra").unwrap();
        assert_eq!(id.game_name, "Name");
        assert_eq!(id.tag_line, "Tag#Extra");
    }

    #[test]
    fn missing_name_or_tag() {
        assert!(matches!(parse_riot_id("#Tag"), Err(StatsError::MissingName)));
        assert!(matches!(parse_riot_id("Name"), Err(StatsError::MissingTag)));
        assert!(matches!(parse_riot_id(""), Err(StatsError::MissingName)));
        assert!(matches!(
            parse_riot_id("\u{2066}#EUW\u{2069}"),
            Err(StatsError::MissingName)
        ));
    }

    #[test]
    fn empty_tag_after_hash_is_still_a_tag() {
        let id = parse_riot_id("Name#").unwrap();
        assert_eq!(id.tag_line, "");
    }

    #[test]
    fn possessive_drops_apostrophe_after_s() {
        assert_eq!(possessive("Alice"), "Alice's");
        assert_eq!(possessive("Chaos"), "Chaos");
        assert_eq!(possessive("BOSS"), "BOSS");
    }

    #[test]
    fn duration_in_minutes_and_seconds() {
        assert_eq!(format_duration(1530), "25m 30s");
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(1200), "20m 0s");
    }

    #[test]
    fn kda_has_two_decimals() {
        assert_eq!(format_kda(0.5), "0.50");
        assert_eq!(format_kda(3.0), "3.00");
        assert_eq!(format_kda(2.3333333), "2.33");
    }

    #[test]
    fn percent_is_rounded() {
        assert_eq!(format_percent(0.456), "46%");
        assert_eq!(format_percent(0.62), "62%");
        assert_eq!(format_percent(0.125), "13%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn cs_per_minute_truncates() {
        assert_eq!(format!("{:.1}", cs_per_minute(100, 1200)), "5.0");
        assert_eq!(format!("{:.1}", cs_per_minute(107, 1200)), "5.3");
        assert_eq!(format!("{:.1}", cs_per_minute(179, 1200)), "8.9");
        assert_eq!(cs_per_minute(50, 0), 0.0);
    }
}
