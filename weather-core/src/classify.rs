//! Condition code → icon and joke classification.
//!
//! Both tables are fixed at compile time. Icons use an exact-match table with a
//! clear-sky default; jokes use ordered substring checks on the raw code.

use serde::{Deserialize, Serialize};

use crate::model::ConditionCode;

/// Presentation bucket used to pick an animated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKey {
    ClearSky,
    PartlyCloudy,
    OvercastRain,
    ThunderOrDrizzleRain,
    Snow,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::ClearSky => "clear-sky",
            IconKey::PartlyCloudy => "partly-cloudy",
            IconKey::OvercastRain => "overcast-rain",
            IconKey::ThunderOrDrizzleRain => "thunder-or-drizzle-rain",
            IconKey::Snow => "snow",
        }
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_ICON: IconKey = IconKey::ClearSky;

pub const ICON_TABLE: [(&str, IconKey); 14] = [
    ("01d", IconKey::ClearSky),
    ("01n", IconKey::ClearSky),
    ("02d", IconKey::PartlyCloudy),
    ("02n", IconKey::PartlyCloudy),
    ("03d", IconKey::PartlyCloudy),
    ("03n", IconKey::PartlyCloudy),
    ("04d", IconKey::OvercastRain),
    ("04n", IconKey::OvercastRain),
    ("09d", IconKey::ThunderOrDrizzleRain),
    ("09n", IconKey::ThunderOrDrizzleRain),
    ("10d", IconKey::ThunderOrDrizzleRain),
    ("10n", IconKey::ThunderOrDrizzleRain),
    ("13d", IconKey::Snow),
    ("13n", IconKey::Snow),
];

/// Exact-match lookup; unknown codes fall back to [`DEFAULT_ICON`].
pub fn icon_for(code: &ConditionCode) -> IconKey {
    ICON_TABLE
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JokeCategory {
    Clear,
    Cloud,
    Rain,
    Snow,
    Drizzle,
}

impl JokeCategory {
    pub const fn all() -> &'static [JokeCategory] {
        &[
            JokeCategory::Clear,
            JokeCategory::Cloud,
            JokeCategory::Rain,
            JokeCategory::Snow,
            JokeCategory::Drizzle,
        ]
    }

    /// First match wins. Order matters: a code containing both "01" and "13"
    /// is a clear-sky code.
    pub fn classify(code: &ConditionCode) -> Self {
        let raw = code.as_str();

        if raw.contains("01") || raw.contains("02") {
            JokeCategory::Clear
        } else if raw.contains("03") || raw.contains("04") {
            JokeCategory::Cloud
        } else if raw.contains("09") || raw.contains("10") {
            JokeCategory::Rain
        } else if raw.contains("13") {
            JokeCategory::Snow
        } else {
            JokeCategory::Drizzle
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            JokeCategory::Clear => "Why did the weather report go to jail? For being too sunny!",
            JokeCategory::Cloud => "Why did the cloud go to school? To improve its cirrus-ness!",
            JokeCategory::Rain => "What do you call a rainy day in a desert? A wet dream!",
            JokeCategory::Snow => "Why don’t snowmen like the sun? Because it melts their hearts!",
            JokeCategory::Drizzle => {
                "What does a drizzle say? Just a little bit more moisture, please!"
            }
        }
    }
}

pub fn joke_for(code: &ConditionCode) -> &'static str {
    JokeCategory::classify(code).text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ConditionCode {
        ConditionCode::from(s)
    }

    #[test]
    fn every_table_entry_maps_to_its_icon() {
        for (raw, expected) in ICON_TABLE {
            assert_eq!(icon_for(&code(raw)), expected, "code {raw}");
        }
    }

    #[test]
    fn icon_table_covers_day_and_night_variants() {
        for prefix in ["01", "02", "03", "04", "09", "10", "13"] {
            let day = icon_for(&code(&format!("{prefix}d")));
            let night = icon_for(&code(&format!("{prefix}n")));
            assert_eq!(day, night, "prefix {prefix}");
        }
    }

    #[test]
    fn unknown_codes_default_to_clear_sky() {
        for raw in ["11d", "50n", "", "10x", "garbage"] {
            assert_eq!(icon_for(&code(raw)), IconKey::ClearSky, "code {raw:?}");
        }
    }

    #[test]
    fn joke_categories_follow_prefix_order() {
        assert_eq!(JokeCategory::classify(&code("01d")), JokeCategory::Clear);
        assert_eq!(JokeCategory::classify(&code("02n")), JokeCategory::Clear);
        assert_eq!(JokeCategory::classify(&code("03d")), JokeCategory::Cloud);
        assert_eq!(JokeCategory::classify(&code("04n")), JokeCategory::Cloud);
        assert_eq!(JokeCategory::classify(&code("09d")), JokeCategory::Rain);
        assert_eq!(JokeCategory::classify(&code("10n")), JokeCategory::Rain);
        assert_eq!(JokeCategory::classify(&code("13d")), JokeCategory::Snow);
    }

    #[test]
    fn thunderstorm_and_mist_fall_through_to_drizzle() {
        assert_eq!(JokeCategory::classify(&code("11d")), JokeCategory::Drizzle);
        assert_eq!(JokeCategory::classify(&code("50n")), JokeCategory::Drizzle);
        assert_eq!(JokeCategory::classify(&code("")), JokeCategory::Drizzle);
    }

    #[test]
    fn earlier_checks_win_on_overlapping_substrings() {
        assert_eq!(JokeCategory::classify(&code("0113")), JokeCategory::Clear);
        assert_eq!(JokeCategory::classify(&code("1304")), JokeCategory::Cloud);
        assert_eq!(JokeCategory::classify(&code("1310")), JokeCategory::Rain);
    }

    #[test]
    fn joke_texts_are_distinct() {
        let all = JokeCategory::all();
        let texts: std::collections::HashSet<_> = all.iter().map(JokeCategory::text).collect();
        assert_eq!(texts.len(), all.len());
    }

    #[test]
    fn joke_for_returns_category_text() {
        assert_eq!(joke_for(&code("10d")), JokeCategory::Rain.text());
        assert!(joke_for(&code("13n")).contains("snowmen"));
    }

    #[test]
    fn icon_key_serializes_kebab_case() {
        let json = serde_json::to_string(&IconKey::ThunderOrDrizzleRain);
        let json = json.unwrap();
        assert_eq!(json, "\"thunder-or-drizzle-rain\"");
        assert_eq!(IconKey::OvercastRain.to_string(), "overcast-rain");
    }
}
