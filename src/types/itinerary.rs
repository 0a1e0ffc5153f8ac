use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of a parsed itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayItinerary {
    pub id: Uuid,
    /// Day heading exactly as it appeared, e.g. "Day 1: Arrival"
    pub title: String,
    /// Newline-joined `header\nactivity\n...` strings in source order
    pub sections: Vec<String>,
}

impl DayItinerary {
    pub fn new(title: impl Into<String>, sections: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            sections,
        }
    }

    /// Re-split the sections into header and activities for display.
    pub fn time_sections(&self) -> Vec<TimeSection> {
        self.sections
            .iter()
            .map(|section| TimeSection::from_section(section))
            .collect()
    }
}

/// Time of day recognized as a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
        }
    }

    /// Prefix a line must start with to open a section of this period.
    pub fn header_prefix(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning:",
            TimePeriod::Afternoon => "Afternoon:",
            TimePeriod::Evening => "Evening:",
            TimePeriod::Night => "Night:",
        }
    }

    /// Strict match used by the parser: the line must start with the header prefix.
    pub fn from_header_line(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| line.starts_with(period.header_prefix()))
    }

    /// Loose match used for display: the first period named anywhere in the header.
    pub fn detect(header: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| header.contains(period.name()))
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "🌅",
            TimePeriod::Afternoon => "☀️",
            TimePeriod::Evening => "🌇",
            TimePeriod::Night => "🌙",
        }
    }
}

/// Glyph for headers that name no known period.
pub const FALLBACK_ICON: &str = "🕒";

/// Display view of a single section string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSection {
    pub period: Option<TimePeriod>,
    pub header: String,
    pub activities: Vec<String>,
}

impl TimeSection {
    pub fn from_section(section: &str) -> Self {
        let mut lines = section.lines();
        let header = lines.next().unwrap_or_default().to_string();
        let activities = lines.map(str::to_string).collect();

        Self {
            period: TimePeriod::detect(&header),
            header,
            activities,
        }
    }

    pub fn icon(&self) -> &'static str {
        self.period.map_or(FALLBACK_ICON, |period| period.icon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_requires_prefix_with_colon() {
        assert_eq!(
            TimePeriod::from_header_line("Morning: coffee"),
            Some(TimePeriod::Morning)
        );
        assert_eq!(TimePeriod::from_header_line("Night:"), Some(TimePeriod::Night));
        assert_eq!(TimePeriod::from_header_line("Morning"), None);
        assert_eq!(TimePeriod::from_header_line("morning:"), None);
        assert_eq!(TimePeriod::from_header_line("Late Morning:"), None);
    }

    #[test]
    fn section_is_resplit_into_header_and_activities() {
        let section = TimeSection::from_section("Afternoon: Old Town\nwalk\nlunch");
        assert_eq!(section.header, "Afternoon: Old Town");
        assert_eq!(section.activities, vec!["walk", "lunch"]);
        assert_eq!(section.period, Some(TimePeriod::Afternoon));
    }

    #[test]
    fn unknown_header_falls_back_to_default_icon() {
        let section = TimeSection::from_section("visit market");
        assert_eq!(section.period, None);
        assert_eq!(section.icon(), FALLBACK_ICON);
        assert!(section.activities.is_empty());
    }
}
