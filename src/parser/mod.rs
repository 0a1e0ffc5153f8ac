//! Parser for the free-text itinerary returned by the generation service.
//!
//! The service is prompted to answer in a loose format:
//!
//! ```text
//! Day 1: Arrival
//! Morning:
//! - Check in
//! - Coffee near the hotel
//! Evening:
//! - Dinner by the river
//! ```
//!
//! Nothing about that format is guaranteed, so parsing never fails. Text
//! that doesn't fit is dropped and the caller gets whatever structure
//! could be recovered, possibly no days at all.

mod lines;

use crate::types::{DayItinerary, TimePeriod};
use lines::{activity_text, normalized_lines};
use tracing::{debug, trace};

/// Literal marker that opens every day block.
pub const DAY_MARKER: &str = "Day ";

/// Parse a raw itinerary into day records in the order they appear.
pub fn parse(raw: &str) -> Vec<DayItinerary> {
    let days: Vec<DayItinerary> = day_blocks(raw).filter_map(|block| parse_day(&block)).collect();

    debug!(
        target: "tripsight::parser",
        input_len = raw.len(),
        days = days.len(),
        "parsed itinerary"
    );
    days
}

/// Split the raw text on the day marker, restoring the marker on each block.
///
/// Text before the first marker and empty fragments between back-to-back
/// markers are discarded.
fn day_blocks(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(DAY_MARKER)
        .skip(1)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{DAY_MARKER}{fragment}"))
}

fn parse_day(block: &str) -> Option<DayItinerary> {
    let mut lines = normalized_lines(block);
    let Some(title) = lines.next() else {
        trace!(target: "tripsight::parser", "skipping blank day block");
        return None;
    };

    let sections = group_sections(lines);
    trace!(
        target: "tripsight::parser",
        title,
        sections = sections.len(),
        "parsed day"
    );
    Some(DayItinerary::new(title, sections))
}

/// Fold normalized lines into newline-joined sections.
///
/// A period header closes the running section and opens a new one; hyphen
/// lines are appended to the running section; anything else is dropped.
fn group_sections<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in lines {
        if TimePeriod::from_header_line(line).is_some() {
            flush_section(&mut current, &mut sections);
            current.push_str(line);
        } else if let Some(activity) = activity_text(line) {
            current.push('\n');
            current.push_str(activity);
        } else {
            trace!(target: "tripsight::parser", line, "dropping unrecognized line");
        }
    }

    flush_section(&mut current, &mut sections);
    sections
}

fn flush_section(current: &mut String, sections: &mut Vec<String>) {
    if !current.is_empty() {
        sections.push(current.trim().to_string());
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_before_first_marker_is_discarded() {
        let days = parse("Here is your plan!\nDay 1: Arrival\nMorning:\n- Check in");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].title, "Day 1: Arrival");
        assert_eq!(days[0].sections, vec!["Morning:\nCheck in"]);
    }

    #[test]
    fn back_to_back_markers_do_not_produce_empty_days() {
        let days = parse("Day Day 2: Museums");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].title, "Day 2: Museums");
    }

    #[test]
    fn trailing_marker_yields_bare_title() {
        assert_eq!(parse("Day 1: Arrival\nDay ").len(), 1);

        let days = parse("Day 1: Arrival\nDay \n");
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].title, "Day");
        assert!(days[1].sections.is_empty());
    }

    #[test]
    fn activities_before_any_header_form_their_own_section() {
        let days = parse("Day 1\n- early walk\nMorning:\n- breakfast");
        assert_eq!(days[0].sections, vec!["early walk", "Morning:\nbreakfast"]);
    }

    #[test]
    fn header_text_after_colon_is_kept() {
        let days = parse("Day 1\nEvening: Riverside\n- dinner");
        assert_eq!(days[0].sections, vec!["Evening: Riverside\ndinner"]);
    }

    #[test]
    fn consecutive_headers_produce_header_only_sections() {
        let days = parse("Day 1\nMorning:\nAfternoon:\n- nap");
        assert_eq!(days[0].sections, vec!["Morning:", "Afternoon:\nnap"]);
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert!(parse("day 1\nMorning:\n- coffee").is_empty());
        assert!(parse("DAY 1\nMorning:\n- coffee").is_empty());
    }
}
