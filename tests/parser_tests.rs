use tripsight::{parse, DayItinerary, TimePeriod};

const TWO_DAYS: &str = "Day 1: X\nMorning: a\n- go\n- eat\nDay 2: Y\nAfternoon: b\n- relax";

const GENERATED: &str = "Sure! Here is your 2-day itinerary for Lisbon.

Day 1: Alfama & Baixa
Morning:
- Breakfast at a pastelaria
- Ride Tram 28 to the castle

Afternoon:
-    Walk down to Praça do Comércio
- Lunch in Baixa

Evening:
- Fado dinner in Alfama

Day 2: Belém
Morning:
- Jerónimos Monastery
Note: book tickets online to skip the queue.
- Pastéis de Belém

Night:
- Sunset at the MAAT riverfront

Enjoy your trip!";

fn titles(days: &[DayItinerary]) -> Vec<&str> {
    days.iter().map(|day| day.title.as_str()).collect()
}

#[test]
fn text_without_day_marker_yields_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("Morning:\n- coffee\n- walk").is_empty());
    assert!(parse("Today is a good day to travel").is_empty());
    assert!(parse("Day1: no space after the marker").is_empty());
}

#[test]
fn well_formed_two_day_input() {
    let days = parse(TWO_DAYS);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].title, "Day 1: X");
    assert_eq!(days[0].sections, vec!["Morning: a\ngo\neat"]);
    assert_eq!(days[1].title, "Day 2: Y");
    assert_eq!(days[1].sections, vec!["Afternoon: b\nrelax"]);
}

#[test]
fn activity_bullets_are_cleaned() {
    let days = parse("Day 1\nMorning:\n-    walk on beach");
    assert_eq!(days[0].sections, vec!["Morning:\nwalk on beach"]);
}

#[test]
fn commentary_lines_are_dropped() {
    let days = parse(GENERATED);

    assert_eq!(days.len(), 2);
    for day in &days {
        for section in &day.sections {
            assert!(!section.contains("Note:"));
            assert!(!section.contains("Enjoy your trip"));
            assert!(!section.contains("Sure!"));
        }
    }
}

#[test]
fn generated_itinerary_is_grouped_by_period() {
    let days = parse(GENERATED);

    assert_eq!(titles(&days), vec!["Day 1: Alfama & Baixa", "Day 2: Belém"]);
    assert_eq!(
        days[0].sections,
        vec![
            "Morning:\nBreakfast at a pastelaria\nRide Tram 28 to the castle",
            "Afternoon:\nWalk down to Praça do Comércio\nLunch in Baixa",
            "Evening:\nFado dinner in Alfama",
        ]
    );
    assert_eq!(
        days[1].sections,
        vec![
            "Morning:\nJerónimos Monastery\nPastéis de Belém",
            "Night:\nSunset at the MAAT riverfront",
        ]
    );

    let periods: Vec<_> = days[0]
        .time_sections()
        .into_iter()
        .map(|section| section.period)
        .collect();
    assert_eq!(
        periods,
        vec![
            Some(TimePeriod::Morning),
            Some(TimePeriod::Afternoon),
            Some(TimePeriod::Evening)
        ]
    );
}

#[test]
fn activities_merge_until_next_header() {
    let days = parse("Day 1\nEvening:\n- a\n- b\n- c\nNight:\n- d");
    assert_eq!(days[0].sections, vec!["Evening:\na\nb\nc", "Night:\nd"]);
}

#[test]
fn parsing_is_repeatable() {
    let first = parse(GENERATED);
    let second = parse(GENERATED);

    assert_eq!(titles(&first), titles(&second));
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.sections, b.sections);
    }
}

#[test]
fn day_order_follows_source_not_day_numbers() {
    let days = parse("Day 3: C\nDay 1: A\nDay 1: A again\nDay 2: B");
    assert_eq!(
        titles(&days),
        vec!["Day 3: C", "Day 1: A", "Day 1: A again", "Day 2: B"]
    );
}

#[test]
fn title_only_day_has_no_sections() {
    let days = parse("Day 4: Free day");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].title, "Day 4: Free day");
    assert!(days[0].sections.is_empty());
}

#[test]
fn windows_line_endings_and_indentation_are_tolerated() {
    let days = parse("Day 1: Arrival\r\n   Morning:\r\n     - Check in\r\n\r\n  Night:\r\n  -  Bar crawl\r\n");
    assert_eq!(days[0].title, "Day 1: Arrival");
    assert_eq!(days[0].sections, vec!["Morning:\nCheck in", "Night:\nBar crawl"]);
}

#[test]
fn every_day_gets_a_distinct_id() {
    let days = parse(TWO_DAYS);
    assert_ne!(days[0].id, days[1].id);
}

#[test]
fn marker_inside_activity_starts_a_new_block() {
    // The marker is a plain substring match, so "Day " inside an activity splits too.
    let days = parse("Day 1\nMorning:\n- Day trip to Sintra");
    assert_eq!(titles(&days), vec!["Day 1", "Day trip to Sintra"]);
    assert_eq!(days[0].sections, vec!["Morning:"]);
}
