use crate::types::TripRequest;

/// System prompt for the itinerary model.
pub const SYSTEM_PROMPT: &str = "You are a travel planner. Create concise daily schedules. For 1-day trips, focus on essential experiences. For multi-day trips, make sure to generate all the days and their plans without skipping any days";

const DAY_TEMPLATE: &str = "Format each day as:
Day X
Morning:
- Activity 1
- Activity 2
- Activity 3

Afternoon:
- Activity 1
- Activity 2
- Activity 3

Evening:
- Activity 1
- Activity 2
- Activity 3

Night:
- Activity 1
- Activity 2
- Activity 3";

const FORMAT_RULES: [&str; 7] = [
    "Start each day with \"Day X\"",
    "Each time period (Morning/Afternoon/Evening/Night) on its own line with colon",
    "Each activity starts with hyphen and space",
    "Include 2+ activities per time period",
    "Keep activities concise",
    "For 1-day trips, focus on essential experiences",
    "For multi-day trips, consider travel time between locations",
];

/// Build the user prompt asking for an itinerary in the parseable day format.
pub fn itinerary_prompt(request: &TripRequest) -> String {
    let rules = FORMAT_RULES
        .iter()
        .enumerate()
        .map(|(idx, rule)| format!("{}. {}", idx + 1, rule))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create a itinerary for {} for {} days based on interests: {}.\n\n{}\n\nRules:\n{}",
        request.destination,
        request.days,
        request.interests.join(", "),
        DAY_TEMPLATE,
        rules
    )
}
