use crate::types::{DayItinerary, TripRequest};

/// Plain-text summary of the request followed by every parsed day.
pub fn render_itinerary(request: &TripRequest, days: &[DayItinerary]) -> String {
    let mut lines = Vec::new();

    lines.push("=== Your Trip Details ===".to_string());
    lines.push(format!(
        "Location: {}",
        if request.destination.is_empty() {
            "Not specified"
        } else {
            request.destination.as_str()
        }
    ));
    lines.push(format!(
        "Interests: {}",
        if request.interests.is_empty() {
            "none".to_string()
        } else {
            request.interests.join(", ")
        }
    ));
    lines.push(format!("Days: {}", request.days));

    if days.is_empty() {
        lines.push(String::new());
        lines.push("No itinerary days could be read from the response.".to_string());
    }

    for day in days {
        lines.push(String::new());
        lines.push(render_day(day));
    }

    lines.join("\n")
}

pub fn render_day(day: &DayItinerary) -> String {
    let mut lines = vec![format!("--- {} ---", day.title)];

    for section in day.time_sections() {
        lines.push(format!("{} {}", section.icon(), section.header));
        for activity in &section.activities {
            lines.push(format!("   • {}", activity));
        }
    }

    lines.join("\n")
}
