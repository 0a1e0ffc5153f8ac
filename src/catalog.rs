//! Curated destinations and interests offered as shortcuts on the trip form.

/// Popular cities grouped by country, countries in alphabetical order.
pub const POPULAR_CITIES: &[(&str, &[&str])] = &[
    ("Australia", &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"]),
    ("Canada", &["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"]),
    ("France", &["Paris", "Nice", "Lyon", "Marseille", "Bordeaux"]),
    ("Italy", &["Rome", "Venice", "Florence", "Milan", "Naples"]),
    ("Japan", &["Tokyo", "Kyoto", "Osaka", "Hiroshima", "Sapporo"]),
    ("Spain", &["Barcelona", "Madrid", "Seville", "Valencia", "Granada"]),
    ("United Kingdom", &["London", "Edinburgh", "Manchester", "Birmingham", "Glasgow"]),
    (
        "United States",
        &["New York", "Los Angeles", "Chicago", "Miami", "San Francisco", "Las Vegas"],
    ),
];

/// Popular interests grouped by category, categories in alphabetical order.
pub const POPULAR_INTERESTS: &[(&str, &[&str])] = &[
    (
        "Adventure",
        &["Scuba Diving", "Paragliding", "Bungee Jumping", "Zip-lining", "Wildlife Safari", "Hot Air Balloon"],
    ),
    (
        "Cultural",
        &["Museums", "Historical Sites", "Art Galleries", "Local Festivals", "Traditional Music", "Cultural Shows"],
    ),
    (
        "Entertainment",
        &["Nightlife", "Live Music", "Theater", "Cinema", "Theme Parks", "Casinos"],
    ),
    (
        "Food & Drink",
        &["Local Cuisine", "Wine Tasting", "Cooking Classes", "Street Food", "Fine Dining", "Food Markets"],
    ),
    (
        "Outdoor Activities",
        &["Hiking", "Beach", "Camping", "Skiing", "Surfing", "Cycling", "Kayaking", "Rock Climbing"],
    ),
    (
        "Photography",
        &["Landscape Photography", "Street Photography", "Wildlife Photography", "Architecture", "Sunset/Sunrise"],
    ),
    (
        "Relaxation",
        &["Spa", "Yoga", "Meditation", "Beach Relaxation", "Hot Springs", "Massage"],
    ),
    (
        "Shopping",
        &["Local Markets", "Shopping Malls", "Souvenirs", "Fashion", "Antiques", "Handicrafts"],
    ),
];

pub fn countries() -> impl Iterator<Item = &'static str> {
    POPULAR_CITIES.iter().map(|(country, _)| *country)
}

pub fn cities_in(country: &str) -> &'static [&'static str] {
    lookup(POPULAR_CITIES, country)
}

pub fn categories() -> impl Iterator<Item = &'static str> {
    POPULAR_INTERESTS.iter().map(|(category, _)| *category)
}

pub fn interests_in(category: &str) -> &'static [&'static str] {
    lookup(POPULAR_INTERESTS, category)
}

fn lookup(
    groups: &'static [(&'static str, &'static [&'static str])],
    key: &str,
) -> &'static [&'static str] {
    groups
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, items)| *items)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_sorted_by_name() {
        let countries: Vec<_> = countries().collect();
        let mut sorted = countries.clone();
        sorted.sort_unstable();
        assert_eq!(countries, sorted);

        let categories: Vec<_> = categories().collect();
        let mut sorted = categories.clone();
        sorted.sort_unstable();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn lookup_returns_group_or_empty() {
        assert_eq!(cities_in("Japan").first(), Some(&"Tokyo"));
        assert_eq!(interests_in("Outdoor Activities").len(), 8);
        assert!(cities_in("Atlantis").is_empty());
    }
}
