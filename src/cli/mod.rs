use crate::{
    catalog,
    config::Config,
    core::{PlannerEvent, TripPlanner},
    parser,
    render::render_itinerary,
    services::{ChatItineraryService, HttpItineraryService, ItineraryService},
    types::{DayItinerary, TripRequest},
};
use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::{sync::Arc, time::Duration};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn command() -> Command {
    Command::new("tripsight")
        .version("0.1.0")
        .about("Generate a day-by-day travel itinerary")
        .arg(
            Arg::new("destination")
                .help("City or region to visit")
                .index(1),
        )
        .arg(
            Arg::new("interest")
                .short('i')
                .long("interest")
                .value_name("INTEREST")
                .help("An interest to plan around (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip length in days")
                .value_parser(value_parser!(u32))
                .default_value("3"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Itinerary backend URL (or set TRIPSIGHT_BASE_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds (or set TRIPSIGHT_TIMEOUT_SECS)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("direct")
                .long("direct")
                .help("Call an OpenAI-compatible API directly instead of the backend (needs OPENAI_API_KEY)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("from-file")
                .long("from-file")
                .value_name("PATH")
                .help("Parse a saved raw itinerary instead of calling a service"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the parsed days as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-cities")
                .long("list-cities")
                .help("List popular destinations and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-interests")
                .long("list-interests")
                .help("List popular interests and exit")
                .action(ArgAction::SetTrue),
        )
}

/// CLI entry point for the tripsight tool
pub async fn run() -> anyhow::Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    if matches.get_flag("list-cities") {
        print_groups(catalog::countries().map(|country| (country, catalog::cities_in(country))));
        return Ok(());
    }
    if matches.get_flag("list-interests") {
        print_groups(
            catalog::categories().map(|category| (category, catalog::interests_in(category))),
        );
        return Ok(());
    }

    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }
    if let Some(seconds) = matches.get_one::<u64>("timeout") {
        config.request_timeout = Duration::from_secs(*seconds);
    }

    if let Some(path) = matches.get_one::<String>("from-file") {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {path}"))?;
        let request = request_from_args(&matches);
        let days = parser::parse(&raw);
        info!("Parsed {} day(s) from {}", days.len(), path);
        return print_days(&request, &days, matches.get_flag("json"));
    }

    let service = build_service(&config, matches.get_flag("direct"))?;
    let mut planner = TripPlanner::from_arc(service)
        .with_limits(config.limits)
        .with_loading_notice_after(config.loading_notice_after);

    if let Some(destination) = matches.get_one::<String>("destination") {
        planner.set_destination(destination.clone());
    }
    for interest in matches.get_many::<String>("interest").into_iter().flatten() {
        planner.set_current_interest(interest.clone());
        planner.add_interest();
    }
    if let Some(days) = matches.get_one::<u32>("days") {
        planner.set_days(*days);
    }

    if let Some(message) = planner.days_error_message() {
        bail!(message);
    }
    let request = planner.request()?;

    let mut events = planner.subscribe();
    let notifier = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                PlannerEvent::SlowResponse => {
                    eprintln!("This is taking longer than usual. Still waiting for your itinerary...")
                }
                event if event.is_terminal() => break,
                _ => {}
            }
        }
    });

    let outcome = planner.generate().await;
    notifier.abort();

    match outcome {
        Ok(_) => print_days(&request, planner.itinerary(), matches.get_flag("json")),
        Err(err) => {
            let message = planner
                .error_message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            error!("{}", message);
            Err(err).context(message)
        }
    }
}

fn build_service(config: &Config, direct: bool) -> anyhow::Result<Arc<dyn ItineraryService>> {
    if direct {
        let api_key = config
            .openai_api_key
            .clone()
            .context("OPENAI_API_KEY must be set to use --direct")?;
        info!("Using model {} at {}", config.model, config.openai_base_url);
        let service =
            ChatItineraryService::with_options(api_key, &config.openai_base_url, config.request_timeout)?
                .with_model(config.model.clone());
        Ok(Arc::new(service))
    } else {
        let service = HttpItineraryService::with_timeout(&config.base_url, config.request_timeout)?;
        info!("Using itinerary backend {}", service.endpoint());
        Ok(Arc::new(service))
    }
}

fn request_from_args(matches: &ArgMatches) -> TripRequest {
    let mut builder = TripRequest::builder()
        .destination(matches.get_one::<String>("destination").cloned().unwrap_or_default())
        .days(matches.get_one::<u32>("days").copied().unwrap_or_default());
    for interest in matches.get_many::<String>("interest").into_iter().flatten() {
        builder.add_interest(interest);
    }
    TripRequest {
        destination: builder.current_destination().to_string(),
        interests: builder.current_interests().to_vec(),
        days: builder.current_days(),
    }
}

fn print_days(request: &TripRequest, days: &[DayItinerary], json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(days).context("failed to serialize itinerary")?
        );
    } else {
        println!("{}", render_itinerary(request, days));
    }
    Ok(())
}

fn print_groups<'a>(groups: impl Iterator<Item = (&'a str, &'a [&'a str])>) {
    for (name, items) in groups {
        println!("{} ({})", name, items.len());
        for item in items {
            println!("  - {}", item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn interests_are_collected_in_order() {
        let matches = command().get_matches_from([
            "tripsight", "Lisbon", "-i", "Surfing", "--interest", "Food", "-i", "Surfing", "-d", "4",
        ]);
        let request = request_from_args(&matches);

        assert_eq!(request.destination, "Lisbon");
        assert_eq!(request.interests, vec!["Surfing", "Food"]);
        assert_eq!(request.days, 4);
    }
}
