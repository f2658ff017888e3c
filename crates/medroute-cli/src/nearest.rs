//! `nearest` and `fallback` command handlers.

use medroute_core::{
    format_distance_km, ranked_fallback, resolve_location, AppConfig, HospitalRecord,
    LocationProvider,
};
use medroute_overpass::{HospitalResolver, OverpassClient, ResolutionRequest, ResolutionSource};

/// Resolve and print the hospitals nearest to the provider's position.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or JSON output fails.
/// Lookup failures never surface here; they select the built-in list.
pub(crate) async fn run_nearest(
    config: &AppConfig,
    provider: &dyn LocationProvider,
    radius: Option<u32>,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let reference = resolve_location(provider, config.default_location);
    let request = ResolutionRequest::new(reference)
        .with_radius(radius.unwrap_or(config.search_radius_m))
        .with_limit(limit.unwrap_or(config.result_limit));

    let client = OverpassClient::from_config(config)?;
    let resolver = HospitalResolver::new(client).with_limit_policy(config.limit_policy);
    let result = resolver.resolve(&request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.source == ResolutionSource::Fallback {
        println!("live lookup unavailable; showing built-in hospital list");
    }
    print_hospitals(&result.hospitals);
    Ok(())
}

/// Print the built-in hospital list ranked from the provider's position.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_fallback(
    config: &AppConfig,
    provider: &dyn LocationProvider,
    json: bool,
) -> anyhow::Result<()> {
    let reference = resolve_location(provider, config.default_location);
    let hospitals = ranked_fallback(reference);

    if json {
        println!("{}", serde_json::to_string_pretty(&hospitals)?);
    } else {
        print_hospitals(&hospitals);
    }
    Ok(())
}

fn print_hospitals(hospitals: &[HospitalRecord]) {
    if hospitals.is_empty() {
        println!("no hospitals found; try a larger --radius");
        return;
    }
    for hospital in hospitals {
        println!("{}", hospital_line(hospital));
    }
}

/// One display line: `"Central Hospital - 2.3 km away [emergency]"`.
pub(crate) fn hospital_line(hospital: &HospitalRecord) -> String {
    let mut line = match hospital.distance_km {
        Some(d) => format!("{} - {} away", hospital.name, format_distance_km(d)),
        None => hospital.name.clone(),
    };
    if hospital.has_emergency() {
        line.push_str(" [emergency]");
    }
    if let Some(phone) = &hospital.phone {
        line.push_str(&format!(" ({phone})"));
    }
    line
}
