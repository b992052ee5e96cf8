//! Command handlers for the CLI.
//!
//! Each handler builds the clients it needs from the loaded config,
//! drives the dashboard, and prints plain-text output. Errors propagate
//! to `main` as `anyhow` and render with their full source chain.

use anyhow::Context;

use outreach_call::{CallClient, PollConfig};
use outreach_core::{AppConfig, EmploymentType};
use outreach_dashboard::{Dashboard, Preferences, TableRow};
use outreach_geocode::GeocodeClient;
use outreach_places::PlacesClient;

pub async fn search(
    config: &AppConfig,
    location: String,
    radius_km: Option<f64>,
    keyword: Option<String>,
    employment_type: EmploymentType,
) -> anyhow::Result<()> {
    let mut dash = dashboard_for(
        config,
        location,
        radius_km,
        keyword,
        employment_type,
    );
    let places = places_client(config)?;

    let count = dash.run_search(&places).await?;
    tracing::info!(count, "search complete");
    print_table(&dash.table_rows());
    Ok(())
}

pub async fn call(
    config: &AppConfig,
    location: String,
    radius_km: Option<f64>,
    keyword: Option<String>,
    employment_type: EmploymentType,
    index: usize,
) -> anyhow::Result<()> {
    let mut dash = dashboard_for(
        config,
        location,
        radius_km,
        keyword,
        employment_type,
    );
    let places = places_client(config)?;
    let calls = CallClient::new(
        &config.call_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    dash.run_search(&places).await?;
    let key = dash
        .businesses()
        .get(index)
        .map(|b| b.key.clone())
        .with_context(|| {
            format!(
                "row index {index} out of range ({} results)",
                dash.businesses().len()
            )
        })?;

    println!("Calling {key}...");
    let poll = PollConfig::new(config.poll_interval_ms, config.poll_max_attempts);
    dash.start_call(&calls, &key, poll).await?;
    dash.finish_calls().await;

    print_table(&dash.table_rows());
    Ok(())
}

pub async fn geocode(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let token = config
        .mapbox_token
        .as_deref()
        .context("MAPBOX_TOKEN is not set; geocoding is disabled")?;
    let client = GeocodeClient::new(token, config.request_timeout_secs)?;

    let suggestions = client.suggest(query).await?;
    if suggestions.is_empty() {
        println!("no suggestions");
        return Ok(());
    }
    for s in suggestions {
        match s.coords {
            Some(c) => println!("{}  ({:.4}, {:.4})", s.place_name, c.lat, c.lng),
            None => println!("{}", s.place_name),
        }
    }
    Ok(())
}

fn dashboard_for(
    config: &AppConfig,
    location: String,
    radius_km: Option<f64>,
    keyword: Option<String>,
    employment_type: EmploymentType,
) -> Dashboard {
    let mut dash = Dashboard::from_config(config);
    dash.apply_preferences(Preferences {
        location,
        radius_km: radius_km.unwrap_or(config.default_radius_km),
        keyword,
        employment_type,
    });
    dash
}

fn places_client(config: &AppConfig) -> anyhow::Result<PlacesClient> {
    Ok(PlacesClient::new(
        &config.places_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?)
}

fn print_table(rows: &[TableRow]) {
    if rows.is_empty() {
        println!("no businesses");
        return;
    }
    println!(
        "{:<4} {:<32} {:<18} {:<14} {:<12}",
        "#", "Business Name", "Job Role", "Status", "Last Contact"
    );
    for (i, row) in rows.iter().enumerate() {
        let marker = if row.selected { ">" } else { " " };
        println!(
            "{marker}{i:<3} {:<32} {:<18} {:<14} {:<12}",
            row.name, row.job_role, row.status, row.last_contact
        );
    }
}
