use clap::Parser;

mod run;

#[derive(Debug, Parser)]
#[command(name = "branchmap")]
#[command(about = "Brand branch survey: grid search, enrichment, CSV export")]
struct Cli {
    /// Output CSV path. Defaults to a timestamped file in the working
    /// directory.
    #[arg(long)]
    output: Option<String>,

    /// Override the grid spacing from the profile, in kilometers.
    #[arg(long)]
    spacing_km: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = branchmap_core::load_app_config()?;
    let profile = branchmap_core::load_profile(&config.profile_path)?;

    let spacing_km = cli.spacing_km.unwrap_or(profile.grid_spacing_km);
    anyhow::ensure!(
        spacing_km > 0.0,
        "grid spacing must be positive, got {spacing_km}"
    );

    let client = branchmap_places::PlacesClient::new(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;

    match run::run_survey(&client, &config, &profile, spacing_km, cli.output.as_deref()).await? {
        Some(filename) => println!("survey complete: {filename}"),
        None => println!("survey complete: no file written (see logs)"),
    }

    Ok(())
}
