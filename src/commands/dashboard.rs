//! Today's dashboard.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use meow_content::{CatClient, ContentError, DailyContentService};
use meow_core::{Config, UserProfile, WeatherFailure};
use meow_weather::{resolve_location, FixedLocation};

use crate::render;

#[derive(Args)]
pub struct DashboardArgs {
    /// Latitude for real weather (overrides the config file)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude for real weather (overrides the config file)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Keep the location secret and simulate the weather
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub no_location: bool,

    /// Skip downloading the cat photo
    #[arg(long)]
    pub no_cat: bool,
}

pub async fn run(config_path: Option<&Path>, args: DashboardArgs) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::profile_store(&config);

    let Some(profile) = store.load() else {
        anyhow::bail!(
            "No profile yet. Run `meowing-morning` for the full setup or \
             `meowing-morning setup --nickname <NAME> --zodiac <SIGN>`."
        );
    };

    let coordinates = if args.no_location {
        None
    } else {
        args.lat.zip(args.lon).or(config.location.coordinates())
    };

    show(&config, &profile, coordinates, !args.no_cat).await
}

/// Gather and print the dashboard for `profile`.
pub async fn show(
    config: &Config,
    profile: &UserProfile,
    coordinates: Option<(f64, f64)>,
    with_cat: bool,
) -> Result<()> {
    let timeout = Duration::from_secs(config.location.timeout_secs);
    let location = resolve_location(&FixedLocation::new(coordinates), timeout).await;
    let note = location.is_none().then(|| {
        let reason = WeatherFailure::LocationUnavailable("no coordinates shared".to_string());
        tracing::info!("{}", reason);
        reason.user_message()
    });

    let service = DailyContentService::from_endpoints(&config.endpoints)?;
    let (content, cat) = tokio::join!(
        service.generate(profile, location.as_ref()),
        async {
            if with_cat {
                Some(fetch_cat(config).await)
            } else {
                None
            }
        }
    );

    let cat = cat.map(|result| match result {
        Ok(path) => Ok(path),
        Err(e) => {
            tracing::warn!("No cat today: {}", e);
            Err(e.user_message())
        }
    });
    let cat_view = cat.as_ref().map(|r| r.as_ref().map(PathBuf::as_path).map_err(|m| *m));

    println!("{}", render::dashboard(profile, &content, cat_view, note));
    Ok(())
}

/// Download today's cat into the cache dir. Failures only cost the photo.
async fn fetch_cat(config: &Config) -> Result<PathBuf, ContentError> {
    let client = CatClient::new(&config.endpoints.cat)?;
    let image = client.fetch(config.cat.width, config.cat.height).await?;
    image.save_in(&config.cache_dir)
}
