use anyhow::{Context, ensure};
use clap::{Parser, Subcommand};
use inquire::CustomType;
use std::{fs, path::PathBuf};
use tracing::info;
use weather_widget_core::{
    Config, Coordinate, FixedPosition, Geolocator, MemorySurface, WeatherWidget,
    clients_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for your location")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the widget once and write its markup.
    Show {
        /// Latitude; overrides the configured location.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude; overrides the configured location.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Write markup to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the widget in a standalone HTML page.
        #[arg(long)]
        page: bool,
    },

    /// Store the default location used by `show`.
    Configure {
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Print the path of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { lat, lon, output, page } => {
                let config = Config::load()?;
                let coordinate = match (lat, lon) {
                    (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
                    _ => config.location,
                };

                let markup = show(&config, coordinate, page).await?;

                match output {
                    Some(path) => {
                        fs::write(&path, markup)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        info!(path = %path.display(), "Widget markup written");
                    }
                    None => print!("{markup}"),
                }
            }
            Command::Configure { lat, lon } => {
                let latitude = match lat {
                    Some(v) => v,
                    None => prompt_degrees("Latitude:")?,
                };
                let longitude = match lon {
                    Some(v) => v,
                    None => prompt_degrees("Longitude:")?,
                };

                ensure!((-90.0..=90.0).contains(&latitude), "Latitude must be within -90..=90");
                ensure!(
                    (-180.0..=180.0).contains(&longitude),
                    "Longitude must be within -180..=180"
                );

                let mut config = Config::load()?;
                config.set_location(Coordinate::new(latitude, longitude));
                config.save()?;

                println!("Default location set to {latitude}, {longitude}");
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

/// Run the widget once; no coordinate means the host cannot geolocate.
async fn show(config: &Config, coordinate: Option<Coordinate>, page: bool) -> anyhow::Result<String> {
    let geolocator = coordinate.map(|c| Box::new(FixedPosition::new(c)) as Box<dyn Geolocator>);
    let (weather, places) = clients_from_config(config)?;

    let mut surface = MemorySurface::new(config.element_id.as_str());
    WeatherWidget::new(geolocator, weather, places).run(&mut surface).await;

    let element = surface.to_element();
    Ok(if page { page_markup(&element) } else { element })
}

fn page_markup(element: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Weather</title>\n\
         <link rel=\"stylesheet\" href=\"weather-widget.css\">\n</head>\n<body>\n{element}</body>\n</html>\n"
    )
}

fn prompt_degrees(label: &str) -> anyhow::Result<f64> {
    CustomType::<f64>::new(label)
        .with_help_message("Decimal degrees, e.g. 39.8 or -89.6")
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read coordinate")
}
