use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use tracing::info;
use weather_core::{Config, Location, WeatherView, fetch_weather, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for York, UK")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather view.
    Show {
        /// Print the view as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Set the forecast endpoint and request timeout.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { json } => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;

                let view = fetch_weather(provider.as_ref(), &Location::YORK)
                    .await
                    .with_context(|| format!("Could not fetch weather for {}", Location::YORK.label))?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&view)?);
                } else {
                    print!("{}", render(&view));
                }
            }
            Command::Configure => configure()?,
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let endpoint = Text::new("Forecast endpoint:")
        .with_default(config.forecast_url())
        .prompt()?;

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds (0 for none):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    config.endpoint = Some(endpoint);
    config.timeout_secs = (timeout_secs > 0).then_some(timeout_secs);
    config.save()?;

    info!(path = %Config::config_file_path()?.display(), "configuration saved");
    println!("Configuration saved.");

    Ok(())
}

/// Plain-text rendering of the view.
fn render(view: &WeatherView) -> String {
    let mut out = format!(
        "Weather for {}\n\
         Observed: {}\n\n\
         Temperature: {}°F, {}\n\
         Wind:        {} mph from {:.0}°, gusting {} mph\n\
         Apparent:    {:.0}°C\n\
         Humidity:    {:.0}%\n\
         Cloud cover: {:.0}%\n\
         Rain:        {} mm\n\
         Pressure:    {} hPa\n",
        view.location,
        view.observed_at,
        view.temperature_f,
        view.summary,
        view.wind_speed_mph,
        view.wind_direction,
        view.gust_mph,
        view.apparent_c,
        view.humidity,
        view.cloud_cover_pct,
        view.precipitation_mm,
        view.surface_pressure_hpa,
    );

    if let Some(sunrise) = &view.sunrise {
        out.push_str(&format!("Sunrise:     {sunrise}\n"));
    }
    if let Some(sunset) = &view.sunset {
        out.push_str(&format!("Sunset:      {sunset}\n"));
    }
    if let Some(uv) = view.uv_index_max {
        out.push_str(&format!("UV max:      {uv}\n"));
    }

    out
}
