use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::Select;
use weather_core::{Country, LookupConfig, WeatherLookupService};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather widget for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// Country name, e.g. "Sweden" or "Rwanda".
        #[arg(long, default_value_t = Country::default())]
        country: Country,

        /// City name; defaults to the country's first city.
        #[arg(long)]
        city: Option<String>,
    },

    /// Pick a country and city interactively, then show its weather.
    Pick,

    /// List the countries and cities on offer.
    Countries,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { country, city } => {
                let city = city.unwrap_or_else(|| country.default_city().to_string());
                show(country, &city).await
            }
            Command::Pick => {
                let country = Select::new("Country:", Country::all().to_vec())
                    .prompt()
                    .context("Country selection was cancelled")?;

                let city = Select::new("City:", country.cities().to_vec())
                    .with_starting_cursor(0)
                    .prompt()
                    .context("City selection was cancelled")?;

                show(country, city).await
            }
            Command::Countries => {
                for country in Country::all() {
                    println!("{country}: {}", country.cities().join(", "));
                }
                Ok(())
            }
        }
    }
}

async fn show(country: Country, city: &str) -> anyhow::Result<()> {
    let config = LookupConfig::from_env()?;
    let service = WeatherLookupService::new(config);

    if !country.has_city(city) {
        tracing::debug!(%country, city, "City is not in the catalog, asking the provider anyway");
    }

    match service.lookup_city(city, country.as_str()).await {
        Ok(summary) => {
            print!("{}", render::summary(&summary, country));
            Ok(())
        }
        Err(err) => bail!("Could not fetch weather for {city}, {country}: {err}"),
    }
}
