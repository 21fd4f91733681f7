use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    Config, FetchError, FilterCriteria, HttpWeatherSource, Session, WeatherSource,
};
use inquire::{Confirm, Text};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Weather dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather endpoint URL.
    Configure {
        /// Endpoint URL; prompts interactively when absent.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Fetch the forecast once and print the days matching the filters.
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Case-insensitive text to look for in the day's description.
        #[arg(long, default_value = "")]
        search: String,

        /// Keep days whose high reaches this temperature (°C).
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        min_temp: String,

        /// Keep days whose low stays at or under this temperature (°C).
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        max_temp: String,

        /// Print the filtered days as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Fetch the forecast once, then filter it interactively.
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Override the configured endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,
}

impl SourceArgs {
    /// Resolve the endpoint: flag, then environment, then config file.
    fn resolve(self) -> Result<HttpWeatherSource> {
        let cfg = Config::load()?
            .with_env_overrides()
            .with_endpoint_override(self.endpoint);

        // a missing endpoint is reported by the session, not here
        let endpoint = cfg.endpoint().map(str::to_string).unwrap_or_default();
        debug!(%endpoint, "resolved weather endpoint");
        Ok(HttpWeatherSource::new(endpoint))
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure { endpoint } => configure(endpoint),
            Command::Show { source, search, min_temp, max_temp, json } => {
                let criteria = FilterCriteria::from_inputs(&search, &min_temp, &max_temp);
                show(source, criteria, json).await
            }
            Command::Browse { source } => browse(source).await,
        }
    }
}

fn configure(endpoint: Option<String>) -> Result<()> {
    let mut cfg = Config::load()?;

    let endpoint = match endpoint {
        Some(endpoint) => endpoint,
        None => {
            let mut prompt = Text::new("Weather endpoint URL:");
            if let Some(current) = cfg.endpoint.as_deref() {
                prompt = prompt.with_default(current);
            }
            prompt.prompt().context("Failed to read endpoint URL")?
        }
    };

    cfg.set_endpoint(&endpoint)?;
    let path = cfg.save()?;
    println!("Saved endpoint to {}", path.display());

    Ok(())
}

async fn show(source: SourceArgs, criteria: FilterCriteria, json: bool) -> Result<()> {
    show_from(&source.resolve()?, criteria, json).await
}

async fn show_from(source: &dyn WeatherSource, criteria: FilterCriteria, json: bool) -> Result<()> {
    let mut session = Session::new();

    if let Err(err) = session.load(source).await {
        return Err(load_failed(err));
    }

    session.set_criteria(criteria);
    let view = session.apply_filters();

    if json {
        let out = serde_json::to_string_pretty(view).context("Failed to serialize days")?;
        println!("{out}");
    } else {
        print!("{}", render::heading(session.payload()));
        print!("{}", render::days(session.view()));
    }

    Ok(())
}

async fn browse(source: SourceArgs) -> Result<()> {
    let source = source.resolve()?;
    let mut session = Session::new();

    if let Err(err) = session.load(&source).await {
        return Err(load_failed(err));
    }

    print!("{}", render::heading(session.payload()));
    print!("{}", render::days(session.view()));

    loop {
        let again = apply_another_prompt().prompt().context("Failed to read answer")?;
        if !again {
            break;
        }

        let current = session.criteria().clone();
        let search = Text::new("Search description:")
            .with_default(&current.search_term)
            .prompt()
            .context("Failed to read search term")?;
        let min_temp = Text::new("Min temperature (°C):")
            .with_default(&bound_text(current.min_temp))
            .prompt()
            .context("Failed to read minimum temperature")?;
        let max_temp = Text::new("Max temperature (°C):")
            .with_default(&bound_text(current.max_temp))
            .prompt()
            .context("Failed to read maximum temperature")?;

        session.set_criteria(FilterCriteria::from_inputs(&search, &min_temp, &max_temp));
        print!("{}", render::days(session.apply_filters()));
    }

    Ok(())
}

/// Acquisition failures end the command with a non-zero exit; `main` reports
/// them on stderr as `Error: <message>`, keeping stdout clean for `--json`.
fn load_failed(err: &FetchError) -> anyhow::Error {
    anyhow!("{err}")
}

/// Enter (or an empty answer) quits the browse loop.
fn apply_another_prompt() -> Confirm<'static> {
    Confirm::new("Apply another filter?").with_default(false)
}

fn bound_text(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}
