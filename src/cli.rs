// cli.rs
use crate::config::SearchConfig;
use crate::search::SearchCriteria;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "home_search", version, about = "Search homes for sale")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search sale listings and print the top results
    Search(SearchArgs),
    /// Print the tool definition for agent registration
    Schema,
}

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Criteria as a JSON object, from a file or `-` for stdin. Flags override it.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// RentCast key. Defaults to $RENTCAST_API_KEY, read at search time.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    /// Miles
    #[arg(long)]
    pub radius: Option<u32>,

    #[arg(long)]
    pub min_price: Option<u64>,
    #[arg(long)]
    pub max_price: Option<u64>,
    #[arg(long)]
    pub beds: Option<u32>,
    #[arg(long)]
    pub baths: Option<u32>,
    #[arg(long)]
    pub property_type: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

impl SearchArgs {
    pub fn to_criteria(&self) -> Result<SearchCriteria> {
        let base = match &self.json {
            Some(path) => {
                let raw = read_input(path)?;
                SearchCriteria::from_json(&raw)
                    .with_context(|| format!("invalid criteria JSON in {}", path.display()))?
            }
            None => SearchCriteria::default(),
        };

        Ok(self.merge_into(base))
    }

    /// Flags win over whatever the JSON said.
    pub fn merge_into(&self, base: SearchCriteria) -> SearchCriteria {
        SearchCriteria {
            address: self.address.clone().or(base.address),
            city: self.city.clone().or(base.city),
            state: self.state.clone().or(base.state),
            zip_code: self.zip_code.clone().or(base.zip_code),
            latitude: self.latitude.or(base.latitude),
            longitude: self.longitude.or(base.longitude),
            radius: self.radius.or(base.radius),
            min_price: self.min_price.or(base.min_price),
            max_price: self.max_price.or(base.max_price),
            beds: self.beds.or(base.beds),
            baths: self.baths.or(base.baths),
            property_type: self.property_type.clone().or(base.property_type),
            status: self.status.clone().or(base.status),
        }
    }

    /// Search config from the environment, with `--api-key` applied.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let config = SearchConfig::from_env()?;
        Ok(match &self.api_key {
            Some(key) => config.with_api_key(key.clone()),
            None => config,
        })
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read criteria from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read criteria file {}", path.display()))
    }
}
