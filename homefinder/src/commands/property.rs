use anyhow::{anyhow, Context};
use clap::Subcommand;
use homefinder_config::Config;
use homefinder_models::property::{PropertySearch, SearchCriteria};
use tokio::time::Instant;

#[derive(Debug, Subcommand)]
pub enum PropertyCommand {
    /// Submit the property search form
    #[command(aliases(["s"]))]
    Search {
        /// Search criteria as KEY=VALUE pairs, e.g. location=Austin
        #[arg(value_parser = parse_criterion)]
        criteria: Vec<(String, String)>,
    },
}

impl PropertyCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            PropertyCommand::Search { criteria } => {
                let mut form = PropertySearch::new(
                    config.property.search_label,
                    config.property.busy_label,
                    *config.property.search_delay,
                );
                let criteria = search(&mut form, criteria.into_iter().collect()).await?;
                println!("Searching for properties with criteria:");
                for (key, value) in &criteria {
                    println!("{key:>12}: {value}");
                }
            }
        }

        Ok(())
    }
}

async fn search(
    form: &mut PropertySearch,
    criteria: SearchCriteria,
) -> anyhow::Result<SearchCriteria> {
    let started_at = Instant::now();
    form.submit(started_at.into_std(), criteria)?;
    println!("{}", form.button().label);

    tokio::time::sleep_until(started_at + form.delay()).await;
    form.poll(Instant::now().into_std())
        .context("The property search did not finish")
}

fn parse_criterion(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected KEY=VALUE, got '{s}'"))?;
    Ok((key.trim().into(), value.trim().into()))
}
