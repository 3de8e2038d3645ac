use clap::Subcommand;
use homefinder_config::Config;
use homefinder_core_theme_contracts::ThemeFeatureService;
use homefinder_models::theme::{Theme, ThemeView};

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Use a specific theme
    Set { theme: Theme },
}

impl ThemeCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let theme = environment::theme_feature(&config);
        let view = self.run(&theme).await?;
        println!("{} {}", view.theme, view.icon);
        Ok(())
    }

    async fn run(self, theme: &impl ThemeFeatureService) -> anyhow::Result<ThemeView> {
        let view = match self {
            ThemeCommand::Show => theme.get_theme().await?,
            ThemeCommand::Toggle => theme.toggle_theme().await?,
            ThemeCommand::Set { theme: new } => theme.set_theme(new).await?,
        };
        Ok(view)
    }
}
