use homefinder_core_theme_contracts::{ThemeError, ThemeFeatureService};
use homefinder_models::theme::{Preferences, Theme, ThemeView};
use homefinder_persistence_contracts::PreferenceRepository;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ThemeFeatureServiceImpl<PreferenceRepo> {
    preference_repo: PreferenceRepo,
}

impl<PreferenceRepo> ThemeFeatureServiceImpl<PreferenceRepo> {
    pub fn new(preference_repo: PreferenceRepo) -> Self {
        Self { preference_repo }
    }
}

impl<PreferenceRepo> ThemeFeatureServiceImpl<PreferenceRepo>
where
    PreferenceRepo: PreferenceRepository,
{
    async fn load(&self) -> Result<Preferences, ThemeError> {
        Ok(self.preference_repo.load().await?.unwrap_or_default())
    }

    async fn store(
        &self,
        mut preferences: Preferences,
        theme: Theme,
    ) -> Result<ThemeView, ThemeError> {
        let previous = preferences.theme;
        preferences.theme = theme;
        self.preference_repo.save(&preferences).await?;
        info!(%previous, %theme, "theme changed");
        Ok(theme.into())
    }
}

impl<PreferenceRepo> ThemeFeatureService for ThemeFeatureServiceImpl<PreferenceRepo>
where
    PreferenceRepo: PreferenceRepository,
{
    async fn get_theme(&self) -> Result<ThemeView, ThemeError> {
        self.load().await.map(|p| p.theme.into())
    }

    #[tracing::instrument(skip(self))]
    async fn set_theme(&self, theme: Theme) -> Result<ThemeView, ThemeError> {
        let preferences = self.load().await.unwrap_or_else(|err| {
            warn!(%err, "overwriting unreadable preferences");
            Preferences::default()
        });
        self.store(preferences, theme).await
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_theme(&self) -> Result<ThemeView, ThemeError> {
        let preferences = self.load().await?;
        self.store(preferences, preferences.theme.toggled()).await
    }
}

#[cfg(test)]
mod tests {
    use homefinder_persistence_contracts::MockPreferenceRepository;
    use homefinder_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn get_default() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new().with_load(None);
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.get_theme().await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ThemeView {
                theme: Theme::Light,
                icon: "🌙"
            }
        );
    }

    #[tokio::test]
    async fn get_stored() {
        // Arrange
        let preference_repo =
            MockPreferenceRepository::new().with_load(Some(Preferences { theme: Theme::Dark }));
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.get_theme().await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ThemeView {
                theme: Theme::Dark,
                icon: "☀️"
            }
        );
    }

    #[tokio::test]
    async fn toggle_from_default() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new()
            .with_load(None)
            .with_save(Preferences { theme: Theme::Dark });
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.toggle_theme().await;

        // Assert
        assert_eq!(result.unwrap(), Theme::Dark.into());
    }

    #[tokio::test]
    async fn toggle_back() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new()
            .with_load(Some(Preferences { theme: Theme::Dark }))
            .with_save(Preferences {
                theme: Theme::Light,
            });
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.toggle_theme().await;

        // Assert
        assert_eq!(result.unwrap(), Theme::Light.into());
    }

    #[tokio::test]
    async fn set() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new()
            .with_load(Some(Preferences { theme: Theme::Dark }))
            .with_save(Preferences { theme: Theme::Dark });
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.set_theme(Theme::Dark).await;

        // Assert
        assert_eq!(result.unwrap(), Theme::Dark.into());
    }

    #[tokio::test]
    async fn load_error() {
        // Arrange
        let mut preference_repo = MockPreferenceRepository::new();
        preference_repo
            .expect_load()
            .once()
            .return_once(|| {
                Box::pin(std::future::ready(Err::<Option<Preferences>, _>(
                    anyhow::anyhow!("disk on fire"),
                )))
            });
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.toggle_theme().await;

        // Assert
        assert_matches!(result, Err(ThemeError::Other(_)));
    }

    #[tokio::test]
    async fn set_overwrites_unreadable_preferences() {
        // Arrange
        let mut preference_repo = MockPreferenceRepository::new();
        preference_repo.expect_load().once().return_once(|| {
            Box::pin(std::future::ready(Err::<Option<Preferences>, _>(
                anyhow::anyhow!("Failed to parse preferences"),
            )))
        });
        let preference_repo = preference_repo.with_save(Preferences {
            theme: Theme::Light,
        });
        let sut = ThemeFeatureServiceImpl { preference_repo };

        // Act
        let result = sut.set_theme(Theme::Light).await;

        // Assert
        assert_eq!(result.unwrap(), Theme::Light.into());
    }
}
