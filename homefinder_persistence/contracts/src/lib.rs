use std::future::Future;

use homefinder_models::theme::Preferences;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PreferenceRepository: Send + Sync + 'static {
    /// Returns the stored preferences, or `None` if nothing has been saved
    /// yet.
    fn load(&self) -> impl Future<Output = anyhow::Result<Option<Preferences>>> + Send;

    /// Replaces the stored preferences.
    fn save(&self, preferences: &Preferences) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockPreferenceRepository {
    pub fn with_load(mut self, result: Option<Preferences>) -> Self {
        self.expect_load()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_save(mut self, preferences: Preferences) -> Self {
        self.expect_save()
            .once()
            .with(mockall::predicate::eq(preferences))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
