use std::future::Future;

use homefinder_models::theme::{Theme, ThemeView};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ThemeFeatureService: Send + Sync + 'static {
    /// Returns the stored theme, falling back to [`Theme::Light`].
    fn get_theme(&self) -> impl Future<Output = Result<ThemeView, ThemeError>> + Send;

    fn set_theme(
        &self,
        theme: Theme,
    ) -> impl Future<Output = Result<ThemeView, ThemeError>> + Send;

    /// Switches between light and dark and persists the result.
    fn toggle_theme(&self) -> impl Future<Output = Result<ThemeView, ThemeError>> + Send;
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockThemeFeatureService {
    pub fn with_get_theme(mut self, result: Theme) -> Self {
        self.expect_get_theme()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(ThemeView::from(result)))));
        self
    }

    pub fn with_set_theme(mut self, theme: Theme) -> Self {
        self.expect_set_theme()
            .once()
            .with(mockall::predicate::eq(theme))
            .return_once(move |_| Box::pin(std::future::ready(Ok(ThemeView::from(theme)))));
        self
    }

    pub fn with_toggle_theme(mut self, result: Theme) -> Self {
        self.expect_toggle_theme()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(ThemeView::from(result)))));
        self
    }
}
