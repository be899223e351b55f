use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use myapp_ui::view::View;

use crate::auth::UrlError;

/// A page that needs the authentication provider couldn't link to it.
#[derive(Debug)]
pub(super) struct ProviderError(UrlError);

impl From<UrlError> for ProviderError {
    fn from(value: UrlError) -> Self {
        tracing::error!(message = "unable to build provider url", error = %value);
        Self(value)
    }
}

impl ProviderError {
    fn message(&self) -> &'static str {
        match self.0 {
            UrlError::MissingDomain | UrlError::MissingClientId => {
                "The authentication provider is not configured."
            }
            UrlError::Encoding(_) => "Unable to reach the authentication provider.",
        }
    }
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> axum::response::Response {
        let view = myapp_ui::view::error::View::new(self.message());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(view.render())).into_response()
    }
}
