use std::sync::Arc;

use axum::response::Html;
use axum::Extension;
use myapp_ui::view::View;

use crate::auth::Provider;
use crate::bootstrap::RouteEntry;
use crate::router::ui::error::ProviderError;

pub(super) async fn handle(
    Extension(entry): Extension<RouteEntry>,
    Extension(provider): Extension<Arc<Provider>>,
) -> Result<Html<String>, ProviderError> {
    tracing::trace!("login requested");
    let authorize_url = provider.authorize_url()?;
    Ok(Html(
        myapp_ui::view::login::View::new(entry.binding(), authorize_url).render(),
    ))
}
