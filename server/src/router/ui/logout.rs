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
    tracing::trace!("logout requested");
    let logout_url = provider.logout_url()?;
    Ok(Html(
        myapp_ui::view::logout::View::new(entry.binding(), logout_url).render(),
    ))
}
