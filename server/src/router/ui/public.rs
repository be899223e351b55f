use axum::response::Html;
use axum::Extension;
use myapp_ui::view::View;

use crate::bootstrap::RouteEntry;

pub(super) async fn handle(Extension(entry): Extension<RouteEntry>) -> Html<String> {
    tracing::trace!("public page requested");
    Html(myapp_ui::view::public::View::new(entry.binding()).render())
}
