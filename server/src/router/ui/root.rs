use axum::response::Html;
use axum::Extension;
use myapp_ui::view::View;

use crate::bootstrap::RouteEntry;

pub(super) async fn handle(Extension(entry): Extension<RouteEntry>) -> Html<String> {
    tracing::trace!("root requested");
    Html(myapp_ui::view::root::View::new(entry.binding()).render())
}
