use std::sync::Arc;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Extension;

use crate::bootstrap::{Resolution, RouteTable};

mod ui;

async fn handle_fallback(Extension(routes): Extension<Arc<RouteTable>>, uri: Uri) -> Response {
    match routes.resolve(uri.path()) {
        Resolution::Redirect(target) => {
            tracing::debug!(path = uri.path(), redirect_to = target, "unknown route");
            Redirect::to(target).into_response()
        }
        // declared path reached with a method the controller doesn't handle
        Resolution::View(entry) => {
            tracing::debug!(path = entry.path, "unsupported method on declared route");
            StatusCode::METHOD_NOT_ALLOWED.into_response()
        }
    }
}

/// Registers every route of the table and sends anything else to its fallback.
pub(crate) fn create(routes: &RouteTable) -> axum::Router {
    routes
        .entries()
        .iter()
        .fold(axum::Router::new(), |router, entry| {
            tracing::trace!(
                path = entry.path,
                template = entry.template,
                controller = %entry.controller,
                "registering route"
            );
            router.route(entry.path, ui::handler(entry))
        })
        .fallback(handle_fallback)
        .layer(Extension(Arc::new(routes.clone())))
}
