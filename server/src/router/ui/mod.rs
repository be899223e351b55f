use axum::routing::{get, MethodRouter};
use axum::Extension;

use crate::bootstrap::{Controller, RouteEntry};

mod error;
mod login;
mod logout;
mod public;
mod root;

pub(super) fn handler(entry: &RouteEntry) -> MethodRouter {
    let method = match entry.controller {
        Controller::Logout => get(logout::handle),
        Controller::Login => get(login::handle),
        Controller::Public => get(public::handle),
        Controller::Root => get(root::handle),
    };
    method.layer(Extension(entry.clone()))
}
