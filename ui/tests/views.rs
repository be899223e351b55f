
use myapp_ui::view::Binding;

#[test]
fn root() {
    let output = helper::write(
        "view-root.html",
        myapp_ui::view::root::View::new(Binding::new("views/root.html", "RootCtrl")),
    );
    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("data-view=\"views/root.html\""));
    assert!(output.contains("data-controller=\"RootCtrl\""));
    assert!(output.contains("href=\"/public\""));
    assert!(output.contains("href=\"/logout\""));
}

#[test]
fn public() {
    let output = helper::write(
        "view-public.html",
        myapp_ui::view::public::View::new(Binding::new("views/public.html", "PublicCtrl")),
    );
    assert!(output.contains("data-view=\"views/public.html\""));
    assert!(output.contains("data-controller=\"PublicCtrl\""));
}

#[test]
fn login() {
    let output = helper::write(
        "view-login.html",
        myapp_ui::view::login::View::new(
            Binding::new("views/login.html", "LoginCtrl"),
            "https://example.com/authorize",
        ),
    );
    assert!(output.contains("data-controller=\"LoginCtrl\""));
    assert!(output.contains("href=\"https://example.com/authorize\""));
}

#[test]
fn logout() {
    let output = helper::write(
        "view-logout.html",
        myapp_ui::view::logout::View::new(
            Binding::new("views/logout.html", "LogoutCtrl"),
            "https://example.com/v2/logout",
        ),
    );
    assert!(output.contains("data-controller=\"LogoutCtrl\""));
    assert!(output.contains("href=\"https://example.com/v2/logout\""));
}

#[test]
fn error() {
    let output = helper::write(
        "view-error.html",
        myapp_ui::view::error::View::new("Something went wrong..."),
    );
    assert!(output.contains("Something went wrong..."));
}
