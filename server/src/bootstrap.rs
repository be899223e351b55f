//! Startup wiring of the application: which view and controller answer each
//! path, where unknown paths are sent, and how the authentication provider is
//! set up.

use std::collections::HashSet;

use crate::auth::AuthConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Controller {
    Logout,
    Login,
    Public,
    Root,
}

impl Controller {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Logout => "LogoutCtrl",
            Self::Login => "LoginCtrl",
            Self::Public => "PublicCtrl",
            Self::Root => "RootCtrl",
        }
    }
}

impl std::fmt::Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteEntry {
    pub path: &'static str,
    pub template: &'static str,
    pub controller: Controller,
}

impl RouteEntry {
    pub fn binding(&self) -> myapp_ui::view::Binding<'static> {
        myapp_ui::view::Binding::new(self.template, self.controller.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution<'a> {
    View(&'a RouteEntry),
    Redirect(&'a str),
}

/// Ordered set of routes with a single fallback redirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: &'static str,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(Resolution::View)
            .unwrap_or(Resolution::Redirect(self.fallback))
    }
}

#[derive(Debug, Default)]
pub(crate) struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
    fallbacks: Vec<&'static str>,
}

impl RouteTableBuilder {
    pub fn when(
        mut self,
        path: &'static str,
        template: &'static str,
        controller: Controller,
    ) -> Self {
        self.entries.push(RouteEntry {
            path,
            template,
            controller,
        });
        self
    }

    pub fn otherwise(mut self, redirect_to: &'static str) -> Self {
        self.fallbacks.push(redirect_to);
        self
    }

    pub fn build(self) -> anyhow::Result<RouteTable> {
        let mut paths = HashSet::with_capacity(self.entries.len());
        for entry in self.entries.iter() {
            if !entry.path.starts_with('/') {
                anyhow::bail!("route path {:?} should start with '/'", entry.path);
            }
            if !paths.insert(entry.path) {
                anyhow::bail!("route path {:?} declared more than once", entry.path);
            }
        }
        let fallback = match self.fallbacks.as_slice() {
            [] => anyhow::bail!("no fallback route declared"),
            [fallback] => *fallback,
            [..] => anyhow::bail!(
                "{} fallback routes declared, only one is allowed",
                self.fallbacks.len()
            ),
        };
        if !paths.contains(fallback) {
            anyhow::bail!("fallback {fallback:?} doesn't match any declared route");
        }
        Ok(RouteTable {
            entries: self.entries,
            fallback,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bootstrap {
    pub routes: RouteTable,
    pub auth: AuthConfig,
}

pub(crate) fn routes() -> anyhow::Result<RouteTable> {
    RouteTable::builder()
        .when("/logout", "views/logout.html", Controller::Logout)
        .when("/login", "views/login.html", Controller::Login)
        .when("/public", "views/public.html", Controller::Public)
        .when("/", "views/root.html", Controller::Root)
        .otherwise("/login")
        .build()
}

pub(crate) fn configure(auth: AuthConfig) -> anyhow::Result<Bootstrap> {
    let routes = routes()?;
    tracing::debug!(
        routes = routes.entries().len(),
        fallback = routes.fallback(),
        domain = %auth.domain,
        "application configured"
    );
    Ok(Bootstrap { routes, auth })
}
