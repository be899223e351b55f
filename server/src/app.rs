use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Extension;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::auth::{AuthConfig, Provider};
use crate::bootstrap::RouteTable;
use crate::helper::parse_env_or;

pub(crate) struct Config {
    host: std::net::IpAddr,
    port: u16,

    auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: parse_env_or("HOST", IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)))?,
            port: parse_env_or("PORT", 3010)?,

            auth: AuthConfig::from_env()?,
        })
    }

    pub fn build(self) -> anyhow::Result<Application> {
        let bootstrap = crate::bootstrap::configure(self.auth)?;

        Ok(Application {
            socket_address: SocketAddr::from((self.host, self.port)),
            routes: bootstrap.routes,
            provider: Arc::new(Provider::init(bootstrap.auth)),
        })
    }
}

pub(crate) struct Application {
    socket_address: SocketAddr,
    routes: RouteTable,
    provider: Arc<Provider>,
}

impl Application {
    fn router(&self) -> axum::Router {
        crate::router::create(&self.routes)
            .layer(Extension(self.provider.clone()))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("binding socket to {}", self.socket_address);
        let listener = TcpListener::bind(self.socket_address).await?;
        tracing::info!("listening on {}", self.socket_address);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

#[cfg(test)]
impl Application {
    pub(crate) fn test() -> Self {
        Self::test_with_auth(AuthConfig::default())
    }

    pub(crate) fn test_with_auth(auth: AuthConfig) -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 3010,
            auth,
        }
        .build()
        .unwrap()
    }

    pub(crate) fn provider(&self) -> &Provider {
        &self.provider
    }

    pub(crate) async fn handle(
        &self,
        req: axum::http::Request<axum::body::Body>,
    ) -> axum::http::Response<axum::body::Body> {
        use tower::ServiceExt;

        self.router().oneshot(req).await.unwrap()
    }
}
