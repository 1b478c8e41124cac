use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tracing::{debug, info, warn};

use crate::api::rest::{handlers::LinkSettings, routes};
use crate::config::MoviesConfig;
use crate::contract::client::MoviesApi;
use crate::domain::repo::MoviesRepository;
use crate::domain::schema::movie_schema;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::MoviesLocalClient;
use crate::infra::storage::InMemoryMoviesRepository;

pub const MODULE_NAME: &str = "movies";

/// Movies module: wires storage, domain service and REST routes from config.
#[derive(Clone)]
pub struct MoviesModule {
    service: Arc<Service>,
    links: Arc<LinkSettings>,
}

impl MoviesModule {
    /// Build the module; relative `fixtures_path` resolves against `home_dir`.
    pub fn init(cfg: &MoviesConfig, home_dir: &Path) -> anyhow::Result<Self> {
        info!("Initializing movies module");
        debug!(
            "Loaded movies config: default_page_size={}, max_page_size={}, default_sort={}",
            cfg.default_page_size, cfg.max_page_size, cfg.default_sort
        );

        let repo = match cfg.fixtures_path.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(path) => InMemoryMoviesRepository::from_json_file(home_dir.join(path))?,
            None => {
                warn!("No fixtures_path configured, starting with an empty catalog");
                InMemoryMoviesRepository::new()
            }
        };

        Self::with_repository(Arc::new(repo), cfg)
    }

    /// Wire the module around an existing repository.
    pub fn with_repository(
        repo: Arc<dyn MoviesRepository>,
        cfg: &MoviesConfig,
    ) -> anyhow::Result<Self> {
        let default_sort = cfg.default_sort_spec();
        default_sort
            .validate(&movie_schema())
            .with_context(|| format!("invalid default_sort '{}'", cfg.default_sort))?;

        let service_config = ServiceConfig {
            default_page_size: cfg.default_page_size,
            max_page_size: cfg.max_page_size,
            default_sort,
        };
        Ok(Self {
            service: Arc::new(Service::new(repo, service_config)),
            links: Arc::new(LinkSettings::from_config(cfg)),
        })
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Local in-process client for other modules.
    pub fn client(&self) -> Arc<dyn MoviesApi> {
        Arc::new(MoviesLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, self.service.clone(), self.links.clone())
    }
}
