pub mod extract;
pub mod generate;
pub mod routes;

use anyhow::{Context, Result};
use rhtmx_routing::{RoutesManifest, RoutingService};
use std::path::Path;
use tracing::info;

/// Load the manifest at `path` and build a routing service from it
pub fn load_service(path: &Path) -> Result<RoutingService> {
    let manifest = RoutesManifest::from_file(path)
        .with_context(|| format!("Failed to read route manifest {}", path.display()))?;

    let service = manifest
        .into_service()
        .with_context(|| format!("Invalid route manifest {}", path.display()))?;

    info!(routes = service.get_routes().len(), "route manifest loaded");
    Ok(service)
}
