use anyhow::{Context, Result};
use rhtmx_routing::placeholder::extract_parameters_from_route_path;
use rhtmx_routing::{PlaceholderPattern, RoutesManifest};
use std::path::Path;

pub fn execute(config: &Path, path: &str, pattern: Option<&str>) -> Result<()> {
    let pattern = resolve_pattern(config, pattern)?;

    for name in extract_parameters_from_route_path(path, &pattern)? {
        println!("{}", name);
    }

    Ok(())
}

/// Pick the placeholder pattern: `--pattern`, then the manifest's, then `{%s}`
pub fn resolve_pattern(config: &Path, pattern: Option<&str>) -> Result<PlaceholderPattern> {
    match pattern {
        Some(value) => Ok(PlaceholderPattern::parse(value)?),
        None if config.exists() => {
            let manifest = RoutesManifest::from_file(config)
                .with_context(|| format!("Failed to read route manifest {}", config.display()))?;
            Ok(manifest.routing.to_options()?.placeholder_pattern)
        }
        None => Ok(PlaceholderPattern::default()),
    }
}
