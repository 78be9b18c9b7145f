use anyhow::{bail, Context, Result};
use rhtmx_routing::{Parameters, Value};
use std::path::Path;
use tracing::debug;

pub fn execute(config: &Path, name: &str, params: &[String], no_params: bool) -> Result<()> {
    let service = super::load_service(config)?;

    let url = if no_params {
        service.generate(name, None)
    } else {
        let inputs = parse_assignments(params)?;
        debug!(route = name, inputs = inputs.len(), "generating URL");
        service.generate(name, Some(&inputs))
    }
    .with_context(|| format!("Failed to generate URL for route \"{}\"", name))?;

    println!("{}", url);
    Ok(())
}

/// Parse `KEY=VALUE` arguments into ordered parameters
pub fn parse_assignments(args: &[String]) -> Result<Parameters> {
    args.iter().map(|arg| parse_assignment(arg)).collect()
}

/// Parse one `KEY=VALUE` argument
///
/// The value is read as a JSON scalar (`117`, `true`, `null`, `"quoted"`)
/// when it parses as one, otherwise it is taken verbatim as a string.
pub fn parse_assignment(arg: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = arg.split_once('=') else {
        bail!("Invalid parameter \"{}\": expected KEY=VALUE", arg);
    };

    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid parameter \"{}\": empty key", arg);
    }

    let value = serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|json| Value::from_json(&json))
        .unwrap_or_else(|| Value::from(raw));

    Ok((key.to_string(), value))
}
