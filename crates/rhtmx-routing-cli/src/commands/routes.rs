use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn execute(config: &Path) -> Result<()> {
    let service = super::load_service(config)?;
    let routes = service.get_routes();

    if routes.is_empty() {
        println!("  {} No routes registered", "ℹ".cyan());
        return Ok(());
    }

    println!(
        "{} ({})",
        "Routes".green().bold(),
        service.placeholder_pattern().to_string().dimmed()
    );

    for (name, route) in routes.iter() {
        let params = if route.has_parameters() {
            route.parameters().join(", ")
        } else {
            "-".to_string()
        };
        println!("  {} {} [{}]", name.cyan().bold(), route.path(), params.dimmed());
    }

    Ok(())
}
