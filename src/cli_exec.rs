use anyhow::{Context, Result};

use catalog_admin::config::AdminConfig;
use catalog_admin::console::AdminConsole;
use catalog_admin::model::Resource;
use catalog_admin::remote::RemoteClient;

use crate::Commands;

mod cars;
mod named;

type Console = AdminConsole<RemoteClient>;

pub(crate) async fn handle_command(cfg: &AdminConfig, command: Commands) -> Result<()> {
    let client = RemoteClient::new(cfg)?;
    let mut console = AdminConsole::new(client, cfg);
    console
        .sync()
        .await
        .with_context(|| format!("load catalog from {}", cfg.api_base()))?;

    match command {
        Commands::Status { json } => print_status(&console, json),
        Commands::Brands { command } => {
            named::handle_named_command(&mut console, Resource::Brand, command).await
        }
        Commands::Models { command } => {
            named::handle_named_command(&mut console, Resource::Model, command).await
        }
        Commands::Cars { command } => cars::handle_car_command(&mut console, cfg, command).await,
    }
}

fn print_status(console: &Console, json: bool) -> Result<()> {
    let catalog = console.catalog();
    if json {
        let v = serde_json::json!({
            "brands": catalog.brands.len(),
            "models": catalog.models.len(),
            "cars": catalog.cars.len(),
            "revision": catalog.revision,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&v).context("serialize status json")?
        );
        return Ok(());
    }

    for kind in Resource::ALL {
        println!("{}: {}", kind, catalog.len(kind));
    }
    Ok(())
}

fn require_confirmation(yes: bool, what: &str) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete {} without --yes", what);
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, label: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {}", label))?
    );
    Ok(())
}
