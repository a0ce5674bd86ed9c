use catalog_admin::model::{BrandId, ModelId};

use crate::cli_subcommands::NamedCommands;

use super::*;

pub(super) async fn handle_named_command(
    console: &mut Console,
    kind: Resource,
    command: NamedCommands,
) -> Result<()> {
    match command {
        NamedCommands::List { query, json } => {
            let query = query.unwrap_or_default();
            let catalog = console.catalog();
            let rows: Vec<(i64, &str)> = match kind {
                Resource::Brand => catalog
                    .filter_brands(&query)
                    .into_iter()
                    .map(|b| (b.id.get(), b.name.as_str()))
                    .collect(),
                _ => catalog
                    .filter_models(&query)
                    .into_iter()
                    .map(|m| (m.id.get(), m.name.as_str()))
                    .collect(),
            };

            if json {
                let v: Vec<_> = rows
                    .iter()
                    .map(|(id, name)| serde_json::json!({"id": id, "name": name}))
                    .collect();
                return print_json(&v, &format!("{} json", kind));
            }
            if rows.is_empty() {
                println!("No {}", kind);
            }
            for (id, name) in rows {
                println!("{}\t{}", id, name);
            }
        }

        NamedCommands::Add { name, json } => {
            let (id, created_name) = match kind {
                Resource::Brand => {
                    console.drafts_mut().new_brand_name = name;
                    let b = console.create_brand().await.context("create brand")?;
                    (b.id.get(), b.name)
                }
                _ => {
                    console.drafts_mut().new_model_name = name;
                    let m = console.create_model().await.context("create model")?;
                    (m.id.get(), m.name)
                }
            };
            if json {
                return print_json(
                    &serde_json::json!({"id": id, "name": created_name}),
                    "created json",
                );
            }
            println!("Created {} {}", id, created_name);
        }

        NamedCommands::Delete { id, yes } => {
            require_confirmation(yes, &format!("{} {}", kind, id))?;
            match kind {
                Resource::Brand => console
                    .delete_brand(BrandId(id))
                    .await
                    .context("delete brand")?,
                _ => console
                    .delete_model(ModelId(id))
                    .await
                    .context("delete model")?,
            }
            println!("Deleted {}", id);
        }
    }
    Ok(())
}
