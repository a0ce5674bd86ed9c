use catalog_admin::model::{CarId, ImageUpload};

use crate::cli_subcommands::CarCommands;

use super::*;

pub(super) async fn handle_car_command(
    console: &mut Console,
    cfg: &AdminConfig,
    command: CarCommands,
) -> Result<()> {
    match command {
        CarCommands::List { query, json } => {
            console.search_mut().cars = query.unwrap_or_default();
            let cars = console.visible_cars();
            if json {
                return print_json(&cars, "cars json");
            }
            if cars.is_empty() {
                println!("No cars");
            }
            let catalog = console.catalog();
            for car in &cars {
                println!(
                    "{}\t{}\t{}\t{}",
                    car.id,
                    catalog.car_title(car),
                    car.year,
                    car.date_added
                );
            }
        }

        CarCommands::Add {
            year,
            brand,
            model,
            description,
            image,
            json,
        } => {
            let upload = ImageUpload::from_path(&image)
                .await
                .with_context(|| format!("read image {}", image.display()))?;
            console.select(Resource::Brand, brand);
            console.select(Resource::Model, model);
            {
                let draft = console.car_draft_mut();
                draft.year = year;
                draft.description = description;
                draft.image = Some(upload);
            }
            let car = console.submit_car().await.context("create car")?;
            if json {
                return print_json(&car, "car json");
            }
            println!("Created car {}", car.id);
        }

        CarCommands::Show { id, json } => {
            console.select(Resource::Car, id);
            let Some(car) = console.selected_car() else {
                anyhow::bail!("car {} not found", id);
            };
            let image_url = cfg.image_url(&car.image_ref);
            if json {
                let mut v = serde_json::to_value(&car).context("serialize car")?;
                v["imageUrl"] = serde_json::Value::String(image_url);
                return print_json(&v, "car json");
            }

            let catalog = console.catalog();
            println!(
                "brand: {}",
                catalog.brand_name_for(&car).unwrap_or("(deleted)")
            );
            println!(
                "model: {}",
                catalog.model_name_for(&car).unwrap_or("(deleted)")
            );
            println!("year: {}", car.year);
            println!("added: {}", car.date_added);
            println!("description: {}", car.description);
            println!("image: {}", image_url);
        }

        CarCommands::Delete { id, yes } => {
            require_confirmation(yes, &format!("car {}", id))?;
            console
                .delete_car(CarId(id))
                .await
                .context("delete car")?;
            println!("Deleted car {}", id);
        }
    }
    Ok(())
}
