//! Search over the committed catalog.
//!
//! All functions are pure: they borrow the snapshot, keep the original order
//! and never touch the underlying collections. Matching is a case-insensitive
//! substring test; a blank query matches everything.

use crate::model::{Brand, Car, CarModel};

use super::Catalog;

fn normalize(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_lowercase())
    }
}

fn matches(haystack: &str, q: &str) -> bool {
    haystack.to_lowercase().contains(q)
}

pub fn filter_brands<'a>(brands: &'a [Brand], query: &str) -> Vec<&'a Brand> {
    let Some(q) = normalize(query) else {
        return brands.iter().collect();
    };
    brands.iter().filter(|b| matches(&b.name, &q)).collect()
}

pub fn filter_models<'a>(models: &'a [CarModel], query: &str) -> Vec<&'a CarModel> {
    let Some(q) = normalize(query) else {
        return models.iter().collect();
    };
    models.iter().filter(|m| matches(&m.name, &q)).collect()
}

/// Brand name, model name and year joined with spaces. Dangling references
/// contribute an empty name.
pub fn car_search_text(catalog: &Catalog, car: &Car) -> String {
    format!(
        "{} {} {}",
        catalog.brand_name_for(car).unwrap_or(""),
        catalog.model_name_for(car).unwrap_or(""),
        car.year
    )
}

pub fn filter_cars<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Car> {
    let Some(q) = normalize(query) else {
        return catalog.cars.iter().collect();
    };
    catalog
        .cars
        .iter()
        .filter(|c| matches(&car_search_text(catalog, c), &q))
        .collect()
}

impl Catalog {
    pub fn filter_brands(&self, query: &str) -> Vec<&Brand> {
        filter_brands(&self.brands, query)
    }

    pub fn filter_models(&self, query: &str) -> Vec<&CarModel> {
        filter_models(&self.models, query)
    }

    pub fn filter_cars(&self, query: &str) -> Vec<&Car> {
        filter_cars(self, query)
    }
}

#[cfg(test)]
#[path = "../tests/catalog/filter_tests.rs"]
mod tests;
