//! Client-side mirror of the admin collections: the committed snapshot, the
//! operator's selections and the derived search views.

use time::OffsetDateTime;

use crate::model::{Brand, BrandId, Car, CarId, CarModel, ModelId, Resource};

pub mod filter;
pub mod selection;
pub mod store;

pub use self::selection::Selection;
pub use self::store::CatalogStore;

/// One committed refresh. Brands, models and cars always come from the same
/// refresh; a snapshot is never patched in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub brands: Vec<Brand>,
    pub models: Vec<CarModel>,
    pub cars: Vec<Car>,

    /// 0 for the empty catalog before the first refresh, then +1 per commit.
    pub revision: u64,
    pub refreshed_at: Option<OffsetDateTime>,
}

impl Catalog {
    pub fn brand(&self, id: BrandId) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn model(&self, id: ModelId) -> Option<&CarModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, kind: Resource, id: i64) -> bool {
        match kind {
            Resource::Brand => self.brand(BrandId(id)).is_some(),
            Resource::Model => self.model(ModelId(id)).is_some(),
            Resource::Car => self.car(CarId(id)).is_some(),
        }
    }

    pub fn len(&self, kind: Resource) -> usize {
        match kind {
            Resource::Brand => self.brands.len(),
            Resource::Model => self.models.len(),
            Resource::Car => self.cars.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.models.is_empty() && self.cars.is_empty()
    }

    /// Brand name to display for a car: the name the backend embedded in the
    /// listing, else the name of the referenced brand. `None` when the
    /// reference dangles.
    pub fn brand_name_for<'a>(&'a self, car: &'a Car) -> Option<&'a str> {
        car.brand_name
            .as_deref()
            .or_else(|| self.brand(car.brand_id).map(|b| b.name.as_str()))
    }

    pub fn model_name_for<'a>(&'a self, car: &'a Car) -> Option<&'a str> {
        car.model_name
            .as_deref()
            .or_else(|| self.model(car.model_id).map(|m| m.name.as_str()))
    }

    /// "Brand Model" heading for list rows and the detail view.
    pub fn car_title(&self, car: &Car) -> String {
        let brand = self.brand_name_for(car).unwrap_or("?");
        let model = self.model_name_for(car).unwrap_or("?");
        format!("{} {}", brand, model)
    }
}
