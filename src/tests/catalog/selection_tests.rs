use crate::model::{Brand, CarModel};

use super::*;

fn catalog(brands: &[i64], models: &[i64], cars: &[(i64, i64, i64)]) -> Catalog {
    Catalog {
        brands: brands
            .iter()
            .map(|&id| Brand {
                id: BrandId(id),
                name: format!("brand-{}", id),
            })
            .collect(),
        models: models
            .iter()
            .map(|&id| CarModel {
                id: ModelId(id),
                name: format!("model-{}", id),
            })
            .collect(),
        cars: cars
            .iter()
            .map(|&(id, brand, model)| Car {
                id: CarId(id),
                year: 2020,
                brand_id: BrandId(brand),
                model_id: ModelId(model),
                brand_name: None,
                model_name: None,
                description: String::new(),
                image_ref: String::new(),
                date_added: String::new(),
            })
            .collect(),
        revision: 1,
        refreshed_at: None,
    }
}

#[test]
fn select_does_not_validate_against_collections() {
    let mut sel = Selection::default();
    sel.select(Resource::Brand, 42);
    assert_eq!(sel.brand(), Some(BrandId(42)));
    assert!(!sel.holds_for(&Catalog::default()));
}

#[test]
fn reconcile_clears_only_missing_ids() {
    let mut sel = Selection::default();
    sel.select_brand(BrandId(1));
    sel.select_model(ModelId(2));
    sel.select_car(CarId(3));

    let cleared = sel.reconcile(&catalog(&[1], &[], &[(3, 1, 2)]));

    assert_eq!(cleared, vec![Resource::Model]);
    assert_eq!(sel.brand(), Some(BrandId(1)));
    assert_eq!(sel.model(), None);
    assert_eq!(sel.car(), Some(CarId(3)));
}

#[test]
fn reconcile_on_empty_catalog_clears_everything() {
    let mut sel = Selection::default();
    sel.select_brand(BrandId(1));
    sel.select_model(ModelId(1));
    sel.select_car(CarId(1));

    let cleared = sel.reconcile(&Catalog::default());
    assert_eq!(cleared.len(), 3);
    assert!(sel.is_empty());
}

#[test]
fn invariant_holds_after_every_reconcile() {
    // Walk a sequence of catalogs that grow and shrink; after each reconcile
    // no present selection may point outside the current collections.
    let steps = [
        catalog(&[1, 2], &[1], &[(1, 1, 1)]),
        catalog(&[2], &[1], &[(1, 1, 1)]),
        catalog(&[2, 3], &[], &[]),
        catalog(&[], &[4], &[(2, 9, 4)]),
    ];

    let mut sel = Selection::default();
    for (i, step) in steps.iter().enumerate() {
        // Point at whatever the previous step had, plus something unknown.
        sel.select(Resource::Brand, (i as i64) + 1);
        sel.select(Resource::Model, 1);
        sel.select(Resource::Car, (i as i64) % 2 + 1);

        sel.reconcile(step);
        assert!(sel.holds_for(step), "step {} left a stale selection", i);
    }
}

#[test]
fn clear_if_only_clears_matching_id() {
    let mut sel = Selection::default();
    sel.select_car(CarId(5));
    assert!(!sel.clear_if(Resource::Car, 6));
    assert_eq!(sel.car(), Some(CarId(5)));
    assert!(sel.clear_if(Resource::Car, 5));
    assert_eq!(sel.car(), None);
}

#[test]
fn selected_car_resolves_through_catalog() {
    let cat = catalog(&[1], &[1], &[(7, 1, 1)]);
    let mut sel = Selection::default();
    assert!(sel.selected_car(&cat).is_none());

    sel.select_car(CarId(7));
    assert_eq!(sel.selected_car(&cat).map(|c| c.id), Some(CarId(7)));

    sel.select_car(CarId(8));
    assert!(sel.selected_car(&cat).is_none());
}
