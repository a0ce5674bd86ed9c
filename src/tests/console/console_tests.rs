use crate::error::{DraftField, ValidationError};
use crate::fake_api::FakeApi;
use crate::model::{BrandId, CarId, ImageUpload, ModelId};

use super::*;

fn console(api: &FakeApi) -> AdminConsole<FakeApi> {
    AdminConsole::new(api.clone(), &AdminConfig::default())
}

fn fill_car_draft(console: &mut AdminConsole<FakeApi>, brand: BrandId, model: ModelId) {
    console.select(Resource::Brand, brand.get());
    console.select(Resource::Model, model.get());
    let draft = console.car_draft_mut();
    draft.year = "2020".to_string();
    draft.description = "test".to_string();
    draft.image = Some(ImageUpload::new("car.jpg", vec![0xff, 0xd8, 0xff]));
}

#[tokio::test]
async fn sync_loads_catalog_and_drops_stale_selection() {
    let api = FakeApi::new();
    let brand = api.seed_brand("Toyota");
    let mut console = console(&api);

    console.select(Resource::Brand, brand.get());
    console.select(Resource::Car, 77);
    let catalog = console.sync().await.expect("sync");

    assert_eq!(catalog.brands.len(), 1);
    assert_eq!(console.selection().brand(), Some(brand));
    assert_eq!(console.selection().car(), None);
}

#[tokio::test]
async fn create_brand_refreshes_resets_field_and_selects_it() {
    let api = FakeApi::new();
    let mut console = console(&api);

    console.drafts_mut().new_brand_name = "  Toyota ".to_string();
    let brand = console.create_brand().await.expect("create brand");

    assert_eq!(brand.name, "Toyota");
    assert_eq!(console.catalog().brands, vec![brand.clone()]);
    assert_eq!(console.drafts().new_brand_name, "");
    assert_eq!(console.selection().brand(), Some(brand.id));
    assert_eq!(console.drafts().car.brand_id, Some(brand.id));
}

#[tokio::test]
async fn auto_select_can_be_disabled() {
    let api = FakeApi::new();
    let cfg = AdminConfig {
        auto_select_created: false,
        ..AdminConfig::default()
    };
    let mut console = AdminConsole::new(api.clone(), &cfg);

    console.drafts_mut().new_model_name = "Corolla".to_string();
    console.create_model().await.expect("create model");
    assert_eq!(console.selection().model(), None);
    assert_eq!(console.catalog().models.len(), 1);
}

#[tokio::test]
async fn blank_name_is_rejected_without_network_call() {
    let api = FakeApi::new();
    let mut console = console(&api);

    console.drafts_mut().new_brand_name = "   ".to_string();
    let err = console.create_brand().await.unwrap_err();

    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::Missing {
            field: DraftField::BrandName
        })
    );
    assert!(api.calls().is_empty());
    assert_eq!(console.drafts().new_brand_name, "   ");
}

#[tokio::test]
async fn incomplete_car_draft_never_reaches_the_api() {
    let api = FakeApi::new();
    let mut console = console(&api);
    console.car_draft_mut().description = "only a description".to_string();

    let err = console.submit_car().await.unwrap_err();
    assert_eq!(err.as_validation().map(|e| e.field()), Some(DraftField::Year));
    assert_eq!(api.mutation_calls(), 0);
}

#[tokio::test]
async fn failed_car_submission_keeps_the_draft() {
    let api = FakeApi::new();
    let brand = api.seed_brand("Toyota");
    let model = api.seed_model("Corolla");
    let mut console = console(&api);
    console.sync().await.expect("sync");
    fill_car_draft(&mut console, brand, model);

    let before = console.drafts().clone();
    let revision = console.catalog().revision;
    api.fail_mutations();

    let err = console.submit_car().await.unwrap_err();
    match err {
        AdminError::Request(req) => assert_eq!(req.status, Some(500)),
        other => panic!("expected request error, got {:?}", other),
    }
    assert_eq!(console.drafts(), &before);
    assert_eq!(console.selection().brand(), Some(brand));
    // No refresh after a failed mutation.
    assert_eq!(console.catalog().revision, revision);
}

#[tokio::test]
async fn failed_refresh_after_mutation_surfaces_refresh_error() {
    let api = FakeApi::new();
    let mut console = console(&api);
    console.sync().await.expect("sync");
    let before = console.catalog();

    api.fail_list(Resource::Car);
    console.drafts_mut().new_brand_name = "Toyota".to_string();
    let err = console.create_brand().await.unwrap_err();

    match err {
        AdminError::Refresh(refresh) => assert_eq!(refresh.resource, Resource::Car),
        other => panic!("expected refresh error, got {:?}", other),
    }
    assert_eq!(console.catalog(), before);
    assert_eq!(console.drafts().new_brand_name, "Toyota");
}

#[tokio::test]
async fn deleting_selected_entities_clears_their_selection() {
    let api = FakeApi::new();
    let brand = api.seed_brand("Toyota");
    let model = api.seed_model("Corolla");
    let car = api.seed_car(brand, model, 2020);
    let mut console = console(&api);
    console.sync().await.expect("sync");

    console.select(Resource::Car, car.get());
    assert_eq!(console.selected_car().map(|c| c.id), Some(car));
    console.delete_selected_car().await.expect("delete car");
    assert_eq!(console.selection().car(), None);
    assert!(console.catalog().cars.is_empty());

    console.select(Resource::Model, model.get());
    console.delete_selected_model().await.expect("delete model");
    assert_eq!(console.selection().model(), None);
    assert_eq!(console.drafts().car.model_id, None);
}

#[tokio::test]
async fn delete_selected_without_selection_is_a_validation_error() {
    let api = FakeApi::new();
    let mut console = console(&api);

    let err = console.delete_selected_brand().await.unwrap_err();
    assert_eq!(err.as_validation().map(|e| e.field()), Some(DraftField::Brand));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn deleting_another_entity_keeps_current_selection() {
    let api = FakeApi::new();
    let keep = api.seed_brand("Toyota");
    let drop = api.seed_brand("Lada");
    let mut console = console(&api);
    console.sync().await.expect("sync");

    console.select(Resource::Brand, keep.get());
    console.delete_brand(drop).await.expect("delete brand");
    assert_eq!(console.selection().brand(), Some(keep));
}

#[tokio::test]
async fn selection_invariant_survives_mutation_sequences() {
    let api = FakeApi::new();
    let mut console = console(&api);

    for name in ["Toyota", "Lada", "Tesla"] {
        console.drafts_mut().new_brand_name = name.to_string();
        console.create_brand().await.expect("create brand");
        let catalog = console.catalog();
        assert!(console.selection().holds_for(&catalog));
    }

    // Someone else removes the selected brand; our next mutation must not
    // leave the selection pointing at it.
    let selected = console.selection().brand().expect("auto-selected");
    api.remove_remotely(Resource::Brand, selected.get());
    let first = console.catalog().brands[0].id;
    console.delete_brand(first).await.expect("delete brand");

    let catalog = console.catalog();
    assert!(console.selection().holds_for(&catalog));
    assert_eq!(console.selection().brand(), None);
    assert_eq!(console.drafts().car.brand_id, None);
}

#[tokio::test]
async fn search_queries_drive_visible_lists() {
    let api = FakeApi::new();
    let toyota = api.seed_brand("Toyota");
    let lada = api.seed_brand("Lada");
    let corolla = api.seed_model("Corolla");
    api.seed_car(toyota, corolla, 2020);
    api.seed_car(lada, corolla, 1995);
    let mut console = console(&api);
    console.sync().await.expect("sync");

    console.search_mut().brands = "LAD".to_string();
    console.search_mut().cars = "toy".to_string();
    assert_eq!(console.visible_brands().len(), 1);
    assert_eq!(console.visible_models().len(), 1);
    let cars = console.visible_cars();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].brand_id, toyota);

    // Underlying collections are untouched.
    assert_eq!(console.catalog().cars.len(), 2);
}

#[tokio::test]
async fn end_to_end_create_then_delete_brand_keeps_dangling_car() {
    let api = FakeApi::new();
    let mut console = console(&api);
    let catalog = console.sync().await.expect("initial sync");
    assert!(catalog.is_empty());

    console.drafts_mut().new_brand_name = "Toyota".to_string();
    let brand = console.create_brand().await.expect("create brand");
    assert_eq!(brand.id, BrandId(1));

    console.drafts_mut().new_model_name = "Corolla".to_string();
    let model = console.create_model().await.expect("create model");
    assert_eq!(model.id, ModelId(1));

    // Pickers were filled by auto-selection; add the rest of the form.
    {
        let draft = console.car_draft_mut();
        draft.year = "2020".to_string();
        draft.description = "test".to_string();
        draft.image = Some(ImageUpload::new("file.jpg", vec![1, 2, 3]));
    }
    let car = console.submit_car().await.expect("submit car");

    let cars = console.catalog().cars.clone();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].brand_id, BrandId(1));
    assert_eq!(cars[0].model_id, ModelId(1));
    assert!(console.drafts().car.is_empty());

    console.select(Resource::Brand, 1);
    console.delete_brand(BrandId(1)).await.expect("delete brand");

    let catalog = console.catalog();
    assert!(catalog.brands.is_empty());
    assert_eq!(console.selection().brand(), None);
    assert_eq!(catalog.cars, cars);
    assert_eq!(catalog.car(CarId(car.id.get())), Some(&car));
    assert_eq!(api.cars(), cars);
}
