//! Integration tests for single-table CRUD on the catalog entities.
//!
//! Exercises the repository layer against a real database:
//! - Category create/find/list/update/delete, including name normalization
//! - Waste, disposal and recycling tip CRUD
//! - Constraint behaviour (unique category name, foreign keys, cascades)

use sqlx::PgPool;
use waste_sorting_db::models::category::{CreateCategory, UpdateCategory};
use waste_sorting_db::models::disposal::{CreateDisposal, UpdateDisposal};
use waste_sorting_db::models::recycling_tip::{CreateRecyclingTip, UpdateRecyclingTip};
use waste_sorting_db::models::waste::{CreateWaste, UpdateWaste};
use waste_sorting_db::repositories::{CategoryRepo, DisposalRepo, RecyclingTipRepo, WasteRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        description: format!("Everything made of {name}"),
    }
}

fn new_waste(category_id: i64, name: &str) -> CreateWaste {
    CreateWaste {
        name: name.to_string(),
        description: format!("A discarded {name} item"),
        category_id,
    }
}

fn new_disposal(waste_id: i64, method: &str) -> CreateDisposal {
    CreateDisposal {
        waste_id,
        method: method.to_string(),
        instructions: "Rinse, dry and drop off".to_string(),
        location: "Community recycling centre".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: Category CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_crud(pool: PgPool) {
    // Create (name is lowercased)
    let category = CategoryRepo::create(&pool, &new_category("Plastic"))
        .await
        .unwrap();
    assert_eq!(category.name, "plastic");
    assert_eq!(category.description, "Everything made of Plastic");

    // Find by id
    let found = CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .expect("category should exist");
    assert_eq!(found.id, category.id);

    // List
    CategoryRepo::create(&pool, &new_category("Glass"))
        .await
        .unwrap();
    let all = CategoryRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["plastic", "glass"]);

    // Update (partial)
    let updated = CategoryRepo::update(
        &pool,
        category.id,
        &UpdateCategory {
            name: None,
            description: Some("Bottles, tubs and film".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("category should exist");
    assert_eq!(updated.name, "plastic");
    assert_eq!(updated.description, "Bottles, tubs and film");
    assert!(updated.last_updated >= category.last_updated);

    // Delete
    assert!(CategoryRepo::delete(&pool, category.id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, category.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_category_returns_none(pool: PgPool) {
    let result = CategoryRepo::update(
        &pool,
        9999,
        &UpdateCategory {
            name: Some("metal".to_string()),
            description: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_name_violates_unique_constraint(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("paper"))
        .await
        .unwrap();
    let err = CategoryRepo::create(&pool, &new_category("PAPER"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_categories_name"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: Waste CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_waste_crud(pool: PgPool) {
    let plastic = CategoryRepo::create(&pool, &new_category("plastic"))
        .await
        .unwrap();
    let glass = CategoryRepo::create(&pool, &new_category("glass"))
        .await
        .unwrap();

    let waste = WasteRepo::create(&pool, &new_waste(plastic.id, "bottle"))
        .await
        .unwrap();
    assert_eq!(waste.category_id, plastic.id);

    let moved = WasteRepo::update(
        &pool,
        waste.id,
        &UpdateWaste {
            name: None,
            description: None,
            category_id: Some(glass.id),
        },
    )
    .await
    .unwrap()
    .expect("waste should exist");
    assert_eq!(moved.category_id, glass.id);
    assert_eq!(moved.name, "bottle");

    let with_category = WasteRepo::find_with_category_by_id(&pool, waste.id)
        .await
        .unwrap()
        .expect("waste should exist");
    assert_eq!(with_category.category_name, "glass");

    assert!(WasteRepo::delete(&pool, waste.id).await.unwrap());
    assert!(WasteRepo::find_with_category_by_id(&pool, waste.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_waste_with_unknown_category_violates_foreign_key(pool: PgPool) {
    let err = WasteRepo::create(&pool, &new_waste(424242, "orphan"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
            assert_eq!(db_err.constraint(), Some("fk_waste_category"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: Disposal CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_disposal_crud(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("metal"))
        .await
        .unwrap();
    let waste = WasteRepo::create(&pool, &new_waste(category.id, "can"))
        .await
        .unwrap();

    let disposal = DisposalRepo::create(&pool, &new_disposal(waste.id, "Recycle"))
        .await
        .unwrap();
    assert_eq!(disposal.waste_id, waste.id);
    assert!(disposal.last_updated.is_some());

    let updated = DisposalRepo::update(
        &pool,
        disposal.id,
        &UpdateDisposal {
            waste_id: None,
            method: Some("Scrap".to_string()),
            instructions: None,
            location: None,
        },
    )
    .await
    .unwrap()
    .expect("disposal should exist");
    assert_eq!(updated.method, "Scrap");
    assert_eq!(updated.location, "Community recycling centre");

    assert_eq!(DisposalRepo::list(&pool).await.unwrap().len(), 1);
    assert!(DisposalRepo::delete(&pool, disposal.id).await.unwrap());
    assert!(DisposalRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_waste_cascades_to_disposals_and_tips(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("organic"))
        .await
        .unwrap();
    let waste = WasteRepo::create(&pool, &new_waste(category.id, "peel"))
        .await
        .unwrap();
    DisposalRepo::create(&pool, &new_disposal(waste.id, "Compost"))
        .await
        .unwrap();
    RecyclingTipRepo::create(
        &pool,
        &CreateRecyclingTip {
            title: "Home compost".to_string(),
            tip: "Mix with dry leaves".to_string(),
            category_id: None,
            waste_id: Some(waste.id),
        },
    )
    .await
    .unwrap();

    assert!(WasteRepo::delete(&pool, waste.id).await.unwrap());

    assert!(DisposalRepo::list(&pool).await.unwrap().is_empty());
    assert!(RecyclingTipRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: Recycling tip CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recycling_tip_crud(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("paper"))
        .await
        .unwrap();

    let tip = RecyclingTipRepo::create(
        &pool,
        &CreateRecyclingTip {
            title: "Keep it dry".to_string(),
            tip: "Wet paper cannot be recycled".to_string(),
            category_id: Some(category.id),
            waste_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(tip.category_id, Some(category.id));
    assert_eq!(tip.waste_id, None);

    let updated = RecyclingTipRepo::update(
        &pool,
        tip.id,
        &UpdateRecyclingTip {
            title: Some("Keep paper dry".to_string()),
            tip: None,
            category_id: None,
            waste_id: None,
        },
    )
    .await
    .unwrap()
    .expect("tip should exist");
    assert_eq!(updated.title, "Keep paper dry");
    assert_eq!(updated.tip, "Wet paper cannot be recycled");
    assert_eq!(updated.category_id, Some(category.id));

    let found = RecyclingTipRepo::find_by_id(&pool, tip.id)
        .await
        .unwrap()
        .expect("tip should exist");
    assert_eq!(found, updated);

    assert!(RecyclingTipRepo::delete(&pool, tip.id).await.unwrap());
    assert!(RecyclingTipRepo::find_by_id(&pool, tip.id)
        .await
        .unwrap()
        .is_none());
}
