mod common;

use common::{seed_catalog, TestDb, ALL_TABLES};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter,
    QuerySelect, Set,
};
use sea_orm_migration::MigratorTrait;
use storefront_schema::{
    entities::{category, order_item, product, user, vendor, UserRole},
    schema::{self, InitMode, Migrator},
};

#[tokio::test]
async fn migrator_creates_and_drops_the_catalog() {
    let db = TestDb::new().await;

    Migrator::up(&db.pool, None).await.unwrap();
    assert_eq!(db.table_names().await, ALL_TABLES.map(String::from).to_vec());

    Migrator::down(&db.pool, None).await.unwrap();
    assert!(db.table_names().await.is_empty());
}

#[tokio::test]
async fn migrator_accepts_a_schema_created_by_the_initializer() {
    let db = TestDb::new().await;
    schema::initialize(&db.pool, InitMode::Tolerant).await.unwrap();
    seed_catalog(&db).await;

    Migrator::up(&db.pool, None).await.unwrap();

    assert_eq!(db.count("products").await, 1);
}

#[tokio::test]
async fn status_lists_missing_tables() {
    let db = TestDb::new().await;
    let users_only = schema::catalog().into_iter().take(1).collect();
    schema::SchemaInitializer::with_tables(users_only, InitMode::Strict)
        .run(&db.pool)
        .await
        .unwrap();

    let statuses = schema::status(&db.pool).await.unwrap();

    assert_eq!(statuses.len(), 10);
    assert!(statuses[0].present);
    assert!(statuses[1..].iter().all(|s| !s.present));
}

#[tokio::test]
async fn users_round_trip_with_database_defaults() {
    let db = TestDb::new().await;
    schema::initialize(&db.pool, InitMode::Strict).await.unwrap();

    let inserted = user::ActiveModel {
        username: Set("dee".to_string()),
        email: Set("dee@example.com".to_string()),
        password: Set("hash".to_string()),
        ..Default::default()
    }
    .insert(&db.pool)
    .await
    .unwrap();

    let found = user::Entity::find_by_id(inserted.id)
        .one(&db.pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.role, Some(UserRole::Customer));
    assert!(found.created_at.is_some());
}

#[tokio::test]
async fn relations_walk_from_user_to_products() {
    let db = TestDb::new().await;
    schema::initialize(&db.pool, InitMode::Strict).await.unwrap();
    seed_catalog(&db).await;

    let owner = user::Entity::find_by_id(1).one(&db.pool).await.unwrap().unwrap();
    let shops = owner.find_related(vendor::Entity).all(&db.pool).await.unwrap();
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].shop_name.as_deref(), Some("Ana Lamps"));

    let names: Vec<String> = shops[0]
        .find_related(product::Entity)
        .select_only()
        .column(product::Column::Name)
        .into_tuple()
        .all(&db.pool)
        .await
        .unwrap();
    assert_eq!(names, vec!["Desk lamp"]);
}

#[tokio::test]
async fn categories_form_a_tree() {
    let db = TestDb::new().await;
    schema::initialize(&db.pool, InitMode::Strict).await.unwrap();
    seed_catalog(&db).await;

    let desk = category::ActiveModel {
        name: Set("Desk".to_string()),
        slug: Set("desk".to_string()),
        parent_id: Set(Some(1)),
        ..Default::default()
    }
    .insert(&db.pool)
    .await
    .unwrap();
    assert!(!desk.is_root());

    let root = category::Entity::find_by_id(1).one(&db.pool).await.unwrap().unwrap();
    assert!(root.is_root());

    let children = category::Entity::find()
        .filter(category::Column::ParentId.eq(root.id))
        .all(&db.pool)
        .await
        .unwrap();
    assert_eq!(children, vec![desk]);
}

#[tokio::test]
async fn order_item_total_defaults_to_price_times_quantity() {
    let db = TestDb::new().await;

    let item = order_item::ActiveModel {
        quantity: Set(3),
        price: Set(Decimal::new(1250, 2)),
        ..Default::default()
    };
    let item = item.before_save(&db.pool, true).await.unwrap();
    assert_eq!(item.total, Set(Decimal::new(3750, 2)));

    let explicit = order_item::ActiveModel {
        quantity: Set(3),
        price: Set(Decimal::new(1250, 2)),
        total: Set(Decimal::new(3000, 2)),
        ..Default::default()
    };
    let explicit = explicit.before_save(&db.pool, true).await.unwrap();
    assert_eq!(explicit.total, Set(Decimal::new(3000, 2)));
}
