#![cfg(feature = "mysql")]

use mysql_async::prelude::Queryable;
use serde::{Deserialize, Serialize};
use sqlbind::{Db, Json, Record, Table};

fn mysql_url() -> String {
    let user = std::env::var("MYSQL_TEST_USER").unwrap_or_else(|_| "root".to_string());
    let pass = std::env::var("MYSQL_TEST_PASS").unwrap_or_default();
    let addr = std::env::var("MYSQL_TEST_ADDR").unwrap_or_else(|_| "localhost:3306".to_string());
    let name = std::env::var("MYSQL_TEST_DBNAME").unwrap_or_else(|_| "sqlbind_test".to_string());

    if pass.is_empty() {
        format!("mysql://{user}@{addr}/{name}")
    } else {
        format!("mysql://{user}:{pass}@{addr}/{name}")
    }
}

/// Drops and recreates `table` with `columns`, then connects.
async fn setup(table: &str, columns: &str) -> Db {
    tests::init_logging();

    let pool = mysql_async::Pool::new(mysql_url().as_str());
    let mut conn = pool.get_conn().await.expect("Failed to get connection");
    conn.query_drop(format!("DROP TABLE IF EXISTS `{table}`"))
        .await
        .expect("Failed to drop table");
    conn.query_drop(format!("CREATE TABLE `{table}` ({columns})"))
        .await
        .expect("Failed to create table");
    drop(conn);
    pool.disconnect().await.expect("Failed to close pool");

    Db::connect(&mysql_url()).await.expect("Failed to connect")
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Item {
    id: i64,
    value: bool,
    name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Settings {
    theme: String,
    volume: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Profile {
    id: u64,
    settings: Json<Settings>,
    tags: Option<Json<Vec<String>>>,

    #[column(no_insert, no_update)]
    created_at: Option<String>,
}

#[tokio::test]
async fn live_bind_three_columns() {
    let db = setup(
        "sqlbind_items",
        "id INT NOT NULL AUTO_INCREMENT PRIMARY KEY, value BOOL NOT NULL, name VARCHAR(255) NOT NULL",
    )
    .await;

    let mut table = Table::<Item>::new();
    let items = table.fetch(&db, "sqlbind_items").await.unwrap();

    assert_eq!(items.columns().len(), 3);
    assert_eq!(items.insert_columns().count(), 2);
    assert_eq!(items.update_columns().count(), 2);
    assert_eq!(items.warning(), None);
    assert!(items.columns()[0].is_primary_key());
    assert!(items.columns()[0].indexes[0].is_primary_key());
}

#[tokio::test]
async fn live_insert_select_update() {
    let db = setup(
        "sqlbind_crud",
        "id INT NOT NULL AUTO_INCREMENT PRIMARY KEY, value BOOL NOT NULL, name VARCHAR(255) NOT NULL",
    )
    .await;
    let items = db.bind::<Item>("sqlbind_crud").await.unwrap();

    let mut item = Item {
        id: 0,
        value: true,
        name: "lamp".into(),
    };
    let id = items.save(&mut item).await.unwrap();
    assert!(id > 0);
    assert_eq!(item.id as u64, id);

    let mut loaded = Item::default();
    items.select_by_id(&mut loaded, id).await.unwrap();
    assert_eq!(loaded, item);

    item.name = "desk".into();
    assert_eq!(items.save(&mut item).await.unwrap(), id);

    let mut loaded = Item::default();
    let found = items
        .select_by_column(&mut loaded, "name", "desk")
        .await
        .unwrap();
    assert_eq!(found.map(|item| item.id), Some(item.id));

    // No matching row is a warning, not an error.
    let ghost = Item {
        id: 9999,
        ..Item::default()
    };
    items.update(&ghost).await.unwrap();

    let all = items.select_all("ORDER BY `id`", vec![]).await.unwrap();
    assert_eq!(all, [item]);
}

#[tokio::test]
async fn live_json_round_trip() {
    let db = setup(
        "sqlbind_profiles",
        "id INT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         settings TEXT NOT NULL, \
         tags JSON NULL, \
         created_at VARCHAR(32) NULL DEFAULT 'now'",
    )
    .await;
    let profiles = db.bind::<Profile>("sqlbind_profiles").await.unwrap();
    assert_eq!(profiles.warning(), None);

    let mut profile = Profile {
        settings: Json(Settings {
            theme: "dark".into(),
            volume: 7,
        }),
        tags: Some(Json(vec!["beta".into()])),
        ..Profile::default()
    };
    let id = profiles.insert(&mut profile).await.unwrap();

    let mut loaded = Profile::default();
    profiles.select_by_id(&mut loaded, id).await.unwrap();
    assert_eq!(loaded.settings, profile.settings);
    assert_eq!(loaded.tags, profile.tags);
    assert_eq!(loaded.created_at.as_deref(), Some("now"));
}

#[tokio::test]
async fn live_schema_mismatch() {
    let db = setup(
        "sqlbind_mismatch",
        "id INT NOT NULL AUTO_INCREMENT PRIMARY KEY, value BOOL NOT NULL, name VARCHAR(255) NOT NULL, total INT NOT NULL",
    )
    .await;

    let mut table = Table::<Item>::new();
    let err = table.fetch(&db, "sqlbind_mismatch").await.unwrap_err();
    assert!(err.is_schema_mismatch());
    assert!(!table.is_bound());
}
