use pretty_assertions::assert_eq;
use sqlbind::{Record, Table};
use tests::{mock_db, MockDriver, OpKind, TableDef};

#[derive(Debug, Default, Record)]
struct Item {
    id: i64,
    value: bool,
    name: String,
}

fn items() -> TableDef {
    TableDef::new()
        .column("id", "int(11)", "NO", "PRI", "auto_increment")
        .not_null("value", "tinyint(1)")
        .not_null("name", "varchar(255)")
}

fn column_names<'a>(columns: impl Iterator<Item = &'a sqlbind::Column>) -> Vec<&'a str> {
    columns.map(|column| column.name.as_str()).collect()
}

#[tokio::test]
async fn bind_three_columns() {
    let (db, driver) = mock_db();
    driver.add_table("items", items());

    let binding = db.bind::<Item>("items").await.unwrap();

    assert_eq!(binding.name(), "items");
    assert_eq!(binding.record_name(), "Item");
    assert_eq!(binding.columns().len(), 3);
    assert_eq!(column_names(binding.insert_columns()), ["value", "name"]);
    assert_eq!(column_names(binding.update_columns()), ["value", "name"]);
    assert_eq!(binding.warning(), None);

    assert_eq!(binding.column_names(), "`id`, `value`, `name`");
    assert_eq!(
        binding.select_sql(),
        "SELECT `id`, `value`, `name` FROM `items` "
    );
    assert_eq!(
        binding.insert_sql(),
        "INSERT INTO `items` (`value`, `name`) VALUES (?, ?) "
    );
    assert_eq!(binding.update_sql(), "UPDATE `items` SET `value`=?, `name`=? ");

    assert_eq!(binding.field_index("id"), Some(0));
    assert_eq!(binding.field_index("name"), Some(2));
    assert_eq!(binding.field_index("Name"), None);
    assert!(binding.is_column("value"));
    assert!(!binding.is_column("Value"));

    let log = driver.log();
    assert_eq!(
        log.sql(),
        ["SHOW COLUMNS FROM `items`", "SHOW INDEXES FROM `items`"]
    );
    assert_eq!(log.count(|op| op.kind == OpKind::Execute), 0);
}

#[tokio::test]
async fn indexes_attach_to_their_columns() {
    let (db, driver) = mock_db();
    driver.add_table(
        "items",
        items()
            .index("by_name", "name", true)
            .index("by_name", "value", true)
            .index("by_gone", "gone", true),
    );

    let binding = db.bind::<Item>("items").await.unwrap();
    let columns = binding.columns();

    assert_eq!(columns[0].indexes.len(), 1);
    assert!(columns[0].indexes[0].is_primary_key());
    assert!(!columns[0].indexes[0].non_unique);
    assert_eq!(columns[0].indexes[0].table, "mock");

    let by_name = &columns[2].indexes[0];
    assert_eq!(by_name.key_name, "by_name");
    assert_eq!(by_name.seq_in_index, 1);
    assert!(by_name.non_unique);
    assert_eq!(by_name.index_type, "BTREE");
    assert_eq!(columns[1].indexes[0].seq_in_index, 2);

    // Entries for columns the table does not report are dropped.
    let total: usize = columns.iter().map(|c| c.indexes.len()).sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn unmatched_column_leaves_table_unbound() {
    let (db, driver) = mock_db();
    driver.add_table("items", items().not_null("total", "int(11)"));

    let mut table = Table::<Item>::new();
    let err = table.fetch(&db, "items").await.unwrap_err();

    assert!(err.is_schema_mismatch());
    assert_eq!(
        err.to_string(),
        "table `items` does not match record `Item`: unmatched columns total"
    );
    assert!(!table.is_bound());
    assert!(table.get().is_none());
}

#[tokio::test]
async fn fetch_binds_once() {
    let (db, driver) = mock_db();
    driver.add_table("items", items());

    let mut table = Table::<Item>::new();
    table.fetch(&db, "items").await.unwrap();
    let binding = table.fetch(&db, "items").await.unwrap();
    assert_eq!(binding.name(), "items");

    assert!(table.is_bound());
    assert_eq!(driver.log().len(), 2);
}

#[tokio::test]
async fn invalid_table_name() {
    let (db, driver) = mock_db();

    for name in ["", "items2", "items;", "`items`", "my items"] {
        let err = db.bind::<Item>(name).await.unwrap_err();
        assert!(err.is_invalid_name(), "name={name}; err={err}");
    }

    assert!(driver.log().is_empty());
}

#[tokio::test]
async fn introspection_failure() {
    let (db, driver) = mock_db();

    let err = db.bind::<Item>("missing").await.unwrap_err();
    assert!(err.is_query_failed());
    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        "query failed: SHOW COLUMNS FROM `missing`: Table 'test.missing' doesn't exist"
    );

    driver.add_table("items", items());
    driver.fail_next("lost connection");

    let err = db.bind::<Item>("items").await.unwrap_err();
    assert!(err.is_query_failed());
    assert_eq!(
        err.to_string(),
        "query failed: SHOW COLUMNS FROM `items`: lost connection"
    );
}

#[tokio::test]
async fn index_introspection_failure() {
    let (db, driver) = mock_db();
    driver.add_table("items", items());
    driver.fail_matching("SHOW INDEXES", "lost connection");

    let mut table = Table::<Item>::new();
    let err = table.fetch(&db, "items").await.unwrap_err();

    assert!(err.is_query_failed());
    assert_eq!(
        err.to_string(),
        "query failed: SHOW INDEXES FROM `items`: lost connection"
    );
    assert_eq!(driver.log().len(), 2);
    assert!(!table.is_bound());
}

#[tokio::test]
async fn table_without_columns() {
    let (db, driver) = mock_db();
    driver.add_table("empty", TableDef::new());

    let err = db.bind::<Item>("empty").await.unwrap_err();
    assert!(err.is_schema_mismatch());
    assert!(err.to_string().ends_with("table has no columns"));
}

#[tokio::test]
async fn identity_column_required() {
    let (db, driver) = mock_db();
    driver.add_table(
        "items",
        TableDef::new()
            .not_null("value", "tinyint(1)")
            .not_null("name", "varchar(255)"),
    );

    let err = db.bind::<Item>("items").await.unwrap_err();
    assert!(err.is_schema_mismatch());
    assert!(err.to_string().ends_with("no column binds to `Id`"));
}

#[tokio::test]
async fn fields_without_columns_are_allowed() {
    #[derive(Debug, Default, Record)]
    struct Wide {
        id: u64,
        name: String,
        nickname: Option<String>,
    }

    let (db, driver) = mock_db();
    driver.add_table(
        "wide",
        TableDef::new()
            .id("int(10) unsigned")
            .not_null("name", "varchar(64)"),
    );

    let binding = db.bind::<Wide>("wide").await.unwrap();
    assert_eq!(binding.columns().len(), 2);
    assert!(!binding.is_column("nickname"));
    assert_eq!(binding.warning(), None);
}

#[tokio::test]
async fn column_options() {
    #[derive(Debug, Default, Record)]
    struct Order {
        id: u64,
        customer_id: u64,

        #[column("memo", no_update)]
        note: String,

        #[column(no_insert, no_update)]
        created_at: Option<String>,

        #[column(no_insert)]
        status: String,
    }

    let (db, driver) = mock_db();
    driver.add_table(
        "orders",
        TableDef::new()
            .id("bigint(20) unsigned")
            .not_null("customer_id", "int(10) unsigned")
            .not_null("memo", "text")
            .nullable("created_at", "varchar(32)")
            .not_null("status", "enum('new','paid')"),
    );

    let binding = db.bind::<Order>("orders").await.unwrap();

    assert_eq!(
        column_names(binding.insert_columns()),
        ["customer_id", "memo"]
    );
    assert_eq!(
        column_names(binding.update_columns()),
        ["customer_id", "status"]
    );
    assert_eq!(
        binding.insert_sql(),
        "INSERT INTO `orders` (`customer_id`, `memo`) VALUES (?, ?) "
    );
    assert_eq!(
        binding.update_sql(),
        "UPDATE `orders` SET `customer_id`=?, `status`=? "
    );
    assert_eq!(binding.field_index("memo"), Some(2));

    let memo = &binding.columns()[2];
    assert!(!memo.no_insert);
    assert!(memo.no_update);
    assert_eq!(binding.warning(), None);
}

#[tokio::test]
async fn reserved_words_are_quoted() {
    #[derive(Debug, Default, Record)]
    struct Entry {
        id: u64,
        order: i32,
        r#group: String,
    }

    let (db, driver) = mock_db();
    driver.add_table(
        "entries",
        TableDef::new()
            .id("int(10) unsigned")
            .not_null("order", "int(11)")
            .not_null("group", "varchar(16)"),
    );

    let binding = db.bind::<Entry>("entries").await.unwrap();
    assert_eq!(
        binding.select_sql(),
        "SELECT `id`, `order`, `group` FROM `entries` "
    );
    assert_eq!(
        binding.update_sql(),
        "UPDATE `entries` SET `order`=?, `group`=? "
    );
}

#[tokio::test]
async fn type_mismatches_only_warn() {
    #[derive(Debug, Default, Record)]
    struct Player {
        id: u64,
        score: i32,
        nickname: String,
        active: bool,
    }

    let (db, driver) = mock_db();
    driver.add_table(
        "players",
        TableDef::new()
            .id("int(10) unsigned")
            .not_null("score", "varchar(10)")
            .nullable("nickname", "varchar(32)")
            .not_null("active", "tinyint(1)"),
    );

    let binding = db.bind::<Player>("players").await.unwrap();
    assert_eq!(
        binding.warning(),
        Some("mismatched type in columns score,nickname")
    );
    assert_eq!(binding.columns().len(), 4);
}

#[tokio::test]
async fn binding_serializes_to_json() {
    let (db, driver) = mock_db();
    driver.add_table("items", items());

    let binding = db.bind::<Item>("items").await.unwrap();
    let json = serde_json::to_value(&binding).unwrap();

    assert_eq!(json["name"], "items");
    assert_eq!(json["type_name"], "Item");
    assert_eq!(json["column_names"], "`id`, `value`, `name`");
    assert_eq!(json["select_string"], binding.select_sql());
    assert_eq!(json["insert_string"], binding.insert_sql());
    assert_eq!(json["update_string"], binding.update_sql());
    assert_eq!(
        json["field_by_name"],
        serde_json::json!({"id": 0, "value": 1, "name": 2})
    );
    assert!(json.get("warn").is_none());

    let id = &json["columns"][0];
    assert_eq!(id["field"], "id");
    assert_eq!(id["column_type"], "int(11)");
    assert_eq!(id["nullable"], "NO");
    assert_eq!(id["key"], "PRI");
    assert_eq!(id["extra"], "auto_increment");
    assert_eq!(id["struct_field"], 0);
    assert_eq!(id["indexes"][0]["key_name"], "PRIMARY");
}

#[tokio::test]
async fn bind_with_mock_clone() {
    // Drivers are shared through `Db`; a clone observes the same log.
    let driver = MockDriver::new();
    driver.add_table("items", items());
    let db = sqlbind::Db::new(driver.clone());

    db.bind::<Item>("items").await.unwrap();
    assert_eq!(driver.log().len(), 2);
}
