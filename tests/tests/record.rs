use sqlbind::{
    FieldKind, FieldOptions, Json, Primitive, Record, RecordSchema, Result, Table, Value,
};
use tests::{mock_db, TableDef};

#[derive(Debug, Default, PartialEq, Record)]
struct Account {
    id: u64,
    login_name: String,

    #[column("pass_hash", no_update)]
    password: Vec<u8>,

    balance: f64,
    referrer_id: Option<i32>,

    #[column(no_insert, no_update)]
    profile: Json<Vec<String>>,
}

#[test]
fn derived_schema() {
    let schema = Account::schema();
    assert_eq!(schema.name, "Account");

    let names: Vec<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        ["Id", "LoginName", "Password", "Balance", "ReferrerId", "Profile"]
    );

    let kinds: Vec<_> = schema.fields.iter().map(|f| f.ty.kind).collect();
    assert_eq!(
        kinds,
        [
            FieldKind::Uint,
            FieldKind::String,
            FieldKind::Other,
            FieldKind::Float,
            FieldKind::Int,
            FieldKind::Json,
        ]
    );

    assert!(schema.fields[4].ty.nullable);
    assert!(!schema.fields[0].ty.nullable);

    assert_eq!(
        schema.fields[2].options,
        FieldOptions::default().rename("pass_hash").no_update()
    );
    assert_eq!(
        schema.fields[5].options,
        FieldOptions::default().no_insert().no_update()
    );
    assert_eq!(schema.verify().unwrap(), 0);
}

#[test]
fn derived_accessors() {
    let mut account = Account::default();

    account.set(1, Value::from("ada")).unwrap();
    account.set(4, Value::I64(12)).unwrap();
    account.set(5, Value::Json(serde_json::json!(["a"]))).unwrap();

    assert_eq!(account.login_name, "ada");
    assert_eq!(account.referrer_id, Some(12));
    assert_eq!(account.profile.0, ["a"]);

    assert_eq!(account.get(1).unwrap(), Value::from("ada"));
    assert_eq!(account.get(4).unwrap(), Value::I64(12));
    assert_eq!(account.get(5).unwrap(), Value::Json(serde_json::json!(["a"])));

    account.set(4, Value::Null).unwrap();
    assert_eq!(account.referrer_id, None);
    assert_eq!(account.get(4).unwrap(), Value::Null);
}

#[test]
fn derived_accessor_errors() {
    let mut account = Account::default();

    let err = account.get(6).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid record argument: record `Account` has no field at index 6"
    );
    assert!(account.set(6, Value::Null).is_err());

    let err = account.set(0, Value::I64(-1)).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to u64");

    let err = account.set(1, Value::Null).unwrap_err();
    assert!(err.is_type_conversion());
}

/// A record registered by hand instead of through the derive.
#[derive(Debug, Default)]
struct Note {
    id: u64,
    body: String,
    author: String,
}

impl Record for Note {
    fn schema() -> RecordSchema {
        RecordSchema::builder("Note")
            .field::<u64>("Id")
            .tagged::<String>("Body", "text,no-update")
            .tagged::<String>("Author", "written_by,no-insert,bogus")
            .build()
    }

    fn get(&self, field: usize) -> Result<Value> {
        match field {
            0 => self.id.to_value(),
            1 => self.body.to_value(),
            _ => self.author.to_value(),
        }
    }

    fn set(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.id = Primitive::load(value)?,
            1 => self.body = Primitive::load(value)?,
            _ => self.author = Primitive::load(value)?,
        }
        Ok(())
    }
}

#[tokio::test]
async fn manual_record_with_tags() {
    let (db, driver) = mock_db();
    driver.add_table(
        "notes",
        TableDef::new()
            .id("int(10) unsigned")
            .not_null("text", "text")
            .not_null("written_by", "varchar(64)"),
    );

    let mut notes = Table::<Note>::default();
    let binding = notes.fetch(&db, "notes").await.unwrap();

    assert_eq!(binding.field_index("text"), Some(1));
    assert_eq!(binding.field_index("written_by"), Some(2));
    assert_eq!(
        binding.insert_sql(),
        "INSERT INTO `notes` (`text`) VALUES (?) "
    );
    assert_eq!(
        binding.update_sql(),
        "UPDATE `notes` SET `written_by`=? "
    );

    let mut note = Note {
        body: "hello".into(),
        author: "ada".into(),
        ..Note::default()
    };
    assert_eq!(binding.insert(&mut note).await.unwrap(), 1);
    assert_eq!(note.id, 1);
}

#[test]
fn record_schema_must_have_integer_id() {
    let schema = RecordSchema::builder("Bad")
        .field::<String>("Id")
        .build();
    assert!(schema.verify().unwrap_err().is_invalid_argument());

    let schema = RecordSchema::builder("Bad")
        .field::<Option<u64>>("Id")
        .build();
    assert!(schema.verify().is_err());

    let schema = RecordSchema::builder("Bad").field::<u64>("Key").build();
    assert!(schema.verify().is_err());
}

#[tokio::test]
async fn invalid_record_schema_fails_before_introspection() {
    #[derive(Debug, Default)]
    struct NoId;

    impl Record for NoId {
        fn schema() -> RecordSchema {
            RecordSchema::builder("NoId").field::<String>("Name").build()
        }

        fn get(&self, _field: usize) -> Result<Value> {
            Ok(Value::Null)
        }

        fn set(&mut self, _field: usize, _value: Value) -> Result<()> {
            Ok(())
        }
    }

    let (db, driver) = mock_db();
    let err = db.bind::<NoId>("things").await.unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(driver.log().is_empty());
}

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
