use sqlbind::{Json, Record};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Default, Record)]
pub struct Customer {
    pub id: u64,

    #[column("full_name")]
    pub name: String,

    #[column(no_insert, no_update)]
    pub created_at: Option<String>,

    #[column("addr", no_update)]
    pub address: Json<Address>,

    pub r#type: i8,
}

fn main() {
    let schema = Customer::schema();
    assert_eq!(schema.fields.len(), 5);
    assert_eq!(schema.fields[4].name, "Type");
}
