extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `sqlbind::Record` for a struct with named fields.
///
/// Fields bind to the column whose name converts to the field name
/// (`customer_id` binds `customer_id`). `#[column("name")]` binds a
/// different column; `no_insert` and `no_update` leave the column out of
/// INSERT or UPDATE statements.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match sqlbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
