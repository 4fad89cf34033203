use super::{ErrorSet, Field};

use std::collections::HashMap;

/// Name of the identity field after conversion.
const IDENTITY: &str = "Id";

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record types cannot be generic",
            ));
        }

        let mut errs = ErrorSet::default();
        let mut fields = vec![];

        for (id, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, id) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        let mut names: HashMap<&str, &syn::Ident> = HashMap::new();
        for field in &fields {
            if let Some(other) = names.insert(&field.name, &field.ident) {
                errs.spanned(
                    &field.ident,
                    format!("`{other}` and `{}` both map to field `{}`", field.ident, field.name),
                );
            }
        }

        let mut renames: HashMap<String, &syn::Ident> = HashMap::new();
        for field in &fields {
            let Some(rename) = &field.column.rename else {
                continue;
            };

            if let Some(other) = renames.insert(rename.value(), &field.ident) {
                errs.spanned(
                    rename,
                    format!(
                        "`{other}` and `{}` both rename to column `{}`",
                        field.ident,
                        rename.value()
                    ),
                );
            }
        }

        if !fields.iter().any(|field| field.name == IDENTITY) {
            errs.spanned(&ast.ident, "record types require an `id` field");
        }

        errs.finish(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
