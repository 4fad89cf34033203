use super::{Column, ErrorSet};

use heck::ToUpperCamelCase;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing record
    pub(crate) id: usize,

    /// Rust field identifier
    pub(crate) ident: syn::Ident,

    /// Field name as seen by the binding, e.g. `OrderId`
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// `#[column(...)]` options
    pub(crate) column: Column,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut column = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.spanned(attr, "duplicate #[column] attribute");
                } else {
                    match Column::from_ast(attr) {
                        Ok(attr) => column = Some(attr),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        errs.finish(Self {
            id,
            ident: ident.clone(),
            name: ident.unraw().to_string().to_upper_camel_case(),
            ty: field.ty.clone(),
            column: column.unwrap_or_default(),
        })
    }
}
