use crate::schema::{Field, Record};

use proc_macro2::{Literal, TokenStream};
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for sqlbind types
    sqlbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let sqlbind = &self.sqlbind;
        let ident = &self.record.ident;
        let name = ident.to_string();
        let schema = self.expand_schema();
        let get_arms = self.record.fields.iter().map(|field| self.expand_get_arm(field));
        let set_arms = self.record.fields.iter().map(|field| self.expand_set_arm(field));

        quote! {
            impl #sqlbind::Record for #ident {
                fn schema() -> #sqlbind::RecordSchema {
                    #schema
                }

                fn get(&self, field: usize) -> #sqlbind::Result<#sqlbind::Value> {
                    match field {
                        #( #get_arms )*
                        _ => #sqlbind::Result::Err(no_such_field(field)),
                    }
                }

                fn set(&mut self, field: usize, value: #sqlbind::Value) -> #sqlbind::Result<()> {
                    match field {
                        #( #set_arms )*
                        _ => return #sqlbind::Result::Err(no_such_field(field)),
                    }
                    #sqlbind::Result::Ok(())
                }
            }

            fn no_such_field(field: usize) -> #sqlbind::Error {
                #sqlbind::Error::invalid_argument(::std::format!(
                    "record `{}` has no field at index {}",
                    #name,
                    field,
                ))
            }
        }
    }

    fn expand_schema(&self) -> TokenStream {
        let sqlbind = &self.sqlbind;
        let name = self.record.ident.to_string();
        let fields = self.record.fields.iter().map(|field| {
            let ty = &field.ty;
            let name = &field.name;
            let no_insert = field.column.no_insert;
            let no_update = field.column.no_update;
            let rename = match &field.column.rename {
                Some(column) => quote!(#sqlbind::Option::Some(#sqlbind::String::from(#column))),
                None => quote!(#sqlbind::Option::None),
            };

            quote! {
                #sqlbind::Field::new::<#ty>(#name, #sqlbind::FieldOptions {
                    rename: #rename,
                    no_insert: #no_insert,
                    no_update: #no_update,
                })
            }
        });

        quote! {
            #sqlbind::RecordSchema::new(#name, #sqlbind::Vec::from([ #( #fields ),* ]))
        }
    }

    fn expand_get_arm(&self, field: &Field) -> TokenStream {
        let sqlbind = &self.sqlbind;
        let index = Literal::usize_unsuffixed(field.id);
        let ident = &field.ident;

        quote! {
            #index => #sqlbind::Primitive::to_value(&self.#ident),
        }
    }

    fn expand_set_arm(&self, field: &Field) -> TokenStream {
        let sqlbind = &self.sqlbind;
        let index = Literal::usize_unsuffixed(field.id);
        let ident = &field.ident;
        let ty = &field.ty;

        quote! {
            #index => self.#ident = <#ty as #sqlbind::Primitive>::load(value)?,
        }
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    let code = Expand {
        record,
        sqlbind: quote!(_sqlbind::codegen_support),
    }
    .expand();

    wrap_in_const(code)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlbind as _sqlbind;
            #code
        };
    }
}
