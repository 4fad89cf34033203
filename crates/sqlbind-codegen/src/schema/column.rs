/// Options from a `#[column(...)]` field attribute.
#[derive(Debug, Default)]
pub(crate) struct Column {
    /// Bind to this column instead of the one derived from the field name
    pub(crate) rename: Option<syn::LitStr>,

    /// Leave the column out of INSERT statements
    pub(crate) no_insert: bool,

    /// Leave the column out of UPDATE statements
    pub(crate) no_update: bool,
}

mod kw {
    syn::custom_keyword!(no_insert);
    syn::custom_keyword!(no_update);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(no_insert)]
        // #[column("name", no_insert, no_update)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.rename.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                let name: syn::LitStr = input.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new_spanned(name, "column name cannot be empty"));
                }
                result.rename = Some(name);
            } else if lookahead.peek(kw::no_insert) {
                if result.no_insert {
                    return Err(syn::Error::new(input.span(), "duplicate `no_insert`"));
                }
                input.parse::<kw::no_insert>()?;
                result.no_insert = true;
            } else if lookahead.peek(kw::no_update) {
                if result.no_update {
                    return Err(syn::Error::new(input.span(), "duplicate `no_update`"));
                }
                input.parse::<kw::no_update>()?;
                result.no_update = true;
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}
