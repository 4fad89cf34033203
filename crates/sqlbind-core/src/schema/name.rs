//! Conversion between snake-case schema identifiers (`order_id`) and
//! capitalized-word record field identifiers (`OrderId`).
//!
//! The two functions are not exact inverses. `camel_to_snake("ID")` yields
//! `"i_d"`, and `snake_to_camel` drops empty segments produced by doubled
//! underscores. Only [`snake_to_camel`] takes part in column matching.

/// Converts `order_id` into `OrderId`.
///
/// Splits on `_`, upper-cases the first character of every segment and
/// concatenates the segments. The rest of each segment is left untouched.
pub fn snake_to_camel(name: &str) -> String {
    let mut result = String::with_capacity(name.len());

    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

/// Converts `OrderId` into `order_id`.
///
/// Inserts `_` before every uppercase character except the first one and
/// lower-cases everything.
pub fn camel_to_snake(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if i != 0 && c.is_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }

    result
}
