use super::Formatter;

/// Writes a sequence of SQL fragments into the formatter, in order.
macro_rules! fmt {
    ($f:expr, $( $part:expr )*) => {{
        $( $part.to_sql($f); )*
    }};
}

/// A fragment that knows how to render itself into a statement template.
pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter);
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter) {
        f.dst.push_str(self);
    }
}

impl ToSql for char {
    fn to_sql(self, f: &mut Formatter) {
        f.dst.push(self);
    }
}
