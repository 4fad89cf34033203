use super::{Formatter, ToSql};

/// A positional `?` parameter.
pub(super) struct Placeholder;

/// `<column>=?`, as used in the SET list of an UPDATE.
pub(super) struct Assign<S>(pub(super) S);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter) {
        '?'.to_sql(f);
    }
}

impl<S: AsRef<str>> ToSql for Assign<S> {
    fn to_sql(self, f: &mut Formatter) {
        fmt!(f, super::Ident(self.0) "=" Placeholder);
    }
}
