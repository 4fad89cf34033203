use super::{Formatter, ToSql};

/// Writes each item of a list, separated by `", "`.
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter) {
        for (n, item) in self.0.into_iter().enumerate() {
            if n > 0 {
                f.dst.push_str(", ");
            }
            item.to_sql(f);
        }
    }
}
