use super::{placeholder::Assign, Comma, Formatter, Ident, Placeholder, ToSql};
use crate::stmt::{Insert, Select, Statement, Update};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::ShowColumns(table) => fmt!(f, "SHOW COLUMNS FROM " Ident(table)),
            Statement::ShowIndexes(table) => fmt!(f, "SHOW INDEXES FROM " Ident(table)),
        }
    }
}

impl ToSql for &Select<'_> {
    fn to_sql(self, f: &mut Formatter) {
        let columns = Comma(self.columns.iter().map(Ident));
        fmt!(f, "SELECT " columns " FROM " Ident(self.table) " ");
    }
}

impl ToSql for &Insert<'_> {
    fn to_sql(self, f: &mut Formatter) {
        let columns = Comma(self.columns.iter().map(Ident));
        let placeholders = Comma(self.columns.iter().map(|_| Placeholder));
        fmt!(f, "INSERT INTO " Ident(self.table) " (" columns ") VALUES (" placeholders ") ");
    }
}

impl ToSql for &Update<'_> {
    fn to_sql(self, f: &mut Formatter) {
        let assignments = Comma(self.columns.iter().map(Assign));
        fmt!(f, "UPDATE " Ident(self.table) " SET " assignments " ");
    }
}
