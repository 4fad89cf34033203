/// A statement template understood by the [`Serializer`](crate::Serializer).
///
/// Templates never carry values. Data always travels as positional `?`
/// parameters next to the statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `SELECT <columns> FROM <table> ` ready for a WHERE / ORDER clause.
    Select(Select<'a>),

    /// `INSERT INTO <table> (<columns>) VALUES (?, ...) `
    Insert(Insert<'a>),

    /// `UPDATE <table> SET <column>=?, ... ` ready for a WHERE clause.
    Update(Update<'a>),

    /// `SHOW COLUMNS FROM <table>`
    ShowColumns(&'a str),

    /// `SHOW INDEXES FROM <table>`
    ShowIndexes(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select<'a> {
    pub table: &'a str,
    pub columns: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert<'a> {
    pub table: &'a str,
    pub columns: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<'a> {
    pub table: &'a str,
    pub columns: Vec<&'a str>,
}

impl<'a> Statement<'a> {
    pub fn select(table: &'a str, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Statement::Select(Select {
            table,
            columns: columns.into_iter().collect(),
        })
    }

    pub fn insert(table: &'a str, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Statement::Insert(Insert {
            table,
            columns: columns.into_iter().collect(),
        })
    }

    pub fn update(table: &'a str, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Statement::Update(Update {
            table,
            columns: columns.into_iter().collect(),
        })
    }

    pub fn show_columns(table: &'a str) -> Self {
        Statement::ShowColumns(table)
    }

    pub fn show_indexes(table: &'a str) -> Self {
        Statement::ShowIndexes(table)
    }
}
