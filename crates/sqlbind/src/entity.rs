use crate::{Binding, Record, Result};

use sqlbind_core::{
    driver::Row,
    bail, err,
    schema::{record::FieldKind, Column},
    stmt::{Primitive, Value},
    Error,
};
use sqlbind_sql::Serializer;

impl<R: Record> Binding<R> {
    /// Loads `row`, laid out in [`Binding::columns`] order, into `record`.
    ///
    /// JSON columns are read as text and decoded after the rest of the row
    /// has been loaded.
    pub fn scan_into(&self, mut row: Row, record: &mut R) -> Result<()> {
        if row.len() < self.columns().len() {
            return Err(err!(
                "row has {} values; expected {}",
                row.len(),
                self.columns().len()
            )
            .context(Error::scan(self.record_name())));
        }

        let mut staged = vec![];

        for (i, column) in self.columns().iter().enumerate() {
            let field = self.bound_field(column)?;
            let value = row
                .take(i)
                .map_err(|err| err.context(Error::scan(self.column_target(column))))?;

            if self.field_kind(field) == Some(FieldKind::Json) {
                staged.push((column, field, value));
                continue;
            }

            record
                .set(field, value)
                .map_err(|err| err.context(Error::scan(self.column_target(column))))?;
        }

        for (column, field, value) in staged {
            let value = match value {
                Value::Null | Value::Json(_) => value,
                value => {
                    let text = value
                        .into_string()
                        .map_err(|err| err.context(Error::scan(self.column_target(column))))?;
                    serde_json::from_str(&text)
                        .map(Value::Json)
                        .map_err(|err| Error::decode(&column.name, err))?
                }
            };

            record
                .set(field, value)
                .map_err(|err| err.context(Error::scan(self.column_target(column))))?;
        }

        Ok(())
    }

    /// Runs the SELECT template followed by `clause` and loads the first row
    /// into `record`.
    ///
    /// Returns `None` when no row matches. Only the first row is read, so
    /// `clause` should match at most one row.
    pub async fn select_one<'r>(
        &self,
        record: &'r mut R,
        clause: &str,
        args: Vec<Value>,
    ) -> Result<Option<&'r mut R>> {
        let sql = format!("{}{clause}", self.select_sql());
        let mut rows = self.db().query(&sql, encode_args(args)?).await?;

        match rows.next() {
            Some(row) => {
                self.scan_into(row, record)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    pub async fn select_by_id<'r>(&self, record: &'r mut R, id: u64) -> Result<Option<&'r mut R>> {
        self.select_one(record, self.where_identity(), vec![Value::U64(id)])
            .await
    }

    /// Selects the row whose column `name` equals `value`.
    pub async fn select_by_column<'r>(
        &self,
        record: &'r mut R,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Option<&'r mut R>> {
        if !self.is_column(name) {
            return Err(Error::unknown_column(self.name(), name));
        }

        let clause = Serializer::mysql().where_eq(name);
        self.select_one(record, &clause, vec![value.into()]).await
    }

    /// Runs the SELECT template followed by `clause` and loads every row into
    /// a new record.
    pub async fn select_all(&self, clause: &str, args: Vec<Value>) -> Result<Vec<R>>
    where
        R: Default,
    {
        let sql = format!("{}{clause}", self.select_sql());
        let rows = self.db().query(&sql, encode_args(args)?).await?;

        rows.map(|row| {
            let mut record = R::default();
            self.scan_into(row, &mut record)?;
            Ok(record)
        })
        .collect()
    }

    /// Reads the value of `column` from `record` as a statement argument.
    /// JSON fields are encoded to text.
    pub fn encode_column_value(&self, record: &R, column: &Column) -> Result<Value> {
        let field = self.bound_field(column)?;
        match record.get(field)? {
            Value::Json(value) => serde_json::to_string(&value)
                .map(Value::String)
                .map_err(|err| Error::encode(&column.name, err)),
            value => Ok(value),
        }
    }

    /// Inserts `record` and writes the generated id into its `Id` field.
    pub async fn insert(&self, record: &mut R) -> Result<u64> {
        let args = self
            .insert_columns()
            .map(|column| self.encode_column_value(record, column))
            .collect::<Result<Vec<_>>>()?;

        let response = self.db().execute(self.insert_sql(), args).await?;

        let Some(id) = response.last_insert_id else {
            bail!(
                "row inserted into `{}` but no id was generated; record left unchanged",
                self.name()
            );
        };

        record.set(self.identity(), Value::U64(id))?;
        Ok(id)
    }

    /// Writes every updatable column of `record` to the row with the same
    /// id.
    ///
    /// Matching no row, or more than one, is logged but not an error.
    pub async fn update(&self, record: &R) -> Result<()> {
        let id = self.identity_of(record)?;
        if id == 0 {
            return Err(Error::missing_identity(self.name()));
        }

        let mut args = self
            .update_columns()
            .map(|column| self.encode_column_value(record, column))
            .collect::<Result<Vec<_>>>()?;
        args.push(Value::U64(id));

        let sql = format!("{}{}", self.update_sql(), self.where_identity());
        let response = self.db().execute(&sql, args).await?;

        if response.affected_rows != 1 {
            log::warn!(
                "update affected {} rows; table={}; id={id}",
                response.affected_rows,
                self.name()
            );
        }

        Ok(())
    }

    /// Inserts `record` when its id is zero and updates it otherwise.
    /// Returns the record's id.
    pub async fn save(&self, record: &mut R) -> Result<u64> {
        match self.identity_of(record)? {
            0 => self.insert(record).await,
            id => {
                self.update(record).await?;
                Ok(id)
            }
        }
    }

    pub async fn delete(&self, _record: &R) -> Result<()> {
        Err(Error::not_implemented("delete"))
    }

    fn identity_of(&self, record: &R) -> Result<u64> {
        u64::load(record.get(self.identity())?)
    }

    fn bound_field(&self, column: &Column) -> Result<usize> {
        column.field.ok_or_else(|| {
            Error::internal(format!(
                "column `{}`.`{}` is not bound to a field",
                self.name(),
                column.name
            ))
        })
    }

    fn column_target(&self, column: &Column) -> String {
        format!("{}.{}", self.name(), column.name)
    }
}

/// Statement arguments never carry `Value::Json`; encode it to text.
fn encode_args(args: Vec<Value>) -> Result<Vec<Value>> {
    args.into_iter()
        .map(|arg| match arg {
            Value::Json(value) => serde_json::to_string(&value)
                .map(Value::String)
                .map_err(|err| Error::encode("argument", err)),
            arg => Ok(arg),
        })
        .collect()
}
