use crate::{stmt::Value, Result};

use std::collections::VecDeque;

/// A cursor over the rows returned by [`Driver::query`](super::Driver::query).
///
/// The cursor owns its rows; dropping it releases the result set.
#[derive(Debug, Default)]
pub struct Rows {
    rows: VecDeque<Row>,
}

/// A single result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Option<Value>>,
}

impl Rows {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of rows not yet consumed.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }
}

impl Row {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Moves the value at `index` out of the row.
    ///
    /// Fails when the row is shorter than expected or the value was already
    /// taken.
    pub fn take(&mut self, index: usize) -> Result<Value> {
        self.values
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| {
                err!(
                    "row has no value at position {index}; len={}",
                    self.values.len()
                )
            })
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row::new(values)
    }
}
