/// Outcome of a statement executed with [`Driver::execute`](super::Driver::execute).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecResponse {
    /// Number of rows the statement changed or matched.
    pub affected_rows: u64,

    /// Identity generated by an INSERT into a table with an auto-increment
    /// column.
    pub last_insert_id: Option<u64>,
}

impl ExecResponse {
    pub fn count(affected_rows: u64) -> Self {
        Self {
            affected_rows,
            last_insert_id: None,
        }
    }

    pub fn inserted(last_insert_id: u64) -> Self {
        Self {
            affected_rows: 1,
            last_insert_id: Some(last_insert_id),
        }
    }
}
