mod response;
pub use response::ExecResponse;

mod rows;
pub use rows::{Row, Rows};

use crate::{async_trait, stmt::Value, Result};

use std::fmt::Debug;

/// The database connection collaborator.
///
/// sqlbind never opens connections itself. It hands fully formed statement
/// text with `?` placeholders and positional arguments to a driver and reads
/// back rows or execution counters.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Runs a statement that returns rows.
    async fn query(&self, sql: &str, args: Vec<Value>) -> Result<Rows>;

    /// Runs a statement that modifies rows.
    async fn execute(&self, sql: &str, args: Vec<Value>) -> Result<ExecResponse>;
}
