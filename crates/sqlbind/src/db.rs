use crate::{Binding, Record, Result};

use sqlbind_core::{
    driver::{Driver, ExecResponse, Rows},
    stmt::Value,
};

use std::sync::Arc;

/// A shared handle to the database driver.
///
/// Cloning is cheap; all clones issue statements through the same driver.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
}

impl Db {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    /// Connects to the database at `url` using a built-in driver.
    ///
    /// Supported schemes: `mysql` (requires the `mysql` feature).
    pub async fn connect(url: &str) -> Result<Self> {
        let url = url::Url::parse(url).map_err(sqlbind_core::Error::driver)?;

        match url.scheme() {
            "mysql" => Self::connect_mysql(&url),
            scheme => sqlbind_core::bail!("unsupported database; scheme={scheme}; url={url}"),
        }
    }

    #[cfg(feature = "mysql")]
    fn connect_mysql(url: &url::Url) -> Result<Self> {
        let driver = sqlbind_driver_mysql::MySQL::new(url.as_str())?;
        Ok(Self::new(driver))
    }

    #[cfg(not(feature = "mysql"))]
    fn connect_mysql(_url: &url::Url) -> Result<Self> {
        sqlbind_core::bail!("`mysql` feature not enabled")
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Binds `table` to the record type `R`.
    ///
    /// Every call introspects the table again; use [`Table`](crate::Table)
    /// to build a binding once and reuse it.
    pub async fn bind<R: Record>(&self, table: &str) -> Result<Binding<R>> {
        Binding::build(self, table).await
    }

    pub(crate) async fn query(&self, sql: &str, args: Vec<Value>) -> Result<Rows> {
        log::debug!("query; sql={sql}; args={args:?}");
        self.driver
            .query(sql, args)
            .await
            .inspect_err(|err| log::warn!("query failed; sql={sql}; err={err}"))
    }

    pub(crate) async fn execute(&self, sql: &str, args: Vec<Value>) -> Result<ExecResponse> {
        log::debug!("execute; sql={sql}; args={args:?}");
        self.driver
            .execute(sql, args)
            .await
            .inspect_err(|err| log::warn!("statement failed; sql={sql}; err={err}"))
    }
}

impl From<Arc<dyn Driver>> for Db {
    fn from(driver: Arc<dyn Driver>) -> Self {
        Self { driver }
    }
}
