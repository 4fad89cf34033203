pub use exec_log::{ExecLog, ExecOp, OpKind};

pub use mock_driver::{MockDriver, TableDef};

pub use setup::{init_logging, mock_db};
