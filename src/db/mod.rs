pub mod ledger;
pub mod sqlite;

pub use ledger::{SqliteUsageLedger, UsageLedger};
pub use sqlite::create_pool;
