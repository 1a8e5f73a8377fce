pub mod sqlite_ledger;

pub use sqlite_ledger::*;
