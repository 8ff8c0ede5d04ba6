//! CSV input for the Nigerian tax calculators: custom band tables and
//! payroll rows for batch personal income tax runs.

mod batch;
mod loader;
mod payroll;

pub use batch::{BatchEntry, BatchFailure, BatchReport, run_batch};
pub use loader::{BracketRecord, BracketTableLoader, BracketTableLoaderError};
pub use payroll::{PayrollLoadError, PayrollLoader, PayrollRecord, PayrollRow};
