pub mod calculations;
pub mod error;
pub mod input;
pub mod models;
pub mod reference;
pub mod report;
pub mod session;

pub use error::InvalidInput;
pub use models::*;
pub use report::{ReportSections, Section, ToReport};
