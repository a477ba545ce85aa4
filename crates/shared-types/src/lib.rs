pub mod columns;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod note;
pub mod records;

pub use columns::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use note::*;
pub use records::*;
