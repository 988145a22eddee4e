pub mod report;
pub mod source;
pub mod table;

mod error;

pub use error::LoaderError;
