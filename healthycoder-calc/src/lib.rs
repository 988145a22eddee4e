pub mod activity;
pub mod bmi;
mod error;

pub use error::{Error, Result};
