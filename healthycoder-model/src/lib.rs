pub mod activity;
pub mod person;
