#![allow(dead_code)]

pub mod test_db;

pub use fixtures::{account_project, submitted_project};
pub use test_db::create_test_pool;
