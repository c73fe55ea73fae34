pub mod catalog;
pub mod common;
