pub mod catalog;
pub mod filter;
pub mod report;
pub mod sort;
