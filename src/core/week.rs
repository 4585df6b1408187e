// This module groups the weekly record lifecycle.
//
// Structure
// - navigator.rs: week keys, week ranges and moving between weeks
// - collection.rs: the in-memory, date-ordered records of one week
// - summary.rs: totals over a week's records

pub mod collection;
pub mod navigator;
pub mod summary;
