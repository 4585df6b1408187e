// This module groups the shift domain components.
//
// Structure
// - time_of_day.rs: "HH:MM" parsing and the storage format for times
// - input.rs: the candidate shift as typed by the user, and its parser
// - earnings.rs: pay rules and the pure earnings calculation
// - record.rs: the accepted shift record with derived earnings
// - decider/: pure accept or reject decisions for a candidate

pub mod earnings;
pub mod input;
pub mod record;
pub mod time_of_day;
pub mod decider {
    pub mod validate;
}
