pub mod contest;
pub mod matches;
pub mod sync;
pub mod team;
