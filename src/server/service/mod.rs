pub mod contest;
pub mod ranking;
pub mod scoring;
pub mod sync;
pub mod team;
