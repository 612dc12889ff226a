//! API data transfer objects shared by controllers and API consumers.

pub mod api;
pub mod contest;
pub mod matches;
pub mod stat;
pub mod team;
