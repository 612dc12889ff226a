//! Crease: a free-to-play fantasy cricket contest engine.
//!
//! The library is split into shared API models ([`model`]) and the server
//! core ([`server`]): contest lifecycle synchronization against an external
//! match feed, fantasy team validation, contest membership, scoring, and
//! leaderboard ranking.

pub mod model;
pub mod server;
