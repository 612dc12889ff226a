pub mod contest;
pub mod entry;
pub mod player_stat;
pub mod team;
