pub mod contest;
pub mod contest_entry;
pub mod fantasy_team;
pub mod player_match_stat;
pub mod prelude;
pub mod team_player;
