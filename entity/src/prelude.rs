pub use super::contest::Entity as Contest;
pub use super::contest_entry::Entity as ContestEntry;
pub use super::fantasy_team::Entity as FantasyTeam;
pub use super::player_match_stat::Entity as PlayerMatchStat;
pub use super::team_player::Entity as TeamPlayer;
