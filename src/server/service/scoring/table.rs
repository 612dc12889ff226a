use rust_decimal::Decimal;

/// Per-action scoring weights applied to a player's raw match figures.
///
/// Tunable configuration rather than fixed constants; the defaults follow
/// the standard fantasy cricket weighting.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    pub run: Decimal,
    pub wicket: Decimal,
    pub catch: Decimal,
    pub stumping: Decimal,
    pub run_out: Decimal,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            run: Decimal::from(1),
            wicket: Decimal::from(25),
            catch: Decimal::from(8),
            stumping: Decimal::from(12),
            run_out: Decimal::from(6),
        }
    }
}

impl ScoringTable {
    /// Base points for one player's stat line, before any captain or
    /// vice-captain multiplier.
    pub fn base_points(&self, stat: &entity::player_match_stat::Model) -> Decimal {
        self.base_points_raw(
            stat.runs,
            stat.wickets,
            stat.catches,
            stat.stumpings,
            stat.run_outs,
        )
    }

    pub fn base_points_raw(
        &self,
        runs: i32,
        wickets: i32,
        catches: i32,
        stumpings: i32,
        run_outs: i32,
    ) -> Decimal {
        Decimal::from(runs) * self.run
            + Decimal::from(wickets) * self.wicket
            + Decimal::from(catches) * self.catch
            + Decimal::from(stumpings) * self.stumping
            + Decimal::from(run_outs) * self.run_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stat(runs: i32, wickets: i32, catches: i32, stumpings: i32, run_outs: i32) -> entity::player_match_stat::Model {
        entity::player_match_stat::Model {
            id: 1,
            match_id: "match-1".to_string(),
            player_id: "p1".to_string(),
            player_name: "Player p1".to_string(),
            runs,
            wickets,
            catches,
            stumpings,
            run_outs,
            total_points: Decimal::ZERO,
            updated_at: Utc::now().naive_utc(),
        }
    }

    mod base_points_tests {
        use super::*;

        /// Expect each action weighted by the default table.
        #[test]
        fn weights_each_action() {
            let table = ScoringTable::default();

            // 40 runs + 2*25 + 1*8 + 1*12 + 1*6
            let points = table.base_points(&stat(40, 2, 1, 1, 1));

            assert_eq!(points, Decimal::from(116));
        }

        /// Expect zero for an all-zero stat line.
        #[test]
        fn zero_line_scores_zero() {
            let table = ScoringTable::default();

            assert_eq!(table.base_points(&stat(0, 0, 0, 0, 0)), Decimal::ZERO);
        }
    }
}
