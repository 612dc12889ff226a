//! Cron expressions for scheduled jobs.

pub mod sync {
    /// Every 5 minutes.
    pub static CRON_EXPRESSION: &str = "0 */5 * * * *";
}
