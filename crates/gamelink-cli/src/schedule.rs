//! Fixed triggers for the full pipeline.
//!
//! These are data only; an external scheduler (cron, systemd timers, an
//! orchestrator) is expected to invoke `gamelink run` on them.

use serde::Serialize;

/// Timezone every schedule is evaluated in.
pub const SCHEDULE_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub name: &'static str,
    /// Standard five-field cron expression.
    pub cron: &'static str,
    pub timezone: &'static str,
    pub description: &'static str,
}

/// Every day at 01:00.
pub const DAILY: Schedule = Schedule {
    name: "video_games_daily_schedule",
    cron: "0 1 * * *",
    timezone: SCHEDULE_TIMEZONE,
    description: "Daily refresh of both catalogs at 1 AM",
};

/// Sundays at 03:00.
pub const WEEKLY: Schedule = Schedule {
    name: "video_games_weekly_schedule",
    cron: "0 3 * * 0",
    timezone: SCHEDULE_TIMEZONE,
    description: "Weekly full refresh on Sundays at 3 AM",
};

pub fn schedules() -> [Schedule; 2] {
    [DAILY, WEEKLY]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cron_expressions_have_five_fields() {
        for schedule in schedules() {
            assert_eq!(schedule.cron.split_whitespace().count(), 5, "{}", schedule.name);
            assert_eq!(schedule.timezone, "America/New_York");
        }
    }

    #[test]
    fn names_are_unique() {
        let [daily, weekly] = schedules();
        assert_ne!(daily.name, weekly.name);
    }
}
