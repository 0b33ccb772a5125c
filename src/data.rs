use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ── Profile ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub weight: f64,
    pub gender: String,
    pub email: String,
}

// ── Sleep ───────────────────────────────────────────────

/// One sleep period. Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sleep {
    pub summary_date: String,
    pub period_id: i64,
    pub is_longest: i32,
    /// Offset from UTC in minutes.
    pub timezone: i32,
    pub bedtime_start: DateTime<FixedOffset>,
    pub bedtime_end: DateTime<FixedOffset>,
    pub score: i32,
    pub score_total: i32,
    pub score_disturbances: i32,
    pub score_efficiency: i32,
    pub score_latency: i32,
    pub score_rem: i32,
    pub score_deep: i32,
    pub score_alignment: i32,
    pub total: u64,
    pub duration: u64,
    pub awake: u64,
    pub light: u64,
    pub rem: u64,
    pub deep: u64,
    pub onset_latency: u64,
    pub restless: i32,
    pub efficiency: i32,
    pub midpoint_time: i64,
    pub hr_lowest: i32,
    pub hr_average: f32,
    pub rmssd: i32,
    pub breath_average: f32,
    pub temperature_delta: f32,
    #[serde(default)]
    pub hypnogram_5min: String,
    #[serde(default)]
    pub hr_5min: Vec<i32>,
    #[serde(default)]
    pub rmssd_5min: Vec<i32>,
}

// ── Readiness ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readiness {
    pub summary_date: String,
    pub period_id: i64,
    pub score: i32,
    pub score_previous_night: i32,
    pub score_sleep_balance: i32,
    pub score_previous_day: i32,
    pub score_activity_balance: i32,
    pub score_resting_hr: i32,
    pub score_hrv_balance: i32,
    pub score_recovery_index: i32,
    pub score_temperature: i32,
    #[serde(default)]
    pub rest_mode_state: i32,
}

// ── Activity ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub summary_date: String,
    pub day_start: DateTime<FixedOffset>,
    pub day_end: DateTime<FixedOffset>,
    pub timezone: i32,
    pub score: i32,
    pub score_stay_active: i32,
    pub score_move_every_hour: i32,
    pub score_meet_daily_targets: i32,
    pub score_training_frequency: i32,
    pub score_training_volume: i32,
    pub score_recovery_time: i32,
    /// Metres.
    pub daily_movement: u32,
    pub non_wear: u32,
    pub rest: u32,
    pub inactive: u32,
    pub inactivity_alerts: u32,
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub steps: u32,
    pub cal_total: u32,
    pub cal_active: u32,
    pub met_min_inactive: u32,
    pub met_min_low: u32,
    pub met_min_medium_plus: u32,
    pub met_min_medium: u32,
    pub met_min_high: u32,
    pub average_met: f32,
    #[serde(default)]
    pub class_5min: String,
    #[serde(default)]
    pub met_1min: Vec<f32>,
    #[serde(default)]
    pub rest_mode_state: i32,
}

// ── Bedtime ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedtimeStatus {
    IdealBedtimeAvailable,
    LowSleepScores,
    NotEnoughData,
    #[serde(other)]
    Unknown,
}

impl BedtimeStatus {
    pub fn label(self) -> &'static str {
        match self {
            BedtimeStatus::IdealBedtimeAvailable => "ideal bedtime available",
            BedtimeStatus::LowSleepScores => "low sleep scores",
            BedtimeStatus::NotEnoughData => "not enough data",
            BedtimeStatus::Unknown => "unknown",
        }
    }
}

/// Recommended window, as seconds relative to local midnight.
/// Negative values fall on the previous evening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeWindow {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bedtime {
    pub date: String,
    #[serde(default)]
    pub bedtime_window: BedtimeWindow,
    pub status: BedtimeStatus,
}

// ── Response envelopes ──────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct SleepSummaries {
    pub sleep: Vec<Sleep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReadinessSummaries {
    pub readiness: Vec<Readiness>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActivitySummaries {
    pub activity: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdealBedtimes {
    pub ideal_bedtimes: Vec<Bedtime>,
}

// ── Dashboard aggregate ─────────────────────────────────

/// Snapshot of the last successful refresh. Replaced as a whole, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OuraData {
    pub profile: Option<Profile>,
    pub sleep: Vec<Sleep>,
    pub readiness: Vec<Readiness>,
    pub activity: Vec<Activity>,
    pub bedtimes: Vec<Bedtime>,
}
