use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Documented input bounds ─────────────────────────────────────────────────

/// Allowed range for each user input, as (min, max) inclusive.
/// The browser form builds its widgets from these via `GET /api/sizing/bounds`;
/// the API re-checks them on every request since HTTP clients are not
/// trusted widgets.
pub mod bounds {
    pub const PEAK_LOAD_W: (f64, f64) = (100.0, 1000.0);
    pub const OPERATING_HOURS_PER_DAY: (f64, f64) = (2.0, 12.0);
    pub const PEAK_SUN_HOURS: (f64, f64) = (3.0, 7.0);
    pub const AUTONOMY_DAYS: (u32, u32) = (1, 7);
}

// ─── Sizing inputs ───────────────────────────────────────────────────────────

/// User-adjustable inputs for one sizing evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SizingInputs {
    /// Continuous load the system must carry (W): lights, fans, charging
    pub peak_load_w: f64,
    /// Hours per day the load runs
    pub operating_hours_per_day: f64,
    /// Site peak sun hours: equivalent full-intensity sun hours per day
    pub peak_sun_hours: f64,
    /// Days the battery bank must carry the load without solar recharge
    pub autonomy_days: u32,
}

impl Default for SizingInputs {
    /// Initial form values: a 300 W classroom running 6 h/day at a
    /// 5.5 PSH site with 3 backup days.
    fn default() -> Self {
        Self {
            peak_load_w: 300.0,
            operating_hours_per_day: 6.0,
            peak_sun_hours: 5.5,
            autonomy_days: 3,
        }
    }
}

impl SizingInputs {
    /// Check every field against the documented bounds. First violation
    /// wins. The sizing calculator itself never range-checks; nothing may
    /// reach it without passing here first.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_range("peak_load_w", self.peak_load_w, bounds::PEAK_LOAD_W)?;
        check_range(
            "operating_hours_per_day",
            self.operating_hours_per_day,
            bounds::OPERATING_HOURS_PER_DAY,
        )?;
        check_range("peak_sun_hours", self.peak_sun_hours, bounds::PEAK_SUN_HOURS)?;

        let (min, max) = bounds::AUTONOMY_DAYS;
        if self.autonomy_days < min || self.autonomy_days > max {
            return Err(ApiError::OutOfRangeInput {
                field: "autonomy_days",
                value: f64::from(self.autonomy_days),
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        Ok(())
    }
}

// NaN fails both comparisons and is rejected like any out-of-range value.
fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ApiError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ApiError::OutOfRangeInput { field, value, min, max })
    }
}

// ─── Engineering assumptions ─────────────────────────────────────────────────

/// Fixed engineering assumptions behind every recommendation.
/// `config.json` may override them; the defaults are the normative values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct SizingAssumptions {
    /// Fraction of rated array output usably delivered after wiring,
    /// temperature and inverter losses
    #[serde(default = "default_system_loss_derate")]
    pub system_loss_derate: f64,
    /// Rated output of one panel (W)
    #[serde(default = "default_panel_rated_w")]
    pub panel_rated_w: f64,
    /// Usable fraction of battery nameplate capacity
    #[serde(default = "default_battery_depth_of_discharge")]
    pub battery_depth_of_discharge: f64,
}

fn default_system_loss_derate() -> f64 {
    0.75
}

fn default_panel_rated_w() -> f64 {
    250.0
}

fn default_battery_depth_of_discharge() -> f64 {
    0.5
}

impl Default for SizingAssumptions {
    fn default() -> Self {
        Self {
            system_loss_derate: default_system_loss_derate(),
            panel_rated_w: default_panel_rated_w(),
            battery_depth_of_discharge: default_battery_depth_of_discharge(),
        }
    }
}

// ─── Sizing outputs ──────────────────────────────────────────────────────────

/// Recommendation derived from one set of inputs. Every field is a pure
/// function of inputs plus assumptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct SizingRecommendation {
    /// Energy consumed per day (Wh)
    pub daily_energy_wh: f64,
    /// Required rated array capacity (Wp)
    pub array_size_wp: f64,
    /// Whole panels needed; partial panels are not purchasable
    pub panel_count: u32,
    /// Energy the bank must store to cover the autonomy window (Wh)
    pub required_battery_wh: f64,
    /// Nameplate battery capacity (kWh), inflated for depth of discharge
    pub battery_capacity_kwh: f64,
}

// ─── REST API response types ─────────────────────────────────────────────────

/// Envelope returned for each evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizingResponse {
    pub evaluation_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Inputs echoed back as evaluated
    pub inputs: SizingInputs,
    pub recommendation: SizingRecommendation,
}

/// Min/max pair for one input widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

/// Documented bounds for every input field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct InputBounds {
    pub peak_load_w: FieldBounds,
    pub operating_hours_per_day: FieldBounds,
    pub peak_sun_hours: FieldBounds,
    pub autonomy_days: FieldBounds,
}

impl InputBounds {
    pub fn documented() -> Self {
        let pair = |(min, max): (f64, f64)| FieldBounds { min, max };
        let (days_min, days_max) = bounds::AUTONOMY_DAYS;
        Self {
            peak_load_w: pair(bounds::PEAK_LOAD_W),
            operating_hours_per_day: pair(bounds::OPERATING_HOURS_PER_DAY),
            peak_sun_hours: pair(bounds::PEAK_SUN_HOURS),
            autonomy_days: FieldBounds {
                min: f64::from(days_min),
                max: f64::from(days_max),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
