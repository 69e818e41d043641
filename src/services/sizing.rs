/// ============================================================
///  Solar PV & Battery Sizing Engine
///
///  Sizing pipeline:
///   1. Daily energy     – peak load × hours of operation (Wh)
///   2. Array size       – daily energy inflated for system losses,
///                         normalised by peak sun hours (Wp)
///   3. Panel count      – whole panels, true integer ceiling
///   4. Autonomy storage – daily energy × backup days (Wh)
///   5. Bank capacity    – autonomy storage over usable depth
///                         of discharge (kWh)
/// ============================================================

use crate::models::sizing::{SizingAssumptions, SizingInputs, SizingRecommendation};

/// Main entry point – call once per input change.
///
/// Pure and total over the documented input domain: every denominator
/// (`system_loss_derate`, `peak_sun_hours`, `battery_depth_of_discharge`)
/// is a fixed positive value, so no division can fault. Range checking is
/// the caller's responsibility (`SizingInputs::validate`).
pub fn size_system(
    inputs: &SizingInputs,
    assumptions: &SizingAssumptions,
) -> SizingRecommendation {
    // 1. Total energy consumed per day
    let daily_energy_wh = inputs.peak_load_w * inputs.operating_hours_per_day;

    // 2. Rated array capacity: inflate for system losses, normalise by
    //    available sun hours
    let array_size_wp = (daily_energy_wh / assumptions.system_loss_derate) / inputs.peak_sun_hours;

    // 3. Whole panels. True ceiling: an exact integer quotient stays as is,
    //    any remainder buys a whole extra panel.
    let panel_count = (array_size_wp / assumptions.panel_rated_w).ceil() as u32;

    // 4. Storage for the full autonomy window at full daily consumption
    let required_battery_wh = daily_energy_wh * f64::from(inputs.autonomy_days);

    // 5. Nameplate capacity; only `battery_depth_of_discharge` of it is
    //    safely usable
    let battery_capacity_kwh =
        (required_battery_wh / 1000.0) / assumptions.battery_depth_of_discharge;

    SizingRecommendation {
        daily_energy_wh,
        array_size_wp,
        panel_count,
        required_battery_wh,
        battery_capacity_kwh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classroom_scenario() {
        // 300 W × 6 h at a 5.5 PSH site with 3 backup days
        let r = size_system(&SizingInputs::default(), &SizingAssumptions::default());
        assert_eq!(r.daily_energy_wh, 1800.0);
        assert!(
            (r.array_size_wp - 436.3636).abs() < 1e-3,
            "array should be ~436.36 Wp, got {:.4}",
            r.array_size_wp
        );
        assert_eq!(r.panel_count, 2, "ceil(436.36 / 250) = 2");
        assert_eq!(r.required_battery_wh, 5400.0);
        assert!(
            (r.battery_capacity_kwh - 10.8).abs() < 1e-9,
            "battery should be 10.8 kWh, got {:.4}",
            r.battery_capacity_kwh
        );
    }

    #[test]
    fn test_exact_panel_division_is_not_incremented() {
        // 750 W × 2 h = 1500 Wh; / 0.75 = 2000; / 4.0 PSH = 500 Wp,
        // an exact multiple of the 250 W panel rating
        let inputs = SizingInputs {
            peak_load_w: 750.0,
            operating_hours_per_day: 2.0,
            peak_sun_hours: 4.0,
            autonomy_days: 1,
        };
        let r = size_system(&inputs, &SizingAssumptions::default());
        assert_eq!(r.array_size_wp, 500.0);
        assert_eq!(r.panel_count, 2, "exact quotient must stay at 2, not round to 3");
    }

    #[test]
    fn test_small_remainder_rounds_up() {
        // 302 W × 5 h = 1510 Wh; / 0.75 ≈ 2013.3; / 4.0 ≈ 503.3 Wp → 3 panels
        let inputs = SizingInputs {
            peak_load_w: 302.0,
            operating_hours_per_day: 5.0,
            peak_sun_hours: 4.0,
            autonomy_days: 1,
        };
        let r = size_system(&inputs, &SizingAssumptions::default());
        assert_eq!(
            r.panel_count, 3,
            "any remainder buys a whole extra panel, got {} for {:.1} Wp",
            r.panel_count, r.array_size_wp
        );
    }

    #[test]
    fn test_single_panel_minimum_load() {
        // Smallest documented load still needs one whole panel
        let inputs = SizingInputs {
            peak_load_w: 100.0,
            operating_hours_per_day: 2.0,
            peak_sun_hours: 7.0,
            autonomy_days: 1,
        };
        let r = size_system(&inputs, &SizingAssumptions::default());
        assert_eq!(r.panel_count, 1, "~38 Wp still rounds up to one panel");
    }

    #[test]
    fn test_outputs_positive_at_domain_corners() {
        let assumptions = SizingAssumptions::default();
        for peak_load_w in [100.0, 1000.0] {
            for operating_hours_per_day in [2.0, 12.0] {
                for peak_sun_hours in [3.0, 7.0] {
                    for autonomy_days in [1, 7] {
                        let inputs = SizingInputs {
                            peak_load_w,
                            operating_hours_per_day,
                            peak_sun_hours,
                            autonomy_days,
                        };
                        let r = size_system(&inputs, &assumptions);
                        assert!(
                            r.daily_energy_wh > 0.0
                                && r.array_size_wp > 0.0
                                && r.panel_count >= 1
                                && r.required_battery_wh > 0.0
                                && r.battery_capacity_kwh > 0.0,
                            "outputs must stay positive at {inputs:?}, got {r:?}"
                        );
                    }
                }
            }
        }
    }
}
