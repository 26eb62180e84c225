//! Thresholds derived from raw quiz answers, and the labels used to quote
//! those answers back in reason and warning text.
//!
//! Every function here is total: unrecognized tokens fall back to a default.

pub const DEFAULT_REQUIRED_RANGE_KM: u32 = 30;
pub const BASE_MOTOR_POWER_W: u32 = 250;

/// Minimum comfortable range in km for a daily distance bucket.
pub fn required_range_km(daily_distance: &str) -> u32 {
    match daily_distance {
        "lt_10" => 15,
        "10_25" => 30,
        "25_40" => 50,
        "gt_40" => 70,
        _ => DEFAULT_REQUIRED_RANGE_KM,
    }
}

/// Minimum motor power in watts. Rider weight sets the base, terrain adds on top.
pub fn required_motor_power_w(rider_weight: &str, terrain: &str) -> u32 {
    let base = match rider_weight {
        "70_90" => 300,
        "gt_90" => 350,
        _ => BASE_MOTOR_POWER_W,
    };
    let terrain_extra = match terrain {
        "gentle" => 50,
        "steep" => 100,
        _ => 0,
    };
    base + terrain_extra
}

pub fn distance_label(token: &str) -> &str {
    match token {
        "lt_10" => "<10 km",
        "10_25" => "10-25 km",
        "25_40" => "25-40 km",
        "gt_40" => ">40 km",
        other => other,
    }
}

pub fn weight_label(token: &str) -> &str {
    match token {
        "lt_70" => "<70 kg",
        "70_90" => "70-90 kg",
        "gt_90" => ">90 kg",
        other => other,
    }
}

pub fn terrain_label(token: &str) -> &str {
    match token {
        "flat" => "flat roads",
        "gentle" => "gentle inclines",
        "steep" => "steep hills",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_range_covers_every_bucket() {
        assert_eq!(required_range_km("lt_10"), 15);
        assert_eq!(required_range_km("10_25"), 30);
        assert_eq!(required_range_km("25_40"), 50);
        assert_eq!(required_range_km("gt_40"), 70);
        assert_eq!(required_range_km("marathon"), 30);
        assert_eq!(required_range_km(""), 30);
    }

    #[test]
    fn motor_power_adds_terrain_to_weight_base() {
        assert_eq!(required_motor_power_w("lt_70", "flat"), 250);
        assert_eq!(required_motor_power_w("70_90", "gentle"), 350);
        assert_eq!(required_motor_power_w("gt_90", "steep"), 450);
        assert_eq!(required_motor_power_w("unknown", "unknown"), 250);
        assert_eq!(required_motor_power_w("", "steep"), 350);
    }

    #[test]
    fn labels_echo_unknown_tokens() {
        assert_eq!(distance_label("10_25"), "10-25 km");
        assert_eq!(weight_label("gt_90"), ">90 kg");
        assert_eq!(terrain_label("steep"), "steep hills");
        assert_eq!(distance_label("very_far"), "very_far");
        assert_eq!(weight_label("heavy"), "heavy");
        assert_eq!(terrain_label("sand"), "sand");
    }
}
