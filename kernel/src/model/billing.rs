// 料金 = max(1, 経過時間 / 1h) × 時間単価。最後にセント単位で丸める

use chrono::{DateTime, Utc};

use super::vehicle::VehicleType;

pub const MINIMUM_BILLABLE_HOURS: f64 = 1.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn billable_hours(entry_time: DateTime<Utc>, exit_time: DateTime<Utc>) -> f64 {
    let elapsed = (exit_time - entry_time).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    elapsed.max(MINIMUM_BILLABLE_HOURS)
}

pub fn compute_charge(
    vehicle_type: VehicleType,
    entry_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
) -> f64 {
    round_to_cents(billable_hours(entry_time, exit_time) * vehicle_type.hourly_rate())
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn under_one_hour_bills_the_minimum() {
        let exit = entry() + Duration::minutes(20);
        assert_eq!(compute_charge(VehicleType::FourWheeler, entry(), exit), 2.0);
        assert_eq!(compute_charge(VehicleType::TwoWheeler, entry(), exit), 1.0);
    }

    #[test]
    fn two_and_a_half_hours_on_four_wheeler() {
        let exit = entry() + Duration::minutes(150);
        assert_eq!(billable_hours(entry(), exit), 2.5);
        assert_eq!(compute_charge(VehicleType::FourWheeler, entry(), exit), 5.0);
    }

    #[test]
    fn fractional_hours_round_to_cents() {
        // 100 分 = 1.6666... 時間
        let exit = entry() + Duration::minutes(100);
        assert_eq!(compute_charge(VehicleType::FourWheeler, entry(), exit), 3.33);
        assert_eq!(compute_charge(VehicleType::TwoWheeler, entry(), exit), 1.67);
    }

    #[test]
    fn exit_before_entry_still_bills_one_hour() {
        let exit = entry() - Duration::minutes(5);
        assert_eq!(billable_hours(entry(), exit), MINIMUM_BILLABLE_HOURS);
    }
}
