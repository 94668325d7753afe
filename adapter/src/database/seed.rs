use chrono::{DateTime, Duration, Utc};
use kernel::model::{
    id::UserId,
    role::Role,
    slot::Slot,
    user::User,
    vehicle::{Vehicle, VehicleType},
};

pub const GUEST_USER_ID: &str = "guest-1";

// 起動時のスロット一覧。A3 だけは起動の 1 時間前からゲストが駐車している
pub fn initial_slots(started_at: DateTime<Utc>) -> Vec<Slot> {
    let mut a3 = Slot::available("A3", "Lot A", VehicleType::FourWheeler);
    a3.occupy(UserId::new(GUEST_USER_ID), started_at - Duration::hours(1));

    vec![
        Slot::available("A1", "Lot A", VehicleType::FourWheeler),
        Slot::available("A2", "Lot A", VehicleType::FourWheeler),
        a3,
        Slot::available("B1", "Lot B", VehicleType::TwoWheeler),
        Slot::available("B2", "Lot B", VehicleType::TwoWheeler),
        Slot::available("B3", "Lot B", VehicleType::TwoWheeler),
    ]
}

pub fn mock_user(role: Role) -> User {
    let (user_id, user_name, email) = match role {
        Role::Resident => ("user-001", "Alice Johnson", "alice@example.com"),
        Role::Staff => ("staff-001", "Staff Member", "staff@park.pro"),
    };
    User {
        user_id: UserId::new(user_id),
        user_name: user_name.into(),
        email: email.into(),
        role,
        vehicle: Vehicle {
            reg_no: "ABC-1234".into(),
            vehicle_type: VehicleType::FourWheeler,
        },
        history: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::slot::SlotStatus;

    #[test]
    fn seed_has_one_guest_in_a3() {
        let now = Utc::now();
        let slots = initial_slots(now);
        assert_eq!(slots.len(), 6);

        let occupied: Vec<_> = slots
            .iter()
            .filter(|s| s.status == SlotStatus::Occupied)
            .collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].slot_id.as_str(), "A3");
        let occupancy = occupied[0].occupancy.as_ref().unwrap();
        assert_eq!(occupancy.user_id.as_str(), GUEST_USER_ID);
        assert_eq!(occupancy.entry_time, now - Duration::hours(1));
    }

    #[test]
    fn lot_b_is_for_two_wheelers() {
        assert!(initial_slots(Utc::now())
            .iter()
            .filter(|s| s.location == "Lot B")
            .all(|s| s.vehicle_type == VehicleType::TwoWheeler));
    }

    #[test]
    fn mock_users_by_role() {
        let resident = mock_user(Role::Resident);
        assert_eq!(resident.user_id.as_str(), "user-001");
        assert_eq!(resident.user_name, "Alice Johnson");
        assert!(resident.history.is_empty());

        let staff = mock_user(Role::Staff);
        assert_eq!(staff.user_id.as_str(), "staff-001");
        assert_eq!(staff.email, "staff@park.pro");
    }
}
