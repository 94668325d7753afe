use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
pub enum VehicleType {
    #[strum(serialize = "2W")]
    TwoWheeler,
    #[strum(serialize = "4W")]
    FourWheeler,
}

impl VehicleType {
    // 1 時間あたりの料金
    pub fn hourly_rate(self) -> f64 {
        match self {
            VehicleType::TwoWheeler => 1.0,
            VehicleType::FourWheeler => 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub reg_no: String,
    pub vehicle_type: VehicleType,
}
