use strum::{AsRefStr, EnumString};

#[derive(Debug, EnumString, AsRefStr, Default, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    #[default]
    Resident,
    Staff,
}
