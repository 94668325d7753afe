use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::{
    id::{SlotId, UserId},
    role::Role,
};

#[derive(new)]
pub struct BookSlot {
    pub slot_id: SlotId,
    pub user_id: UserId,
    pub entry_time: DateTime<Utc>,
}

// 利用者本人かスタッフのときだけ終了できる
#[derive(new)]
pub struct ReleaseSlot {
    pub slot_id: SlotId,
    pub released_by: UserId,
    pub role: Role,
    pub exit_time: DateTime<Utc>,
}
