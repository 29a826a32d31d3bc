use std::sync::Arc;

use crate::roominfo;

/// 宿管联系方式，多个房间可共享同一实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardenContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl WardenContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// 房间记录，构造后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    room_number: String,
    occupant_names: Vec<String>,
    warden_contact: Arc<WardenContact>,
}

impl RoomRecord {
    pub fn new(
        room_number: impl Into<String>,
        occupant_names: Vec<String>,
        warden_contact: Arc<WardenContact>,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            occupant_names,
            warden_contact,
        }
    }

    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    /// 可能为空（房间当前无人入住）
    pub fn occupant_names(&self) -> &[String] {
        &self.occupant_names
    }

    pub fn warden_contact(&self) -> &Arc<WardenContact> {
        &self.warden_contact
    }
}

// 领域类型 <-> 线上消息

impl From<&WardenContact> for roominfo::WardenContact {
    fn from(warden: &WardenContact) -> Self {
        Self {
            name: warden.name.clone(),
            phone: warden.phone.clone(),
            email: warden.email.clone(),
        }
    }
}

impl From<roominfo::WardenContact> for WardenContact {
    fn from(warden: roominfo::WardenContact) -> Self {
        Self {
            name: warden.name,
            phone: warden.phone,
            email: warden.email,
        }
    }
}

impl From<&RoomRecord> for roominfo::RoomInfo {
    fn from(room: &RoomRecord) -> Self {
        Self {
            room_number: room.room_number.clone(),
            occupant_names: room.occupant_names.clone(),
            warden_contact: Some(room.warden_contact.as_ref().into()),
        }
    }
}

/// 线上的房间消息缺少宿管联系方式
#[derive(Debug, thiserror::Error)]
#[error("Room {room_number} is missing its warden contact")]
pub struct MissingWardenContact {
    pub room_number: String,
}

impl TryFrom<roominfo::RoomInfo> for RoomRecord {
    type Error = MissingWardenContact;

    fn try_from(room: roominfo::RoomInfo) -> Result<Self, Self::Error> {
        let Some(warden) = room.warden_contact else {
            return Err(MissingWardenContact {
                room_number: room.room_number,
            });
        };

        Ok(Self {
            room_number: room.room_number,
            occupant_names: room.occupant_names,
            warden_contact: Arc::new(warden.into()),
        })
    }
}
