use std::sync::Arc;

use super::table::LookupTable;
use super::types::{RoomRecord, WardenContact};

// 房间信息查询服务
#[derive(Debug, Clone)]
pub struct MyRoomInfoService {
    pub table: Arc<LookupTable>,
}

impl Default for MyRoomInfoService {
    fn default() -> Self {
        Self::new(Arc::new(LookupTable::initialize()))
    }
}

impl MyRoomInfoService {
    pub fn new(table: Arc<LookupTable>) -> Self {
        Self { table }
    }

    // 查询房间信息
    pub fn find_room(&self, room_number: &str) -> Option<&RoomRecord> {
        let room = self.table.get(room_number);
        tracing::debug!(
            room_number = %room_number,
            found = room.is_some(),
            "Room info lookup"
        );
        room
    }

    // 通过房间记录取得宿管联系方式，不单独建立索引
    pub fn find_warden_contact(&self, room_number: &str) -> Option<Arc<WardenContact>> {
        self.find_room(room_number)
            .map(|room| room.warden_contact().clone())
    }
}
