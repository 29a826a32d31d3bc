use std::collections::HashMap;
use std::sync::Arc;

use super::types::{RoomRecord, WardenContact};

/// 房间号（大写） -> 房间记录 的只读查询表
///
/// 构造后不再修改，可在多个请求之间通过 `Arc` 并发读取。
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    rooms: HashMap<String, RoomRecord>,
}

impl LookupTable {
    /// 使用固定的初始数据构建查询表
    pub fn initialize() -> Self {
        let sarah = Arc::new(WardenContact::new(
            "Dr. Sarah Johnson",
            "+91-9876543210",
            "sarah.j@hostel.edu",
        ));
        let robert = Arc::new(WardenContact::new(
            "Prof. Robert Lee",
            "+91-9876543211",
            "robert.l@hostel.edu",
        ));
        let emily = Arc::new(WardenContact::new(
            "Dr. Emily Davis",
            "+91-9876543212",
            "emily.d@hostel.edu",
        ));

        let table = Self::from_records([
            RoomRecord::new("A101", names(&["John Doe", "Jane Smith"]), sarah.clone()),
            RoomRecord::new("A102", names(&["Mike Wilson", "Tom Brown"]), sarah),
            RoomRecord::new("B201", names(&["Alice Green"]), robert.clone()),
            RoomRecord::new(
                "B202",
                names(&["Bob White", "Charlie Black", "David Gray"]),
                robert,
            ),
            RoomRecord::new("C301", Vec::new(), emily),
        ]);

        tracing::debug!(rooms = ?table.room_numbers(), "Room lookup table initialized");
        table
    }

    /// 由任意记录构建，键取自记录自身的房间号
    ///
    /// 记录的房间号统一转为大写，保证键与记录一致；重复房间号以后者为准。
    pub fn from_records(records: impl IntoIterator<Item = RoomRecord>) -> Self {
        let rooms = records
            .into_iter()
            .map(|room| {
                let key = room.room_number().to_uppercase();
                let room = if key == room.room_number() {
                    room
                } else {
                    RoomRecord::new(
                        key.clone(),
                        room.occupant_names().to_vec(),
                        room.warden_contact().clone(),
                    )
                };
                (key, room)
            })
            .collect();

        Self { rooms }
    }

    /// 按房间号查询（大小写不敏感），不存在时返回 `None`
    pub fn get(&self, room_number: &str) -> Option<&RoomRecord> {
        self.rooms.get(&room_number.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// 已排序的房间号列表
    pub fn room_numbers(&self) -> Vec<&str> {
        let mut numbers: Vec<&str> = self.rooms.keys().map(String::as_str).collect();
        numbers.sort_unstable();
        numbers
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
