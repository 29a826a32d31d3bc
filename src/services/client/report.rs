use std::io::Write;

use super::{ClientError, RoomInfoClient, RoomInfoClientConfig};
use crate::services::rooms::{RoomRecord, WardenContact};

/// 未指定房间时查询的默认房间号
pub const DEFAULT_ROOM: &str = "A101";

/// 解析服务并依次查询房间，把可读结果写入 `out`
///
/// 房间不存在时输出 "not found"；传输层错误立即返回。
pub async fn run_report<W: Write>(
    config: &RoomInfoClientConfig,
    rooms: &[String],
    out: &mut W,
) -> Result<(), ClientError> {
    let mut service = RoomInfoClient::resolve(config).await?;

    for room_number in rooms {
        let room = service.get_room_info(room_number).await?;
        let warden = service.get_warden_contact(room_number).await?;
        write_room_report(out, room_number, room.as_ref(), warden.as_ref())?;
    }

    Ok(())
}

/// 输出单个房间的查询结果
pub fn write_room_report<W: Write>(
    out: &mut W,
    room_number: &str,
    room: Option<&RoomRecord>,
    warden: Option<&WardenContact>,
) -> std::io::Result<()> {
    match room {
        Some(room) => {
            writeln!(out, "Room: {}", room.room_number())?;
            if room.occupant_names().is_empty() {
                writeln!(out, "Occupants: (none)")?;
            } else {
                writeln!(out, "Occupants: {}", room.occupant_names().join(", "))?;
            }
            writeln!(out, "Warden: {}", room.warden_contact().name)?;
        }
        None => writeln!(out, "Room {room_number}: not found")?,
    }

    match warden {
        Some(warden) => {
            writeln!(out, "Warden Name: {}", warden.name)?;
            writeln!(out, "Phone: {}", warden.phone)?;
            writeln!(out, "Email: {}", warden.email)?;
        }
        None => writeln!(out, "Warden contact for {room_number}: not found")?,
    }

    Ok(())
}
