use tonic::{Request, Response, Status};

use super::service::MyRoomInfoService;
use crate::roominfo::{
    RoomInfoReply, RoomQuery, WardenContactReply, room_info_service_server::RoomInfoService,
};

// 房间不存在不是错误：返回空字段的正常响应
#[tonic::async_trait]
impl RoomInfoService for MyRoomInfoService {
    async fn get_room_info(
        &self,
        request: Request<RoomQuery>,
    ) -> Result<Response<RoomInfoReply>, Status> {
        let req = request.into_inner();
        let room = self.find_room(&req.room_number).map(Into::into);

        Ok(Response::new(RoomInfoReply { room }))
    }

    async fn get_warden_contact(
        &self,
        request: Request<RoomQuery>,
    ) -> Result<Response<WardenContactReply>, Status> {
        let req = request.into_inner();
        let warden = self
            .find_warden_contact(&req.room_number)
            .map(|warden| warden.as_ref().into());

        Ok(Response::new(WardenContactReply { warden }))
    }
}
