use tonic::{Request, Response, Status};

use super::service::MyRegistryService;
use crate::registry::{
    BindRequest, BindResponse, ListRequest, ListResponse, ResolveRequest, ResolveResponse,
    UnbindRequest, UnbindResponse, registry_service_server::RegistryService,
};

// 为结构体实现 gRPC 服务 trait
#[tonic::async_trait]
impl RegistryService for MyRegistryService {
    async fn bind(&self, request: Request<BindRequest>) -> Result<Response<BindResponse>, Status> {
        let req = request.into_inner();
        let previous = MyRegistryService::bind(self, &req.name, &req.address)?;

        let reply = BindResponse {
            success: true,
            message: if previous.is_some() {
                "Binding replaced".into()
            } else {
                "Binding successful".into()
            },
            replaced: previous.is_some(),
        };

        Ok(Response::new(reply))
    }

    async fn resolve(
        &self,
        request: Request<ResolveRequest>,
    ) -> Result<Response<ResolveResponse>, Status> {
        let req = request.into_inner();
        let binding = MyRegistryService::resolve(self, &req.name)?;

        Ok(Response::new(ResolveResponse {
            name: req.name,
            address: binding.address,
        }))
    }

    async fn unbind(
        &self,
        request: Request<UnbindRequest>,
    ) -> Result<Response<UnbindResponse>, Status> {
        let req = request.into_inner();
        MyRegistryService::unbind(self, &req.name)?;

        Ok(Response::new(UnbindResponse {
            success: true,
            message: "Unbind successful".into(),
        }))
    }

    async fn list(&self, _request: Request<ListRequest>) -> Result<Response<ListResponse>, Status> {
        Ok(Response::new(ListResponse {
            names: MyRegistryService::list(self),
        }))
    }
}
