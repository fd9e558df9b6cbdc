//! Unary client for `platform_ndk.ChassisPlatformService`, kept in the
//! shape `tonic-build` emits.
#![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]

use tonic::codegen::*;

#[derive(Debug, Clone)]
pub struct ChassisPlatformClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl ChassisPlatformClient<tonic::transport::Channel> {
    /// Attempt to create a new client by connecting to a given endpoint.
    pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
    where
        D: TryInto<tonic::transport::Endpoint>,
        D::Error: Into<StdError>,
    {
        let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
        Ok(Self::new(conn))
    }
}

impl<T> ChassisPlatformClient<T>
where
    T: tonic::client::GrpcService<tonic::body::BoxBody>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
{
    pub fn new(inner: T) -> Self {
        let inner = tonic::client::Grpc::new(inner);
        Self { inner }
    }

    pub async fn get_module_name(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqModuleInfo>,
    ) -> std::result::Result<tonic::Response<super::ModuleNameResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/GetModuleName",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "GetModuleName",
        ));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_module_status(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqModuleInfo>,
    ) -> std::result::Result<tonic::Response<super::ModuleStatusResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/GetModuleStatus",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "GetModuleStatus",
        ));
        self.inner.unary(req, path, codec).await
    }

    pub async fn reboot_slot(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqModuleInfo>,
    ) -> std::result::Result<tonic::Response<super::RebootResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/RebootSlot",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "RebootSlot",
        ));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_midplane_ip(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqModuleInfo>,
    ) -> std::result::Result<tonic::Response<super::MidplaneIpResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/GetMidplaneIP",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "GetMidplaneIP",
        ));
        self.inner.unary(req, path, codec).await
    }

    pub async fn is_midplane_reachable(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqModuleInfo>,
    ) -> std::result::Result<tonic::Response<super::MidplaneStatusResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/IsMidplaneReachable",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "IsMidplaneReachable",
        ));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_fabric_pcie_info(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqModuleInfo>,
    ) -> std::result::Result<tonic::Response<super::FabricPcieResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/GetFabricPcieInfo",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "GetFabricPcieInfo",
        ));
        self.inner.unary(req, path, codec).await
    }

    pub async fn get_chassis_type(
        &mut self,
        request: impl tonic::IntoRequest<super::ReqChassisInfo>,
    ) -> std::result::Result<tonic::Response<super::ChassisTypeResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/platform_ndk.ChassisPlatformService/GetChassisType",
        );
        let mut req = request.into_request();
        req.extensions_mut().insert(GrpcMethod::new(
            "platform_ndk.ChassisPlatformService",
            "GetChassisType",
        ));
        self.inner.unary(req, path, codec).await
    }
}
