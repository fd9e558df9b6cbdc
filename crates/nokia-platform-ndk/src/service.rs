//! Connection seam between platform plugin code and the NDK chassis
//! service.
//!
//! Plugin accessors follow a strict connection-per-call model: obtain a
//! fresh [`ChassisConnection`] from [`ChassisService::connect`], issue one
//! request, and drop the connection before returning. Dropping the
//! connection releases the underlying channel on every exit path, so no
//! explicit shutdown call exists.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{NdkError, NdkResult};
use crate::proto::chassis_platform_client::ChassisPlatformClient;
use crate::proto::{
    ChassisTypeResponse, FabricPcieResponse, MidplaneIpResponse, MidplaneStatusResponse,
    ModuleNameResponse, ModuleStatusResponse, RebootResponse, ReqChassisInfo, ReqModuleInfo,
};

/// Default NDK chassis-service endpoint on the local host.
pub const DEFAULT_CHASSIS_ENDPOINT: &str = "http://127.0.0.1:50052";

/// Environment variable overriding the chassis-service endpoint.
pub const CHASSIS_ENDPOINT_ENV: &str = "NDK_CHASSIS_ENDPOINT";

/// Factory for short-lived channels to the NDK chassis service.
#[async_trait]
pub trait ChassisService: Send + Sync {
    /// Opens a fresh connection. Fails when no channel can be established.
    async fn connect(&self) -> NdkResult<Box<dyn ChassisConnection>>;
}

/// One open channel to the NDK chassis service.
///
/// The channel is released when the value is dropped.
#[async_trait]
pub trait ChassisConnection: Send {
    async fn get_module_name(&mut self, req: ReqModuleInfo) -> NdkResult<ModuleNameResponse>;

    async fn get_module_status(&mut self, req: ReqModuleInfo) -> NdkResult<ModuleStatusResponse>;

    async fn reboot_slot(&mut self, req: ReqModuleInfo) -> NdkResult<RebootResponse>;

    async fn get_midplane_ip(&mut self, req: ReqModuleInfo) -> NdkResult<MidplaneIpResponse>;

    async fn is_midplane_reachable(
        &mut self,
        req: ReqModuleInfo,
    ) -> NdkResult<MidplaneStatusResponse>;

    async fn get_fabric_pcie_info(&mut self, req: ReqModuleInfo) -> NdkResult<FabricPcieResponse>;

    async fn get_chassis_type(&mut self) -> NdkResult<ChassisTypeResponse>;
}

/// tonic-backed [`ChassisService`] dialing the NDK over loopback.
#[derive(Debug, Clone)]
pub struct GrpcChassisService {
    endpoint: String,
}

impl GrpcChassisService {
    /// Creates a service dialing the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Creates a service from `NDK_CHASSIS_ENDPOINT`, falling back to the
    /// loopback default.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(CHASSIS_ENDPOINT_ENV)
            .unwrap_or_else(|_| DEFAULT_CHASSIS_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// Returns the endpoint this service dials.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for GrpcChassisService {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl ChassisService for GrpcChassisService {
    async fn connect(&self) -> NdkResult<Box<dyn ChassisConnection>> {
        let client = ChassisPlatformClient::connect(self.endpoint.clone())
            .await
            .map_err(|e| {
                debug!(endpoint = %self.endpoint, error = %e, "NDK channel setup failed");
                NdkError::channel_setup(self.endpoint.clone(), e)
            })?;
        Ok(Box::new(GrpcChassisConnection { client }))
    }
}

struct GrpcChassisConnection {
    client: ChassisPlatformClient<tonic::transport::Channel>,
}

#[async_trait]
impl ChassisConnection for GrpcChassisConnection {
    async fn get_module_name(&mut self, req: ReqModuleInfo) -> NdkResult<ModuleNameResponse> {
        let resp = self
            .client
            .get_module_name(req)
            .await
            .map_err(|s| NdkError::rpc("GetModuleName", s))?;
        Ok(resp.into_inner())
    }

    async fn get_module_status(&mut self, req: ReqModuleInfo) -> NdkResult<ModuleStatusResponse> {
        let resp = self
            .client
            .get_module_status(req)
            .await
            .map_err(|s| NdkError::rpc("GetModuleStatus", s))?;
        Ok(resp.into_inner())
    }

    async fn reboot_slot(&mut self, req: ReqModuleInfo) -> NdkResult<RebootResponse> {
        let resp = self
            .client
            .reboot_slot(req)
            .await
            .map_err(|s| NdkError::rpc("RebootSlot", s))?;
        Ok(resp.into_inner())
    }

    async fn get_midplane_ip(&mut self, req: ReqModuleInfo) -> NdkResult<MidplaneIpResponse> {
        let resp = self
            .client
            .get_midplane_ip(req)
            .await
            .map_err(|s| NdkError::rpc("GetMidplaneIP", s))?;
        Ok(resp.into_inner())
    }

    async fn is_midplane_reachable(
        &mut self,
        req: ReqModuleInfo,
    ) -> NdkResult<MidplaneStatusResponse> {
        let resp = self
            .client
            .is_midplane_reachable(req)
            .await
            .map_err(|s| NdkError::rpc("IsMidplaneReachable", s))?;
        Ok(resp.into_inner())
    }

    async fn get_fabric_pcie_info(&mut self, req: ReqModuleInfo) -> NdkResult<FabricPcieResponse> {
        let resp = self
            .client
            .get_fabric_pcie_info(req)
            .await
            .map_err(|s| NdkError::rpc("GetFabricPcieInfo", s))?;
        Ok(resp.into_inner())
    }

    async fn get_chassis_type(&mut self) -> NdkResult<ChassisTypeResponse> {
        let resp = self
            .client
            .get_chassis_type(ReqChassisInfo {})
            .await
            .map_err(|s| NdkError::rpc("GetChassisType", s))?;
        Ok(resp.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_new() {
        let svc = GrpcChassisService::new("http://127.0.0.1:60000");
        assert_eq!(svc.endpoint(), "http://127.0.0.1:60000");
    }

    #[tokio::test]
    async fn test_connect_refused_maps_to_channel_setup() {
        // Nothing listens on this port; connect must degrade to a typed
        // channel-setup error rather than panic.
        let svc = GrpcChassisService::new("http://127.0.0.1:1");
        let Err(err) = svc.connect().await else {
            panic!("connect to a dead port must fail");
        };
        assert!(err.is_transport());
    }
}
