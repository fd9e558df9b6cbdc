//! Wire types for the NDK `platform_ndk.ChassisPlatformService` gRPC
//! service.
//!
//! The service definition is small and frozen, so the messages are written
//! out as `prost` derives rather than generated from a `.proto` at build
//! time; field tags and the client module below match what `tonic-build`
//! would emit.

/// Hardware module type codes used as request keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HwModuleType {
    Unspecified = 0,
    /// Supervisor/control card.
    Control = 1,
    Line = 2,
    Fabric = 3,
}

/// Module status codes as reported by the NDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HwModuleStatus {
    Empty = 0,
    Present = 1,
    PoweredDown = 2,
    Online = 3,
    Offline = 4,
    Fault = 5,
}

/// Chassis size variants. Disambiguates supervisor product names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HwChassisType {
    Unknown = 0,
    /// 6-slot IXR-7250 chassis.
    Ixr6 = 1,
    /// 10-slot IXR-7250 chassis.
    Ixr10 = 2,
}

/// Reboot scope codes accepted by `RebootSlot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HwRebootType {
    Default = 0,
    CpuComplex = 1,
    Fpga = 2,
}

/// Application-level result codes carried in every NDK response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResponseCode {
    Success = 0,
    Failure = 1,
    ResourceNotFound = 2,
}

impl ResponseCode {
    /// Returns true if the code indicates success.
    pub fn is_success(&self) -> bool {
        *self == ResponseCode::Success
    }
}

/// Request key shared by all module-scoped RPCs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReqModuleInfo {
    #[prost(enumeration = "HwModuleType", tag = "1")]
    pub module_type: i32,
    #[prost(uint32, tag = "2")]
    pub hw_slot: u32,
    #[prost(enumeration = "HwRebootType", tag = "3")]
    pub reboot_type: i32,
}

impl ReqModuleInfo {
    /// Module-type code, treating an unknown wire value as unspecified.
    pub fn hw_module_type(&self) -> HwModuleType {
        HwModuleType::try_from(self.module_type).unwrap_or(HwModuleType::Unspecified)
    }

    /// Reboot-type code, treating an unknown wire value as the default
    /// scope.
    pub fn hw_reboot_type(&self) -> HwRebootType {
        HwRebootType::try_from(self.reboot_type).unwrap_or(HwRebootType::Default)
    }
}

/// Request for chassis-scoped RPCs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReqChassisInfo {}

/// Result status attached to every response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseStatus {
    #[prost(enumeration = "ResponseCode", tag = "1")]
    pub status_code: i32,
    #[prost(string, tag = "2")]
    pub error_msg: ::prost::alloc::string::String,
}

impl ResponseStatus {
    /// Result code of the response.
    ///
    /// An unknown wire value counts as a failure; the derive-generated
    /// `status_code()` accessor instead falls back to the enum default,
    /// which is `Success`.
    pub fn code(&self) -> ResponseCode {
        ResponseCode::try_from(self.status_code).unwrap_or(ResponseCode::Failure)
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleNameResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
    /// Raw hardware model identifier, e.g. `imm36-400g-qsfpdd`.
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
    #[prost(enumeration = "HwModuleStatus", tag = "2")]
    pub status: i32,
}

impl ModuleStatusResponse {
    /// Module status code, treating an unknown wire value as empty.
    pub fn hw_status(&self) -> HwModuleStatus {
        HwModuleStatus::try_from(self.status).unwrap_or(HwModuleStatus::Empty)
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebootResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MidplaneIpResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
    #[prost(string, tag = "2")]
    pub midplane_ip: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MidplaneStatusResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
    #[prost(bool, tag = "2")]
    pub midplane_status: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChassisTypeResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
    #[prost(enumeration = "HwChassisType", tag = "2")]
    pub chassis_type: i32,
}

impl ChassisTypeResponse {
    /// Chassis size code, treating an unknown wire value as unknown.
    pub fn hw_chassis_type(&self) -> HwChassisType {
        HwChassisType::try_from(self.chassis_type).unwrap_or(HwChassisType::Unknown)
    }
}

/// One ASIC on a fabric module.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AsicEntry {
    #[prost(uint32, tag = "1")]
    pub asic_idx: u32,
    #[prost(string, tag = "2")]
    pub asic_pcie_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PcieInfo {
    #[prost(message, repeated, tag = "1")]
    pub asic_entry: ::prost::alloc::vec::Vec<AsicEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FabricPcieResponse {
    #[prost(message, optional, tag = "1")]
    pub response_status: ::core::option::Option<ResponseStatus>,
    #[prost(message, optional, tag = "2")]
    pub pcie_info: ::core::option::Option<PcieInfo>,
}

pub mod chassis_platform_client;

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_req_module_info_accessors() {
        let req = ReqModuleInfo {
            module_type: HwModuleType::Fabric as i32,
            hw_slot: 3,
            reboot_type: HwRebootType::CpuComplex as i32,
        };
        assert_eq!(req.hw_module_type(), HwModuleType::Fabric);
        assert_eq!(req.hw_reboot_type(), HwRebootType::CpuComplex);
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let req = ReqModuleInfo {
            module_type: 99,
            hw_slot: 0,
            reboot_type: 0,
        };
        assert_eq!(req.hw_module_type(), HwModuleType::Unspecified);

        // An unrecognized result code must never read as success. The
        // derive-generated accessor falls back to the wire default
        // (Success = 0); the checked helper does not.
        let status = ResponseStatus {
            status_code: 42,
            error_msg: String::new(),
        };
        assert_eq!(status.status_code(), ResponseCode::Success);
        assert_eq!(status.code(), ResponseCode::Failure);
    }

    #[test]
    fn test_response_code_is_success() {
        assert!(ResponseCode::Success.is_success());
        assert!(!ResponseCode::Failure.is_success());
        assert!(!ResponseCode::ResourceNotFound.is_success());
    }

    #[test]
    fn test_message_round_trip() {
        let resp = FabricPcieResponse {
            response_status: Some(ResponseStatus {
                status_code: ResponseCode::Success as i32,
                error_msg: String::new(),
            }),
            pcie_info: Some(PcieInfo {
                asic_entry: vec![
                    AsicEntry {
                        asic_idx: 0,
                        asic_pcie_id: "pcie0".to_string(),
                    },
                    AsicEntry {
                        asic_idx: 1,
                        asic_pcie_id: "pcie1".to_string(),
                    },
                ],
            }),
        };

        let bytes = resp.encode_to_vec();
        let decoded = FabricPcieResponse::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, resp);
        assert_eq!(decoded.pcie_info.unwrap().asic_entry.len(), 2);
    }
}
