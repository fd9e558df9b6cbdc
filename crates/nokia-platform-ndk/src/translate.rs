//! Conversions between NDK wire codes and the SONiC platform vocabulary.

use std::net::{IpAddr, Ipv4Addr};

use sonic_platform_base::{ModuleStatus, ModuleType, RebootType};

use crate::proto::{HwModuleStatus, HwModuleType, HwRebootType};

/// Sentinel for "no midplane address known" (`0.0.0.0`).
pub const INVALID_MIDPLANE_IP: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// NDK hardware slots are 0-based; user-facing slot numbering is 1-based.
const EXTERNAL_SLOT_OFFSET: u32 = 1;

/// Translates an internal NDK slot number to the externally visible one.
pub fn hw_slot_to_external_slot(hw_slot: u32) -> u32 {
    hw_slot + EXTERNAL_SLOT_OFFSET
}

/// Maps a module kind to the NDK request type code.
pub fn hw_module_type_from(module_type: ModuleType) -> HwModuleType {
    match module_type {
        ModuleType::Supervisor => HwModuleType::Control,
        ModuleType::Line => HwModuleType::Line,
        ModuleType::Fabric => HwModuleType::Fabric,
    }
}

/// Maps a reboot request to the NDK reboot-type code.
pub fn hw_reboot_type_from(reboot_type: RebootType) -> HwRebootType {
    match reboot_type {
        RebootType::Default => HwRebootType::Default,
        RebootType::CpuComplex => HwRebootType::CpuComplex,
        RebootType::Fpga => HwRebootType::Fpga,
    }
}

/// Translates an NDK module status code to the SONiC status vocabulary.
pub fn module_status_from_hw(status: HwModuleStatus) -> ModuleStatus {
    match status {
        HwModuleStatus::Empty => ModuleStatus::Empty,
        HwModuleStatus::Present => ModuleStatus::Present,
        HwModuleStatus::PoweredDown => ModuleStatus::PoweredDown,
        HwModuleStatus::Online => ModuleStatus::Online,
        HwModuleStatus::Offline => ModuleStatus::Offline,
        HwModuleStatus::Fault => ModuleStatus::Fault,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_slot_is_one_based() {
        assert_eq!(hw_slot_to_external_slot(0), 1);
        assert_eq!(hw_slot_to_external_slot(5), 6);
    }

    #[test]
    fn test_supervisor_maps_to_control() {
        assert_eq!(
            hw_module_type_from(ModuleType::Supervisor),
            HwModuleType::Control
        );
        assert_eq!(hw_module_type_from(ModuleType::Line), HwModuleType::Line);
        assert_eq!(
            hw_module_type_from(ModuleType::Fabric),
            HwModuleType::Fabric
        );
    }

    #[test]
    fn test_status_translation_covers_all_codes() {
        assert_eq!(
            module_status_from_hw(HwModuleStatus::Empty),
            ModuleStatus::Empty
        );
        assert_eq!(
            module_status_from_hw(HwModuleStatus::Online),
            ModuleStatus::Online
        );
        assert_eq!(
            module_status_from_hw(HwModuleStatus::Fault),
            ModuleStatus::Fault
        );
        assert_eq!(
            module_status_from_hw(HwModuleStatus::PoweredDown),
            ModuleStatus::PoweredDown
        );
    }

    #[test]
    fn test_invalid_midplane_sentinel() {
        assert_eq!(INVALID_MIDPLANE_IP.to_string(), "0.0.0.0");
    }
}
