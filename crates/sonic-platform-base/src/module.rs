//! Chassis-module accessor contract.
//!
//! The host framework instantiates one accessor per physical chassis slot
//! and calls these methods to answer identity, status, power and midplane
//! queries. Vendor plugins implement [`ModuleBase`]; the enumerations here
//! carry the canonical SONiC string forms used in state tables and CLI
//! output.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::{MacAddress, ParseError};

/// Kind of pluggable chassis module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleType {
    /// Supervisor/control card.
    Supervisor,
    /// Line card carrying front-panel ports.
    Line,
    /// Fabric card interconnecting line cards.
    Fabric,
}

impl ModuleType {
    /// Returns the canonical SONiC name prefix for this module type.
    ///
    /// Module names are formed by appending the slot ordinal to this
    /// prefix, e.g. `LINE-CARD0`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Supervisor => "SUPERVISOR-CARD",
            ModuleType::Line => "LINE-CARD",
            ModuleType::Fabric => "FABRIC-CARD",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPERVISOR-CARD" => Ok(ModuleType::Supervisor),
            "LINE-CARD" => Ok(ModuleType::Line),
            "FABRIC-CARD" => Ok(ModuleType::Fabric),
            _ => Err(ParseError::InvalidModuleType(s.to_string())),
        }
    }
}

/// Operational status of a chassis module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleStatus {
    /// Slot is empty, no module detected.
    #[default]
    Empty,
    /// Module detected but not brought up.
    Offline,
    /// Module present but powered down.
    PoweredDown,
    /// Module present, bring-up in progress.
    Present,
    /// Module detected but in a fault state.
    Fault,
    /// Module fully operational.
    Online,
}

impl ModuleStatus {
    /// Returns the status string as published to STATE_DB.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::Empty => "Empty",
            ModuleStatus::Offline => "Offline",
            ModuleStatus::PoweredDown => "PoweredDown",
            ModuleStatus::Present => "Present",
            ModuleStatus::Fault => "Fault",
            ModuleStatus::Online => "Online",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of reboot requested for a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebootType {
    /// Vendor-default reboot of the whole module.
    #[default]
    Default,
    /// Reboot only the CPU complex.
    CpuComplex,
    /// Reload only the FPGA.
    Fpga,
}

/// One fabric ASIC's position and PCIe identity.
///
/// Returned by [`ModuleBase::all_asics`] in the order the hardware daemon
/// reports them; the host framework uses the pair to map ASIC ordinals to
/// PCIe bus addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsicPcieEntry {
    /// ASIC ordinal within the module, as a decimal string.
    pub asic_index: String,
    /// PCIe bus identifier of the ASIC.
    pub pcie_id: String,
}

/// Decoded system EEPROM contents, keyed by TLV type code (e.g. `"0x21"`).
pub type SystemEepromInfo = BTreeMap<String, String>;

/// Accessor interface for one pluggable chassis module.
///
/// One instance exists per physical slot for the life of the host process.
/// Methods that refresh cached state take `&mut self`; the host framework
/// serializes calls per instance but may drive different instances from
/// different tasks.
#[async_trait]
pub trait ModuleBase: Send {
    /// Returns the name of the device.
    fn name(&self) -> &str;

    /// Returns the kind of module occupying this slot.
    fn module_type(&self) -> ModuleType;

    /// Returns the user-facing slot number of this module.
    fn slot(&self) -> u32;

    /// Returns the 1-based physical position in the parent chassis, or -1
    /// if the position cannot be determined.
    fn position_in_parent(&self) -> i32 {
        -1
    }

    /// Indicates whether this device is hot-swappable.
    fn is_replaceable(&self) -> bool {
        false
    }

    /// Returns a human-readable product description of the module.
    async fn description(&self) -> String;

    /// Returns the operational status of the module.
    async fn oper_status(&mut self) -> ModuleStatus;

    /// Returns true if a module is present in the slot.
    async fn presence(&mut self) -> bool;

    /// Returns true if the module is fully operational.
    async fn status(&mut self) -> bool;

    /// Requests a reboot of the module. Returns true only if the request
    /// was accepted by the platform.
    async fn reboot(&mut self, reboot_type: RebootType) -> bool;

    /// Requests the module be put administratively up or down. Returns
    /// true only if the request was accepted by the platform.
    async fn set_admin_state(&mut self, up: bool) -> bool;

    /// Returns the maximum power in watts this module is allowed to draw,
    /// or 0 when the slot is empty.
    async fn maximum_consumed_power(&mut self) -> f64;

    /// Sets the maximum power in watts this module is allowed to draw.
    fn set_maximum_consumed_power(&mut self, consumed_power: f64);

    /// Returns the midplane management address of the module.
    async fn midplane_ip(&mut self) -> IpAddr;

    /// Returns true if the module currently answers on the midplane.
    async fn is_midplane_reachable(&mut self) -> bool;

    /// Returns the model/part number from the module EEPROM, if readable.
    fn model(&self) -> Option<String>;

    /// Returns the serial number from the module EEPROM, if readable.
    fn serial(&self) -> Option<String>;

    /// Returns the base MAC address from the module EEPROM, if readable.
    fn base_mac(&self) -> Option<MacAddress>;

    /// Returns the decoded system EEPROM contents, if readable.
    fn system_eeprom_info(&self) -> Option<SystemEepromInfo>;

    /// Returns the (asic index, PCIe id) pairs of the ASICs on this
    /// module, in hardware-reported order. Empty for non-fabric modules.
    async fn all_asics(&mut self) -> Vec<AsicPcieEntry>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_type_strings() {
        assert_eq!(ModuleType::Supervisor.as_str(), "SUPERVISOR-CARD");
        assert_eq!(ModuleType::Line.as_str(), "LINE-CARD");
        assert_eq!(ModuleType::Fabric.as_str(), "FABRIC-CARD");
    }

    #[test]
    fn test_module_type_round_trip() {
        for t in [ModuleType::Supervisor, ModuleType::Line, ModuleType::Fabric] {
            assert_eq!(t.as_str().parse::<ModuleType>().unwrap(), t);
        }
        assert!("DPU".parse::<ModuleType>().is_err());
    }

    #[test]
    fn test_module_status_default_is_empty() {
        assert_eq!(ModuleStatus::default(), ModuleStatus::Empty);
    }

    #[test]
    fn test_module_status_strings() {
        assert_eq!(ModuleStatus::Empty.as_str(), "Empty");
        assert_eq!(ModuleStatus::Online.as_str(), "Online");
        assert_eq!(ModuleStatus::PoweredDown.as_str(), "PoweredDown");
    }

    #[test]
    fn test_system_eeprom_info_reexported() {
        // Plugins consume this alias through the crate root.
        let mut info: crate::SystemEepromInfo = Default::default();
        info.insert("0x22".to_string(), "3HE12345AA".to_string());
        assert_eq!(info["0x22"], "3HE12345AA");
    }

    #[test]
    fn test_asic_entry_serialize() {
        let entry = AsicPcieEntry {
            asic_index: "0".to_string(),
            pcie_id: "0000:01:00.0".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"asic_index\":\"0\""));
        assert!(json.contains("\"pcie_id\":\"0000:01:00.0\""));
    }
}
