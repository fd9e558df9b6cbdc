//! Module - chassis-module accessor for the IXR-7250 platform.
//!
//! One `Module` exists per physical slot for the life of the process.
//! Every method that needs hardware state opens a fresh NDK connection,
//! issues exactly one request and lets the connection drop before
//! returning; no accessor method ever surfaces an error to the host
//! framework. Failures degrade to the cached last-known value or a
//! documented default.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use nokia_platform_ndk::proto::{HwChassisType, HwModuleType, ReqModuleInfo};
use nokia_platform_ndk::translate::{
    hw_module_type_from, hw_reboot_type_from, hw_slot_to_external_slot, module_status_from_hw,
    INVALID_MIDPLANE_IP,
};
use nokia_platform_ndk::{ensure_success, ChassisConnection, ChassisService, NdkError, NdkResult};
use sonic_platform_base::{
    AsicPcieEntry, MacAddress, ModuleBase, ModuleStatus, ModuleType, RebootType, SystemEepromInfo,
};

use crate::descriptions::{marketing_name, supervisor_description, UNAVAILABLE};
use crate::eeprom::EepromReader;

/// Process-wide construction context for module accessors.
///
/// `my_slot` is the slot the running process is physically hosted on. It
/// is injected here instead of being looked up from ambient state; it
/// decides both EEPROM attachment and reboot eligibility.
#[derive(Clone)]
pub struct PlatformContext {
    /// Hardware slot of the local host.
    pub my_slot: u32,
    /// Channel factory for the NDK chassis service.
    pub chassis: Arc<dyn ChassisService>,
    /// Reader for the local module's EEPROM.
    pub local_eeprom: Arc<dyn EepromReader>,
}

/// Accessor for one pluggable module slot of an IXR-7250 chassis.
pub struct Module {
    index: u32,
    name: String,
    module_type: ModuleType,
    hw_slot: u32,
    my_slot: u32,
    chassis: Arc<dyn ChassisService>,
    oper_status: ModuleStatus,
    midplane_ip: IpAddr,
    max_consumed_power: f64,
    eeprom: Option<Arc<dyn EepromReader>>,
}

impl Module {
    /// Creates the accessor for one slot.
    ///
    /// The EEPROM reader is attached only when the slot is the one the
    /// running process is hosted on; remote cards have no locally
    /// readable EEPROM.
    pub fn new(
        index: u32,
        name: impl Into<String>,
        module_type: ModuleType,
        hw_slot: u32,
        context: &PlatformContext,
    ) -> Self {
        let eeprom = (hw_slot == context.my_slot).then(|| context.local_eeprom.clone());
        Self {
            index,
            name: name.into(),
            module_type,
            hw_slot,
            my_slot: context.my_slot,
            chassis: context.chassis.clone(),
            oper_status: ModuleStatus::Empty,
            midplane_ip: INVALID_MIDPLANE_IP,
            max_consumed_power: 0.0,
            eeprom,
        }
    }

    /// Returns the ordinal assigned to this module at construction.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the internal NDK slot number.
    pub fn hw_slot(&self) -> u32 {
        self.hw_slot
    }

    /// Returns true if this accessor represents the module the running
    /// process is hosted on.
    pub fn is_local(&self) -> bool {
        self.hw_slot == self.my_slot
    }

    /// Request key for module-scoped RPCs.
    fn request(&self) -> ReqModuleInfo {
        ReqModuleInfo {
            module_type: hw_module_type_from(self.module_type) as i32,
            hw_slot: self.hw_slot,
            reboot_type: 0,
        }
    }

    /// Request key for RPCs keyed by slot alone (midplane, PCIe).
    fn slot_request(&self) -> ReqModuleInfo {
        ReqModuleInfo {
            module_type: HwModuleType::Unspecified as i32,
            hw_slot: self.hw_slot,
            reboot_type: 0,
        }
    }

    async fn fetch_description(&self) -> NdkResult<String> {
        let mut conn = self.chassis.connect().await?;
        let resp = conn.get_module_name(self.request()).await?;

        let Some(mapped) = marketing_name(&resp.name) else {
            return Ok(resp.name);
        };
        if self.module_type != ModuleType::Supervisor {
            return Ok(mapped.to_string());
        }

        // The supervisor product name differs by chassis size. An
        // unanswerable chassis-type query lands on the 10-slot name.
        let chassis_type = conn
            .get_chassis_type()
            .await
            .map(|r| r.hw_chassis_type())
            .unwrap_or(HwChassisType::Unknown);
        Ok(supervisor_description(chassis_type).to_string())
    }

    async fn fetch_oper_status(&self) -> NdkResult<ModuleStatus> {
        let mut conn = self.chassis.connect().await?;
        let resp = conn.get_module_status(self.request()).await?;
        Ok(module_status_from_hw(resp.hw_status()))
    }

    async fn try_reboot(&self, reboot_type: RebootType) -> NdkResult<()> {
        let mut conn = self.chassis.connect().await?;
        let mut req = self.request();
        req.reboot_type = hw_reboot_type_from(reboot_type) as i32;
        let resp = conn.reboot_slot(req).await?;
        ensure_success("RebootSlot", resp.response_status.as_ref())
    }

    async fn fetch_midplane_ip(&self) -> NdkResult<IpAddr> {
        let mut conn = self.chassis.connect().await?;
        let resp = conn.get_midplane_ip(self.slot_request()).await?;
        resp.midplane_ip.parse().map_err(|_| {
            NdkError::invalid_response("GetMidplaneIP", "midplane_ip", resp.midplane_ip)
        })
    }

    async fn fetch_midplane_reachable(&self) -> NdkResult<bool> {
        let mut conn = self.chassis.connect().await?;
        let resp = conn.is_midplane_reachable(self.slot_request()).await?;
        Ok(resp.midplane_status)
    }

    async fn fetch_all_asics(&self) -> NdkResult<Vec<AsicPcieEntry>> {
        let mut conn = self.chassis.connect().await?;
        let resp = conn.get_fabric_pcie_info(self.slot_request()).await?;
        ensure_success("GetFabricPcieInfo", resp.response_status.as_ref())?;

        let entries = resp
            .pcie_info
            .map(|info| {
                info.asic_entry
                    .into_iter()
                    .map(|e| AsicPcieEntry {
                        asic_index: e.asic_idx.to_string(),
                        pcie_id: e.asic_pcie_id,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }
}

#[async_trait]
impl ModuleBase for Module {
    fn name(&self) -> &str {
        &self.name
    }

    fn module_type(&self) -> ModuleType {
        self.module_type
    }

    fn slot(&self) -> u32 {
        hw_slot_to_external_slot(self.hw_slot)
    }

    fn position_in_parent(&self) -> i32 {
        self.hw_slot as i32
    }

    fn is_replaceable(&self) -> bool {
        true
    }

    async fn description(&self) -> String {
        match self.fetch_description().await {
            Ok(description) => description,
            Err(err) => {
                debug!(module = %self.name, error = %err, "description query failed");
                UNAVAILABLE.to_string()
            }
        }
    }

    async fn oper_status(&mut self) -> ModuleStatus {
        match self.fetch_oper_status().await {
            Ok(status) => {
                self.oper_status = status;
                status
            }
            Err(err) => {
                // Keep the last known value; never reset to Empty on a
                // failed refresh.
                debug!(module = %self.name, error = %err, "status query failed, using cached value");
                self.oper_status
            }
        }
    }

    async fn presence(&mut self) -> bool {
        self.oper_status().await != ModuleStatus::Empty
    }

    async fn status(&mut self) -> bool {
        self.oper_status().await == ModuleStatus::Online
    }

    async fn reboot(&mut self, reboot_type: RebootType) -> bool {
        // Fabric reboot needs syncd and the forwarding plane quiesced
        // first; that sequence is owned by the reboot orchestration.
        if self.module_type == ModuleType::Fabric {
            return false;
        }
        // Only the locally hosted module can be rebooted from here.
        if self.my_slot != self.hw_slot {
            return false;
        }

        match self.try_reboot(reboot_type).await {
            Ok(()) => true,
            Err(err) => {
                debug!(module = %self.name, error = %err, "reboot request failed");
                false
            }
        }
    }

    async fn set_admin_state(&mut self, _up: bool) -> bool {
        // Administrative up/down control is not supported on this
        // platform.
        false
    }

    async fn maximum_consumed_power(&mut self) -> f64 {
        // An empty slot reports no power regardless of the configured
        // ceiling.
        if self.oper_status().await == ModuleStatus::Empty {
            return 0.0;
        }
        self.max_consumed_power
    }

    fn set_maximum_consumed_power(&mut self, consumed_power: f64) {
        self.max_consumed_power = consumed_power;
    }

    async fn midplane_ip(&mut self) -> IpAddr {
        match self.fetch_midplane_ip().await {
            Ok(ip) => {
                self.midplane_ip = ip;
                ip
            }
            Err(err) => {
                debug!(module = %self.name, error = %err, "midplane address query failed, using cached value");
                self.midplane_ip
            }
        }
    }

    async fn is_midplane_reachable(&mut self) -> bool {
        // Reachability is always answered live; a stale positive would
        // mask a dead card.
        match self.fetch_midplane_reachable().await {
            Ok(reachable) => reachable,
            Err(err) => {
                debug!(module = %self.name, error = %err, "midplane reachability query failed");
                false
            }
        }
    }

    fn model(&self) -> Option<String> {
        self.eeprom.as_ref().and_then(|e| e.part_number())
    }

    fn serial(&self) -> Option<String> {
        self.eeprom.as_ref().and_then(|e| e.serial_number())
    }

    fn base_mac(&self) -> Option<MacAddress> {
        self.eeprom.as_ref().and_then(|e| e.base_mac())
    }

    fn system_eeprom_info(&self) -> Option<SystemEepromInfo> {
        self.eeprom.as_ref().and_then(|e| e.system_eeprom_info())
    }

    async fn all_asics(&mut self) -> Vec<AsicPcieEntry> {
        // Only fabric modules carry directly attached fabric ASICs.
        if !self.name.starts_with(ModuleType::Fabric.as_str()) {
            return Vec::new();
        }

        match self.fetch_all_asics().await {
            Ok(asics) => asics,
            Err(err) => {
                if !err.is_not_found() {
                    debug!(module = %self.name, error = %err, "fabric PCIe query failed");
                }
                Vec::new()
            }
        }
    }
}
