//! EEPROM collaborator boundary.
//!
//! Only the module the running process is hosted on has a locally readable
//! EEPROM; remote cards have none. Decoding the ONIE TLV contents is owned
//! by the EEPROM component, so this module only defines the reader seam
//! and a holder for already-decoded fields.

use sonic_platform_base::{MacAddress, SystemEepromInfo};

/// ONIE TLV type codes for the fields this plugin consumes.
pub mod tlv {
    pub const PART_NUMBER: &str = "0x22";
    pub const SERIAL_NUMBER: &str = "0x23";
    pub const BASE_MAC: &str = "0x24";
}

/// Read access to a module's manufacturing identity data.
pub trait EepromReader: Send + Sync {
    /// Returns the part number, if programmed.
    fn part_number(&self) -> Option<String>;

    /// Returns the serial number, if programmed.
    fn serial_number(&self) -> Option<String>;

    /// Returns the base MAC address, if programmed.
    fn base_mac(&self) -> Option<MacAddress>;

    /// Returns the full decoded TLV contents, keyed by type code.
    fn system_eeprom_info(&self) -> Option<SystemEepromInfo>;
}

/// Identity fields decoded from a module EEPROM.
///
/// Carries results only; the decode itself happens in the EEPROM
/// component before this is constructed.
#[derive(Debug, Clone, Default)]
pub struct DecodedEeprom {
    part_number: Option<String>,
    serial_number: Option<String>,
    base_mac: Option<MacAddress>,
    info: Option<SystemEepromInfo>,
}

impl DecodedEeprom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
    }

    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    pub fn with_base_mac(mut self, base_mac: MacAddress) -> Self {
        self.base_mac = Some(base_mac);
        self
    }

    pub fn with_info(mut self, info: SystemEepromInfo) -> Self {
        self.info = Some(info);
        self
    }
}

impl EepromReader for DecodedEeprom {
    fn part_number(&self) -> Option<String> {
        self.part_number.clone()
    }

    fn serial_number(&self) -> Option<String> {
        self.serial_number.clone()
    }

    fn base_mac(&self) -> Option<MacAddress> {
        self.base_mac
    }

    fn system_eeprom_info(&self) -> Option<SystemEepromInfo> {
        self.info.clone()
    }
}
