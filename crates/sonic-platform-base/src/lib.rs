//! Common contract between the SONiC host framework and vendor platform
//! plugins.
//!
//! The host framework instantiates one accessor object per pluggable device
//! and drives it exclusively through the traits and value types defined
//! here:
//!
//! - [`ModuleBase`]: the chassis-module accessor interface (line, fabric
//!   and supervisor cards)
//! - [`ModuleType`] / [`ModuleStatus`] / [`RebootType`]: closed
//!   enumerations with their canonical SONiC string forms
//! - [`AsicPcieEntry`]: one fabric ASIC's PCIe identity
//! - [`MacAddress`]: 48-bit base MAC read from module EEPROM

mod mac;
mod module;

pub use mac::MacAddress;
pub use module::{
    AsicPcieEntry, ModuleBase, ModuleStatus, ModuleType, RebootType, SystemEepromInfo,
};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("invalid module type: {0}")]
    InvalidModuleType(String),
}
