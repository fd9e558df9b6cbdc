//! # nokia-platform - Nokia IXR-7250 platform plugin
//!
//! Vendor plugin exposing the pluggable modules of an IXR-7250 modular
//! chassis (supervisor, line and fabric cards) to the SONiC platform
//! framework. A thin adapter: every hardware query is forwarded over a
//! short-lived gRPC channel to the NDK hardware-management daemon and the
//! structured response is translated into the `sonic-platform-base`
//! vocabulary. When the daemon is unreachable, accessors degrade to
//! cached or default values instead of surfacing errors.
//!
//! ## Responsibilities
//! - One [`Module`] accessor per physical chassis slot
//! - Identity, status, power, midplane and fabric-ASIC queries
//! - Marketing-name translation of raw hardware model identifiers
//! - EEPROM identity for the locally hosted module only

mod descriptions;
mod eeprom;
mod module;

pub use eeprom::{DecodedEeprom, EepromReader};
pub use module::{Module, PlatformContext};
