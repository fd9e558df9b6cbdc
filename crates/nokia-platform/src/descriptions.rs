//! Marketing-name translation for raw hardware model identifiers.

use nokia_platform_ndk::proto::HwChassisType;

/// Returned whenever the NDK cannot be asked for a description.
pub(crate) const UNAVAILABLE: &str = "Unavailable";

/// Maps a raw NDK model identifier to its marketing product name.
///
/// Supervisor entries map to a placeholder resolved per chassis size by
/// [`supervisor_description`].
pub(crate) fn marketing_name(raw: &str) -> Option<&'static str> {
    match raw {
        "imm32-100g-qsfp28+4-400g-qsfpdd" => Some("Nokia-IXR7250-32x100G-4x400G"),
        "cpm-ixr" => Some("Nokia-IXR7250-SUP"),
        "cpm2-ixr" => Some("Nokia-IXR7250-SUP"),
        "imm36-400g-qsfpdd" => Some("Nokia-IXR7250E-36x400G"),
        "imm60-100g-qsfp28" => Some("Nokia-IXR7250E-60x100G"),
        "cpm2-ixr-e" => Some("Nokia-IXR7250E-SUP-10"),
        "cpm4-ixr" => Some("Nokia-IXR7250E-SUP-10"),
        _ => None,
    }
}

/// Resolves the supervisor product name for the chassis size.
pub(crate) fn supervisor_description(chassis_type: HwChassisType) -> &'static str {
    if chassis_type == HwChassisType::Ixr6 {
        "Nokia-IXR7250-SUP-6"
    } else {
        "Nokia-IXR7250-SUP-10"
    }
}
