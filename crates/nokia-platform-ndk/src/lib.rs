//! # nokia-platform-ndk - Nokia NDK service bindings
//!
//! Client-side bindings for the Nokia NDK hardware-management daemon, the
//! process that owns all hardware access on IXR-7250 chassis. Platform
//! plugin code never touches hardware directly; it opens a short-lived
//! gRPC channel to the NDK, issues one request, and translates the
//! structured response.
//!
//! ## Contents
//! - [`proto`]: wire types mirroring the NDK `platform_ndk` protobuf
//!   surface, with a hand-rolled tonic unary client
//! - [`ChassisService`] / [`ChassisConnection`]: the seam plugin code
//!   programs against; [`GrpcChassisService`] is the tonic-backed
//!   implementation
//! - [`NdkError`]: transport / RPC / response-code failure taxonomy
//! - [`translate`]: NDK code <-> SONiC vocabulary conversions

mod error;
pub mod proto;
mod service;
pub mod translate;

pub use error::{ensure_success, NdkError, NdkResult};
pub use service::{
    ChassisConnection, ChassisService, GrpcChassisService, CHASSIS_ENDPOINT_ENV,
    DEFAULT_CHASSIS_ENDPOINT,
};
