//! Error types for NDK client operations.
//!
//! Three failure classes exist when talking to the NDK: the channel could
//! not be set up at all, the RPC itself failed, or the RPC completed but
//! the response status code signals an application-level error. Callers in
//! the platform plugin treat all of them the same way (degrade to a safe
//! default), but the taxonomy is kept so failures are distinguishable in
//! debug logs.

use thiserror::Error;

use crate::proto::ResponseCode;

/// Result type alias for NDK client operations.
pub type NdkResult<T> = Result<T, NdkError>;

/// Errors that can occur while talking to the NDK.
#[derive(Debug, Error)]
pub enum NdkError {
    /// No channel to the NDK could be established.
    #[error("Failed to set up channel to '{target}': {message}")]
    ChannelSetup {
        /// The endpoint that was dialed.
        target: String,
        /// Rendered transport error.
        message: String,
    },

    /// The channel was up but the RPC did not complete successfully.
    #[error("RPC {method} failed: {source}")]
    Rpc {
        /// The NDK method name.
        method: &'static str,
        /// The gRPC status returned by the transport.
        #[source]
        source: tonic::Status,
    },

    /// The RPC completed but the response status code signals failure.
    #[error("RPC {method} returned {code:?}: {message}")]
    Response {
        /// The NDK method name.
        method: &'static str,
        /// The application-level result code.
        code: ResponseCode,
        /// Error message carried in the response, if any.
        message: String,
    },

    /// The RPC succeeded but a response field could not be interpreted.
    #[error("RPC {method} returned malformed {field}: '{value}'")]
    InvalidResponse {
        /// The NDK method name.
        method: &'static str,
        /// The offending field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
}

impl NdkError {
    /// Creates a channel-setup error from a transport failure.
    pub fn channel_setup(target: impl Into<String>, err: tonic::transport::Error) -> Self {
        Self::ChannelSetup {
            target: target.into(),
            message: err.to_string(),
        }
    }

    /// Creates an RPC failure error.
    pub fn rpc(method: &'static str, source: tonic::Status) -> Self {
        Self::Rpc { method, source }
    }

    /// Creates a semantic-failure error from a response status.
    pub fn response(method: &'static str, code: ResponseCode, message: impl Into<String>) -> Self {
        Self::Response {
            method,
            code,
            message: message.into(),
        }
    }

    /// Creates a malformed-response error.
    pub fn invalid_response(
        method: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidResponse {
            method,
            field,
            value: value.into(),
        }
    }

    /// Returns true if this error carries the NDK resource-not-found code.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NdkError::Response {
                code: ResponseCode::ResourceNotFound,
                ..
            }
        )
    }

    /// Returns true if no channel to the NDK could be established.
    pub fn is_transport(&self) -> bool {
        matches!(self, NdkError::ChannelSetup { .. })
    }
}

/// Checks the status attached to a response, converting a non-success code
/// into an [`NdkError::Response`]. An absent status is treated as success.
pub fn ensure_success(
    method: &'static str,
    status: Option<&crate::proto::ResponseStatus>,
) -> NdkResult<()> {
    match status {
        Some(rs) if !rs.code().is_success() => Err(NdkError::response(
            method,
            rs.code(),
            rs.error_msg.clone(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::ResponseStatus;

    #[test]
    fn test_error_display() {
        let err = NdkError::rpc("GetModuleStatus", tonic::Status::unavailable("daemon down"));
        assert!(err.to_string().contains("GetModuleStatus"));
        assert!(err.to_string().contains("daemon down"));
    }

    #[test]
    fn test_is_not_found() {
        let err = NdkError::response("GetFabricPcieInfo", ResponseCode::ResourceNotFound, "");
        assert!(err.is_not_found());

        let err = NdkError::response("RebootSlot", ResponseCode::Failure, "busy");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_transport() {
        let err = NdkError::ChannelSetup {
            target: "http://127.0.0.1:50052".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.is_transport());
        assert!(!NdkError::rpc("RebootSlot", tonic::Status::internal("x")).is_transport());
    }

    #[test]
    fn test_ensure_success() {
        assert!(ensure_success("RebootSlot", None).is_ok());

        let ok = ResponseStatus {
            status_code: ResponseCode::Success as i32,
            error_msg: String::new(),
        };
        assert!(ensure_success("RebootSlot", Some(&ok)).is_ok());

        let failed = ResponseStatus {
            status_code: ResponseCode::Failure as i32,
            error_msg: "slot busy".to_string(),
        };
        let err = ensure_success("RebootSlot", Some(&failed)).unwrap_err();
        assert!(err.to_string().contains("slot busy"));
    }

    #[test]
    fn test_ensure_success_rejects_unknown_code() {
        // A result code this client does not know about must count as a
        // failure, not fall back to success.
        let odd = ResponseStatus {
            status_code: 42,
            error_msg: String::new(),
        };
        assert!(ensure_success("RebootSlot", Some(&odd)).is_err());
    }
}
