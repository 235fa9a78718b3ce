use std::fmt;
use std::ops::{Deref, RangeInclusive};

use serde::Serialize;
use serde_json::Value;

use crate::codes::PROVIDER_CODE_RANGE;
use crate::error::Error;
use crate::types::integer_from_value;

/// A JSON-RPC style failure. `Display` prints the message.
///
/// Built only through [`RpcError::new`] or the factories in [`crate::standard`],
/// so the message is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcError<T = Value> {
    code: i64,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> RpcError<T> {
    pub fn new(code: i64, message: impl Into<String>, data: Option<T>) -> Result<Self, Error> {
        let message = message.into();
        validate(code, &message, None)?;
        Ok(Self {
            code,
            message,
            data,
        })
    }

    /// Registry-backed construction; the caller guarantees a non-empty message.
    pub(crate) fn from_registry(code: i64, message: String, data: Option<T>) -> Self {
        debug_assert!(!message.is_empty());
        Self {
            code,
            message,
            data,
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_parts(self) -> (i64, String, Option<T>) {
        (self.code, self.message, self.data)
    }
}

impl RpcError<Value> {
    /// Builds an error from untyped fields, e.g. a decoded JSON-RPC error object.
    pub fn from_json_parts(
        code: Option<&Value>,
        message: Option<&Value>,
        data: Option<Value>,
    ) -> Result<Self, Error> {
        let code = code
            .and_then(integer_from_value)
            .ok_or_else(|| Error::Construction {
                reason: "\"code\" must be an integer.".into(),
            })?;
        let message = message
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Construction {
                reason: "\"message\" must be a nonempty string.".into(),
            })?;
        Self::new(code, message, data)
    }
}

impl<T: Serialize> RpcError<T> {
    /// `{"code", "message", "data"?}` as sent on the wire.
    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<T> fmt::Display for RpcError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<T: fmt::Debug> std::error::Error for RpcError<T> {}

/// An [`RpcError`] whose code lies in the EIP-1193 provider range `1000..=4999`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProviderError<T = Value>(RpcError<T>);

impl<T> ProviderError<T> {
    pub fn new(code: i64, message: impl Into<String>, data: Option<T>) -> Result<Self, Error> {
        let message = message.into();
        validate(code, &message, Some(&PROVIDER_CODE_RANGE))?;
        Ok(Self(RpcError {
            code,
            message,
            data,
        }))
    }

    pub(crate) fn from_registry(code: i64, message: String, data: Option<T>) -> Self {
        debug_assert!(PROVIDER_CODE_RANGE.contains(&code));
        Self(RpcError::from_registry(code, message, data))
    }

    pub fn into_rpc_error(self) -> RpcError<T> {
        self.0
    }
}

impl<T> Deref for ProviderError<T> {
    type Target = RpcError<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<ProviderError<T>> for RpcError<T> {
    fn from(err: ProviderError<T>) -> Self {
        err.0
    }
}

impl<T> fmt::Display for ProviderError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: fmt::Debug> std::error::Error for ProviderError<T> {}

/// The range check, when given, runs before the message check.
fn validate(code: i64, message: &str, allowed: Option<&RangeInclusive<i64>>) -> Result<(), Error> {
    if let Some(range) = allowed
        && !range.contains(&code)
    {
        return Err(Error::Construction {
            reason: format!(
                "\"code\" must be an integer such that: {} <= code <= {}",
                range.start(),
                range.end()
            ),
        });
    }
    if message.is_empty() {
        return Err(Error::Construction {
            reason: "\"message\" must be a nonempty string.".into(),
        });
    }
    Ok(())
}
