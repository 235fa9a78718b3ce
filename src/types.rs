use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codes::SERVER_ERROR_CODE_RANGE;
use crate::error::Error;

/// Optional message and data accepted by every named factory.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorOptions<T = Value> {
    /// Overrides the registry message when present and non-empty.
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for ErrorOptions<T> {
    fn default() -> Self {
        Self {
            message: None,
            data: None,
        }
    }
}

/// Argument of the named `rpc::*` and `provider::*` factories.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorArg<T = Value> {
    None,
    Message(String),
    Options(ErrorOptions<T>),
}

impl<T> Default for ErrorArg<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> ErrorArg<T> {
    /// Splits the argument into `(message, data)`. Empty messages count as absent.
    pub fn into_parts(self) -> (Option<String>, Option<T>) {
        match self {
            Self::None => (None, None),
            Self::Message(message) => (non_empty(message), None),
            Self::Options(opts) => (opts.message.and_then(non_empty), opts.data),
        }
    }
}

impl ErrorArg<Value> {
    /// Parses an untyped argument the way a permissive caller would pass it.
    ///
    /// Strings become the message and objects yield `message` and `data`.
    /// Arrays, numbers, booleans and `null` are treated as no argument at all.
    /// A truthy `message` that is not a string is rejected.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::String(message) if message.is_empty() => Ok(Self::None),
            Value::String(message) => Ok(Self::Message(message)),
            Value::Object(mut obj) => {
                let message = optional_message(obj.remove("message"))?;
                let data = obj.remove("data");
                Ok(Self::Options(ErrorOptions { message, data }))
            }
            other => {
                tracing::trace!(kind = json_kind(&other), "ignoring non-object error argument");
                Ok(Self::None)
            }
        }
    }
}

impl<T> From<&str> for ErrorArg<T> {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl<T> From<String> for ErrorArg<T> {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl<T> From<ErrorOptions<T>> for ErrorArg<T> {
    fn from(opts: ErrorOptions<T>) -> Self {
        Self::Options(opts)
    }
}

/// Argument of [`crate::standard::rpc::server`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServerErrorOptions<T = Value> {
    pub code: i64,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ServerErrorOptions<T> {
    pub fn new(code: i64) -> Self {
        Self {
            code,
            message: None,
            data: None,
        }
    }
}

impl ServerErrorOptions<Value> {
    pub fn from_value(value: Option<Value>) -> Result<Self, Error> {
        let mut obj = single_object(
            value,
            "Ethereum RPC Server errors must provide single object argument.",
        )?;
        let code = obj
            .get("code")
            .and_then(integer_from_value)
            .ok_or_else(|| Error::Validation {
                reason: format!(
                    "\"code\" must be an integer such that: {} <= code <= {}",
                    SERVER_ERROR_CODE_RANGE.start(),
                    SERVER_ERROR_CODE_RANGE.end()
                ),
            })?;
        let message = optional_message(obj.remove("message"))?;
        let data = obj.remove("data");
        Ok(Self {
            code,
            message,
            data,
        })
    }
}

/// Argument of [`crate::standard::provider::custom`]. The message is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomErrorOptions<T = Value> {
    pub code: i64,
    pub message: String,
    pub data: Option<T>,
}

impl<T> CustomErrorOptions<T> {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl CustomErrorOptions<Value> {
    pub fn from_value(value: Option<Value>) -> Result<Self, Error> {
        let mut obj = single_object(
            value,
            "Ethereum Provider custom errors must provide single object argument.",
        )?;
        let code = obj
            .get("code")
            .and_then(integer_from_value)
            .ok_or_else(|| Error::Validation {
                reason: "\"code\" must be an integer.".into(),
            })?;
        let message = match obj.remove("message") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => {
                return Err(Error::Validation {
                    reason: "\"message\" must be a nonempty string".into(),
                });
            }
        };
        let data = obj.remove("data");
        Ok(Self {
            code,
            message,
            data,
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InsufficientFundsType {
    InsufficientFunds,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InsufficientBalanceReason {
    NoSuitableSpendPermissionFound,
    SpendPermissionAllowanceExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub address: String,
}

/// An account holding enough of a token to cover a shortfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingSource {
    pub address: String,
    /// `0x`-prefixed hex quantity.
    pub balance: String,
}

impl FundingSource {
    pub fn balance_value(&self) -> Option<u128> {
        parse_hex_quantity(&self.balance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredAmount {
    /// `0x`-prefixed hex quantity.
    pub amount: String,
    pub sources: Vec<FundingSource>,
}

impl RequiredAmount {
    pub fn amount_value(&self) -> Option<u128> {
        parse_hex_quantity(&self.amount)
    }
}

/// `data` payload of an actionable insufficient-balance error (code -32090).
///
/// Carries the token shortfall per token address and where funds could be
/// pulled from, so a caller can offer a remediation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsufficientBalanceErrorData {
    #[serde(rename = "type")]
    pub kind: InsufficientFundsType,
    pub reason: InsufficientBalanceReason,
    pub account: AccountRef,
    /// Keyed by token address.
    pub required: BTreeMap<String, RequiredAmount>,
}

/// Request failure as reported by the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportError {
    /// Response body; a JSON-RPC error object when the node answered.
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TransportError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
            status: None,
            url: None,
        }
    }

    /// Reads the transport fields off an untyped error; `None` unless `details` is a string.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let details = obj.get("details")?.as_str()?.to_string();
        let status = obj
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok());
        let url = obj.get("url").and_then(Value::as_str).map(String::from);
        Some(Self {
            details,
            status,
            url,
        })
    }
}

/// Integral JSON number as `i64`. Accepts `-32000.0`, rejects `1.5` and non-numbers.
pub fn integer_from_value(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value.as_f64().and_then(integer_from_f64)
}

#[expect(clippy::float_cmp, reason = "exact integrality check")]
pub fn integer_from_f64(value: f64) -> Option<i64> {
    if !value.is_finite() || value.trunc() != value {
        return None;
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

fn parse_hex_quantity(s: &str) -> Option<u128> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u128::from_str_radix(digits, 16).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// `null`, `false`, `0` and `""` count as no message; other non-strings are rejected.
fn optional_message(value: Option<Value>) -> Result<Option<String>, Error> {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) => Ok(non_empty(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(other) => Err(Error::Validation {
            reason: format!("Must specify string message, got {}.", json_kind(&other)),
        }),
    }
}

fn single_object(value: Option<Value>, reason: &str) -> Result<Map<String, Value>, Error> {
    match value {
        Some(Value::Object(obj)) => Ok(obj),
        _ => Err(Error::Validation {
            reason: reason.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
