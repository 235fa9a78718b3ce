pub mod messages;

use std::ops::RangeInclusive;

use serde::Serialize;
use strum::IntoEnumIterator;

pub use messages::{FALLBACK_MESSAGE, SERVER_ERROR_MESSAGE, message_for, message_for_or};

/// EIP-1193 provider code space.
pub const PROVIDER_CODE_RANGE: RangeInclusive<i64> = 1000..=4999;

/// Codes accepted by [`crate::standard::rpc::server`].
pub const SERVER_ERROR_CODE_RANGE: RangeInclusive<i64> = -32099..=-32005;

/// JSON-RPC 2.0 band reserved for implementation-defined server errors.
pub const JSON_RPC_SERVER_ERROR_RANGE: RangeInclusive<i64> = -32099..=-32000;

pub const ACTIONABLE_INSUFFICIENT_BALANCE_CODE: i64 = -32090;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Rpc,
    Provider,
}

/// The document that reserves a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum Standard {
    #[serde(rename = "JSON RPC 2.0")]
    #[strum(serialize = "JSON RPC 2.0")]
    JsonRpc,
    #[serde(rename = "EIP-1474")]
    #[strum(serialize = "EIP-1474")]
    Eip1474,
    #[serde(rename = "EIP-1193")]
    #[strum(serialize = "EIP-1193")]
    Eip1193,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum RpcCode {
    Parse,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    Internal,
    InvalidInput,
    ResourceNotFound,
    ResourceUnavailable,
    TransactionRejected,
    MethodNotSupported,
    LimitExceeded,
}

impl RpcCode {
    pub const fn code(self) -> i64 {
        match self {
            Self::Parse => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::Internal => -32603,
            Self::InvalidInput => -32000,
            Self::ResourceNotFound => -32001,
            Self::ResourceUnavailable => -32002,
            Self::TransactionRejected => -32003,
            Self::MethodNotSupported => -32004,
            Self::LimitExceeded => -32005,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::iter().find(|c| c.code() == code)
    }

    pub const fn standard(self) -> Standard {
        match self {
            Self::Parse
            | Self::InvalidRequest
            | Self::MethodNotFound
            | Self::InvalidParams
            | Self::Internal => Standard::JsonRpc,
            Self::InvalidInput
            | Self::ResourceNotFound
            | Self::ResourceUnavailable
            | Self::TransactionRejected
            | Self::MethodNotSupported
            | Self::LimitExceeded => Standard::Eip1474,
        }
    }

    pub const fn message(self) -> &'static str {
        messages::rpc_message(self)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum ProviderCode {
    UserRejectedRequest,
    Unauthorized,
    UnsupportedMethod,
    Disconnected,
    ChainDisconnected,
    UnsupportedChain,
}

impl ProviderCode {
    pub const fn code(self) -> i64 {
        match self {
            Self::UserRejectedRequest => 4001,
            Self::Unauthorized => 4100,
            Self::UnsupportedMethod => 4200,
            Self::Disconnected => 4900,
            Self::ChainDisconnected => 4901,
            Self::UnsupportedChain => 4902,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::iter().find(|c| c.code() == code)
    }

    pub const fn standard(self) -> Standard {
        Standard::Eip1193
    }

    pub const fn message(self) -> &'static str {
        messages::provider_message(self)
    }
}

/// One row of the code registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub category: Category,
    /// Symbolic key, e.g. `"methodNotFound"`.
    pub name: &'static str,
    pub code: i64,
    pub standard: Standard,
    pub message: &'static str,
}

/// Every registered code, RPC entries first, in declaration order.
pub fn entries() -> impl Iterator<Item = RegistryEntry> {
    let rpc = RpcCode::iter().map(|c| RegistryEntry {
        category: Category::Rpc,
        name: c.into(),
        code: c.code(),
        standard: c.standard(),
        message: c.message(),
    });
    let provider = ProviderCode::iter().map(|c| RegistryEntry {
        category: Category::Provider,
        name: c.into(),
        code: c.code(),
        standard: c.standard(),
        message: c.message(),
    });
    rpc.chain(provider)
}

/// Looks up the reserved code for a symbolic name (`"methodNotFound"`, `"disconnected"`).
/// Returns `None` for names the registry does not know.
pub fn code_for(category: Category, name: &str) -> Option<i64> {
    match category {
        Category::Rpc => name.parse::<RpcCode>().ok().map(RpcCode::code),
        Category::Provider => name.parse::<ProviderCode>().ok().map(ProviderCode::code),
    }
}

pub fn standard_for(code: i64) -> Option<Standard> {
    RpcCode::from_code(code)
        .map(RpcCode::standard)
        .or_else(|| ProviderCode::from_code(code).map(ProviderCode::standard))
}

/// Registered codes plus the whole JSON-RPC server band.
pub fn is_valid_code(code: i64) -> bool {
    RpcCode::from_code(code).is_some()
        || ProviderCode::from_code(code).is_some()
        || JSON_RPC_SERVER_ERROR_RANGE.contains(&code)
}
