use crate::codes::{JSON_RPC_SERVER_ERROR_RANGE, ProviderCode, RpcCode};

pub const FALLBACK_MESSAGE: &str = "Unspecified error message. This is a bug, please report it.";

pub const SERVER_ERROR_MESSAGE: &str = "Unspecified server error.";

pub const fn rpc_message(code: RpcCode) -> &'static str {
    match code {
        RpcCode::Parse => {
            "Invalid JSON was received by the server. An error occurred on the server while parsing the JSON text."
        }
        RpcCode::InvalidRequest => "The JSON sent is not a valid Request object.",
        RpcCode::MethodNotFound => "The method does not exist / is not available.",
        RpcCode::InvalidParams => "Invalid method parameter(s).",
        RpcCode::Internal => "Internal JSON-RPC error.",
        RpcCode::InvalidInput => "Invalid input.",
        RpcCode::ResourceNotFound => "Resource not found.",
        RpcCode::ResourceUnavailable => "Resource unavailable.",
        RpcCode::TransactionRejected => "Transaction rejected.",
        RpcCode::MethodNotSupported => "Method not supported.",
        RpcCode::LimitExceeded => "Request limit exceeded.",
    }
}

pub const fn provider_message(code: ProviderCode) -> &'static str {
    match code {
        ProviderCode::UserRejectedRequest => "User rejected the request.",
        ProviderCode::Unauthorized => {
            "The requested account and/or method has not been authorized by the user."
        }
        ProviderCode::UnsupportedMethod => {
            "The requested method is not supported by this Ethereum provider."
        }
        ProviderCode::Disconnected => "The provider is disconnected from all chains.",
        ProviderCode::ChainDisconnected => "The provider is disconnected from the specified chain.",
        ProviderCode::UnsupportedChain => "Unrecognized chain ID.",
    }
}

/// Canonical message for `code`, never fails.
///
/// Unregistered codes in the JSON-RPC server band get [`SERVER_ERROR_MESSAGE`];
/// anything else gets [`FALLBACK_MESSAGE`].
pub fn message_for(code: i64) -> &'static str {
    message_for_or(code, FALLBACK_MESSAGE)
}

/// Like [`message_for`] but with a caller-chosen fallback for unknown codes.
pub fn message_for_or(code: i64, fallback: &str) -> &str {
    if let Some(rpc) = RpcCode::from_code(code) {
        return rpc.message();
    }
    if let Some(provider) = ProviderCode::from_code(code) {
        return provider.message();
    }
    if JSON_RPC_SERVER_ERROR_RANGE.contains(&code) {
        return SERVER_ERROR_MESSAGE;
    }
    fallback
}
