use crate::codes::{RpcCode, SERVER_ERROR_CODE_RANGE};
use crate::error::Error;
use crate::rpc_error::RpcError;
use crate::standard::resolve_message;
use crate::types::{ErrorArg, ServerErrorOptions};

/// Shared builder behind every named `rpc::*` function.
pub fn named<T>(code: RpcCode, arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    let (message, data) = arg.into().into_parts();
    RpcError::from_registry(code.code(), resolve_message(code.code(), message), data)
}

pub fn parse<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::Parse, arg)
}

pub fn invalid_request<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::InvalidRequest, arg)
}

pub fn invalid_params<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::InvalidParams, arg)
}

pub fn method_not_found<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::MethodNotFound, arg)
}

pub fn internal<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::Internal, arg)
}

pub fn invalid_input<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::InvalidInput, arg)
}

pub fn resource_not_found<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::ResourceNotFound, arg)
}

pub fn resource_unavailable<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::ResourceUnavailable, arg)
}

pub fn transaction_rejected<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::TransactionRejected, arg)
}

pub fn method_not_supported<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::MethodNotSupported, arg)
}

pub fn limit_exceeded<T>(arg: impl Into<ErrorArg<T>>) -> RpcError<T> {
    named(RpcCode::LimitExceeded, arg)
}

/// Implementation-defined server error. `code` must lie in `-32099..=-32005`.
pub fn server<T>(opts: ServerErrorOptions<T>) -> Result<RpcError<T>, Error> {
    let ServerErrorOptions {
        code,
        message,
        data,
    } = opts;
    if !SERVER_ERROR_CODE_RANGE.contains(&code) {
        return Err(Error::Validation {
            reason: format!(
                "\"code\" must be an integer such that: {} <= code <= {}",
                SERVER_ERROR_CODE_RANGE.start(),
                SERVER_ERROR_CODE_RANGE.end()
            ),
        });
    }
    RpcError::new(code, resolve_message(code, message), data)
}
