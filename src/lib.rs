#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod codes;
pub mod error;
pub mod rpc_error;
pub mod standard;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{
    bridge_transport_error, bridge_transport_value, error_code_of,
    insufficient_balance_data, is_actionable_insufficient_balance, is_transport_error,
};
pub use codes::{Category, ProviderCode, RpcCode, Standard, code_for, message_for};
pub use error::Error;
pub use rpc_error::{ProviderError, RpcError};
pub use standard::{provider, rpc};
pub use types::{
    CustomErrorOptions, ErrorArg, ErrorOptions, InsufficientBalanceErrorData,
    InsufficientBalanceReason, ServerErrorOptions, TransportError,
};
