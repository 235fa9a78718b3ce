//! Namespaced builders for the standard error taxonomy.
//!
//! `rpc::*` builds [`crate::RpcError`]s with JSON-RPC / EIP-1474 codes and
//! `provider::*` builds [`crate::ProviderError`]s with EIP-1193 codes. Named
//! builders never fail: a missing or empty message falls back to the registry.

pub mod provider;
pub mod rpc;

use crate::codes::message_for;

fn resolve_message(code: i64, message: Option<String>) -> String {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => message_for(code).to_string(),
    }
}
