use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::codes::{self, Category, ProviderCode, RpcCode};
use crate::standard::{provider, rpc};
use crate::types::{CustomErrorOptions, ErrorArg, ServerErrorOptions, integer_from_f64};
use crate::{Error, classify};

fn to_js<S: Serialize + ?Sized>(value: &S) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({"error": msg}))
}

fn parse_json(json: Option<String>) -> Result<Option<Value>, Error> {
    json.filter(|s| !s.is_empty())
        .map(|s| serde_json::from_str(&s))
        .transpose()
        .map_err(Error::from)
}

fn result_to_js<S: Serialize>(result: Result<S, Error>) -> JsValue {
    match result {
        Ok(value) => to_js(&value),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Every registered code with its category, name, standard and message.
#[wasm_bindgen]
pub fn get_error_registry() -> JsValue {
    let entries: Vec<codes::RegistryEntry> = codes::entries().collect();
    to_js(&entries)
}

/// Build a named error, e.g. `standard_error("rpc", "methodNotFound", '"custom msg"')`.
#[wasm_bindgen]
pub fn standard_error(category: &str, name: &str, arg_json: Option<String>) -> JsValue {
    let Ok(category) = category.parse::<Category>() else {
        return error_result(&format!("Unknown category \"{category}\""));
    };
    let arg = match parse_json(arg_json) {
        Ok(Some(value)) => ErrorArg::from_value(value),
        Ok(None) => Ok(ErrorArg::None),
        Err(e) => Err(e),
    };
    let arg = match arg {
        Ok(arg) => arg,
        Err(e) => return error_result(&e.to_string()),
    };
    match category {
        Category::Rpc => match name.parse::<RpcCode>() {
            Ok(code) => to_js(&rpc::named(code, arg)),
            Err(_) => error_result(&format!("Unknown rpc error \"{name}\"")),
        },
        Category::Provider => match name.parse::<ProviderCode>() {
            Ok(code) => to_js(&provider::named(code, arg)),
            Err(_) => error_result(&format!("Unknown provider error \"{name}\"")),
        },
    }
}

#[wasm_bindgen]
pub fn server_error(opts_json: Option<String>) -> JsValue {
    let result = parse_json(opts_json)
        .and_then(ServerErrorOptions::from_value)
        .and_then(rpc::server);
    result_to_js(result)
}

#[wasm_bindgen]
pub fn custom_provider_error(opts_json: Option<String>) -> JsValue {
    let result = parse_json(opts_json)
        .and_then(CustomErrorOptions::from_value)
        .and_then(provider::custom);
    result_to_js(result)
}

/// Canonical message for a code; non-integral codes get the generic fallback.
#[wasm_bindgen]
pub fn message_for_code(code: f64) -> String {
    integer_from_f64(code)
        .map_or(codes::FALLBACK_MESSAGE, codes::message_for)
        .to_string()
}

#[wasm_bindgen]
pub fn is_actionable_insufficient_balance(json: &str) -> bool {
    serde_json::from_str::<Value>(json)
        .is_ok_and(|value| classify::is_actionable_insufficient_balance(&value))
}

#[wasm_bindgen]
pub fn is_transport_error(json: &str) -> bool {
    serde_json::from_str::<Value>(json).is_ok_and(|value| classify::is_transport_error(&value))
}

/// The rpc error embedded in a transport failure, or `null`.
#[wasm_bindgen]
pub fn bridge_transport_error(json: &str) -> JsValue {
    serde_json::from_str::<Value>(json)
        .ok()
        .and_then(|value| classify::bridge_transport_value(&value))
        .map_or(JsValue::NULL, |err| to_js(&err))
}
