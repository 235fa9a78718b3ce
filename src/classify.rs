//! Safe narrowing of untrusted error values.
//!
//! Everything here probes `serde_json::Value`s field by field and short-circuits
//! on the first mismatch. None of these functions panic or return an error for
//! unexpected shapes.

use serde::Deserialize;
use serde_json::Value;

use crate::codes::ACTIONABLE_INSUFFICIENT_BALANCE_CODE;
use crate::error::Error;
use crate::rpc_error::RpcError;
use crate::types::{InsufficientBalanceErrorData, TransportError, integer_from_value};

pub const INSUFFICIENT_FUNDS_TYPE: &str = "INSUFFICIENT_FUNDS";

/// True for `{code: -32090, data: {type: "INSUFFICIENT_FUNDS", ..}}`.
pub fn is_actionable_insufficient_balance(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let code = obj.get("code").and_then(integer_from_value);
    code == Some(ACTIONABLE_INSUFFICIENT_BALANCE_CODE)
        && is_insufficient_funds_data(obj.get("data"))
}

/// Typed payload of an actionable insufficient-balance error.
///
/// `None` when `value` is not that error at all, `Some(Err(_))` when it is but
/// the payload does not match [`InsufficientBalanceErrorData`].
pub fn insufficient_balance_data(
    value: &Value,
) -> Option<Result<InsufficientBalanceErrorData, Error>> {
    if !is_actionable_insufficient_balance(value) {
        return None;
    }
    let data = value.get("data")?;
    Some(InsufficientBalanceErrorData::deserialize_from(data))
}

impl RpcError<Value> {
    pub fn is_actionable_insufficient_balance(&self) -> bool {
        self.code() == ACTIONABLE_INSUFFICIENT_BALANCE_CODE
            && is_insufficient_funds_data(self.data())
    }

    pub fn insufficient_balance_data(
        &self,
    ) -> Option<Result<InsufficientBalanceErrorData, Error>> {
        if !self.is_actionable_insufficient_balance() {
            return None;
        }
        self.data().map(InsufficientBalanceErrorData::deserialize_from)
    }
}

impl InsufficientBalanceErrorData {
    fn deserialize_from(data: &Value) -> Result<Self, Error> {
        Ok(Self::deserialize(data)?)
    }
}

fn is_insufficient_funds_data(data: Option<&Value>) -> bool {
    data.and_then(Value::as_object)
        .and_then(|d| d.get("type"))
        .and_then(Value::as_str)
        == Some(INSUFFICIENT_FUNDS_TYPE)
}

/// Numeric code carried by an arbitrary error value.
///
/// An integral number is its own code; objects are probed for `code`, then `errorCode`.
pub fn error_code_of(value: &Value) -> Option<i64> {
    if let Some(code) = integer_from_value(value) {
        return Some(code);
    }
    let obj = value.as_object()?;
    obj.get("code")
        .and_then(integer_from_value)
        .or_else(|| obj.get("errorCode").and_then(integer_from_value))
}

/// True for objects carrying a `details` field, the shape of an HTTP client request failure.
pub fn is_transport_error(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("details"))
}

/// Rebuilds the JSON-RPC error a node embedded in a transport failure.
///
/// Returns `None` when `details` is not JSON or does not describe a valid error.
pub fn bridge_transport_error(error: &TransportError) -> Option<RpcError> {
    let details: Value = match serde_json::from_str(&error.details) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, status = ?error.status, "transport details are not JSON");
            return None;
        }
    };
    let result = RpcError::from_json_parts(
        details.get("code"),
        details.get("message"),
        details.get("data").cloned(),
    );
    match result {
        Ok(err) => Some(err),
        Err(e) => {
            tracing::debug!(
                error = %e,
                status = ?error.status,
                "transport details are not an rpc error"
            );
            None
        }
    }
}

/// [`bridge_transport_error`] for an untyped error value.
pub fn bridge_transport_value(value: &Value) -> Option<RpcError> {
    if !is_transport_error(value) {
        return None;
    }
    let Some(error) = TransportError::from_value(value) else {
        tracing::debug!("transport error details is not a string");
        return None;
    };
    bridge_transport_error(&error)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::types::InsufficientBalanceReason;
    use serde_json::json;

    fn actionable() -> Value {
        json!({
            "code": -32090,
            "message": "Insufficient balance",
            "data": {
                "type": "INSUFFICIENT_FUNDS",
                "reason": "NO_SUITABLE_SPEND_PERMISSION_FOUND",
                "account": {"address": "0x1111111111111111111111111111111111111111"},
                "required": {
                    "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913": {
                        "amount": "0xf4240",
                        "sources": [
                            {
                                "address": "0x2222222222222222222222222222222222222222",
                                "balance": "0x1e8480"
                            }
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn recognizes_minimal_actionable_shape() {
        assert!(is_actionable_insufficient_balance(
            &json!({"code": -32090, "data": {"type": "INSUFFICIENT_FUNDS"}})
        ));
        assert!(is_actionable_insufficient_balance(
            &json!({"code": -32090.0, "data": {"type": "INSUFFICIENT_FUNDS"}})
        ));
    }

    #[test]
    fn rejects_near_misses() {
        for value in [
            json!({"code": -32091, "data": {"type": "INSUFFICIENT_FUNDS"}}),
            json!({"code": -32090, "data": {"type": "OTHER"}}),
            json!({"code": "-32090", "data": {"type": "INSUFFICIENT_FUNDS"}}),
            json!({"code": -32090}),
            json!({"code": -32090, "data": null}),
            json!({"code": -32090, "data": "INSUFFICIENT_FUNDS"}),
            json!({"code": -32090, "data": {"type": null}}),
            json!({"data": {"type": "INSUFFICIENT_FUNDS"}}),
            json!([{"code": -32090, "data": {"type": "INSUFFICIENT_FUNDS"}}]),
            Value::Null,
            json!(42),
            json!("string"),
        ] {
            assert!(!is_actionable_insufficient_balance(&value), "{value}");
            assert!(insufficient_balance_data(&value).is_none(), "{value}");
        }
    }

    #[test]
    fn full_payload_narrows_to_typed_data() {
        let data = insufficient_balance_data(&actionable()).unwrap().unwrap();
        assert_eq!(
            data.reason,
            InsufficientBalanceReason::NoSuitableSpendPermissionFound
        );
        let usdc = data
            .required
            .get("0x833589fcd6edb6e08f4c7c32d4f71b54bda02913")
            .unwrap();
        assert_eq!(usdc.amount_value(), Some(1_000_000));
        assert_eq!(usdc.sources.len(), 1);
    }

    #[test]
    fn partial_payload_surfaces_decode_error() {
        let value = json!({"code": -32090, "data": {"type": "INSUFFICIENT_FUNDS"}});
        assert!(matches!(
            insufficient_balance_data(&value),
            Some(Err(Error::Json(_)))
        ));
    }

    #[test]
    fn rpc_error_classifies_itself() {
        let value = actionable();
        let err = RpcError::from_json_parts(
            value.get("code"),
            value.get("message"),
            value.get("data").cloned(),
        )
        .unwrap();
        assert!(err.is_actionable_insufficient_balance());
        assert!(err.insufficient_balance_data().unwrap().is_ok());

        let other: RpcError = RpcError::new(-32090, "m", Some(json!({"type": "OTHER"}))).unwrap();
        assert!(!other.is_actionable_insufficient_balance());
        assert!(other.insufficient_balance_data().is_none());
    }

    #[test]
    fn error_code_probes_numbers_and_objects() {
        assert_eq!(error_code_of(&json!(4001)), Some(4001));
        assert_eq!(error_code_of(&json!({"code": -32603})), Some(-32603));
        assert_eq!(error_code_of(&json!({"errorCode": 4100})), Some(4100));
        assert_eq!(
            error_code_of(&json!({"code": "x", "errorCode": 4100})),
            Some(4100)
        );
        assert_eq!(error_code_of(&json!({"code": 1.5})), None);
        assert_eq!(error_code_of(&json!("4001")), None);
        assert_eq!(error_code_of(&Value::Null), None);
    }

    #[test]
    fn transport_errors_are_objects_with_details() {
        assert!(is_transport_error(&json!({"details": "x"})));
        assert!(is_transport_error(&json!({"details": null})));
        assert!(!is_transport_error(&json!({"message": "x"})));
        assert!(!is_transport_error(&json!("details")));
        assert!(!is_transport_error(&Value::Null));
    }

    #[test]
    fn bridge_rebuilds_embedded_rpc_error() {
        let err = bridge_transport_error(&TransportError::new(
            r#"{"code":-32000,"message":"boom"}"#,
        ))
        .unwrap();
        assert_eq!(err.code(), -32000);
        assert_eq!(err.message(), "boom");
        assert_eq!(err.data(), None);

        let err = bridge_transport_error(&TransportError::new(
            r#"{"code":4001,"message":"no","data":{"k":1}}"#,
        ))
        .unwrap();
        assert_eq!(err.data(), Some(&json!({"k": 1})));
    }

    #[test]
    fn bridge_degrades_to_none() {
        for details in [
            "not json",
            "",
            "42",
            "null",
            r#"{"message":"no code"}"#,
            r#"{"code":-32000}"#,
            r#"{"code":-32000,"message":""}"#,
            r#"{"code":"-32000","message":"boom"}"#,
            r#"{"code":-32000.5,"message":"boom"}"#,
        ] {
            assert!(
                bridge_transport_error(&TransportError::new(details)).is_none(),
                "{details}"
            );
        }
    }

    #[test]
    fn bridge_from_untyped_value() {
        let err = bridge_transport_value(&json!({
            "details": r#"{"code":-32090,"message":"funds","data":{"type":"INSUFFICIENT_FUNDS"}}"#,
            "status": 400
        }))
        .unwrap();
        assert!(err.is_actionable_insufficient_balance());

        assert!(bridge_transport_value(&json!({"details": {"code": -32000}})).is_none());
        assert!(bridge_transport_value(&json!({"message": "no details"})).is_none());
        assert!(bridge_transport_value(&json!(7)).is_none());
    }
}
