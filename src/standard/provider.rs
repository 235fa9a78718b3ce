use crate::codes::{PROVIDER_CODE_RANGE, ProviderCode};
use crate::error::Error;
use crate::rpc_error::ProviderError;
use crate::standard::resolve_message;
use crate::types::{CustomErrorOptions, ErrorArg};

/// Shared builder behind every named `provider::*` function.
pub fn named<T>(code: ProviderCode, arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    let (message, data) = arg.into().into_parts();
    ProviderError::from_registry(code.code(), resolve_message(code.code(), message), data)
}

pub fn user_rejected_request<T>(arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    named(ProviderCode::UserRejectedRequest, arg)
}

pub fn unauthorized<T>(arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    named(ProviderCode::Unauthorized, arg)
}

pub fn unsupported_method<T>(arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    named(ProviderCode::UnsupportedMethod, arg)
}

pub fn disconnected<T>(arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    named(ProviderCode::Disconnected, arg)
}

pub fn chain_disconnected<T>(arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    named(ProviderCode::ChainDisconnected, arg)
}

pub fn unsupported_chain<T>(arg: impl Into<ErrorArg<T>>) -> ProviderError<T> {
    named(ProviderCode::UnsupportedChain, arg)
}

/// Provider error with a caller-chosen code. Unlike the named builders there is
/// no registry message to fall back on, so `message` must be non-empty.
pub fn custom<T>(opts: CustomErrorOptions<T>) -> Result<ProviderError<T>, Error> {
    let CustomErrorOptions {
        code,
        message,
        data,
    } = opts;
    if message.is_empty() {
        return Err(Error::Validation {
            reason: "\"message\" must be a nonempty string".into(),
        });
    }
    if !PROVIDER_CODE_RANGE.contains(&code) {
        return Err(Error::Validation {
            reason: format!(
                "\"code\" must be an integer such that: {} <= code <= {}",
                PROVIDER_CODE_RANGE.start(),
                PROVIDER_CODE_RANGE.end()
            ),
        });
    }
    ProviderError::new(code, message, data)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::types::ErrorOptions;
    use serde_json::{Value, json};
    use strum::IntoEnumIterator;

    #[test]
    fn each_named_builder_uses_its_code() {
        let builders: &[(fn(ErrorArg<Value>) -> ProviderError, ProviderCode)] = &[
            (user_rejected_request, ProviderCode::UserRejectedRequest),
            (unauthorized, ProviderCode::Unauthorized),
            (unsupported_method, ProviderCode::UnsupportedMethod),
            (disconnected, ProviderCode::Disconnected),
            (chain_disconnected, ProviderCode::ChainDisconnected),
            (unsupported_chain, ProviderCode::UnsupportedChain),
        ];
        assert_eq!(builders.len(), ProviderCode::iter().count());
        for (build, code) in builders {
            let err = build(ErrorArg::None);
            assert_eq!(err.code(), code.code(), "{code}");
            assert_eq!(err.message(), code.message(), "{code}");
        }
    }

    #[test]
    fn message_and_data_are_forwarded() {
        let err = user_rejected_request(ErrorOptions {
            message: Some("user said no".into()),
            data: Some(json!({"method": "eth_sendTransaction"})),
        });
        assert_eq!(err.code(), 4001);
        assert_eq!(err.message(), "user said no");
        assert_eq!(err.data(), Some(&json!({"method": "eth_sendTransaction"})));

        let err: ProviderError = chain_disconnected("chain 8453 offline");
        assert_eq!(err.code(), 4901);
        assert_eq!(err.to_string(), "chain 8453 offline");
    }

    #[test]
    fn custom_accepts_provider_codes_with_a_message() {
        let err: ProviderError = custom(CustomErrorOptions::new(4001, "rejected")).unwrap();
        assert_eq!(err.code(), 4001);
        assert_eq!(err.message(), "rejected");

        let err = custom(CustomErrorOptions {
            code: 1000,
            message: "edge".into(),
            data: Some(42_u32),
        })
        .unwrap();
        assert_eq!(err.data(), Some(&42));
    }

    #[test]
    fn custom_rejects_empty_message() {
        let result = custom::<Value>(CustomErrorOptions::new(4001, ""));
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn custom_rejects_codes_outside_provider_range() {
        for code in [999, 5000, -1, -32603] {
            let result = custom::<Value>(CustomErrorOptions::new(code, "m"));
            assert!(matches!(result, Err(Error::Validation { .. })), "{code}");
        }
    }
}
