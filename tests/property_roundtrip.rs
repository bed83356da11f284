use lsp_wire::{
    protocol::{Hover, PublishDiagnosticsParams, Range, RequestId},
    wire::canonicalize,
    Decodable, Encodable, LanguageServerResponse, Message, Value,
};
use proptest::prelude::*;

mod common;
use common::strategies;

proptest! {
    #[test]
    fn test_value_survives_text_round_trip(value in strategies::json_value()) {
        let text = value.to_json_string();
        prop_assert_eq!(Value::parse(&text).unwrap(), value);
    }

    #[test]
    fn test_integers_print_without_fraction(n in -(1i64 << 53) + 1..(1i64 << 53)) {
        let value = Value::Number(n as f64);
        prop_assert_eq!(value.to_json_string(), n.to_string());
    }

    #[test]
    fn test_request_id_round_trip(id in strategies::request_id()) {
        prop_assert_eq!(RequestId::decode(&id.encode()), Ok(id));
    }

    #[test]
    fn test_range_round_trip(range in strategies::range()) {
        prop_assert_eq!(Range::decode(&range.encode()), Ok(range));
    }

    #[test]
    fn test_diagnostics_round_trip(
        uri in strategies::text(),
        diagnostics in prop::collection::vec(strategies::diagnostic(), 0..4),
    ) {
        let params = PublishDiagnosticsParams { uri, diagnostics };
        prop_assert_eq!(PublishDiagnosticsParams::decode(&params.encode()), Ok(params));
    }

    #[test]
    fn test_hover_round_trip(
        contents in prop::collection::vec(strategies::marked_string(), 0..4),
        range in proptest::option::of(strategies::range()),
    ) {
        let hover = Hover { contents, range };
        prop_assert_eq!(Hover::decode(&hover.encode()), Ok(hover));
    }

    #[test]
    fn test_completion_response_round_trip(
        id in strategies::request_id(),
        result in proptest::option::of(strategies::completion_result()),
    ) {
        let response = LanguageServerResponse::TextDocumentCompletion(id, result);
        let text = response.encode().to_json_string();
        let decoded = LanguageServerResponse::decode_response(
            response.method().unwrap(),
            &Value::parse(&text).unwrap(),
        );
        prop_assert_eq!(decoded, Ok(response));
    }

    #[test]
    fn test_symbol_response_round_trip(
        id in strategies::request_id(),
        symbols in prop::collection::vec(strategies::symbol(), 0..4),
    ) {
        let response = LanguageServerResponse::WorkspaceSymbol(id, Some(symbols));
        let decoded =
            LanguageServerResponse::decode_response(response.method().unwrap(), &response.encode());
        prop_assert_eq!(decoded, Ok(response));
    }

    #[test]
    fn test_canonicalize_is_idempotent(
        id in strategies::request_id(),
        method in "[a-zA-Z][a-zA-Z0-9_/]*",
        params in strategies::structured_value(),
    ) {
        let request = Message::Request { id, method, params: Some(params) };
        let once = canonicalize(&request.encode().to_json_string());
        let twice = canonicalize(&once.to_json_string());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, request.encode());
    }

    #[test]
    fn test_canonicalize_never_panics(text in "\\PC{0,64}") {
        let out = canonicalize(&text);
        prop_assert!(out.has_key("jsonrpc"));
    }
}
