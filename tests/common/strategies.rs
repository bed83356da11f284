use lsp_wire::{
    protocol::{
        CompletionItem, CompletionItemKind, CompletionList, CompletionListResult, Diagnostic,
        DiagnosticCode, DiagnosticSeverity, Location, MarkedString, Position, Range, RequestId,
        SymbolInformation, SymbolKind, TextEdit,
    },
    Value,
};
use proptest::{option, prelude::*, sample::select};

pub fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ :/.()\u{e9}\u{1F980}-]{0,16}"
}

/// Integers exactly representable in the f64 number model.
pub fn safe_integer() -> impl Strategy<Value = i64> {
    -(1i64 << 53) + 1..(1i64 << 53)
}

pub fn request_id() -> impl Strategy<Value = RequestId> {
    prop_oneof![
        safe_integer().prop_map(RequestId::Number),
        text().prop_map(RequestId::String),
    ]
}

pub fn position() -> impl Strategy<Value = Position> {
    (any::<u32>(), any::<u32>()).prop_map(|(line, character)| Position::new(line, character))
}

pub fn range() -> impl Strategy<Value = Range> {
    (position(), position()).prop_map(|(start, end)| Range::new(start, end))
}

pub fn location() -> impl Strategy<Value = Location> {
    (text(), range()).prop_map(|(uri, range)| Location { uri, range })
}

pub fn text_edit() -> impl Strategy<Value = TextEdit> {
    (range(), text()).prop_map(|(range, new_text)| TextEdit { range, new_text })
}

pub fn marked_string() -> impl Strategy<Value = MarkedString> {
    prop_oneof![
        text().prop_map(MarkedString::String),
        (text(), text()).prop_map(|(language, value)| MarkedString::Code { language, value }),
    ]
}

pub fn diagnostic() -> impl Strategy<Value = Diagnostic> {
    (
        range(),
        text(),
        option::of(select(DiagnosticSeverity::ALL)),
        option::of(prop_oneof![
            safe_integer().prop_map(DiagnosticCode::Number),
            text().prop_map(DiagnosticCode::String),
        ]),
        option::of(text()),
    )
        .prop_map(|(range, message, severity, code, source)| Diagnostic {
            severity,
            code,
            source,
            ..Diagnostic::new(range, message)
        })
}

/// JSON leaves whose numbers survive the f64 model exactly.
pub fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        text().prop_map(Value::String),
    ]
}

pub fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

/// Values allowed as JSON-RPC `params`: an object or an array.
pub fn structured_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(json_value(), 0..4).prop_map(Value::Array),
        prop::collection::btree_map("[a-z]{1,6}", json_value(), 0..4).prop_map(Value::Object),
    ]
}

pub fn completion_item() -> impl Strategy<Value = CompletionItem> {
    (
        text(),
        option::of(select(CompletionItemKind::ALL)),
        option::of(text()),
        option::of(text_edit()),
        option::of(json_value()),
    )
        .prop_map(|(label, kind, detail, text_edit, data)| CompletionItem {
            kind,
            detail,
            text_edit,
            data,
            ..CompletionItem::new(label)
        })
}

pub fn completion_result() -> impl Strategy<Value = CompletionListResult> {
    let items = || prop::collection::vec(completion_item(), 0..3);
    prop_oneof![
        items().prop_map(CompletionListResult::CompletionItems),
        (any::<bool>(), items()).prop_map(|(is_incomplete, items)| {
            CompletionListResult::CompletionList(CompletionList {
                is_incomplete,
                items,
            })
        }),
    ]
}

pub fn symbol() -> impl Strategy<Value = SymbolInformation> {
    (text(), select(SymbolKind::ALL), location(), option::of(text())).prop_map(
        |(name, kind, location, container_name)| SymbolInformation {
            name,
            kind,
            location,
            container_name,
        },
    )
}
