#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

use problem_details::{
    Encoding, Problem, ProblemError, ResponseSink, WELL_KNOWN_MEMBERS, write_response,
};
use serde_json::{Value, json};

fn out_of_credit() -> Problem {
    Problem::default()
        .with_type("https://example.io/problems/out-of-credit")
        .with_title("You do not have enough credit.")
        .with_detail("Your current balance is 30, but that costs 50.")
        .with_status(418)
        .with_instance("/account/12345/msgs/abc")
}

fn accounts() -> Value {
    json!(["/account/12345", "/account/67890"])
}

#[test]
fn complete_problem_keeps_member_order() {
    let p = out_of_credit()
        .with_extension("balance", 30)
        .unwrap()
        .with_extension("accounts", accounts())
        .unwrap();

    let expected = concat!(
        r#"{"type":"https://example.io/problems/out-of-credit","title":"You do not have enough credit.","#,
        r#""status":418,"detail":"Your current balance is 30, but that costs 50.","#,
        r#""instance":"/account/12345/msgs/abc","#,
        r#""balance":30,"accounts":["/account/12345","/account/67890"]}"#
    );
    assert_eq!(p.to_json_string().unwrap(), expected);
}

#[test]
fn extensions_only_problem() {
    let p = Problem::default()
        .with_extension("balance", 30)
        .unwrap()
        .with_extension("accounts", accounts())
        .unwrap();

    assert_eq!(
        p.to_json_string().unwrap(),
        r#"{"balance":30,"accounts":["/account/12345","/account/67890"]}"#
    );
}

#[test]
fn each_member_is_omitted_when_empty_and_present_once_when_set() {
    let setters: [(&str, fn(Problem) -> Problem); 5] = [
        ("type", |p| p.with_type("about:blank")),
        ("title", |p| p.with_title("Title")),
        ("status", |p| p.with_status(503)),
        ("detail", |p| p.with_detail("Detail")),
        ("instance", |p| p.with_instance("/x")),
    ];

    for (name, set) in setters {
        let json = set(Problem::default()).to_json_string().unwrap();
        assert_eq!(json.matches(&format!("\"{name}\":")).count(), 1, "{json}");
        for other in WELL_KNOWN_MEMBERS.iter().filter(|m| **m != name) {
            assert!(!json.contains(&format!("\"{other}\":")), "{json}");
        }
    }
}

#[test]
fn round_trip_preserves_problem() {
    let p = out_of_credit()
        .with_extension("balance", 30)
        .unwrap()
        .with_extension("ratio", 0.25)
        .unwrap()
        .with_extension("accounts", accounts())
        .unwrap()
        .with_extension("meta", json!({"retry": false, "hint": null}))
        .unwrap();

    let decoded = Problem::from_json_slice(&p.to_json_vec().unwrap()).unwrap();
    assert_eq!(decoded, p);

    let keys: Vec<&str> = decoded.extensions.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["balance", "ratio", "accounts", "meta"]);
}

#[test]
fn empty_object_decodes_to_default() {
    let p = Problem::from_json_str("{}").unwrap();
    assert_eq!(p, Problem::default());
}

#[test]
fn decode_rejects_mistyped_well_known_members() {
    let err = Problem::from_json_str(r#"{"status": "not-a-number"}"#).unwrap_err();
    match err {
        ProblemError::InvalidField {
            field,
            expected,
            actual,
        } => {
            assert_eq!(field, "status");
            assert_eq!(expected, "integer status code");
            assert_eq!(actual, "string");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = Problem::from_json_str(r#"{"title": 5}"#).unwrap_err();
    assert!(matches!(
        err,
        ProblemError::InvalidField {
            field: "title",
            expected: "string",
            ..
        }
    ));
}

/// Sink that records every call, in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl ResponseSink for Recorder {
    type Error = std::convert::Infallible;

    fn set_header(&mut self, name: http::HeaderName, value: http::HeaderValue) {
        self.calls
            .push(format!("header {name}: {}", value.to_str().unwrap()));
    }

    fn set_status(&mut self, status: http::StatusCode) {
        self.calls.push(format!("status {}", status.as_u16()));
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), Self::Error> {
        self.calls
            .push(format!("body {}", String::from_utf8_lossy(body)));
        Ok(())
    }
}

#[test]
fn response_is_written_header_status_body() {
    let mut sink = Recorder::default();
    write_response(&mut sink, &Problem::default().with_status(418), Encoding::Json).unwrap();

    assert_eq!(
        sink.calls,
        [
            "header content-type: application/problem+json",
            "status 418",
            r#"body {"status":418}"#,
        ]
    );
}

#[test]
fn unsupported_encoding_leaves_sink_untouched() {
    let mut sink = Recorder::default();
    let err = write_response(&mut sink, &out_of_credit(), Encoding::Xml).unwrap_err();

    assert!(matches!(err, ProblemError::UnsupportedEncoding(Encoding::Xml)));
    assert!(sink.calls.is_empty());
}
