use rstest::rstest;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stepwise_core::functional::prelude::*;
use stepwise_core::{Failure, Result};
use stepwise_utils::{ops, steps, Payload};

#[derive(Debug, PartialEq, Deserialize)]
struct Info {
    #[serde(rename = "Test")]
    test: String,
}

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

/// JSON decoding that records whether it was ever reached
fn counted_json(counter: Arc<AtomicUsize>) -> impl Fn(Vec<u8>) -> Result<Info> + Send + Sync {
    move |bytes| {
        counter.fetch_add(1, Ordering::SeqCst);
        ops::json_decode(bytes)
    }
}

fn with_compose(path: PathBuf, json_calls: Arc<AtomicUsize>) -> Result<Info> {
    let decode = compose4(
        ops::read_file,
        ops::bytes_to_str,
        ops::base64_decode,
        counted_json(json_calls),
    );
    decode(path)
}

fn with_bridge(path: PathBuf, json_calls: Arc<AtomicUsize>) -> Result<Info> {
    let read = wrap_to_panic(ops::read_file);
    let to_str = wrap_to_panic(ops::bytes_to_str);
    let decode = wrap_to_panic(ops::base64_decode);
    let unmarshal = wrap_to_panic(counted_json(json_calls));

    panic_to_pair(|| {
        let bytes = read(path);
        let text = to_str(bytes);
        let decoded = decode(text);
        unmarshal(decoded)
    })
}

fn with_monad(path: PathBuf, json_calls: Arc<AtomicUsize>) -> Result<Info> {
    let unmarshal = Arc::new(counted_json(json_calls));
    unit(path)
        .bind(|path: PathBuf| Monad::lift(move || ops::read_file(path.clone())))
        .bind(|bytes: Vec<u8>| Monad::lift(move || ops::bytes_to_str(bytes.clone())))
        .bind(|text: String| Monad::lift(move || ops::base64_decode(text.clone())))
        .bind(move |decoded: Vec<u8>| {
            let unmarshal = Arc::clone(&unmarshal);
            Monad::lift(move || unmarshal(decoded.clone()))
        })
        .try_exec()
}

type Runner = fn(PathBuf, Arc<AtomicUsize>) -> Result<Info>;

#[rstest]
#[case::compose(with_compose as Runner)]
#[case::bridge(with_bridge as Runner)]
#[case::monad(with_monad as Runner)]
fn valid_file_decodes_end_to_end(#[case] run: Runner) {
    let json_calls = Arc::new(AtomicUsize::new(0));
    let info = run(testdata("test.base64"), Arc::clone(&json_calls)).unwrap();

    assert_eq!(
        info,
        Info {
            test: "monad".to_string()
        }
    );
    assert_eq!(json_calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case::compose(with_compose as Runner)]
#[case::bridge(with_bridge as Runner)]
#[case::monad(with_monad as Runner)]
fn invalid_base64_stops_before_json(#[case] run: Runner) {
    let json_calls = Arc::new(AtomicUsize::new(0));
    let failure = run(testdata("invalid.base64"), Arc::clone(&json_calls)).unwrap_err();

    assert_eq!(failure.step_name(), Some("base64-decode"));
    assert_eq!(json_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case::compose(with_compose as Runner)]
#[case::bridge(with_bridge as Runner)]
#[case::monad(with_monad as Runner)]
fn missing_file_fails_at_read(#[case] run: Runner) {
    let json_calls = Arc::new(AtomicUsize::new(0));
    let failure = run(testdata("does-not-exist.base64"), Arc::clone(&json_calls)).unwrap_err();

    assert!(matches!(failure, Failure::FileSystem { .. }));
    assert_eq!(json_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn styles_report_identical_failures() {
    let path = testdata("invalid.base64");
    let rendered: Vec<String> = [with_compose as Runner, with_bridge, with_monad]
        .iter()
        .map(|run| {
            run(path.clone(), Arc::new(AtomicUsize::new(0)))
                .unwrap_err()
                .to_string()
        })
        .collect();

    assert_eq!(rendered[0], rendered[1]);
    assert_eq!(rendered[0], rendered[2]);
}

#[test]
fn named_steps_build_the_same_pipeline_at_runtime() {
    let pipeline = steps::parse_pipeline(&["read", "utf8", "base64", "json"]).unwrap();
    let seed = Payload::Text(testdata("test.base64").display().to_string());

    let outcome = Monad::unit(seed).bind_all(pipeline).try_exec().unwrap();
    assert_eq!(outcome, Payload::Json(serde_json::json!({ "Test": "monad" })));
}

#[test]
fn runtime_pipeline_on_invalid_input_fails_at_decode() {
    let pipeline = steps::parse_pipeline(&["read", "utf8", "base64", "json"]).unwrap();
    let seed = Payload::Text(testdata("invalid.base64").display().to_string());

    let failure = Monad::unit(seed).bind_all(pipeline).try_exec().unwrap_err();
    assert_eq!(failure.step_name(), Some("base64-decode"));
}
