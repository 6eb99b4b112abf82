use std::fs;
use std::path::PathBuf;

use serde_json::Value;

const FIXTURE_PATH: &str = "static/block_questions.json";

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(FIXTURE_PATH);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let fixture: Value = serde_json::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let Value::Array(records) = &fixture else {
        panic!(
            "fixture root in {} must be a JSON array of block questions",
            path.display()
        );
    };

    let json = serde_json::to_string(&fixture).expect("serialize block question fixture");
    if json.contains("\"##") {
        panic!(
            "fixture {} contains a `\"##` sequence that cannot be embedded",
            path.display()
        );
    }
    let generated = format!(
        "/// Build-time validated block question fixture JSON.\n\
pub const BLOCK_QUESTIONS_JSON: &str = r##\"{}\"##;\n\
/// Number of records in [`BLOCK_QUESTIONS_JSON`].\n\
pub const BLOCK_QUESTION_COUNT: usize = {};\n",
        json,
        records.len()
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("fixture_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
