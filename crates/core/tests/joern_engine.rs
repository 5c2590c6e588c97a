use std::path::PathBuf;

use gadget_core::engine::{AnalysisEngine, JoernEngine};
use tempfile::tempdir;

#[test]
fn engine_errors_for_missing_target() {
    let engine = JoernEngine::new("query_gadgets.sc");
    let err = engine.run(&PathBuf::from("does_not_exist.c")).unwrap_err();
    assert!(format!("{err:?}").contains("MissingTarget"));
}

/// The fake-output env hook short-circuits the subprocess so tests never
/// need Joern installed. Single test to avoid racing on the env var.
#[test]
fn engine_honours_fake_output_hook() {
    let temp = tempdir().unwrap();
    let target = temp.path().join("a.c");
    std::fs::write(&target, "int x;\n").unwrap();

    let fake = temp.path().join("batch_gadgets.json");
    std::fs::write(&fake, "{\"file\":\"a.c\",\"lines\":[1],\"label\":0,\"method\":\"f\"}\n")
        .unwrap();
    std::env::set_var("VS_JOERN_FAKE_OUTPUT", &fake);

    let engine = JoernEngine::new("query_gadgets.sc");
    assert_eq!(engine.name(), "joern");
    let produced = engine.run(&target).expect("fake engine run");
    assert_eq!(produced, fake);

    // A fake path that does not exist surfaces as NoOutput.
    std::env::set_var("VS_JOERN_FAKE_OUTPUT", temp.path().join("missing.json"));
    let err = engine.run(&target).unwrap_err();
    assert!(format!("{err:?}").contains("NoOutput"));

    std::env::remove_var("VS_JOERN_FAKE_OUTPUT");
}
