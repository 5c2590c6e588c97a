use std::path::Path;

use vulnslice::{canonicalize_or_current, infer_target_name, shard_file_name};

#[test]
fn target_name_comes_from_the_final_path_component() {
    assert_eq!(infer_target_name(Path::new("/data/juliet/s01")), "s01");
    assert_eq!(infer_target_name(Path::new("/data/juliet/sample.c")), "sample.c");
}

/// A trailing slash leaves an empty final component; fall back to the
/// parent directory's name.
#[test]
fn target_name_handles_trailing_slash() {
    assert_eq!(infer_target_name(Path::new("/data/juliet/s01/")), "s01");
}

#[test]
fn shard_names_follow_the_gadgets_prefix_convention() {
    assert_eq!(shard_file_name(Path::new("/data/juliet/s01")), "gadgets_s01.jsonl");
    assert_eq!(shard_file_name(Path::new("/data/sample.c")), "gadgets_sample.c.jsonl");
}

#[test]
fn canonicalize_falls_back_for_nonexistent_paths() {
    let resolved = canonicalize_or_current("definitely/not/a/real/path").unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("definitely/not/a/real/path"));
}
