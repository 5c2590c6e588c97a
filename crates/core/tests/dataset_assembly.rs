use std::fs;
use std::path::{Path, PathBuf};

use gadget_core::model::{FileRecord, Gadget, TRAINING_INSTRUCTION};
use gadget_core::pipeline::dataset::{assemble, find_shards, write_jsonl};
use gadget_core::text::LeakMasker;
use tempfile::tempdir;

fn gadget(id: &str, label: u8, code: &str) -> Gadget {
    Gadget {
        gadget_id: id.to_string(),
        label,
        code_sliced: code.to_string(),
        raw_lines: vec![1],
    }
}

fn write_shard(path: &Path, records: &[FileRecord]) {
    let mut body = String::new();
    for record in records {
        body.push_str(&serde_json::to_string(record).unwrap());
        body.push('\n');
    }
    fs::write(path, body).unwrap();
}

fn shard_with_distinct_gadgets(path: &Path, count: usize, label: u8) {
    let gadgets =
        (0..count).map(|i| gadget(&format!("m_{i}"), label, &format!("int v{i};"))).collect();
    write_shard(path, &[FileRecord { file_path: "/src/a.c".into(), gadgets }]);
}

#[test]
fn split_sizes_follow_floor_of_train_ratio() {
    let dir = tempdir().expect("tempdir");
    let shard = dir.path().join("gadgets_a.jsonl");
    shard_with_distinct_gadgets(&shard, 10, 1);

    let (train, test) = assemble(&[shard], 0.8, 42, &LeakMasker).expect("assemble");
    assert_eq!(train.len(), 8);
    assert_eq!(test.len(), 2);

    let (train, test) = assemble(&[dir.path().join("gadgets_a.jsonl")], 0.33, 42, &LeakMasker)
        .expect("assemble");
    assert_eq!(train.len(), 3);
    assert_eq!(train.len() + test.len(), 10);
}

/// Same shards + same seed must reproduce the records (and the files
/// written from them) byte for byte.
#[test]
fn assembly_is_reproducible_for_a_fixed_seed() {
    let dir = tempdir().expect("tempdir");
    let shard = dir.path().join("gadgets_a.jsonl");
    shard_with_distinct_gadgets(&shard, 25, 1);
    let shards = vec![shard];

    let (train_a, test_a) = assemble(&shards, 0.8, 7, &LeakMasker).expect("assemble");
    let (train_b, test_b) = assemble(&shards, 0.8, 7, &LeakMasker).expect("assemble");
    assert_eq!(train_a, train_b);
    assert_eq!(test_a, test_b);

    let out_a = dir.path().join("train_a.jsonl");
    let out_b = dir.path().join("train_b.jsonl");
    write_jsonl(&out_a, &train_a).unwrap();
    write_jsonl(&out_b, &train_b).unwrap();
    assert_eq!(fs::read(&out_a).unwrap(), fs::read(&out_b).unwrap());

    // A different seed permutes differently (overwhelmingly likely at n=25).
    let (train_c, _) = assemble(&shards, 0.8, 8, &LeakMasker).expect("assemble");
    assert_ne!(train_a, train_c);
}

/// Dedup at assembly is corpus-wide: identical gadgets in different shards
/// collapse to one record, first shard wins.
#[test]
fn assembly_dedups_across_shards() {
    let dir = tempdir().expect("tempdir");
    let shard_a = dir.path().join("gadgets_a.jsonl");
    let shard_b = dir.path().join("gadgets_b.jsonl");
    write_shard(
        &shard_a,
        &[FileRecord {
            file_path: "/src/a.c".into(),
            gadgets: vec![gadget("a_0", 1, "memcpy(buf, src, n);")],
        }],
    );
    write_shard(
        &shard_b,
        &[FileRecord {
            file_path: "/src/b.c".into(),
            gadgets: vec![
                gadget("b_0", 0, "memcpy(buf, src, n);"),
                gadget("b_1", 0, "int other;"),
            ],
        }],
    );

    let (train, test) = assemble(&[shard_a, shard_b], 1.0, 42, &LeakMasker).expect("assemble");
    assert_eq!(train.len() + test.len(), 2);
}

/// The dedup key is the *masked* text: gadgets that differ only in a masked
/// identifier collide after masking and only the first is kept.
#[test]
fn assembly_dedups_on_masked_text() {
    let dir = tempdir().expect("tempdir");
    let shard = dir.path().join("gadgets_a.jsonl");
    write_shard(
        &shard,
        &[FileRecord {
            file_path: "/src/a.c".into(),
            gadgets: vec![gadget("a_0", 1, "badAlpha(data);"), gadget("a_1", 1, "badBeta(data);")],
        }],
    );

    let (train, test) = assemble(&[shard], 1.0, 42, &LeakMasker).expect("assemble");
    assert_eq!(train.len() + test.len(), 1);
    assert_eq!(train[0].input, "func_danger(data);");
}

#[test]
fn assembled_records_carry_masked_input_and_verdict() {
    let dir = tempdir().expect("tempdir");
    let shard = dir.path().join("gadgets_a.jsonl");
    write_shard(
        &shard,
        &[FileRecord {
            file_path: "/src/a.c".into(),
            gadgets: vec![
                gadget("a_0", 1, "char badBuf[10];"),
                gadget("a_1", 0, "char goodBuf[10];"),
            ],
        }],
    );

    let (mut all, test) = assemble(&[shard], 1.0, 42, &LeakMasker).expect("assemble");
    all.extend(test);
    assert_eq!(all.len(), 2);

    for record in &all {
        assert_eq!(record.instruction, TRAINING_INSTRUCTION);
        assert!(!record.input.contains("bad") && !record.input.contains("good"));
    }
    let vulnerable = all.iter().find(|r| r.output == "Vulnerable").expect("vulnerable record");
    assert_eq!(vulnerable.input, "char func_danger[10];");
    let safe = all.iter().find(|r| r.output == "Safe").expect("safe record");
    assert_eq!(safe.input, "char func_safe[10];");
}

#[test]
fn find_shards_lists_only_jsonl_sorted() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("gadgets_b.jsonl"), "").unwrap();
    fs::write(dir.path().join("gadgets_a.jsonl"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let shards = find_shards(dir.path()).expect("find shards");
    let names: Vec<_> = shards
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["gadgets_a.jsonl", "gadgets_b.jsonl"]);

    assert!(find_shards(&PathBuf::from("no_such_dir")).is_err());
}
