mod common;

use std::fs;

use common::TestLibrary;
use pretty_assertions::assert_eq;
use vocab_core::{Delimiter, Direction, Duplicate};
use vocab_trainer::library::{convert_file, scan_duplicates};

#[test]
fn duplicates_across_dictionaries() {
    let library = TestLibrary::new();
    library
        .dictionary("b.txt", "dog\thund\nheader without tab\nfox\tlis\n")
        .dictionary("a.txt", "cat\tkot\ndog\tpies\n")
        .dictionary("c.txt", "fox\tlis\ncat\tkot\ncat\tkocur\n");
    fs::create_dir(library.vocabulary_dir().join("archive")).unwrap();

    let report = scan_duplicates(&library.vocabulary_dir(), Delimiter::default()).unwrap();

    assert_eq!(
        report,
        vec![
            Duplicate {
                term: "cat".to_string(),
                dictionaries: vec!["a.txt".into(), "c.txt".into(), "c.txt".into()],
            },
            Duplicate {
                term: "dog".to_string(),
                dictionaries: vec!["a.txt".into(), "b.txt".into()],
            },
            Duplicate {
                term: "fox".to_string(),
                dictionaries: vec!["b.txt".into(), "c.txt".into()],
            },
        ]
    );
}

#[test]
fn duplicates_report_serializes_to_json() {
    let report = vec![Duplicate {
        term: "cat".to_string(),
        dictionaries: vec!["a.txt".into(), "b.txt".into()],
    }];
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json[0]["term"], "cat");
    assert_eq!(json[0]["dictionaries"][1], "b.txt");
}

#[test]
fn convert_line_pairs_next_to_input() {
    let library = TestLibrary::new();
    let input = library.root().join("animals.txt");
    fs::write(&input, "cat\nkot\n\ndog\nhund\n").unwrap();

    let written = convert_file(&input, None, Direction::LinesToDelimited, Delimiter::default())
        .unwrap();

    assert_eq!(written, library.root().join("animals.out"));
    assert_eq!(fs::read_to_string(written).unwrap(), "cat\tkot\ndog\thund\n");
}

#[test]
fn convert_back_to_line_pairs() {
    let library = TestLibrary::new();
    let input = library.root().join("animals.tsv");
    let output = library.root().join("pairs.txt");
    fs::write(&input, "cat\tkot\ndog\thund\n").unwrap();

    convert_file(
        &input,
        Some(&output),
        Direction::DelimitedToLines,
        Delimiter::default(),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), "cat\nkot\ndog\nhund\n");
}

#[test]
fn convert_rejects_dangling_term() {
    let library = TestLibrary::new();
    let input = library.root().join("odd.txt");
    fs::write(&input, "cat\nkot\nowl\n").unwrap();

    let err = convert_file(&input, None, Direction::LinesToDelimited, Delimiter::default())
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("odd.txt"), "{message}");
    assert!(message.contains("line 3"), "{message}");
    assert!(!library.root().join("odd.out").exists());
}
