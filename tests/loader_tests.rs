use cipherforge::error::CipherForgeError;
use cipherforge::key::letter_index;
use cipherforge::language::loader::{load_language_file, load_language_model};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_loader_parses_all_row_kinds() {
    let data = "# kind\tvalue\tpercent\n\
                letter\tE\t12.5\n\
                letter\tt\t9.0\n\
                word\tthe\n\
                digram\tTH\n\
                trigram\ting\n";
    let model = load_language_model(Cursor::new(data)).unwrap();

    assert_eq!(model.reference_percent(letter_index(b'E').unwrap()), Some(12.5));
    assert_eq!(model.reference_percent(letter_index(b'T').unwrap()), Some(9.0));
    assert_eq!(model.reference_percent(letter_index(b'A').unwrap()), None);
    assert!(model.is_common_word("THE"));
    assert!(model.digrams.contains(b"TH"));
    assert!(model.trigrams.contains(b"ING"));
}

#[test]
fn test_loader_skips_comments_and_blank_lines() {
    let data = "letter\tE\t12.0\n\n# a comment\nword\tAND\n";
    let model = load_language_model(Cursor::new(data)).unwrap();
    assert_eq!(model.common_words.len(), 1);
}

#[test]
fn test_loader_rejects_unknown_kind() {
    let data = "letter\tE\t12.0\nquadgram\tTION\n";
    match load_language_model(Cursor::new(data)) {
        Err(CipherForgeError::Validation(msg)) => {
            assert!(msg.contains("row 2"), "{}", msg);
            assert!(msg.contains("quadgram"), "{}", msg);
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_loader_rejects_malformed_rows() {
    for bad in [
        "letter\tE\n",
        "letter\tE\tlots\n",
        "letter\tEE\t1.0\n",
        "letter\tE\t1.0\ndigram\tTHE\n",
        "letter\tE\t1.0\ntrigram\tT1E\n",
        "letter\tE\t1.0\nword\tdon't\n",
        "letter\tE\t1.0\njustonefield\n",
    ] {
        assert!(
            matches!(
                load_language_model(Cursor::new(bad)),
                Err(CipherForgeError::Validation(_))
            ),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_loader_requires_letter_table() {
    let data = "word\tTHE\n";
    assert!(matches!(
        load_language_model(Cursor::new(data)),
        Err(CipherForgeError::Validation(_))
    ));
}

#[test]
fn test_loader_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "letter\tE\t12.7").unwrap();
    writeln!(file, "letter\tT\t9.1").unwrap();
    writeln!(file, "word\tTHE").unwrap();

    let model = load_language_file(file.path()).unwrap();
    let order = model.frequency_order();
    assert_eq!(order[0], letter_index(b'E').unwrap());
    assert_eq!(order[1], letter_index(b'T').unwrap());
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let res = load_language_file("/definitely/not/here.tsv");
    assert!(matches!(res, Err(CipherForgeError::Io(_))));
}
