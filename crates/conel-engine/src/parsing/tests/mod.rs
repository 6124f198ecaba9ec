//! Behavioural tests for the parsing module.
//!
//! Fixture-driven scenarios live in the crate's `tests/` directory; these
//! cover the record-level properties on small inline inputs.

use pretty_assertions::assert_eq;
use rstest::rstest;

use conel_config::{MalformedComments, ParseOptions};

use crate::models::{Field, Record, Token};
use crate::parsing::{parse, parse_str, parse_str_with_options, parse_with_options};

fn collect(text: &str) -> Vec<Record> {
    parse_str(text)
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap()
}

fn forms(record: &Record) -> Vec<&str> {
    record.iter().filter_map(|t| t.get(Field::Form)).collect()
}

const HI: &str = "# sent_id = 1\n# text = Hi !\n1\tHi\thi\tINTJ\tUH\t_\t0\troot\t0:root\tSpaceAfter=No\n2\t!\t!\tPUNCT\t.\t_\t1\tpunct\t1:punct\t_";

// Round-trip

#[test]
fn comment_and_token_text_round_trips() {
    let original = Record::with_metadata(
        [
            Token::from_line("1\tHi\thi\tINTJ\tUH\t_\t0\troot\t0:root\t_"),
            Token::from_line("2\t!\t!\tPUNCT\t.\t_\t1\tpunct\t1:punct\t_"),
        ],
        [("sent_id", "1"), ("text", "Hi !")].into_iter().collect(),
    );

    // Serialized metadata uses `key: value`, which the reader does not accept
    // as a comment, so rebuild the `key = value` form for the comments.
    let mut text = String::new();
    for (key, value) in original.metadata() {
        text.push_str(&format!("# {key} = {value}\n"));
    }
    for token in &original {
        text.push_str(&token.to_line());
        text.push('\n');
    }

    let records = collect(&text);
    assert_eq!(records, vec![original]);
}

#[test]
fn serialized_tokens_parse_back_unchanged() {
    let original = Record::with_metadata(
        [
            Token::from_line("1\tThey\tthey\tPRON\tPRP\t_\t2\tnsubj\t2:nsubj\t_"),
            Token::from_line("2\tbuy\tbuy\tVERB\tVBP\t_\t0\troot\t0:root\t_"),
            Token::from_line("3\tbooks\tbook\tNOUN\tNNS\t_\t2\tobj\t2:obj\tSpaceAfter=No"),
            Token::from_line("4\t.\t.\tPUNCT\t.\t_\t2\tpunct\t2:punct\t_"),
        ],
        [("sent_id", "2")].into_iter().collect(),
    );

    let records = collect(&original.serialize());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tokens(), original.tokens());
}

#[test]
fn absent_fields_come_back_as_placeholders() {
    let sparse = Record::new([Token::from_line("1\tHi")]);

    let records = collect(&sparse.serialize());

    assert_eq!(records.len(), 1);
    let token = &records[0][0];
    assert_eq!(token.len(), 10);
    assert_eq!(token.get(Field::Lemma), Some("_"));
    assert_eq!(token.get(Field::Misc), Some("_"));
    assert_ne!(records[0], sparse);
}

#[test]
fn serialized_metadata_lines_are_not_read_back_as_metadata() {
    let record = Record::with_metadata([], [("text", "Hi")].into_iter().collect());

    // `# text: Hi` has no ` = `, so it is a malformed comment and dropped.
    assert!(collect(&record.serialize()).is_empty());
}

#[test]
fn serialize_is_idempotent() {
    let record = collect(HI).remove(0);
    assert_eq!(record.serialize(), record.serialize());
}

#[test]
fn parsed_block_serializes_to_canonical_text() {
    let record = collect(HI).remove(0);
    insta::assert_snapshot!(record.serialize(), @r"
# sent_id: 1
# text: Hi !
1	Hi	hi	INTJ	UH	_	0	root	0:root	SpaceAfter=No
2	!	!	PUNCT	.	_	1	punct	1:punct	_
");
}

// Blank-line handling

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn blank_line_runs_collapse(#[case] blanks: usize) {
    let text = format!("1\tone{}1\ttwo", "\n".repeat(blanks + 1));

    let records = collect(&text);

    assert_eq!(records.len(), 2);
    assert_eq!(forms(&records[0]), ["one"]);
    assert_eq!(forms(&records[1]), ["two"]);
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
#[case("  \n\t\n \r\n")]
fn only_blank_lines_yield_nothing(#[case] text: &str) {
    assert!(collect(text).is_empty());
}

#[test]
fn leading_and_trailing_blank_lines_are_tolerated() {
    let records = collect("\n\n1\tHi\n\n\n");
    assert_eq!(records.len(), 1);
}

#[test]
fn whitespace_only_line_separates_records() {
    let records = collect("1\tone\n \t \n1\ttwo\n");
    assert_eq!(records.len(), 2);
}

#[test]
fn crlf_line_endings() {
    let records = collect("# text = Hi\r\n1\tHi\thi\r\n\r\n1\tBye\r\n");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].metadata().get("text"), Some("Hi"));
    assert_eq!(records[0][0].get(Field::Lemma), Some("hi"));
}

// Token columns

#[test]
fn short_token_line_keeps_leading_fields() {
    let record = collect("1\tHi\thi").remove(0);
    let token = &record[0];

    assert_eq!(token.len(), 3);
    assert!(!token.contains(Field::Upos));
    assert_eq!(record.serialize(), "1\tHi\thi\t_\t_\t_\t_\t_\t_\t_");
}

#[test]
fn extra_columns_are_discarded() {
    let record = collect("1\tHi\thi\tINTJ\tUH\t_\t0\troot\t0:root\t_\tbonus").remove(0);
    assert_eq!(record[0].len(), 10);
    assert_eq!(record[0].get(Field::Misc), Some("_"));
}

#[test]
fn values_are_not_coerced() {
    let record = collect("4-5\tdon't\t_\t_\t_\t_\tx\t_\t_\t_").remove(0);
    assert_eq!(record[0].get(Field::Id), Some("4-5"));
    assert_eq!(record[0].get(Field::Head), Some("x"));
}

// Metadata

#[test]
fn duplicate_metadata_key_takes_later_value() {
    let record = collect("# text = first\n# sent_id = 1\n# text = second\n1\tHi").remove(0);

    assert_eq!(record.metadata().len(), 2);
    assert_eq!(record.metadata().get("text"), Some("second"));
    let keys: Vec<_> = record.metadata().keys().collect();
    assert_eq!(keys, ["text", "sent_id"]);
}

#[test]
fn metadata_after_tokens_stays_in_same_record() {
    let records = collect("1\tHi\n# text = Hi\n2\t!\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 2);
    assert_eq!(records[0].metadata().get("text"), Some("Hi"));
    assert!(records[0].serialize().starts_with("# text: Hi\n1\tHi"));
}

#[test]
fn metadata_does_not_leak_into_next_record() {
    let records = collect("# text = one\n1\tone\n\n1\ttwo\n");

    assert_eq!(records.len(), 2);
    assert!(records[1].metadata().is_empty());
}

#[test]
fn malformed_comment_lines_are_dropped() {
    let records = collect("# a remark without equals\n#no-space = x\n1\tHi\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 1);
    assert!(records[0].metadata().is_empty());
}

#[test]
fn block_of_only_malformed_comments_yields_nothing() {
    assert!(collect("# remark\n\n# another\n").is_empty());
}

#[test]
fn in_memory_text_honours_malformed_comment_policy() {
    let options = ParseOptions {
        malformed_comments: MalformedComments::Token,
    };
    let records = parse_str_with_options("# remark\n1\tHi\n", options)
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(records[0].len(), 2);
    assert_eq!(forms(&records[0]), ["Hi"]);
}

#[test]
fn malformed_comment_lines_as_tokens_when_configured() {
    let options = ParseOptions {
        malformed_comments: MalformedComments::Token,
    };
    let records = parse_with_options("# remark\n1\tHi\n".as_bytes(), options)
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(records[0].len(), 2);
    assert_eq!(records[0][0].get(Field::Id), Some("# remark"));
}

// Laziness

#[test]
fn records_are_produced_one_pull_at_a_time() {
    let mut source = "1\ta\n\n1\tb\n\n1\tc\n".as_bytes();
    let mut reader = parse(&mut source);

    assert_eq!(forms(&reader.next().unwrap().unwrap()), ["a"]);
    // Only the first block and its separator have been consumed.
    let rest = reader.into_inner();
    assert_eq!(*rest, "1\tb\n\n1\tc\n".as_bytes());
}
