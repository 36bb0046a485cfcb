//! End-to-end behavior of a session driven line by line.

use data_wrangler::{
    BufferPrinter, Error, Limits, Record, Session, Table, parse_integers, project,
};

fn feed(session: &mut Session, lines: &[&str]) -> Vec<String> {
    let mut out = BufferPrinter::new();
    for line in lines {
        session.process_line(line, &mut out).unwrap();
    }
    out.take()
}

#[test]
fn test_worked_example() {
    let mut session = Session::default();
    let output = feed(&mut session, &["a1,2,3", "a4,5,6", "p2,3", "s2<5"]);
    assert_eq!(
        output,
        vec![
            "Added record: 1, 2, 3",
            "Added record: 4, 5, 6",
            "2, 3",
            "5, 6",
            "1, 2, 3",
        ]
    );
}

#[test]
fn test_piped_reprojection() {
    let mut session = Session::default();
    let output = feed(&mut session, &["a7,8", "p1,2|p1"]);
    assert_eq!(output, vec!["Added record: 7, 8", "7"]);
}

#[test]
fn test_add_then_print_renders_record() {
    let mut session = Session::default();
    feed(&mut session, &["a10,20"]);
    let output = feed(&mut session, &["a30,40", "?"]);
    assert_eq!(output, vec!["Added record: 30, 40", "10, 20", "30, 40"]);
}

#[test]
fn test_identity_projection_round_trip() {
    let mut table = Table::new(10);
    for values in [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]] {
        table.push(Record::new(values)).unwrap();
    }
    let all: Vec<usize> = (1..=table.cols()).collect();
    assert_eq!(project(&table, &all).unwrap(), table);
}

#[test]
fn test_parsed_values_keep_order() {
    let parsed = parse_integers("9,3,27,1", ',', 100).unwrap();
    assert_eq!(parsed.values, vec![9, 3, 27, 1]);
}

#[test]
fn test_piped_select_chain_keeps_order() {
    let mut session = Session::default();
    feed(
        &mut session,
        &["a5,1", "a3,2", "a8,3", "a1,4", "a9,5", "a4,6"],
    );
    let output = feed(&mut session, &["s1>3|s2<6|p2"]);
    assert_eq!(output, vec!["1", "3", "5"]);
}

#[test]
fn test_only_column_limit_ends_session() {
    let mut session = Session::new(Limits {
        max_cols: 3,
        ..Limits::default()
    });
    let mut out = BufferPrinter::new();
    for line in ["", "?", "z", "p1", "s1<2", "a0", "a1,x", "a1,2|p1"] {
        session.process_line(line, &mut out).unwrap();
    }
    let err = session.process_line("a1,2,3,4", &mut out).unwrap_err();
    assert!(matches!(err, Error::ColumnLimitExceeded { got: 4, max: 3 }));
}

#[test]
fn test_failed_operations_do_not_mutate() {
    let mut session = Session::default();
    feed(&mut session, &["a1,2", "a3,4"]);
    let before = session.table().clone();
    let output = feed(&mut session, &["p3", "s0<1", "a5", "p1|p2", "s3=1|p1"]);
    assert_eq!(output.len(), 5);
    assert_eq!(session.table(), &before);
}
