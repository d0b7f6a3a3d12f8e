use trace_rail::{parse_printed_stack, Frame};

#[test]
fn two_line_entry_yields_single_frame() {
    let trace = parse_printed_stack("pkg.Foo\n\t/a/b/c.go:42").unwrap();

    assert_eq!(trace.len(), 1);
    let frame = trace.oldest();
    assert_eq!(frame.function(), "Foo");
    assert_eq!(frame.module(), "pkg");
    assert_eq!(frame.lineno(), 42);
    assert_eq!(frame.abs_path(), "/a/b/c.go");
    assert_eq!(frame.filename(), "/a/b/c.go");
    assert!(!frame.in_app());
}

#[test]
fn display_path_is_trimmed_at_build_root() {
    let trace = parse_printed_stack("pkg.Foo\n\t/home/ci/src/pkg/c.go:42").unwrap();
    let frame = trace.oldest();

    assert_eq!(frame.abs_path(), "/home/ci/src/pkg/c.go");
    assert_eq!(frame.filename(), "pkg/c.go");
    assert!(frame.abs_path().ends_with(frame.filename()));
}

#[test]
fn lone_unknown_entry() {
    let trace = parse_printed_stack("unknown").unwrap();

    assert_eq!(trace.len(), 1);
    let frame = trace.oldest();
    assert_eq!(frame.function(), "unknown");
    assert_eq!(frame.module(), "unknown");
    assert_eq!(frame.lineno(), 0);
    assert_eq!(frame.abs_path(), "");
    assert!(frame.is_unknown());
}

#[test]
fn unknown_entry_with_file_line_keeps_path() {
    let trace = parse_printed_stack("unknown\n\tunknown:0").unwrap();
    let frame = trace.oldest();

    assert!(frame.is_unknown());
    assert_eq!(frame.abs_path(), "unknown");
    assert_eq!(frame.lineno(), 0);
}

#[test]
fn all_unknown_dump_is_not_empty() {
    let trace = parse_printed_stack("unknown\nunknown\nunknown").unwrap();

    assert_eq!(trace.len(), 3);
    assert!(trace.iter().all(Frame::is_unknown));
}

#[test]
fn empty_and_blank_input_yield_no_trace() {
    assert!(parse_printed_stack("").is_none());
    assert!(parse_printed_stack("   ").is_none());
    assert!(parse_printed_stack("\n\n\t\n  \r\n").is_none());
}

#[test]
fn frames_are_reversed_into_oldest_first() {
    let dump = concat!(
        "\napp.leaf\n\t/w/src/app/leaf.go:3",
        "\napp.middle\n\t/w/src/app/mid.go:20",
        "\napp.main\n\t/w/src/app/main.go:9\n",
    );
    let trace = parse_printed_stack(dump).unwrap();

    let functions: Vec<&str> = trace.iter().map(Frame::function).collect();
    assert_eq!(functions, ["main", "middle", "leaf"]);

    let lines: Vec<u32> = trace.iter().map(Frame::lineno).collect();
    assert_eq!(lines, [9, 20, 3]);
}

#[test]
fn mixed_one_and_two_line_entries() {
    let dump = "pkg.A\n\t/x/a.go:1\nunknown\npkg.B\npkg.C\n\t/x/c.go:3";
    let trace = parse_printed_stack(dump).unwrap();

    let rendered: Vec<(&str, &str, u32)> =
        trace.iter().map(|f| (f.function(), f.abs_path(), f.lineno())).collect();
    assert_eq!(
        rendered,
        [("C", "/x/c.go", 3), ("B", "", 0), ("unknown", "", 0), ("A", "/x/a.go", 1)]
    );
}

#[test]
fn malformed_line_numbers_degrade_to_zero() {
    let dump = "pkg.A\n\t/x/a.go:12abc\npkg.B\n\t/x/b.go:\npkg.C\n\t/x/c.go:99999999999999";
    let trace = parse_printed_stack(dump).unwrap();

    assert_eq!(trace.len(), 3);
    assert!(trace.iter().all(|f| f.lineno() == 0));
    assert_eq!(trace.newest().abs_path(), "/x/a.go");
}

#[test]
fn missing_colon_treats_whole_line_as_path() {
    let trace = parse_printed_stack("pkg.A\n\t/no/line/here.go").unwrap();
    let frame = trace.oldest();

    assert_eq!(frame.abs_path(), "/no/line/here.go");
    assert_eq!(frame.lineno(), 0);
}

#[test]
fn middle_dot_in_function_becomes_period() {
    let trace = parse_printed_stack(concat!(
        "github.com/org/pkg.Run\u{b7}dwrap\u{b7}1",
        "\n\t/g/src/github.com/org/pkg/run.go:77",
    ))
    .unwrap();
    let frame = trace.oldest();

    assert_eq!(frame.module(), "github.com/org/pkg");
    assert_eq!(frame.function(), "Run.dwrap.1");
    assert_eq!(frame.filename(), "github.com/org/pkg/run.go");
}

#[test]
fn unqualified_function_has_empty_module() {
    let trace = parse_printed_stack("main\n\t/m.go:1").unwrap();

    assert_eq!(trace.oldest().module(), "");
    assert_eq!(trace.oldest().function(), "main");
}

#[test]
fn tab_line_after_consumed_pair_starts_new_entry() {
    // The second tabbed line has no head line of its own and is read as one.
    let trace = parse_printed_stack("pkg.A\n\t/a.go:1\n\t/b.go:2").unwrap();

    assert_eq!(trace.len(), 2);
    assert_eq!(trace.oldest().abs_path(), "");
    assert_eq!(trace.newest().function(), "A");
}
