use trace_rail::{
    adapt_call_sites, call_site, parse_printed_stack, render_call_sites, split_qualified_name,
    trim_root, CallSite,
};

fn captured() -> Vec<CallSite> {
    vec![
        CallSite::new(
            "github.com/acme/store.(*DB).write",
            "/go/src/github.com/acme/store/db.go",
            120,
        ),
        CallSite::new("github.com/acme/store.Put", "/go/src/github.com/acme/store/put.go", 31),
        CallSite::unknown(),
        CallSite::new("main.main", "/home/dev/cmd/main.go", 14),
    ]
}

#[test]
fn empty_structured_stack_has_no_trace() {
    assert!(adapt_call_sites(&[]).is_none());
}

#[test]
fn frame_order_is_reverse_of_capture_order() {
    let sites = captured();
    let trace = adapt_call_sites(&sites).unwrap();

    assert_eq!(trace.len(), sites.len());
    let functions: Vec<&str> = trace.iter().map(|f| f.function()).collect();
    assert_eq!(functions, ["main", "unknown", "Put", "write"]);
}

#[test]
fn rendered_text_parses_to_same_frames_as_adapter() {
    let sites = captured();

    let adapted = adapt_call_sites(&sites).unwrap();
    let reparsed = parse_printed_stack(&render_call_sites(&sites)).unwrap();

    assert_eq!(adapted.len(), reparsed.len());
    let tuple = |f: &trace_rail::Frame| {
        (f.module().to_string(), f.function().to_string(), f.filename().to_string(), f.lineno())
    };
    let a: Vec<_> = adapted.iter().map(tuple).collect();
    let b: Vec<_> = reparsed.iter().map(tuple).collect();
    assert_eq!(a, b);
}

#[test]
fn adapter_matches_direct_field_mapping() {
    let expected = [
        ("main", "main", "/home/dev/cmd/main.go", 14),
        ("unknown", "unknown", "unknown", 0),
        ("github.com/acme/store", "Put", "github.com/acme/store/put.go", 31),
        ("github.com/acme/store.(*DB)", "write", "github.com/acme/store/db.go", 120),
    ];

    let trace = adapt_call_sites(&captured()).unwrap();
    for (frame, (module, function, filename, line)) in trace.iter().zip(expected) {
        assert_eq!(frame.module(), module);
        assert_eq!(frame.function(), function);
        assert_eq!(frame.filename(), filename);
        assert_eq!(frame.lineno(), line);
        assert!(!frame.in_app());
    }
}

#[test]
fn normalizer_agrees_with_adapter() {
    let site_name = "github.com/acme/store.Put";
    let site_path = "/go/src/github.com/acme/store/put.go";
    let trace = adapt_call_sites(&[CallSite::new(site_name, site_path, 31)]).unwrap();

    let (module, function) = split_qualified_name(site_name);
    assert_eq!(trace.oldest().module(), module);
    assert_eq!(trace.oldest().function(), function);
    assert_eq!(trace.oldest().filename(), trim_root(site_path));
}

#[test]
fn render_prefixes_every_entry_with_newline() {
    let text = render_call_sites(&[
        CallSite::new("a.B", "/f.go", 2),
        CallSite::new("c.D", "/g.go", 3),
    ]);
    assert_eq!(text, "\na.B\n\t/f.go:2\nc.D\n\t/g.go:3");
}

#[test]
fn call_site_macro_records_module_and_line() {
    let line = line!() + 1;
    let site = call_site!("capture");
    let trace = adapt_call_sites(&[site]).unwrap();

    assert_eq!(trace.oldest().function(), "capture");
    assert_eq!(trace.oldest().module(), module_path!());
    assert_eq!(trace.oldest().lineno(), line);
    assert!(trace.oldest().abs_path().ends_with("mod.rs"));
}
