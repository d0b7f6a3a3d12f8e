use trace_rail::{parse_printed_stack, Frame, Trace};

fn trace(text: &str) -> Trace {
    parse_printed_stack(text).unwrap()
}

#[test]
fn line_changes_do_not_split_groups_by_default() {
    let a = trace("pkg.F\n\t/w/src/pkg/f.go:10\nmain.main\n\t/w/src/main.go:3");
    let b = trace("pkg.F\n\t/w/src/pkg/f.go:14\nmain.main\n\t/w/src/main.go:3");

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(
        a.fingerprint_config().include_lines(true).compute(),
        b.fingerprint_config().include_lines(true).compute()
    );
}

#[test]
fn different_functions_differ() {
    let a = trace("pkg.F\n\t/w/src/pkg/f.go:10");
    let b = trace("pkg.G\n\t/w/src/pkg/f.go:10");

    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn build_root_does_not_affect_fingerprint() {
    let a = trace("pkg.F\n\t/home/alice/src/pkg/f.go:10");
    let b = trace("pkg.F\n\t/ci/build/src/pkg/f.go:10");

    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn paths_can_be_excluded() {
    let a = trace("pkg.F\n\t/w/src/pkg/f.go:10");
    let b = trace("pkg.F\n\t/w/src/pkg/moved.go:10");

    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(
        a.fingerprint_config().include_paths(false).compute(),
        b.fingerprint_config().include_paths(false).compute()
    );
}

#[test]
fn in_app_only_ignores_library_frames() {
    let app = Frame::new("app", "handle", "/w/src/app/h.go", 5).with_in_app(true);
    let a = Trace::from_frames(vec![
        Frame::new("rt", "goexit", "/usr/go/src/rt/a.s", 1),
        app.clone(),
    ])
    .unwrap();
    let b = Trace::from_frames(vec![
        Frame::new("rt", "main", "/usr/go/src/rt/m.go", 9),
        app,
    ])
    .unwrap();

    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(
        a.fingerprint_config().in_app_only(true).compute(),
        b.fingerprint_config().in_app_only(true).compute()
    );
}

#[test]
fn in_app_only_falls_back_when_no_app_frames() {
    let a = trace("pkg.F\n\t/w/src/pkg/f.go:10");
    assert_eq!(a.fingerprint_config().in_app_only(true).compute(), a.fingerprint());
}

#[test]
fn hex_is_zero_padded() {
    let a = trace("pkg.F");
    let hex = a.fingerprint_hex();

    assert_eq!(hex.len(), 16);
    assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), a.fingerprint());
}
