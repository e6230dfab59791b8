use super::*;

#[test]
fn script_flag_splits_on_commas() {
    let args = Args::try_parse_from(["pager-demo", "--script", "next,goto:2,swipe:prev"])
        .expect("parse args");

    let steps = parse_script(&args.script).expect("valid script");

    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1], script::Step::GoTo(2));
}

#[test]
fn flags_override_loaded_settings() {
    let args = Args::try_parse_from([
        "pager-demo",
        "--config",
        "/nonexistent/pager_demo.toml",
        "--pages",
        "6",
        "--no-animation",
        "--json",
    ])
    .expect("parse args");

    let settings = args.settings();

    assert_eq!(settings.initial_pages, 6);
    assert!(!settings.default_animated);
    assert!(settings.print_json);
}

#[test]
fn render_prints_counters_and_label() {
    let session = DemoSession::new(&Settings::default()).expect("session");

    let text = render(&session, false).expect("render");
    let json = render(&session, true).expect("render json");

    assert_eq!(text, "currentIndex = 0, totalPages = 3 [page-1]");
    assert!(json.contains("\"total_pages\":3"));
}
