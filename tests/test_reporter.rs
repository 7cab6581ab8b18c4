use std::collections::BTreeMap;
use std::sync::Arc;

use sentry::protocol::{IpAddress, Value};
use sentry::test::TestTransport;
use sentry::{ClientOptions, Hub, Level};
use sentry_browser::{
    BrowserReporter, JsValue, PageScripts, ReportingOptions, ScriptPosition, SessionInfo,
};

fn with_isolated_hub<F: FnOnce()>(f: F) {
    Hub::run(Arc::new(Hub::new(None, Arc::new(Default::default()))), f);
}

#[test]
fn test_no_dsn_binds_no_client() {
    with_isolated_hub(|| {
        let mut scripts = PageScripts::new();
        let mut reporter = BrowserReporter::new(ReportingOptions::new());
        reporter.install(&mut scripts);

        assert!(!reporter.is_installed());
        assert!(Hub::current().client().is_none());
        assert!(scripts.is_empty());
    });
}

#[test]
fn test_disabled_skips_both_sides() {
    with_isolated_hub(|| {
        let options = ReportingOptions {
            enabled: false,
            ..ReportingOptions::new()
        }
        .with_dsn("https://public@sentry.invalid/1")
        .unwrap()
        .with_js_dsn("https://public@sentry.invalid/1")
        .unwrap();

        let mut scripts = PageScripts::new();
        let mut reporter = BrowserReporter::new(options);
        reporter.install(&mut scripts);

        assert!(!reporter.is_installed());
        assert!(Hub::current().client().is_none());
        assert!(scripts.is_empty());
    });
}

#[test]
fn test_browser_install_registers_scripts() {
    let options = ReportingOptions::new()
        .with_js_dsn("https://public@sentry.invalid/1")
        .unwrap();
    let mut scripts = PageScripts::new();
    let mut reporter = BrowserReporter::new(options);
    reporter.install(&mut scripts);

    let head = scripts.render_head();
    assert!(head.contains(
        "<script src=\"https://cdn.ravenjs.com/3.26.2/raven.min.js\" crossorigin=\"anonymous\"></script>"
    ));
    assert!(head.contains("Raven.config('https://public@sentry.invalid/1', {dataCallback:function(data) {"));
    assert!(head.contains("data.extra.referenced_scripts.push(scripts[i].src);"));
    assert!(head.contains(").install();"));
}

#[test]
fn test_configured_data_callback_is_kept() {
    let mut options = ReportingOptions::new()
        .with_js_dsn("https://public@sentry.invalid/1")
        .unwrap();
    options
        .js_options
        .insert("dataCallback", JsValue::expr("function(data) { return data; }"));

    let mut scripts = PageScripts::new();
    let mut reporter = BrowserReporter::new(options);
    reporter.install(&mut scripts);

    let head = scripts.render_head();
    assert!(head.contains("{dataCallback:function(data) { return data; }}"));
    assert!(!head.contains("source_scripts"));
}

#[test]
fn test_server_install_attaches_session_and_context() {
    let transport = TestTransport::new();
    let options = ReportingOptions {
        client_options: ClientOptions {
            transport: Some(Arc::new(transport.clone())),
            ..Default::default()
        },
        ..ReportingOptions::new()
    }
    .with_dsn("https://public@sentry.invalid/1")
    .unwrap();

    with_isolated_hub(|| {
        let session = SessionInfo::new("8f14e45fceea")
            .with_remote_addr("192.0.2.7".parse().unwrap())
            .with_entry("plan", "premium");
        let mut scripts = PageScripts::new();
        let mut reporter = BrowserReporter::new(options).with_session(session);
        reporter.install(&mut scripts);
        assert!(reporter.is_installed());

        let mut context = BTreeMap::new();
        context.insert("role".to_owned(), Value::from("admin"));
        reporter.set_user_context(context, &mut scripts);

        reporter.capture_message("Hello World!", Level::Warning);
        // dropping the reporter shuts the client down and flushes
    });

    let events = transport.fetch_and_clear_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message.as_deref(), Some("Hello World!"));

    let user = events[0].user.as_ref().expect("event user");
    assert_eq!(user.other["session_id"], Value::from("8f14e45fceea"));
    assert_eq!(user.other["plan"], Value::from("premium"));
    assert_eq!(user.other["role"], Value::from("admin"));
    assert_eq!(
        user.ip_address,
        Some(IpAddress::Exact("192.0.2.7".parse().unwrap()))
    );
}

#[test]
fn test_context_merge_reaches_captured_events() {
    let events = sentry::test::with_captured_events(|| {
        let options = ReportingOptions::new()
            .with_dsn("https://public@sentry.invalid/1")
            .unwrap();
        let mut scripts = PageScripts::new();
        let mut reporter = BrowserReporter::new(options);

        let mut first = BTreeMap::new();
        first.insert("role".to_owned(), Value::from("admin"));
        reporter.set_user_context(first, &mut scripts);

        let mut second = BTreeMap::new();
        second.insert("role".to_owned(), Value::from("guest"));
        second.insert("team".to_owned(), Value::from("x"));
        reporter.set_user_context(second, &mut scripts);

        reporter.capture_message("merged", Level::Info);
    });

    assert_eq!(events.len(), 1);
    let user = events[0].user.as_ref().expect("event user");
    assert_eq!(user.other["role"], Value::from("guest"));
    assert_eq!(user.other["team"], Value::from("x"));
}

#[test]
fn test_user_script_is_replaced_not_appended() {
    let options = ReportingOptions::new()
        .with_js_dsn("https://public@sentry.invalid/1")
        .unwrap();
    let mut scripts = PageScripts::new();
    let mut reporter = BrowserReporter::new(options);

    let mut first = BTreeMap::new();
    first.insert("role".to_owned(), Value::from("admin"));
    reporter.set_user_context(first, &mut scripts);

    let mut second = BTreeMap::new();
    second.insert("role".to_owned(), Value::from("guest"));
    reporter.set_user_context(second, &mut scripts);

    assert_eq!(
        scripts.render(ScriptPosition::BodyEnd),
        "<script>Raven.setUserContext({\"role\":\"guest\"});</script>\n"
    );
}

#[test]
fn test_capture_error_delegates_to_hub() {
    let events = sentry::test::with_captured_events(|| {
        let reporter = BrowserReporter::new(ReportingOptions::new());
        let error = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert!(reporter.capture_error(&error).is_some());
    });

    assert_eq!(events.len(), 1);
}
