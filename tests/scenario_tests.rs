//! Integration tests covering resolve, filter and render together.

use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;

use docker_ps_cli::columns::{ColumnDirectives, Directive, HideList, resolve};
use docker_ps_cli::config::Config;
use docker_ps_cli::diagnostics::{Diagnostic, NullSink};
use docker_ps_cli::docker::parse_records;
use docker_ps_cli::fields::FieldUniverse;
use docker_ps_cli::find;
use docker_ps_cli::render::{ContainerTable, TableStyle};
use docker_ps_cli::theme::TableTheme;

const PS_OUTPUT: &str = r#"{"ID":"0123456789abcdef","Image":"nginx:1.27","Command":"\"nginx -g 'daemon off;'\"","CreatedAt":"2026-10-01 10:00:00 +0000 UTC","Status":"Up 2 hours","Ports":"0.0.0.0:8080->80/tcp","Names":"web-1","State":"running"}
{"ID":"fedcba9876543210","Image":"postgres:16","Command":"\"docker-entrypoint.s…\"","CreatedAt":"2026-09-30 08:00:00 +0000 UTC","Status":"Exited (0) 3 days ago","Ports":"","Names":"db-1","State":"exited"}

{"ID":"aaaabbbbccccdddd","Image":"redis:7","Command":"\"redis-server\"","CreatedAt":"2026-10-02 12:00:00 +0000 UTC","Status":"Up 5 minutes (healthy)","Ports":"6379/tcp","Names":"cache-1","State":"running"}
"#;

fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[test]
fn test_show_then_hide_same_column() {
    let directives = ColumnDirectives::new()
        .with("Ports", Directive::Shown)
        .with("Names", Directive::Shown);
    let hide = HideList::from_args(["Ports"]);

    let mut sink: Vec<Diagnostic> = Vec::new();
    let schema = resolve(&FieldUniverse::docker(), &directives, &hide, &mut sink);

    assert_eq!(schema.pairs(), vec![("Names", "Names")]);
    assert!(sink.is_empty());
}

#[test]
fn test_config_hide_columns_feed_resolution() {
    let mut config = Config::default();
    config
        .parse("# columns\nhide_columns = Command, Created\n")
        .unwrap();

    let schema = resolve(
        &FieldUniverse::docker(),
        &ColumnDirectives::new(),
        &config.hide_columns,
        &mut NullSink,
    );
    assert_eq!(
        schema.pairs(),
        vec![
            ("ID", "ID"),
            ("Image", "Image"),
            ("Status", "Status"),
            ("Ports", "Ports"),
            ("Names", "Names"),
        ]
    );
}

#[test]
fn test_parse_filter_render_pipeline() {
    let records = parse_records(PS_OUTPUT).unwrap();
    assert_eq!(records.len(), 3);

    let mut sink: Vec<Diagnostic> = Vec::new();
    let running = find::filter(records, "State=running,Names=*-1", &mut sink);
    assert!(sink.is_empty());
    let names: Vec<_> = running.iter().map(|r| r.text("Names").into_owned()).collect();
    assert_eq!(names, vec!["web-1", "cache-1"]);

    let directives = ColumnDirectives::new()
        .with("Names", Directive::Shown)
        .with("Status", Directive::Shown);
    let schema = resolve(&FieldUniverse::docker(), &directives, &HideList::new(), &mut NullSink);

    let table = ContainerTable::new(&schema, &running, TableTheme::default()).style(TableStyle::Ascii);
    let lines = rows(&table.to_buffer(60));

    assert_eq!(lines.len(), 7);
    assert!(lines[1].contains("Status"));
    assert!(lines[1].contains("Names"));
    assert!(lines[1].find("Status") < lines[1].find("Names"));
    assert!(lines[3].contains("Up 2 hours") && lines[3].contains("web-1"));
    assert!(lines[5].contains("Up 5 minutes (healthy)") && lines[5].contains("cache-1"));
}

#[test]
fn test_find_problems_are_reported_and_skipped() {
    let records = parse_records(PS_OUTPUT).unwrap();

    let mut sink: Vec<Diagnostic> = Vec::new();
    let kept = find::filter(records, "Bogus=1,Image,Image=postgres", &mut sink);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text("Names"), "db-1");
    assert_eq!(sink.len(), 2);
    assert!(matches!(sink[0], Diagnostic::UnknownFindKey(ref k) if k == "Bogus"));
    assert!(matches!(sink[1], Diagnostic::MissingEquals(ref s) if s == "Image"));
}
