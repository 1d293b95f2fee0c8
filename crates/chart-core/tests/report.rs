// File: crates/chart-core/tests/report.rs
// Purpose: Report assembly in both formats and hand-off to sinks.

use chrono::NaiveDate;
use medconnect_chart::{
    export, ChartError, FileSink, LabelRange, MemorySink, ReportBuilder, ReportError, ReportFormat,
    RenderOptions, Series, Signal, StaticProvider,
};

fn generated_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 5).unwrap().and_hms_opt(14, 30, 0).unwrap()
}

#[test]
fn text_report_has_preamble_and_summaries() {
    let provider = StaticProvider::dashboard_samples();
    let file = ReportBuilder::new(RenderOptions::default())
        .build(&provider, ReportFormat::Text, generated_at())
        .expect("text report");

    assert_eq!(file.file_name, "weekly-health-report.txt");
    assert_eq!(file.mime_type, "text/plain");
    let text = String::from_utf8(file.bytes).unwrap();
    assert!(text.starts_with("MedConnect Weekly Health Report\nGenerated: 2025-06-05 14:30\n"));
    assert!(text.contains("Blood Pressure: 120/80 mmHg\n"));
    assert!(text.contains("Heart Rate: 72 bpm\n"));
    assert!(text.contains("ECG: 11 points, min -0.8, max 1.2, latest 0 at 00:10\n"));
    assert!(text.contains("EMG: 11 points, min 0.1, max 1.2, latest 0.3 at 00:10\n"));
    assert!(text.ends_with("ECG and EMG data charts included in visual report.\n"));
}

#[test]
fn html_report_embeds_one_chart_per_signal() {
    let provider = StaticProvider::dashboard_samples();
    let file = ReportBuilder::new(RenderOptions::default())
        .build(&provider, ReportFormat::Html, generated_at())
        .expect("html report");

    assert_eq!(file.file_name, "weekly-health-report.html");
    assert_eq!(file.mime_type, "text/html");
    let html = String::from_utf8(file.bytes).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<svg ").count(), 2);
    assert!(html.contains("stroke=\"#3b82f6\""));
    assert!(html.contains("stroke=\"#10b981\""));
    assert!(html.contains("<tr><th>SpO2</th><td>98%</td></tr>"));
    assert!(!html.contains("<link") && !html.contains("<img"), "self-contained");
}

#[test]
fn export_is_deterministic_for_fixed_timestamp() {
    let provider = StaticProvider::dashboard_samples();
    let builder = ReportBuilder::new(RenderOptions::default());
    let a = builder.build(&provider, ReportFormat::Html, generated_at()).unwrap();
    let b = builder.build(&provider, ReportFormat::Html, generated_at()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn label_range_and_downsampling_flow_through() {
    let long = Series::from_pairs(
        "ECG",
        (0..300).map(|i| (format!("{:02}:{:02}", i / 60, i % 60), (i as f64 * 0.2).cos())),
    );
    let provider = StaticProvider::new().with_series(long);
    let file = ReportBuilder::new(RenderOptions::default())
        .signals(vec![Signal::ecg()])
        .range(LabelRange::new(Some("01:00".into()), None))
        .max_points(Some(40))
        .build(&provider, ReportFormat::Text, generated_at())
        .unwrap();
    let text = String::from_utf8(file.bytes).unwrap();
    assert!(text.contains("ECG: 40 points"), "{text}");
    assert!(text.ends_with("ECG data charts included in visual report.\n"));
}

#[test]
fn failures_stay_local_to_the_call() {
    let provider = StaticProvider::dashboard_samples();
    let err = ReportBuilder::new(RenderOptions::default())
        .signals(vec![Signal::new("EEG", "#000")])
        .build(&provider, ReportFormat::Html, generated_at())
        .unwrap_err();
    assert!(matches!(err, ReportError::Chart(ChartError::InvalidInput(_))));

    let empty_window = ReportBuilder::new(RenderOptions::default())
        .range(LabelRange::new(Some("09:00".into()), None))
        .build(&provider, ReportFormat::Text, generated_at())
        .unwrap_err();
    assert!(matches!(empty_window, ReportError::Chart(ChartError::InvalidInput(_))));

    let none = ReportBuilder::new(RenderOptions::default())
        .signals(Vec::new())
        .build(&provider, ReportFormat::Text, generated_at())
        .unwrap_err();
    assert!(matches!(none, ReportError::NoSignals));
}

#[test]
fn sinks_receive_the_named_buffer() {
    let provider = StaticProvider::dashboard_samples();
    let file = ReportBuilder::new(RenderOptions::default())
        .build(&provider, ReportFormat::Text, generated_at())
        .unwrap();

    let mut mem = MemorySink::new();
    export(file.clone(), &mut mem).unwrap();
    assert_eq!(mem.files, vec![file.clone()]);

    let dir = std::path::PathBuf::from("target/test_out/report_sink");
    let mut sink = FileSink::new(&dir);
    export(file.clone(), &mut sink).unwrap();
    assert_eq!(sink.written(), &[dir.join("weekly-health-report.txt")]);
    assert_eq!(std::fs::read(dir.join("weekly-health-report.txt")).unwrap(), file.bytes);
}
