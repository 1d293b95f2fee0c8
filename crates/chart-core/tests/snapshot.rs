// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares bytes for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use medconnect_chart::{Chart, RenderOptions, Series};

fn render_svg() -> String {
    let series = Series::from_pairs(
        "ECG",
        [("00:00", 0.0), ("00:01", 0.5), ("00:02", 1.2), ("00:03", 0.8), ("00:04", -0.2)],
    );
    Chart::new(series, "ECG Data", "#3b82f6")
        .render_svg(&RenderOptions::default())
        .expect("render svg")
}

#[test]
fn polyline_matches_worked_example() {
    let svg = render_svg();
    assert!(svg.contains(r#"points="40,140 125,90 210,20 295,60 380,160""#), "{svg}");
    assert!(svg.contains(r##"<line x1="40" y1="160" x2="380" y2="160" stroke="#666" stroke-width="1"/>"##));
    assert!(svg.contains(r##"<line x1="40" y1="20" x2="40" y2="160" stroke="#666" stroke-width="1"/>"##));
    assert!(svg.contains(r#"<text x="200" y="15" text-anchor="middle""#));
    assert!(svg.contains(r#"<rect x="0" y="0" width="400" height="200" fill="white"/>"#));
    assert!(svg.contains(r#"viewBox="0 0 400 200""#));
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render_svg(), render_svg());
}

#[test]
fn title_is_escaped() {
    let series = Series::from_pairs("X", [("a", 1.0), ("b", 2.0)]);
    let svg = Chart::new(series, "EMG <left & right>", "#10b981")
        .render_svg(&RenderOptions::default())
        .unwrap();
    assert!(svg.contains("EMG &lt;left &amp; right&gt;</text>"));
}

#[test]
fn golden_basic_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    let want = std::fs::read_to_string(&snap_path)
        .unwrap_or_else(|e| panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", snap_path.display()));
    assert_eq!(svg, want, "rendered markup differs from golden snapshot: {}", snap_path.display());
}
