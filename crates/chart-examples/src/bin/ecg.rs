// File: crates/chart-examples/src/bin/ecg.rs
// Summary: Minimal example that renders the sample ECG trace to a standalone SVG.

use medconnect_chart::provider::sample_ecg;
use medconnect_chart::theme::ECG_COLOR;
use medconnect_chart::{Chart, RenderOptions};

fn main() {
    let chart = Chart::new(sample_ecg(), "ECG Data", ECG_COLOR);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_ecg.svg");
    chart.render_to_svg(&opts, &out).expect("render to svg");
    println!("Wrote {}", out.display());
}
