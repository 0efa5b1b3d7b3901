//! Legend Demo - lay out three legends and report where they land.
//!
//! Run with: `RUST_LOG=offsetbox=trace cargo run -p offsetbox --example legend_demo`

use offsetbox::{
    Color, Corner, Legend, LegendConfig, LegendEntry, OffsetBox, PackMode, Point, RecordingRenderer,
};
use tracing_subscriber::EnvFilter;

fn entries(labels: &[&str]) -> Vec<LegendEntry> {
    let colors = [
        Color::rgb(0.12, 0.47, 0.71),
        Color::rgb(1.0, 0.5, 0.05),
        Color::rgb(0.17, 0.63, 0.17),
        Color::rgb(0.84, 0.15, 0.16),
    ];
    labels
        .iter()
        .zip(colors.iter().cycle())
        .map(|(label, color)| LegendEntry::line(*label, *color))
        .collect()
}

fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let series = ["n=1", "n=2", "n=3", "n=4"];
    let legends = [
        (
            "three columns",
            entries(&["multi\nline", "$2^{2^2}$", r"$\frac{1}{2}\pi$"]),
            LegendConfig {
                ncol: 3,
                ..LegendConfig::default()
            },
        ),
        (
            "two columns",
            entries(&series),
            LegendConfig {
                ncol: 2,
                ..LegendConfig::default()
            },
        ),
        (
            "expanded",
            entries(&series),
            LegendConfig {
                ncol: 4,
                mode: PackMode::Expand,
                width: Some(400.0),
                ..LegendConfig::default()
            },
        ),
    ];

    let mut renderer = RecordingRenderer::new();
    for (i, (name, entries, config)) in legends.into_iter().enumerate() {
        let mut legend = Legend::new(entries, &config);
        legend.anchor(Corner::UpperRight, Point::new(480.0, 600.0 - 200.0 * i as f32));

        let bbox = legend.window_extent(&renderer)?;
        legend.draw(&mut renderer)?;
        let primitives = renderer.take();

        tracing::info!(
            "{}: ({:.1}, {:.1})-({:.1}, {:.1}), {} primitives",
            name,
            bbox.x0,
            bbox.y0,
            bbox.x1,
            bbox.y1,
            primitives.len()
        );
    }

    Ok(())
}
