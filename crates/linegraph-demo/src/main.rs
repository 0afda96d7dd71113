// File: crates/linegraph-demo/src/main.rs
// Summary: Demo feeds an amplifying sine into a static graph and, from a producer thread, into a
// streaming graph, writing PNG snapshots of both.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use linegraph_core::{render_to_png, GraphComponent, GraphConfiguration, RedrawFlag};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: i32 = 700;
const HEIGHT: i32 = 400;
const STREAM_WINDOW: usize = 720;
const SNAPSHOTS: usize = 4;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;

    let mut static_config = GraphConfiguration::with_label("Amplifying Sine: Static");
    static_config.tick_distance = 45;
    let mut streaming_config = static_config.clone();
    streaming_config.label = "Amplifying Sine: Streaming".into();

    render_static(static_config, &out_dir)?;
    render_streaming(streaming_config, &out_dir)?;
    Ok(())
}

/// Ten growing periods, one sample per degree.
fn amplifying_sine() -> Vec<f64> {
    let mut amplitude = 1.1;
    (0..=360 * 10)
        .map(|deg| {
            amplitude *= 1.001;
            amplitude * f64::from(deg).to_radians().sin()
        })
        .collect()
}

fn render_static(config: GraphConfiguration, out_dir: &Path) -> Result<()> {
    let values = amplifying_sine();
    let graph = GraphComponent::for_values(values.iter().copied(), config);
    graph.on_resize(WIDTH, HEIGHT);
    // Park the inspector mid-chart so the PNG shows a readout.
    graph.on_pointer_move(WIDTH / 2);

    let bounds = graph.bounds();
    info!(samples = graph.len(), max = bounds.maximum, min = bounds.minimum, "static graph loaded");

    let path = out_dir.join("static.png");
    render_to_png(&graph, &path).with_context(|| format!("failed to render '{}'", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn render_streaming(config: GraphConfiguration, out_dir: &Path) -> Result<()> {
    let flag = Arc::new(RedrawFlag::new());
    let graph = Arc::new(GraphComponent::streaming(config).with_redraw(flag.clone()));
    graph.set_sample_count(STREAM_WINDOW);
    graph.on_resize(WIDTH, HEIGHT);

    let stop = Arc::new(AtomicBool::new(false));
    let producer = {
        let graph = Arc::clone(&graph);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut amplitude = 1.1;
            let mut deg = 0u32;
            while !stop.load(Ordering::Relaxed) {
                amplitude *= 1.001;
                graph.append(amplitude * f64::from(deg).to_radians().sin());
                deg = (deg + 1) % 360;
                thread::sleep(Duration::from_millis(1));
            }
        })
    };

    for shot in 0..SNAPSHOTS {
        thread::sleep(Duration::from_millis(400));
        if !flag.take() {
            continue;
        }
        let path = out_dir.join(format!("streaming_{shot}.png"));
        render_to_png(&graph, &path).with_context(|| format!("failed to render '{}'", path.display()))?;
        info!(samples_seen = graph.last_sample_index(), "wrote {}", path.display());
    }

    stop.store(true, Ordering::Relaxed);
    producer.join().map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    Ok(())
}
