// File: crates/linegraph-core/tests/export.rs
// Purpose: Render graphs through the Skia raster surface and check the encoded PNGs.

use linegraph_core::{render_to_png, render_to_png_bytes, ExportError, GraphComponent, GraphConfiguration};

fn sine_graph() -> GraphComponent {
    let values = (0..360).map(|i| (i as f64).to_radians().sin());
    let graph = GraphComponent::for_values(values, GraphConfiguration::default());
    graph.on_resize(720, 480);
    graph
}

#[test]
fn png_has_graph_size_and_background() {
    let bytes = render_to_png_bytes(&sine_graph()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (720, 480));
    assert_eq!(img.get_pixel(3, 3).0, [64, 64, 64, 255]);
}

#[test]
fn png_written_to_file() {
    let graph = sine_graph();
    graph.on_pointer_move(360);
    let out = std::path::PathBuf::from("target/test_out/static_sine.png");
    render_to_png(&graph, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn unlaid_out_graph_cannot_export() {
    let graph = GraphComponent::for_values([1.0, 2.0], GraphConfiguration::default());
    let err = render_to_png_bytes(&graph).expect_err("zero-size surface");
    assert!(matches!(err, ExportError::Surface { width: 0, height: 0 }));
}
