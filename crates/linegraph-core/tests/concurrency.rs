// File: crates/linegraph-core/tests/concurrency.rs
// Purpose: A producer thread appends while the test thread renders; every frame must be a
// consistent snapshot of the window.

use std::sync::Arc;
use std::thread;

use linegraph_core::{Color, DrawCall, GraphComponent, GraphConfiguration, RecordingSurface, SeriesBuffer};

const CAPACITY: usize = 50;
const TOTAL: u32 = 20_000;

#[test]
fn frames_are_never_torn() {
    let config = GraphConfiguration { tick_distance: 0, ..Default::default() };
    let line = config.line;
    let graph = Arc::new(GraphComponent::new(SeriesBuffer::streaming(CAPACITY), config));
    graph.on_resize(500, 200);

    let producer = {
        let graph = Arc::clone(&graph);
        thread::spawn(move || {
            for i in 0..TOTAL {
                graph.append(i);
            }
        })
    };

    let mut surface = RecordingSurface::new(500, 200);
    let mut frames = 0;
    loop {
        surface.clear();
        graph.render(&mut surface);
        check_frame(&surface.calls, line);
        frames += 1;
        if producer.is_finished() {
            break;
        }
    }
    producer.join().expect("producer panicked");

    assert!(frames > 0);
    assert_eq!(graph.len(), CAPACITY);
    assert_eq!(graph.last_sample_index(), u64::from(TOTAL));
    let want: Vec<f64> = (TOTAL - CAPACITY as u32..TOTAL).map(f64::from).collect();
    assert_eq!(graph.values(), want);
}

fn check_frame(calls: &[DrawCall], line: Color) {
    let start = calls
        .iter()
        .rposition(|c| *c == DrawCall::SetColor(line))
        .expect("trace color set");
    let segments: Vec<_> = calls[start + 1..]
        .iter()
        .map(|c| match c {
            DrawCall::Line(a, b) => (*a, *b),
            other => panic!("unexpected call in trace: {other:?}"),
        })
        .collect();
    assert!(segments.len() < CAPACITY);
    if let Some(((x, _), _)) = segments.first() {
        assert_eq!(*x, 0);
    }
    for w in segments.windows(2) {
        assert_eq!(w[0].1, w[1].0, "segments must join");
    }
    for (a, b) in &segments {
        assert_eq!(b.0 - a.0, 10);
        assert!(b.1 <= a.1, "increasing values must rise");
    }
}
