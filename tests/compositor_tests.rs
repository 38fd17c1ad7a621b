use linechart_rs::core::Viewport;
use linechart_rs::render::{
    Color, ComposeSurface, Compositor, DrawOp, Paint, RecordingSurface, RenderSurface,
};

fn stroke() -> Paint {
    Paint::stroke(Color::rgb(0.1, 0.2, 0.3), 1.0)
}

#[test]
fn zero_sized_viewports_defer_without_allocating() {
    let mut compositor: Compositor<RecordingSurface> = Compositor::new();

    assert!(!compositor.begin_frame(Viewport::new(0, 50)).expect("frame"));
    assert!(!compositor.begin_frame(Viewport::new(100, 0)).expect("frame"));
    assert!(!compositor.is_allocated());
    assert!(compositor.layer().is_none());
}

#[test]
fn layer_is_reused_at_stable_size_and_rebuilt_on_change() {
    let mut compositor: Compositor<RecordingSurface> = Compositor::new();

    assert!(compositor.begin_frame(Viewport::new(100, 50)).expect("frame"));
    assert!(compositor.begin_frame(Viewport::new(100, 50)).expect("frame"));
    {
        let layer = compositor.layer().expect("layer");
        // Same instance, cleared once per frame.
        assert_eq!(layer.clear_count(), 2);
    }

    assert!(compositor.begin_frame(Viewport::new(120, 50)).expect("frame"));
    let layer = compositor.layer().expect("layer");
    assert_eq!((layer.width(), layer.height()), (120, 50));
    assert_eq!(layer.clear_count(), 1);
}

#[test]
fn each_frame_starts_from_an_empty_layer() {
    let mut compositor: Compositor<RecordingSurface> = Compositor::new();
    let viewport = Viewport::new(100, 50);

    compositor.begin_frame(viewport).expect("frame");
    compositor
        .layer()
        .expect("layer")
        .draw_line(0.0, 0.0, 10.0, 10.0, &stroke())
        .expect("line");

    compositor.begin_frame(viewport).expect("frame");
    assert!(compositor.layer().expect("layer").ops().is_empty());
}

#[test]
fn composite_copies_layer_ops_and_marks_the_blit() {
    let mut compositor: Compositor<RecordingSurface> = Compositor::new();
    compositor.begin_frame(Viewport::new(100, 50)).expect("frame");
    {
        let layer = compositor.layer().expect("layer");
        layer.draw_line(0.0, 0.0, 10.0, 10.0, &stroke()).expect("line");
        layer.draw_line(10.0, 10.0, 20.0, 5.0, &stroke()).expect("line");
    }

    let mut target = RecordingSurface::new(100, 50);
    compositor.composite(&mut target).expect("composite");

    assert_eq!(target.ops().len(), 3);
    assert!(matches!(target.ops()[0], DrawOp::Line { .. }));
    assert!(matches!(target.ops()[1], DrawOp::Line { .. }));
    assert_eq!(target.ops()[2], DrawOp::Blit { op_count: 2 });
}

#[test]
fn composite_without_a_layer_leaves_the_target_untouched() {
    let compositor: Compositor<RecordingSurface> = Compositor::new();
    let mut target = RecordingSurface::new(100, 50);

    compositor.composite(&mut target).expect("composite");
    assert!(target.ops().is_empty());
}

#[test]
fn release_drops_the_layer_and_tolerates_repeats() {
    let mut compositor: Compositor<RecordingSurface> = Compositor::new();
    compositor.begin_frame(Viewport::new(100, 50)).expect("frame");
    assert!(compositor.is_allocated());

    compositor.release();
    assert!(!compositor.is_allocated());
    compositor.release();
    assert!(!compositor.is_allocated());

    // A released compositor can begin a fresh frame.
    assert!(compositor.begin_frame(Viewport::new(100, 50)).expect("frame"));
    assert!(compositor.is_allocated());
}
