use benchplot::api::{AxisXConfig, AxisYConfig, ChartConfig, ChartLayoutEngine};
use benchplot::core::{AxisDomain, GridSpec, RawMetric, SeriesEntry};
use benchplot::interaction::{CursorPosition, HoverCoalescer};

/// Chart over a 0..100 domain on both axes, so a row with metric `m` and
/// score `100 - y` lands at normalized `(m, y)`.
fn unit_chart(points: &[(f64, f64)]) -> ChartLayoutEngine {
    let config = ChartConfig::new(
        AxisXConfig::continuous(AxisDomain::new(0.0, 100.0), GridSpec::stepped(20.0)),
        AxisYConfig::new(AxisDomain::new(0.0, 100.0), GridSpec::stepped(20.0)),
    );
    let data = points
        .iter()
        .enumerate()
        .map(|(index, (x, y))| SeriesEntry {
            vendor: format!("vendor-{index}"),
            model: format!("model-{index}"),
            score: 100.0 - y,
            metric: Some(RawMetric::Number(*x)),
            visual_offset: None,
        })
        .collect();

    let mut engine = ChartLayoutEngine::new(config, data).expect("engine init");
    engine.layout().expect("layout");
    engine
}

#[test]
fn single_point_is_nearest_from_anywhere() {
    let mut engine = unit_chart(&[(40.0, 60.0)]);

    for cursor in [
        CursorPosition::new(0.0, 0.0),
        CursorPosition::new(100.0, 100.0),
        CursorPosition::new(40.0, 60.0),
    ] {
        let highlight = engine.on_hover(cursor).expect("highlight");
        assert_eq!(highlight.point, 0);
    }
}

#[test]
fn nearest_point_wins_by_squared_distance() {
    let mut engine = unit_chart(&[(10.0, 10.0), (90.0, 90.0)]);

    let highlight = engine
        .on_hover(CursorPosition::new(15.0, 15.0))
        .expect("highlight");
    assert_eq!(highlight.point, 0);

    let highlight = engine
        .on_hover(CursorPosition::new(80.0, 80.0))
        .expect("highlight");
    assert_eq!(highlight.point, 1);
}

#[test]
fn distance_ties_resolve_to_the_first_point_in_series_order() {
    // 25 and 75 map to exact percent positions, so the midpoint cursor is
    // equidistant to the bit.
    let mut engine = unit_chart(&[(25.0, 50.0), (75.0, 50.0)]);

    let highlight = engine
        .on_hover(CursorPosition::new(50.0, 50.0))
        .expect("highlight");
    assert_eq!(highlight.point, 0);
}

#[test]
fn hover_over_an_empty_chart_returns_none() {
    let mut engine = unit_chart(&[]);
    assert!(engine.on_hover(CursorPosition::new(50.0, 50.0)).is_none());
}

#[test]
fn hover_state_machine_tracks_enter_move_and_leave() {
    let mut engine = unit_chart(&[(10.0, 10.0), (90.0, 90.0)]);
    assert!(engine.hovered_point().is_none());

    engine
        .on_hover(CursorPosition::new(12.0, 12.0))
        .expect("highlight");
    assert_eq!(engine.hovered_point(), Some(0));

    // Moving within the same point's neighborhood is not a transition.
    engine
        .on_hover(CursorPosition::new(14.0, 11.0))
        .expect("highlight");
    assert_eq!(engine.hovered_point(), Some(0));

    engine
        .on_hover(CursorPosition::new(88.0, 91.0))
        .expect("highlight");
    assert_eq!(engine.hovered_point(), Some(1));

    engine.on_leave();
    assert!(engine.hovered_point().is_none());
    engine.on_leave();
    assert!(engine.hovered_point().is_none());
}

#[test]
fn rehovering_the_same_point_returns_identical_content() {
    let mut engine = unit_chart(&[(10.0, 10.0), (90.0, 90.0)]);

    let first = engine
        .on_hover(CursorPosition::new(12.0, 12.0))
        .expect("highlight")
        .clone();
    let second = engine
        .on_hover(CursorPosition::new(9.0, 13.0))
        .expect("highlight")
        .clone();
    assert_eq!(first, second);
}

#[test]
fn coalesced_pointer_stream_drives_one_hover_per_frame() {
    let mut engine = unit_chart(&[(10.0, 10.0), (90.0, 90.0)]);
    let mut coalescer = HoverCoalescer::default();

    // A burst of pointer moves inside one frame window: only the most
    // recent position survives to the hover computation.
    coalescer.submit(CursorPosition::new(11.0, 11.0));
    coalescer.submit(CursorPosition::new(50.0, 50.0));
    coalescer.submit(CursorPosition::new(89.0, 89.0));

    let cursor = coalescer.take().expect("pending cursor");
    let highlight = engine.on_hover(cursor).expect("highlight");
    assert_eq!(highlight.point, 1);
    assert!(coalescer.take().is_none());
}
