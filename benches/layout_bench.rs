use benchplot::api::{AxisXConfig, AxisYConfig, ChartConfig, ChartLayoutEngine};
use benchplot::core::{AxisDomain, BreakGeometry, BrokenXScale, GridSpec, RawMetric, SeriesEntry};
use benchplot::interaction::CursorPosition;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_broken_scale_mapping(c: &mut Criterion) {
    let scale = BrokenXScale::new(
        AxisDomain::new(0.0, 650.0),
        AxisDomain::new(650.0, 3000.0),
        BreakGeometry {
            left_section_end: 63.0,
            right_section_start: 70.0,
        },
    )
    .expect("valid broken scale");

    c.bench_function("broken_scale_mapping", |b| {
        b.iter(|| {
            let _ = scale.value_to_x(black_box(316.0));
            let _ = scale.value_to_x(black_box(1000.0));
        })
    });
}

fn synthetic_engine(points: usize) -> ChartLayoutEngine {
    let config = ChartConfig::new(
        AxisXConfig::broken(
            AxisDomain::new(0.0, 4.0),
            AxisDomain::new(4.0, 25.0),
            BreakGeometry {
                left_section_end: 63.0,
                right_section_start: 70.0,
            },
            GridSpec::stepped(1.0),
            GridSpec::stepped(1.0)
                .with_labels(vec![5.0, 10.0, 15.0, 20.0, 25.0])
                .anchored_at_zero(),
        )
        .with_static_decimals(0),
        AxisYConfig::new(
            AxisDomain::new(0.0, 40.0),
            GridSpec::stepped(5.0).with_labels(vec![10.0, 20.0, 30.0, 40.0]),
        )
        .with_unit("%"),
    );

    let data: Vec<SeriesEntry> = (0..points)
        .map(|i| SeriesEntry {
            vendor: format!("vendor-{}", i % 7),
            model: format!("model-{i}"),
            score: 10.0 + (i % 30) as f64,
            metric: Some(RawMetric::Text(format!("${}.{:02}00", i % 24, i % 100))),
            visual_offset: None,
        })
        .collect();

    ChartLayoutEngine::new(config, data).expect("engine init")
}

fn bench_layout_64_points(c: &mut Criterion) {
    let mut engine = synthetic_engine(64);

    c.bench_function("layout_64_points", |b| {
        b.iter(|| {
            let _ = engine.layout().expect("layout should succeed");
        })
    });
}

fn bench_hover_query_64_points(c: &mut Criterion) {
    let mut engine = synthetic_engine(64);
    engine.layout().expect("layout should succeed");

    let mut step = 0_u32;
    c.bench_function("hover_query_64_points", |b| {
        b.iter(|| {
            step = (step + 7) % 100;
            let cursor = CursorPosition::new(f64::from(step), f64::from((step * 3) % 100));
            let _ = engine.on_hover(black_box(cursor));
        })
    });
}

criterion_group!(
    benches,
    bench_broken_scale_mapping,
    bench_layout_64_points,
    bench_hover_query_64_points
);
criterion_main!(benches);
