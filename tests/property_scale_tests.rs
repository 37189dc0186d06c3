use benchplot::api::format_metric;
use benchplot::core::{AxisDomain, BreakGeometry, BrokenXScale, ContinuousXScale, YScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn continuous_scale_is_monotonic_and_pins_the_extremes(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor_a in 0.0f64..1.0,
        factor_b in 0.0f64..1.0
    ) {
        let domain = AxisDomain::new(min, min + span);
        let scale = ContinuousXScale::new(domain).expect("valid scale");

        let (low, high) = if factor_a <= factor_b {
            (factor_a, factor_b)
        } else {
            (factor_b, factor_a)
        };
        let a = min + low * span;
        let b = min + high * span;
        prop_assert!(scale.value_to_x(a) <= scale.value_to_x(b) + 1e-9);

        prop_assert!((scale.value_to_x(domain.min)).abs() <= 1e-9);
        prop_assert!((scale.value_to_x(domain.max) - 100.0).abs() <= 1e-9);
    }

    #[test]
    fn inversion_mirrors_the_vertical_ordering(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        factor in 0.0f64..1.0
    ) {
        let domain = AxisDomain::new(min, min + span);
        let normal = YScale::new(domain, false).expect("valid scale");
        let inverted = YScale::new(domain, true).expect("valid scale");

        let value = min + factor * span;
        prop_assert!((normal.value_to_y(value) + inverted.value_to_y(value) - 100.0).abs() <= 1e-6);
    }

    #[test]
    fn broken_scale_never_maps_into_the_gap(
        left_max in 1.0f64..1_000.0,
        right_span in 1.0f64..10_000.0,
        left_section_end in 10.0f64..60.0,
        gap in 1.0f64..30.0,
        factor in 0.0f64..1.0
    ) {
        let right_max = left_max + right_span;
        let geometry = BreakGeometry {
            left_section_end,
            right_section_start: left_section_end + gap,
        };
        let scale = BrokenXScale::new(
            AxisDomain::new(0.0, left_max),
            AxisDomain::new(left_max, right_max),
            geometry,
        )
        .expect("valid broken scale");

        let value = factor * right_max;
        let position = scale.value_to_x(value);
        prop_assert!(
            position <= geometry.left_section_end || position >= geometry.right_section_start,
            "value {value} mapped into the gap at {position}"
        );
    }

    #[test]
    fn formatting_is_idempotent_under_reparse(
        value in -1_000_000.0f64..1_000_000.0,
        decimals in 0usize..5
    ) {
        let once = format_metric(value, decimals, false, false, "");
        let reparsed: f64 = once.parse().expect("formatted output parses back");
        let twice = format_metric(reparsed, decimals, false, false, "");
        prop_assert_eq!(once, twice);
    }
}
