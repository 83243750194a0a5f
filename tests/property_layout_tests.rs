use duobar_rs::core::text::VALUE_LABEL_FONT_SIZE_PX;
use duobar_rs::core::{
    BandScale, BarRow, ChartData, ChartGeometry, CharWidthMeasurer, ScaleSet, TextMeasurer,
    Viewport, fit_text, probe_max_label_width,
};
use proptest::prelude::*;

fn arb_rows() -> impl Strategy<Value = Vec<BarRow>> {
    prop::collection::vec(
        ("[A-Za-z ]{0,24}", 0.0f64..1_000_000.0, 0.0f64..1_000_000.0)
            .prop_map(|(name, left, right)| BarRow::new(name, left, right)),
        0..40,
    )
}

proptest! {
    #[test]
    fn value_domains_always_match_the_pooled_maximum(rows in arb_rows()) {
        let data = ChartData::new(rows, "Left", "Right");
        let scales = ScaleSet::configure_domains(&data).expect("domain pass");

        let expected = data
            .rows
            .iter()
            .flat_map(|row| [row.left, row.right])
            .fold(0.0f64, f64::max);

        prop_assert_eq!(scales.left.domain(), (0.0, expected));
        prop_assert_eq!(scales.left.domain(), scales.right.domain());
    }

    #[test]
    fn band_invariants_hold_for_any_row_count_and_height(
        count in 0usize..200,
        height in 16.0f64..4_000.0
    ) {
        let mut scale = BandScale::new(count, 0.7).expect("valid scale");
        scale.set_range(15.0, height).expect("range");

        let step = scale.step();
        let bandwidth = scale.bandwidth();
        prop_assert!(bandwidth <= step);
        prop_assert!((step - bandwidth) / 2.0 >= 0.0);

        if let Some(last) = count.checked_sub(1).and_then(|index| scale.position(index)) {
            prop_assert!(last + bandwidth <= height + 1e-6);
        }
    }

    #[test]
    fn geometry_is_a_pure_function_of_its_inputs(
        width in 1u32..4_000,
        height in 1u32..4_000,
        label_width in 0.0f64..500.0
    ) {
        let viewport = Viewport::new(width, height);
        let first = ChartGeometry::derive(viewport, label_width);
        let second = ChartGeometry::derive(viewport, label_width);

        prop_assert_eq!(first, second);
        prop_assert!((first.graph_width + first.legend_width - first.width).abs() <= 1e-9);
        prop_assert!(first.half_graph_bar_max_width <= first.half_graph_width);
    }

    #[test]
    fn fitted_text_fits_or_is_empty(
        text in "[ -~]{0,48}",
        budget in 0.0f64..400.0
    ) {
        let measurer = CharWidthMeasurer;
        let fitted = fit_text(&measurer, &text, budget, VALUE_LABEL_FONT_SIZE_PX);

        prop_assert!(
            fitted.is_empty()
                || measurer.measure(&fitted, VALUE_LABEL_FONT_SIZE_PX) <= budget
        );

        let refitted = fit_text(&measurer, &fitted, budget, VALUE_LABEL_FONT_SIZE_PX);
        prop_assert_eq!(fitted, refitted);
    }

    #[test]
    fn probed_width_bounds_every_label(rows in arb_rows()) {
        let measurer = CharWidthMeasurer;
        let probed = probe_max_label_width(&measurer, &rows);

        prop_assert!(probed >= 0.0);
        for row in &rows {
            for value in [row.left, row.right] {
                let text = duobar_rs::core::format_measure_value(value);
                prop_assert!(measurer.measure(&text, VALUE_LABEL_FONT_SIZE_PX) <= probed + 1e-9);
            }
        }
    }

    #[test]
    fn bar_lengths_never_exceed_the_budget(
        rows in arb_rows(),
        width in 400u32..2_000,
        height in 100u32..1_200
    ) {
        let data = ChartData::new(rows, "Left", "Right");
        let mut scales = ScaleSet::configure_domains(&data).expect("domain pass");

        let measurer = CharWidthMeasurer;
        let probed = probe_max_label_width(&measurer, &data.rows);
        let geometry = ChartGeometry::derive(Viewport::new(width, height), probed);
        scales
            .configure_ranges(geometry.height, geometry.half_graph_bar_max_width)
            .expect("range pass");

        for row in &data.rows {
            let left = scales.left.scale(row.left).expect("left length");
            let right = scales.right.scale(row.right).expect("right length");
            let budget = geometry.half_graph_bar_max_width.max(1.0) + 1e-9;
            prop_assert!(left <= budget);
            prop_assert!(right <= budget);
        }
    }
}
