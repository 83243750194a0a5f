use duobar_rs::core::text::VALUE_LABEL_FONT_SIZE_PX;
use duobar_rs::core::{
    BarRow, CharWidthMeasurer, TextMeasurer, fit_text, format_measure_value,
    probe_max_label_width,
};

#[test]
fn integral_measure_values_format_without_fraction() {
    assert_eq!(format_measure_value(30.0), "30");
    assert_eq!(format_measure_value(0.0), "0");
    assert_eq!(format_measure_value(-7.0), "-7");
    assert_eq!(format_measure_value(12.5), "12.5");
}

#[test]
fn prober_returns_max_over_both_columns() {
    let measurer = CharWidthMeasurer;
    let rows = vec![
        BarRow::new("Alpha", 10.0, 20.0),
        BarRow::new("Beta", 30.0, 5.0),
    ];

    let expected = measurer.measure("30", VALUE_LABEL_FONT_SIZE_PX);
    let probed = probe_max_label_width(&measurer, &rows);
    assert!((probed - expected).abs() <= 1e-9);

    // The widest label can live in either column.
    let rows = vec![BarRow::new("Gamma", 2.0, 123_456.0)];
    let expected = measurer.measure("123456", VALUE_LABEL_FONT_SIZE_PX);
    assert!((probe_max_label_width(&measurer, &rows) - expected).abs() <= 1e-9);
}

#[test]
fn prober_of_empty_row_set_is_zero() {
    assert_eq!(probe_max_label_width(&CharWidthMeasurer, &[]), 0.0);
}

#[test]
fn fitting_text_that_already_fits_returns_it_unchanged() {
    let measurer = CharWidthMeasurer;
    assert_eq!(
        fit_text(&measurer, "Short", 1000.0, VALUE_LABEL_FONT_SIZE_PX),
        "Short"
    );
    assert_eq!(fit_text(&measurer, "", 0.0, VALUE_LABEL_FONT_SIZE_PX), "");
}

#[test]
fn overlong_text_is_ellipsized_within_the_budget() {
    let measurer = CharWidthMeasurer;
    let name = "An uncomfortably long category legend name";
    let fitted = fit_text(&measurer, name, 100.0, VALUE_LABEL_FONT_SIZE_PX);

    assert!(fitted.ends_with('\u{2026}'));
    assert!(measurer.measure(&fitted, VALUE_LABEL_FONT_SIZE_PX) <= 100.0);
    assert!(fitted.chars().count() < name.chars().count());
}

#[test]
fn impossible_budget_yields_empty_string() {
    let measurer = CharWidthMeasurer;
    // Even one character plus the ellipsis cannot fit in 1px.
    assert_eq!(
        fit_text(&measurer, "Anything", 1.0, VALUE_LABEL_FONT_SIZE_PX),
        ""
    );
}

#[test]
fn fitting_is_idempotent() {
    let measurer = CharWidthMeasurer;
    for (text, budget) in [
        ("An uncomfortably long category legend name", 100.0),
        ("Short", 1000.0),
        ("Anything", 1.0),
        ("Weights & measures, 2024 edition", 55.0),
    ] {
        let once = fit_text(&measurer, text, budget, VALUE_LABEL_FONT_SIZE_PX);
        let twice = fit_text(&measurer, &once, budget, VALUE_LABEL_FONT_SIZE_PX);
        assert_eq!(once, twice, "fit of `{text}` at {budget} not stable");
    }
}

#[test]
fn truncation_terminates_for_every_prefix_length() {
    let measurer = CharWidthMeasurer;
    let text = "abcdefghijklmnopqrstuvwxyz";
    for budget in 0..200 {
        let fitted = fit_text(&measurer, text, f64::from(budget), VALUE_LABEL_FONT_SIZE_PX);
        assert!(
            fitted.is_empty()
                || measurer.measure(&fitted, VALUE_LABEL_FONT_SIZE_PX) <= f64::from(budget)
        );
    }
}
