// File: crates/chart-render-skia/tests/bands.rs
// Purpose: Rendered pixels take the color of the band they fall in.

use chart_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, SeriesKind, Theme, ThresholdSeries};
use chart_threshold::{Band, ChartKind, Config};
use skia_safe as skia;

fn opts() -> RenderOptions {
    RenderOptions {
        width: 320,
        height: 200,
        point_radius: 0.0,
        draw_threshold_rules: false,
        ..RenderOptions::default()
    }
}

fn count_color(png: &[u8], color: skia::Color) -> usize {
    let img = image::load_from_memory(png).expect("decode png").to_rgba8();
    let want = [color.r(), color.g(), color.b(), 255];
    img.pixels().filter(|p| p.0 == want).count()
}

fn ramp(n: usize, lo: f64, hi: f64) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, lo + (hi - lo) * i as f64 / (n - 1) as f64)).collect()
}

#[test]
fn flat_line_above_threshold_uses_only_above_color() {
    let theme = Theme::dark();
    let config = Config::builder().threshold(50.0).build().unwrap();
    let series = ThresholdSeries::new(SeriesKind::Line, vec![(0.0, 80.0), (5.0, 80.0), (10.0, 80.0)]);
    let png = render_to_png_bytes(&series, &config, &opts()).expect("render");
    assert!(count_color(&png, theme.color(Band::Above)) > 0);
    assert_eq!(count_color(&png, theme.color(Band::Below)), 0);
}

#[test]
fn crossing_line_is_split_between_bands() {
    let theme = Theme::dark();
    let config = Config::builder().threshold(50.0).build().unwrap();
    let series = ThresholdSeries::new(SeriesKind::Line, ramp(11, 0.0, 100.0));
    let png = render_to_png_bytes(&series, &config, &opts()).expect("render");
    assert!(count_color(&png, theme.color(Band::Above)) > 0);
    assert!(count_color(&png, theme.color(Band::Below)) > 0);
}

#[test]
fn every_band_of_three_thresholds_is_drawn() {
    let theme = Theme::dark();
    let config = Config::builder().thresholds([75.0, 50.0, 25.0]).build().unwrap();
    let series = ThresholdSeries::new(SeriesKind::Area, ramp(21, 0.0, 100.0));
    let png = render_to_png_bytes(&series, &config, &opts()).expect("render");
    for band in [Band::Above, Band::Interior(0), Band::Interior(1), Band::Below] {
        assert!(count_color(&png, theme.color(band)) > 0, "no pixels for {band:?}");
    }
}

#[test]
fn bars_below_threshold_stay_below_color() {
    let theme = Theme::dark();
    let config = Config::builder().threshold(50.0).build().unwrap();
    let low = ThresholdSeries::new(SeriesKind::Bar, vec![(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)]);
    let png = render_to_png_bytes(&low, &config, &opts()).expect("render");
    assert!(count_color(&png, theme.color(Band::Below)) > 0);
    assert_eq!(count_color(&png, theme.color(Band::Above)), 0);

    let tall = ThresholdSeries::new(SeriesKind::Bar, vec![(0.0, 10.0), (1.0, 90.0)]);
    let png = render_to_png_bytes(&tall, &config, &opts()).expect("render");
    assert!(count_color(&png, theme.color(Band::Above)) > 0);
}

#[test]
fn points_take_their_band_color() {
    let theme = Theme::dark();
    let config = Config::builder().threshold(50.0).build().unwrap();
    let mut o = opts();
    o.point_radius = 5.0;
    o.stroke_width = 0.5;
    let series = ThresholdSeries::new(SeriesKind::Line, vec![(0.0, 90.0), (10.0, 10.0)]);
    let png = render_to_png_bytes(&series, &config, &o).expect("render");
    assert!(count_color(&png, theme.color(Band::Above)) > 0);
    assert!(count_color(&png, theme.color(Band::Below)) > 0);
}

#[test]
fn writes_png_file() {
    let config = Config::default();
    let series = ThresholdSeries::new(SeriesKind::Line, ramp(5, -2.0, 2.0));
    let out = std::path::PathBuf::from("target/test_out/threshold_line.png");
    render_to_png(&series, &config, &opts(), &out).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn series_kinds_map_onto_supported_chart_kinds() {
    assert_eq!(SeriesKind::Line.chart_kind(), ChartKind::Line);
    assert_eq!(SeriesKind::Area.chart_kind(), ChartKind::Line);
    assert_eq!(SeriesKind::Bar.chart_kind(), ChartKind::Bar);
}
