// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster host for threshold bands; each masked copy is drawn clipped to its band's reveal rect.

pub mod theme;
pub mod types;

use anyhow::{anyhow, Context, Result};
use chart_threshold::{
    Band, BandAssignment, ChartGeometry, ChartKind, Config, DrawPayload, MaskSet, Rect, ShapeKind,
    ThresholdPlugin, ValueAxis,
};
use log::debug;
use skia_safe as skia;

pub use theme::Theme;
pub use types::{Insets, HEIGHT, WIDTH};

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Area,
    Bar,
}

impl SeriesKind {
    /// Chart the plugin attaches to; areas ride on line charts.
    pub fn chart_kind(self) -> ChartKind {
        match self {
            SeriesKind::Line | SeriesKind::Area => ChartKind::Line,
            SeriesKind::Bar => ChartKind::Bar,
        }
    }

    fn shape_kind(self) -> ShapeKind {
        match self {
            SeriesKind::Line => ShapeKind::Line,
            SeriesKind::Area => ShapeKind::Area,
            SeriesKind::Bar => ShapeKind::Bar,
        }
    }
}

/// One (x, y) series to draw with threshold bands.
#[derive(Clone, Debug)]
pub struct ThresholdSeries {
    pub kind: SeriesKind,
    pub data: Vec<(f64, f64)>,
}

impl ThresholdSeries {
    pub fn new(kind: SeriesKind, data: Vec<(f64, f64)>) -> Self { Self { kind, data } }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub stroke_width: f32,
    /// Radius of point markers; 0 disables them.
    pub point_radius: f32,
    pub draw_threshold_rules: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            stroke_width: 3.0,
            point_radius: 4.0,
            draw_threshold_rules: true,
        }
    }
}

impl RenderOptions {
    /// Plot area inside the insets.
    pub fn plot_rect(&self) -> Rect {
        let w = (self.width - self.insets.hsum() as i32).max(1);
        let h = (self.height - self.insets.vsum() as i32).max(1);
        Rect::from_xywh(self.insets.left as f64, self.insets.top as f64, w as f64, h as f64)
    }
}

/// Render `series` with threshold bands into PNG bytes.
pub fn render_to_png_bytes(series: &ThresholdSeries, config: &Config, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    draw(surface.canvas(), series, config, opts)?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `series` with threshold bands to a PNG file.
pub fn render_to_png(
    series: &ThresholdSeries,
    config: &Config,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(series, config, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Draw onto an existing canvas. Runs the full created -> draw lifecycle.
pub fn draw(canvas: &skia::Canvas, series: &ThresholdSeries, config: &Config, opts: &RenderOptions) -> Result<()> {
    canvas.clear(opts.theme.background);

    let plot = opts.plot_rect();
    let axis = ValueAxis::fit_linear(
        plot.height,
        series.data.iter().map(|p| p.1).chain(config.thresholds().as_slice().iter().copied()),
    );
    let geometry = ChartGeometry::new(opts.width as f64, opts.height as f64, plot, &axis);

    let plugin = ThresholdPlugin::new(config.clone());
    let mut chart = plugin
        .attach(series.kind.chart_kind())
        .ok_or_else(|| anyhow!("threshold plugin does not support {:?} series", series.kind))?;
    let masks = chart.on_created(&geometry)?.clone();
    debug!("rendering {:?} series of {} points over {} bands", series.kind, series.data.len(), masks.len());

    if opts.draw_threshold_rules {
        draw_rules(canvas, &plot, masks.projected_rows(), &opts.theme);
    }
    if series.data.is_empty() {
        return Ok(());
    }

    let (x_min, x_max) = x_range(&series.data);
    let sx = |x: f64| -> f32 { (plot.x + (x - x_min) / (x_max - x_min) * plot.width) as f32 };
    let sy = |y: f64| -> f32 { geometry.projected_row(y) as f32 };

    for path in shapes(series, &plot, &sx, &sy) {
        let assignment = chart.on_draw(series.kind.shape_kind(), DrawPayload::Shape(path))?;
        if let BandAssignment::Copies(copies) = assignment {
            for copy in copies {
                draw_masked(canvas, &copy.shape, copy.band, &masks, series.kind, opts)?;
            }
        }
    }

    if opts.point_radius > 0.0 && series.kind != SeriesKind::Bar {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        for &(x, y) in &series.data {
            let band = match chart.on_draw::<skia::Path>(ShapeKind::Point, DrawPayload::Value(y))? {
                BandAssignment::Point { band, .. } => band,
                BandAssignment::Copies(_) => continue,
            };
            paint.set_color(opts.theme.color(band));
            canvas.draw_circle((sx(x), sy(y)), opts.point_radius, &paint);
        }
    }
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn x_range(data: &[(f64, f64)]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &(x, _) in data {
        lo = lo.min(x);
        hi = hi.max(x);
    }
    if !lo.is_finite() || !hi.is_finite() { return (0.0, 1.0); }
    if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
    (lo, hi)
}

/// Host shapes for the series: one path for lines/areas, one per bar.
fn shapes(
    series: &ThresholdSeries,
    plot: &Rect,
    sx: &dyn Fn(f64) -> f32,
    sy: &dyn Fn(f64) -> f32,
) -> Vec<skia::Path> {
    let bottom = plot.bottom() as f32;
    match series.kind {
        SeriesKind::Line | SeriesKind::Area => {
            let mut path = skia::Path::new();
            let (x0, y0) = series.data[0];
            path.move_to((sx(x0), sy(y0)));
            for &(x, y) in series.data.iter().skip(1) {
                path.line_to((sx(x), sy(y)));
            }
            if series.kind == SeriesKind::Area {
                let (xn, _) = series.data[series.data.len() - 1];
                path.line_to((sx(xn), bottom));
                path.line_to((sx(x0), bottom));
                path.close();
            }
            vec![path]
        }
        SeriesKind::Bar => {
            let n = series.data.len() as f32;
            let half = ((plot.width as f32 / n).max(3.0) * 0.7) * 0.5;
            series
                .data
                .iter()
                .map(|&(x, y)| {
                    let (cx, top) = (sx(x), sy(y));
                    let rect = skia::Rect::from_ltrb(cx - half, top.min(bottom), cx + half, bottom.max(top));
                    let mut path = skia::Path::new();
                    path.add_rect(rect, None);
                    path
                })
                .collect()
        }
    }
}

fn draw_masked(
    canvas: &skia::Canvas,
    shape: &skia::Path,
    band: Band,
    masks: &MaskSet,
    kind: SeriesKind,
    opts: &RenderOptions,
) -> Result<()> {
    let mask = masks.get(band).ok_or_else(|| anyhow!("no mask for band {band:?}"))?;
    let r = mask.reveal;
    let clip = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(opts.theme.color(band));
    match kind {
        SeriesKind::Line => {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(opts.stroke_width);
        }
        SeriesKind::Area | SeriesKind::Bar => {
            paint.set_style(skia::paint::Style::Fill);
        }
    }

    canvas.save();
    canvas.clip_rect(clip, skia::ClipOp::Intersect, false);
    canvas.draw_path(shape, &paint);
    canvas.restore();
    Ok(())
}

fn draw_rules(canvas: &skia::Canvas, plot: &Rect, rows: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.threshold_rule);
    paint.set_stroke_width(1.0);
    for &row in rows {
        let y = row as f32;
        canvas.draw_line((plot.left() as f32, y), (plot.right() as f32, y), &paint);
    }
}
