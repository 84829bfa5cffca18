// File: crates/demo/src/main.rs
// Summary: Demo loads an (x, y) CSV plus optional JSON threshold options and writes banded SVG + PNG charts.
// Usage: threshold-demo [series.csv|-] [options.json] [line|area|bar]  (THRESHOLD_THEME=light|dark|solarized-dark)

use anyhow::{Context, Result};
use chart_render_skia::{RenderOptions, SeriesKind, ThresholdSeries};
use chart_threshold::svg::{polyline_path, tag_point};
use chart_threshold::{
    BandAssignment, ChartGeometry, Config, DrawPayload, ShapeKind, SvgDocument, SvgElement, ThresholdPlugin,
    ValueAxis,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let csv_arg = args.next();
    let options_arg = args.next();
    let kind = match args.next().as_deref() {
        None | Some("line") => SeriesKind::Line,
        Some("area") => SeriesKind::Area,
        Some("bar") => SeriesKind::Bar,
        Some(other) => anyhow::bail!("unknown series kind '{other}' (expected line, area or bar)"),
    };

    let (data, stem) = match csv_arg.as_deref() {
        Some(raw) if raw != "-" => {
            let path = resolve_path(raw)?;
            println!("Using input file: {}", path.display());
            let data = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("series").to_string();
            (data, stem)
        }
        _ => {
            println!("No input file given; using a generated sine series");
            (sine_series(120), "sine".to_string())
        }
    };
    if data.is_empty() {
        anyhow::bail!("no rows loaded; expected columns x,y");
    }
    println!("Loaded {} points", data.len());

    let config = match options_arg.as_deref() {
        Some(p) => {
            let json = std::fs::read_to_string(p).with_context(|| format!("reading options '{p}'"))?;
            Config::from_json(&json).with_context(|| format!("invalid threshold options in '{p}'"))?
        }
        None => default_config(&data)?,
    };
    println!("Thresholds: {:?}", config.thresholds().as_slice());

    let series = ThresholdSeries::new(kind, data);
    let mut opts = RenderOptions::default();
    if let Ok(name) = std::env::var("THRESHOLD_THEME") {
        opts.theme = chart_render_skia::theme::find(&name);
        println!("Theme: {}", opts.theme.name);
    }

    let out_png = out_name_with(&stem, kind, "png");
    chart_render_skia::render_to_png(&series, &config, &opts, &out_png)?;
    println!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    let doc = render_svg(&series, &config, &opts)?;
    std::fs::write(&out_svg, doc.to_svg_string()).with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

/// Thresholds at the upper and lower quartile of the data range when no options are given.
fn default_config(data: &[(f64, f64)]) -> Result<Config> {
    let (lo, hi) = minmax_xy(data);
    let span = hi - lo;
    Ok(Config::builder().thresholds([lo + span * 0.75, lo + span * 0.25]).build()?)
}

/// SVG host: builds masks into <defs>, then draws the series and its points with band tags.
fn render_svg(series: &ThresholdSeries, config: &Config, opts: &RenderOptions) -> Result<SvgDocument> {
    let plot = opts.plot_rect();
    let axis = ValueAxis::fit_linear(
        plot.height,
        series.data.iter().map(|p| p.1).chain(config.thresholds().as_slice().iter().copied()),
    );
    let geometry = ChartGeometry::new(opts.width as f64, opts.height as f64, plot, &axis);

    let plugin = ThresholdPlugin::new(config.clone());
    let mut chart = plugin.attach(series.kind.chart_kind()).context("threshold plugin refused chart kind")?;

    let mut doc = SvgDocument::new(opts.width as f64, opts.height as f64);
    doc.register_masks(chart.on_created(&geometry)?);

    let (x_min, x_max) = minmax_x(&series.data);
    let x_span = (x_max - x_min).max(1e-9);
    let sx = |x: f64| plot.x + (x - x_min) / x_span * plot.width;
    let pixels: Vec<(f64, f64)> = series.data.iter().map(|&(x, y)| (sx(x), geometry.projected_row(y))).collect();

    let group = doc.group("ct-series");
    match series.kind {
        SeriesKind::Line | SeriesKind::Area => {
            let (shape_kind, class, d) = if series.kind == SeriesKind::Line {
                (ShapeKind::Line, "ct-line", polyline_path(&pixels))
            } else {
                let mut ring = pixels.clone();
                ring.push((pixels[pixels.len() - 1].0, plot.bottom()));
                ring.push((pixels[0].0, plot.bottom()));
                (ShapeKind::Area, "ct-area", format!("{}Z", polyline_path(&ring)))
            };
            let path = SvgElement::new("path").attr("d", d).attr("class", class);
            group.apply_assignment(chart.on_draw(shape_kind, DrawPayload::Shape(path))?);

            for (&(_, y), &(px, py)) in series.data.iter().zip(&pixels) {
                let mut point = SvgElement::new("line")
                    .attr("x1", px)
                    .attr("y1", py)
                    .attr("x2", px + 0.01)
                    .attr("y2", py)
                    .attr("class", "ct-point");
                let assignment: BandAssignment<SvgElement> = chart.on_draw(ShapeKind::Point, DrawPayload::Value(y))?;
                tag_point(&mut point, &assignment);
                group.elem(point);
            }
        }
        SeriesKind::Bar => {
            for &(px, py) in &pixels {
                let bar = SvgElement::new("line")
                    .attr("x1", px)
                    .attr("y1", plot.bottom())
                    .attr("x2", px)
                    .attr("y2", py)
                    .attr("class", "ct-bar");
                group.apply_assignment(chart.on_draw(ShapeKind::Bar, DrawPayload::Shape(bar))?);
            }
        }
    }
    Ok(doc)
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            println!("  (extension swapped between .csv/.cvs)");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/thresholds_<stem>_<kind>.<ext>
fn out_name_with(stem: &str, kind: SeriesKind, ext: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    let kind = format!("{kind:?}").to_lowercase();
    out.push(format!("thresholds_{stem}_{kind}.{ext}"));
    out
}

/// Load an (x, y) CSV. Missing x column falls back to the row index.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    log::debug!("CSV headers: {:?}", headers);
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_x = idx(&["x", "time", "timestamp", "index", "date"]);
    let i_y = idx(&["y", "value", "close", "v"]).context("no y/value column in CSV header")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let Some(y) = parse(i_y) else {
            log::warn!("skipping row {}: unparseable y value", row + 1);
            continue;
        };
        let x = i_x.and_then(parse).unwrap_or(row as f64);
        out.push((x, y));
    }
    Ok(out)
}

fn sine_series(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i as f64 * 0.08).sin() * 40.0 + 50.0)).collect()
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn minmax_x(v: &[(f64, f64)]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &(x, _) in v {
        min_v = min_v.min(x);
        max_v = max_v.max(x);
    }
    (min_v, max_v)
}

fn minmax_xy(v: &[(f64, f64)]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &(_, y) in v {
        min_v = min_v.min(y);
        max_v = max_v.max(y);
    }
    (min_v, max_v)
}
