use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use image::Rgba;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scanfill::raster::{fill_spans, Axis, FillCfg, PixelSet, Span};
use scanfill::shapes::{match_vertex_count, morph as morph_frames, regular_polygon};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod canvas;
mod input;
mod provenance;

use canvas::{paint, parse_hex_color, save_png, CanvasCfg};
use input::PolygonArgs;
use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "scanfill")]
#[command(about = "Scanline polygon rasterizer")]
struct Cmd {
    /// Log debug events (per-fill summaries, dropped intersections)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rasterize a polygon and write its pixels and spans as JSON
    Fill {
        #[command(flatten)]
        polygon: PolygonArgs,
        /// Sweep axis: y (rows) or x (columns)
        #[arg(long, default_value = "y")]
        axis: Axis,
        #[arg(long)]
        out: PathBuf,
    },
    /// Rasterize a polygon into a PNG
    Render {
        #[command(flatten)]
        polygon: PolygonArgs,
        #[arg(long, default_value = "y")]
        axis: Axis,
        #[command(flatten)]
        canvas: CanvasArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Morph a regular polygon into another and render every frame
    Morph {
        #[arg(long, default_value_t = 10)]
        from_sides: usize,
        #[arg(long, default_value_t = 3)]
        to_sides: usize,
        #[arg(long, default_value_t = 3)]
        steps: usize,
        /// Circumradius in pixels
        #[arg(long, default_value_t = 40.0)]
        radius: f64,
        /// Seed for choosing which vertices are added or removed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[command(flatten)]
        canvas: CanvasArgs,
        /// Directory receiving frame_000.png, frame_001.png, ...
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct CanvasArgs {
    #[arg(long, default_value_t = 100)]
    width: u32,
    #[arg(long, default_value_t = 100)]
    height: u32,
    #[arg(long, default_value = "#ffffff", value_parser = parse_hex_color)]
    background: Rgba<u8>,
    #[arg(long, default_value = "#000000", value_parser = parse_hex_color)]
    color: Rgba<u8>,
    /// Buffer column of x = 0 (defaults to 0, or the centre for `morph`)
    #[arg(long)]
    origin_x: Option<i64>,
    /// Buffer row of y = 0 (defaults to 0, or the centre for `morph`)
    #[arg(long)]
    origin_y: Option<i64>,
    /// Larger y drawn higher (mathematical orientation)
    #[arg(long)]
    flip_y: bool,
}

impl CanvasArgs {
    fn to_cfg(&self, default_origin: (i64, i64)) -> CanvasCfg {
        CanvasCfg {
            width: self.width,
            height: self.height,
            background: self.background,
            foreground: self.color,
            origin: (
                self.origin_x.unwrap_or(default_origin.0),
                self.origin_y.unwrap_or(default_origin.1),
            ),
            flip_y: self.flip_y,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Fill { polygon, axis, out } => fill(&polygon, axis, &out),
        Action::Render {
            polygon,
            axis,
            canvas,
            out,
        } => render(&polygon, axis, &canvas, &out),
        Action::Morph {
            from_sides,
            to_sides,
            steps,
            radius,
            seed,
            canvas,
            out_dir,
        } => morph(
            MorphParams {
                from_sides,
                to_sides,
                steps,
                radius,
                seed,
            },
            &canvas,
            &out_dir,
        ),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct SpanOut {
    line: i64,
    start: i64,
    end: i64,
}

#[derive(Serialize)]
struct FillOut {
    axis: String,
    vertices: usize,
    pixel_count: usize,
    pixels: Vec<[i64; 2]>,
    spans: Vec<SpanOut>,
}

fn rasterize(polygon: &PolygonArgs, axis: Axis) -> Result<(usize, Vec<Span>, PixelSet)> {
    let vertices = polygon.load()?;
    let spans = fill_spans(&vertices, FillCfg { axis })
        .with_context(|| format!("rasterizing {}", polygon.describe()))?;
    let pixels = PixelSet::from_spans(&spans);
    Ok((vertices.len(), spans, pixels))
}

fn fill(polygon: &PolygonArgs, axis: Axis, out: &Path) -> Result<()> {
    let source = polygon.describe();
    tracing::info!(source, %axis, out = %out.display(), "fill");
    let (vertices, spans, pixels) = rasterize(polygon, axis)?;
    let doc = FillOut {
        axis: axis.to_string(),
        vertices,
        pixel_count: pixels.len(),
        pixels: pixels.iter().map(|&(x, y)| [x, y]).collect(),
        spans: spans
            .iter()
            .map(|s| SpanOut {
                line: s.line,
                start: s.start,
                end: s.end,
            })
            .collect(),
    };
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(pixels = pixels.len(), spans = spans.len(), "fill_done");

    write_sidecar(
        out,
        Payload::new(
            "fill",
            json!({ "source": source, "axis": axis.to_string(), "vertices": vertices }),
        ),
    )?;
    Ok(())
}

fn render(polygon: &PolygonArgs, axis: Axis, canvas: &CanvasArgs, out: &Path) -> Result<()> {
    let source = polygon.describe();
    tracing::info!(source, %axis, out = %out.display(), "render");
    let (vertices, _, pixels) = rasterize(polygon, axis)?;
    let cfg = canvas.to_cfg((0, 0));
    let painted = paint(&pixels, &cfg);
    if painted.clipped > 0 {
        tracing::warn!(clipped = painted.clipped, "pixels outside the canvas were clipped");
    }
    save_png(&painted.image, out)?;
    tracing::info!(drawn = painted.drawn, "render_done");

    write_sidecar(
        out,
        Payload::new(
            "render",
            json!({
                "source": source,
                "axis": axis.to_string(),
                "vertices": vertices,
                "width": cfg.width,
                "height": cfg.height,
                "origin": [cfg.origin.0, cfg.origin.1],
                "flip_y": cfg.flip_y,
            }),
        ),
    )?;
    Ok(())
}

struct MorphParams {
    from_sides: usize,
    to_sides: usize,
    steps: usize,
    radius: f64,
    seed: u64,
}

fn morph(p: MorphParams, canvas: &CanvasArgs, out_dir: &Path) -> Result<()> {
    tracing::info!(
        from_sides = p.from_sides,
        to_sides = p.to_sides,
        steps = p.steps,
        out_dir = %out_dir.display(),
        "morph"
    );
    let mut start = regular_polygon(p.from_sides, p.radius)?;
    let end = regular_polygon(p.to_sides, p.radius)?;
    let mut rng = StdRng::seed_from_u64(p.seed);
    match_vertex_count(&mut start, end.len(), &mut rng)?;
    let frames = morph_frames(&start, &end, p.steps)?;

    let centre = (i64::from(canvas.width) / 2, i64::from(canvas.height) / 2);
    let cfg = canvas.to_cfg(centre);
    let mut outputs = Vec::with_capacity(frames.len());
    for (k, frame) in frames.iter().enumerate() {
        let pixels = scanfill::fill(frame).with_context(|| format!("rasterizing frame {k}"))?;
        let painted = paint(&pixels, &cfg);
        let path = out_dir.join(format!("frame_{k:03}.png"));
        save_png(&painted.image, &path)?;
        tracing::debug!(frame = k, pixels = pixels.len(), clipped = painted.clipped, "frame");
        outputs.push(path);
    }
    tracing::info!(frames = outputs.len(), "morph_done");

    let manifest = out_dir.join("frames.json");
    let names: Vec<String> = outputs.iter().map(|p| p.display().to_string()).collect();
    std::fs::write(&manifest, serde_json::to_vec_pretty(&names)?)
        .with_context(|| format!("writing {}", manifest.display()))?;
    write_sidecar(
        &manifest,
        Payload::new(
            "morph",
            json!({
                "from_sides": p.from_sides,
                "to_sides": p.to_sides,
                "steps": p.steps,
                "radius": p.radius,
                "seed": p.seed,
            }),
        ),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "scanfill_version": scanfill::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
