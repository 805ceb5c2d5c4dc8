//! `plateview` command-line renderer.
//!
//! Reads a parameter file (camelCase JSON, any field may be omitted) and
//! writes the plate as SVG or PNG. Set `RUST_LOG=plateview=debug` to see the
//! computed layout.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use plateview::{
    FontResolver, ParameterSet, RemoteFonts, SvgOptions, Viewport, render_with_fonts,
    resolve_scale, scene_to_svg,
};
use plateview_export::{DEFAULT_SCALE_FACTOR, EmbeddedFonts, ExportOptions, export_png};

#[derive(Parser)]
#[command(name = "plateview", about = "Render registration plate previews", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the plate as an SVG document.
    Svg(SvgArgs),
    /// Rasterize the plate to PNG.
    Png(PngArgs),
}

#[derive(Args)]
struct SvgArgs {
    /// Parameter file; defaults are used when omitted.
    params: Option<Utf8PathBuf>,

    /// Output file (stdout when omitted).
    #[arg(long, short)]
    out: Option<Utf8PathBuf>,

    /// Size the document for a container this many pixels wide.
    #[arg(long, value_name = "PX")]
    viewport_width: Option<f64>,

    /// Embed fonts from this directory instead of referencing them by URL.
    #[arg(long, value_name = "DIR")]
    embed_fonts: Option<Utf8PathBuf>,

    /// Write the document on a single line.
    #[arg(long)]
    compact: bool,
}

#[derive(Args)]
struct PngArgs {
    /// Parameter file; defaults are used when omitted.
    params: Option<Utf8PathBuf>,

    /// Output file (`kennzeichen_<text>.png` when omitted).
    #[arg(long, short)]
    out: Option<Utf8PathBuf>,

    /// Pixels per millimeter.
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale: f32,

    /// Directory holding EuroPlate.ttf and DIN1451.ttf.
    #[arg(long, value_name = "DIR")]
    fonts: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Svg(args) => run_svg(args),
        Commands::Png(args) => run_png(args),
    }
}

fn load_params(path: Option<&Utf8Path>) -> Result<ParameterSet> {
    let Some(path) = path else {
        return Ok(ParameterSet::default());
    };
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {path}"))?;
    serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid parameter file {path}"))
}

fn run_svg(args: SvgArgs) -> Result<()> {
    let params = load_params(args.params.as_deref())?;

    let fonts: Box<dyn FontResolver> = match &args.embed_fonts {
        Some(dir) => Box::new(EmbeddedFonts::load(dir)),
        None => Box::new(RemoteFonts),
    };
    let scene = render_with_fonts(&params, fonts.as_ref())?;

    let display = args
        .viewport_width
        .map(|w| resolve_scale(scene.width, scene.height, Viewport::for_container(w)))
        .transpose()?;
    let svg = scene_to_svg(
        &scene,
        &SvgOptions { display, pretty: !args.compact, ..Default::default() },
    );

    match &args.out {
        Some(out) => {
            std::fs::write(out, svg)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {out}"))?;
            tracing::info!(%out, primitives = scene.len(), "wrote SVG");
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn run_png(args: PngArgs) -> Result<()> {
    let params = load_params(args.params.as_deref())?;
    let options = ExportOptions {
        scale_factor: args.scale,
        font_dir: args.fonts,
        ..Default::default()
    };
    let export = export_png(&params, &options)?;

    let out = args.out.unwrap_or_else(|| Utf8PathBuf::from(&export.file_name));
    std::fs::write(&out, &export.bytes)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {out}"))?;
    tracing::info!(%out, bytes = export.bytes.len(), "wrote PNG");
    Ok(())
}
