//! Render the default plate with debug logging.
//!
//! Run with: RUST_LOG=plateview=debug cargo run --example render_default --features tracing

use plateview::{ParameterSet, SvgOptions, Viewport, render, resolve_scale, scene_to_svg};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plateview=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = ParameterSet::default();
    match render(&params) {
        Ok(scene) => {
            let display = resolve_scale(scene.width, scene.height, Viewport::for_container(1024.0))
                .expect("default plate has a valid size");
            let svg = scene_to_svg(&scene, &SvgOptions { display: Some(display), ..Default::default() });
            println!("{}", svg);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
