//! Vesper Viewer - Standalone backdrop window
//!
//! Runs one animated backdrop field in a window, with simulated page
//! scrolling on the mouse wheel.
//!
//! Usage:
//!   vesper-viewer <stars|motes|flyer> [--theme dark|light|fandom] [--config <toml>]

use anyhow::{Context, Result};
use clap::Parser;
use vesper_field::{BackdropConfig, FieldKind};
use vesper_render::Theme;
use vesper_viewer::ViewerApp;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "vesper-viewer")]
#[command(about = "Vesper backdrop viewer - run an animated field in a window")]
struct Args {
    /// Field kind: stars, motes, or flyer
    kind: String,

    /// Color theme
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Path to a tuning TOML file (defaults apply when omitted)
    #[arg(long)]
    config: Option<String>,

    /// Content height as a multiple of the viewport height
    #[arg(long, default_value_t = 1.0)]
    page_factor: f32,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let kind: FieldKind = args.kind.parse().context("Invalid field kind")?;
    let theme: Theme = args.theme.parse().context("Invalid theme")?;

    let config = match &args.config {
        Some(path) => {
            BackdropConfig::load(path).with_context(|| format!("Failed to load config {path}"))?
        }
        None => BackdropConfig::default(),
    };

    println!("Vesper backdrop: {:?} field, {:?} theme", kind, theme);
    println!("Controls:");
    println!("  Mouse   - Stars fall faster near the cursor");
    println!("  Wheel   - Scroll the simulated page");
    println!("  Escape  - Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(kind, theme, config, args.page_factor, args.fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}
