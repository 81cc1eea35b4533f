use gridmap_core::Scene;
use gridmap_render::{RasterOptions, render_png};

/// Where the finished picture lands, relative to the invocation directory.
/// The path is fixed; the program takes no arguments and reads no
/// environment.
const OUTPUT_PATH: &str = "docs/development/team_work_architecture.png";

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Render(gridmap_render::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<gridmap_render::Error> for CliError {
    fn from(value: gridmap_render::Error) -> Self {
        Self::Render(value)
    }
}

fn run() -> Result<(), CliError> {
    let scene = Scene::architecture_map();
    let bytes = render_png(&scene, &RasterOptions::default())?;
    std::fs::write(OUTPUT_PATH, bytes)?;
    println!("PNG successfully created at {OUTPUT_PATH}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
