//! # Lienzo CLI
//!
//! Command-line interface for rendering attractors to image files.
//!
//! ## Usage
//!
//! ```bash
//! # List available attractors
//! lienzo render
//!
//! # Render a hopalong to PNG
//! lienzo render hopalong hopalong.png
//!
//! # Render to 16-bit BMP instead (chosen by extension)
//! lienzo render hopalong hopalong.bmp
//!
//! # More iterations, custom parameters, antialiased
//! lienzo render hopalong out.png --iterations 10000000 --a 2 --b 1 --antialias
//!
//! # Color through a gradient file (R G B per line)
//! lienzo render pickover out.png --gradient fire.grad
//!
//! # Roll random parameters
//! lienzo render pickover out.png --random
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lienzo::{
    LienzoError,
    art::{self, Attractor, Hopalong, Pickover},
    canvas::Canvas,
    encode::{bmp, png},
    gradient::Gradient,
};

/// Lienzo - strange attractor renderer
#[derive(Parser, Debug)]
#[command(name = "lienzo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an attractor to a BMP or PNG file
    Render {
        /// Attractor to render (omit to see available maps)
        attractor: Option<String>,

        /// Output file; a .bmp extension selects BMP, anything else PNG
        output: Option<PathBuf>,

        /// List available attractors
        #[arg(long)]
        list: bool,

        /// Points to plot
        #[arg(long, default_value_t = 1_000_000, value_parser = clap::value_parser!(u64).range(1..))]
        iterations: u64,

        /// Horizontal resolution (defaults to the attractor's preference)
        #[arg(long)]
        x_res: Option<u32>,

        /// Vertical resolution (defaults to the attractor's preference)
        #[arg(long)]
        y_res: Option<u32>,

        /// Override the attractor's `a` parameter
        #[arg(long)]
        a: Option<f64>,

        /// Override the attractor's `b` parameter
        #[arg(long)]
        b: Option<f64>,

        /// Override the attractor's `c` parameter
        #[arg(long)]
        c: Option<f64>,

        /// Override the attractor's `d` parameter (pickover only)
        #[arg(long)]
        d: Option<f64>,

        /// Gradient file: one `R G B` line per control point
        #[arg(long, value_name = "FILE")]
        gradient: Option<PathBuf>,

        /// Comment embedded in PNG output
        #[arg(long)]
        comment: Option<String>,

        /// Run one antialiasing pass before encoding
        #[arg(long)]
        antialias: bool,

        /// Randomize the attractor parameters
        #[arg(long)]
        random: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LienzoError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            attractor,
            output,
            list,
            iterations,
            x_res,
            y_res,
            a,
            b,
            c,
            d,
            gradient,
            comment,
            antialias,
            random,
        } => {
            // List attractors if --list flag or no attractor specified
            if list || attractor.is_none() {
                println!("Available attractors:");
                for &name in art::ATTRACTORS {
                    if let Some(map) = art::by_name(name) {
                        println!("  {:10} {}", name, map.params_description());
                    }
                }
                return Ok(());
            }

            let name = attractor.unwrap_or_default();
            let map = build_attractor(&name, random, a, b, c, d)?;
            let output = output.ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "no output file given")
            })?;

            let (pref_x, pref_y) = map.default_resolution();
            let mut canvas = Canvas::new(
                map.default_domain(),
                x_res.unwrap_or(pref_x),
                y_res.unwrap_or(pref_y),
            );

            println!(
                "Rendering {} ({}) at {}x{}",
                map.name(),
                map.params_description(),
                canvas.x_res(),
                canvas.y_res()
            );
            render_with_progress(map.as_ref(), &mut canvas, iterations)?;

            let gradient = match gradient {
                Some(path) => Gradient::parse(&fs::read_to_string(path)?),
                None => Gradient::new(vec![[0, 0, 0], [0, 255, 0]]),
            };

            let mut pixels = canvas.colorize(&gradient);
            if antialias {
                pixels = pixels.antialias();
            }

            if has_bmp_extension(&output) {
                bmp::write_file(&output, &pixels)?;
            } else {
                let comment = comment
                    .unwrap_or_else(|| format!("{} {}", map.name(), map.params_description()));
                png::write_file(&output, &pixels, &comment)?;
            }
            println!("Wrote {}", output.display());
            Ok(())
        }
    }
}

/// Build the named attractor, optionally randomized, with any
/// individually overridden parameters applied on top.
fn build_attractor(
    name: &str,
    random: bool,
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    d: Option<f64>,
) -> Result<Box<dyn Attractor>, LienzoError> {
    match name.to_lowercase().as_str() {
        "hopalong" => {
            let mut map = if random {
                Hopalong::random()
            } else {
                Hopalong::default()
            };
            if let Some(v) = a {
                map.a = v;
            }
            if let Some(v) = b {
                map.b = v;
            }
            if let Some(v) = c {
                map.c = v;
            }
            Ok(Box::new(map))
        }
        "pickover" => {
            let mut map = if random {
                Pickover::random()
            } else {
                Pickover::default()
            };
            if let Some(v) = a {
                map.a = v;
            }
            if let Some(v) = b {
                map.b = v;
            }
            if let Some(v) = c {
                map.c = v;
            }
            if let Some(v) = d {
                map.d = v;
            }
            Ok(Box::new(map))
        }
        other => Err(LienzoError::UnknownAttractor(other.to_string())),
    }
}

/// Plot the orbit while printing an 80-column progress strip.
fn render_with_progress(
    map: &dyn Attractor,
    canvas: &mut Canvas,
    iterations: u64,
) -> Result<(), LienzoError> {
    print!("          ");
    for _ in 0..80 {
        print!("-");
    }
    print!("\nProgress: ");
    io::stdout().flush()?;

    let interval = (iterations / 80).max(1);
    art::plot_with_progress(map, canvas, iterations, |i| {
        if i % interval == 0 {
            print!("*");
            let _ = io::stdout().flush();
        }
    });
    println!();
    Ok(())
}

fn has_bmp_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("bmp"))
}
