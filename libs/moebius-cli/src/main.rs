//! Möbius strip mesh generator — command-line front end.

use clap::Parser;
use config::constants::{DEFAULT_LENGTH_COUNT, DEFAULT_TWIST_INDEX, DEFAULT_WIDTH_COUNT};
use moebius_io::CellBlock;
use moebius_mesh::{create_moebius_strip, StripParams};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moebius")]
#[command(version, about = "Construct a triangulation of the Möbius strip")]
struct Cli {
    /// File to be written to.
    filename: PathBuf,

    /// Möbius index, the number of half-twists.
    #[arg(short, long, allow_negative_numbers = true, default_value_t = DEFAULT_TWIST_INDEX)]
    index: i32,

    /// Number of discretization points in length and width of the strip.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["LENGTH", "WIDTH"],
        default_values_t = [DEFAULT_LENGTH_COUNT, DEFAULT_WIDTH_COUNT]
    )]
    num: Vec<u32>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let params = StripParams::with_resolution(cli.num[0], cli.num[1], cli.index);
    let mesh = create_moebius_strip(&params)?;

    let blocks = [CellBlock::triangles(mesh.triangles().to_vec())];
    moebius_io::write_mesh(&cli.filename, mesh.vertices(), &blocks)?;

    eprintln!("wrote {}", cli.filename.display());
    eprintln!(
        "vertices={} triangles={}",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
