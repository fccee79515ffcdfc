//! tab2geo - convert a point/polygon table pair to PGEOMETRY text.
//!
//! Usage:
//!   tab2geo <td geo folder>
//!   tab2geo <points file path> <polygons file path>
//!
//! Failures are reported on stdout; the exit status is always 0.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;

use tabgeo::geometry::Geometry;
use tabgeo::io::{self, LoadOptions};
use tabgeo::mesh;

#[derive(Parser)]
#[command(name = "tab2geo")]
#[command(version, about = "Convert tabular point/polygon tables to PGEOMETRY text", long_about = None)]
struct Cli {
    /// Geometry folder holding pnt.txt and pol.txt, or the points file
    /// followed by the polygons file
    #[arg(value_name = "INPUT", required = true, num_args = 1..=2)]
    inputs: Vec<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "dump.geo")]
    output: PathBuf,

    /// Print geometry and triangulation statistics
    #[arg(long)]
    info: bool,
}

/// Where the two tables come from.
enum Input {
    Folder(PathBuf),
    Tables { points: PathBuf, polygons: PathBuf },
}

impl Input {
    fn from_args(mut inputs: Vec<PathBuf>) -> Option<Self> {
        match inputs.len() {
            1 => inputs.pop().map(Input::Folder),
            2 => {
                let polygons = inputs.pop()?;
                let points = inputs.pop()?;
                Some(Input::Tables { points, polygons })
            }
            _ => None,
        }
    }

    fn table_paths(&self) -> (PathBuf, PathBuf) {
        match self {
            Input::Folder(folder) => LoadOptions::new().table_paths(folder),
            Input::Tables { points, polygons } => (points.clone(), polygons.clone()),
        }
    }
}

fn show_help() {
    println!("Usage:");
    println!("tab2geo <td geo folder>");
    println!("OR");
    println!("tab2geo <points file path> <polygons file path>");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(cli) = parse_args(std::env::args_os()) else {
        return;
    };

    // Exit status stays 0 on failure
    if let Err(e) = run(cli) {
        println!("Error: {}", e);
    }
}

/// Parse the command line, printing help or usage when it can't be run.
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                }
                _ => show_help(),
            }
            None
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(input) = Input::from_args(cli.inputs) else {
        show_help();
        return Ok(());
    };

    let geometry = convert(&input, &cli.output)?;
    println!("Saved to {}", cli.output.display());

    if cli.info {
        let (points_path, polygons_path) = input.table_paths();
        print_info(&geometry, &points_path, &polygons_path);
    }

    Ok(())
}

/// Load the tables and dump whatever was loaded to `output`.
///
/// A load failure is reported and the partial geometry is still written.
fn convert(input: &Input, output: &Path) -> tabgeo::error::Result<Geometry> {
    let (points_path, polygons_path) = input.table_paths();
    let mut geometry = Geometry::new();
    if let Err(e) = geometry.load(&points_path, &polygons_path) {
        println!("Can't load geometry info: {}", e);
    }

    io::geo::save(&geometry, output)?;
    Ok(geometry)
}

fn print_info(geometry: &Geometry, points_path: &Path, polygons_path: &Path) {
    println!("Points file: {}", points_path.display());
    println!("Polygons file: {}", polygons_path.display());
    println!("Points: {}", geometry.num_points());
    println!("Polygons: {}", geometry.num_polygons());

    let triangles = geometry.polygons().iter().filter(|p| p.is_triangle()).count();
    let quads = geometry.polygons().iter().filter(|p| p.is_quad()).count();
    println!(
        "Polygon types: {} triangles, {} quads, {} other",
        triangles,
        quads,
        geometry.num_polygons() - triangles - quads
    );

    if !geometry.warnings().is_empty() {
        println!("Clipped polygons: {}", geometry.warnings().len());
    }

    if let Some(bbox) = geometry.bbox() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z
        );
        let size = bbox.size();
        println!("Dimensions: {:.3} x {:.3} x {:.3}", size.x, size.y, size.z);
    }

    match mesh::triangulate(geometry) {
        Some(mesh) => {
            println!("Triangles: {}", mesh.num_triangles());
            println!("Index width: {}-bit", mesh.index_width().bytes() * 8);
        }
        None => println!("Triangles: none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: &str = "P(0) P(1) P(2)\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n";
    const POLYGONS: &str = "index\tvertices\n0\t0 1 2 3\n";

    #[test]
    fn test_one_input_is_a_folder() {
        let cli = parse_args(["tab2geo", "geo"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("dump.geo"));
        assert!(!cli.info);

        let input = Input::from_args(cli.inputs).unwrap();
        assert!(matches!(input, Input::Folder(_)));
        let (points, polygons) = input.table_paths();
        assert_eq!(points, Path::new("geo").join("pnt.txt"));
        assert_eq!(polygons, Path::new("geo").join("pol.txt"));
    }

    #[test]
    fn test_two_inputs_are_tables() {
        let cli = parse_args(["tab2geo", "a.txt", "b.txt", "-o", "out.geo", "--info"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.geo"));
        assert!(cli.info);

        let input = Input::from_args(cli.inputs).unwrap();
        let (points, polygons) = input.table_paths();
        assert_eq!(points, PathBuf::from("a.txt"));
        assert_eq!(polygons, PathBuf::from("b.txt"));
    }

    #[test]
    fn test_bad_argument_count_is_rejected() {
        assert!(parse_args(["tab2geo"]).is_none());
        assert!(parse_args(["tab2geo", "a", "b", "c"]).is_none());

        assert!(Input::from_args(Vec::new()).is_none());
        assert!(Input::from_args(vec!["a".into(), "b".into(), "c".into()]).is_none());
    }

    #[test]
    fn test_convert_writes_full_dump() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pnt.txt"), POINTS).unwrap();
        std::fs::write(dir.path().join("pol.txt"), POLYGONS).unwrap();
        let output = dir.path().join("dump.geo");

        let geometry = convert(&Input::Folder(dir.path().to_path_buf()), &output).unwrap();
        assert_eq!(geometry.num_polygons(), 1);

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("PGEOMETRY V5\nNPoints 4 NPrims 1\n"));
        assert!(text.contains("Run 1 Poly\n 4 < 3 2 1 0\n"));
    }

    #[test]
    fn test_convert_dumps_points_when_polygons_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pnt.txt"), POINTS).unwrap();
        let output = dir.path().join("dump.geo");

        let geometry = convert(&Input::Folder(dir.path().to_path_buf()), &output).unwrap();
        assert_eq!(geometry.num_points(), 4);
        assert_eq!(geometry.num_polygons(), 0);

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("NPoints 4 NPrims 0\n"));
        assert!(text.contains("Run 0 Poly\nbeginExtra\n"));
    }

    #[test]
    fn test_run_succeeds_on_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dump.geo");
        let cli = Cli {
            inputs: vec![dir.path().join("missing")],
            output: output.clone(),
            info: true,
        };

        run(cli).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("NPoints 0 NPrims 0\n"));
    }
}
