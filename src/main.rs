use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::time::Instant;

use plane_sampler::data::PointTable;
use plane_sampler::grid::{sample_plane, BoundingBox};
use plane_sampler::output::write_grid;
use plane_sampler::plane::PlaneCoefficients;
use plane_sampler::plot::save_surface_chart;
use plane_sampler::text;

const MIN_RESOLUTION: usize = 2;
const MAX_RESOLUTION: usize = 4096;

// Output file name for a surface: points.txt, points2.txt, ... with an
// optional prefix in front. Chart files follow the same scheme.
fn output_name(prefix: &str, surface: usize, stem: &str, extension: &str) -> String {
  let stem = if surface == 0 {
    stem.to_string()
  } else {
    format!("{}{}", stem, surface + 1)
  };
  if prefix.is_empty() {
    format!("{}.{}", stem, extension)
  } else {
    format!("{}_{}.{}", prefix, stem, extension)
  }
}

fn main() -> Result<()> {
  let start_time = Instant::now();

  // Define the command line arguments
  let app = Command::new("Plane Sampler")
    .version(env!("CARGO_PKG_VERSION"))
    .arg(
      Arg::new("input_file")
        .short('i')
        .long("input-file")
        .value_name("file")
        .help("Specify the input file path (the built-in demo table is used if omitted)"),
    )
    .arg(
      Arg::new("output_prefix")
        .short('o')
        .long("output-prefix")
        .value_name("prefix")
        .help("Specify the output file(s) prefix"),
    )
    .arg(
      Arg::new("resolution")
        .short('r')
        .long("resolution")
        .default_value("5")
        .help("Specify the number of grid samples per axis"),
    )
    .arg(
      Arg::new("plot")
        .short('p')
        .long("plot")
        .help("Write an HTML chart for each sampled surface")
        .action(ArgAction::SetTrue),
    );

  let line = "-".repeat(72);
  let dline = "=".repeat(72);

  println!("\n\
  {}\n\
  {}\n\
  Tool for fitting planes through 3D sample points and sampling them on a regular grid.\n\
  {}\n",
  format!("{} {}", text::highlight("Plane Sampler"), app.get_version().unwrap()),
  line,
  dline);

  // Parse the command line arguments
  let matches = app.get_matches();

  let input_file = matches.get_one::<String>("input_file");
  let output_prefix = matches
    .get_one::<String>("output_prefix")
    .cloned()
    .unwrap_or_default();
  let plot = matches.get_flag("plot");

  // Parsing and validating 'resolution'
  let resolution = match matches.get_one::<String>("resolution").unwrap().parse::<usize>() {
    Ok(value) if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&value) => value,
    _ => {
      let output = format!(
        "{}: 'resolution' must be a whole number between {} and {}.",
        text::error("Error"),
        MIN_RESOLUTION,
        MAX_RESOLUTION
      );
      eprintln!("{}\n", text::bold(output));
      std::process::exit(1);
    }
  };

  let mut part_time = Instant::now();

  // Load the point table
  let table = match input_file {
    Some(path) => match PointTable::from_file(Path::new(path)) {
      Ok(table) => table,
      Err(err) => {
        let output = format!("{}: {:#}", text::error("Error"), err);
        eprintln!("{}\n", text::bold(output));
        std::process::exit(1);
      }
    },
    None => {
      println!(
        "{}: No input file given. Using the built-in demo table.\n",
        text::warning("Note")
      );
      PointTable::demo()
    }
  };

  let elapsed_time = part_time.elapsed();
  println!(
    "{} Point table ({} rows x {} columns) loaded in {:.2} seconds.\n",
    text::check_icon(),
    table.row_count(),
    table.column_count(),
    elapsed_time.as_secs_f64()
  );

  println!("The following surfaces will be sampled [{}]:", table.surface_count());
  println!("{}", line);
  for surface in 0..table.surface_count() {
    println!(
      "Surface {} ({} x {} grid)\n  {}",
      surface + 1,
      resolution,
      resolution,
      text::light(format!(
        "└─{} {}",
        text::ARROW,
        output_name(&output_prefix, surface, "points", "txt")
      ))
    );
  }
  println!("{}\n", dline);

  part_time = Instant::now();

  for surface in 0..table.surface_count() {
    let points = table.surface_points(surface);

    let plane = match PlaneCoefficients::fit(&points) {
      Ok(plane) => plane,
      Err(err) => {
        let output = format!("{}: Surface {}: {}.", text::error("Error"), surface + 1, err);
        eprintln!("{}\n", text::bold(output));
        std::process::exit(1);
      }
    };

    println!(
      "Surface {}: {:.6}*x + {:.6}*y + {:.6}*z + {:.6} = 0",
      surface + 1,
      plane.a,
      plane.b,
      plane.c,
      plane.d
    );

    // The sampling footprint covers every row of the table, not only the
    // three fitted points
    let bounds = BoundingBox::of(&points).unwrap();

    let grid = match sample_plane(&plane, bounds, resolution) {
      Ok(grid) => grid,
      Err(err) => {
        let output = format!("{}: Surface {}: {}.", text::error("Error"), surface + 1, err);
        eprintln!("{}\n", text::bold(output));
        std::process::exit(1);
      }
    };

    let file_name = output_name(&output_prefix, surface, "points", "txt");
    if let Err(err) = write_grid(Path::new(&file_name), &grid) {
      let output = format!("{}: {:#}", text::error("Error"), err);
      eprintln!("{}\n", text::bold(output));
      std::process::exit(1);
    }
    println!(
      "  {}",
      text::light(format!("└─{} {} ({} points)", text::ARROW, file_name, grid.len()))
    );

    if plot {
      let chart_name = output_name(&output_prefix, surface, "plot", "html");
      let title = format!("Sampled plane {}", surface + 1);
      if let Err(err) = save_surface_chart(Path::new(&chart_name), &title, &grid) {
        let output = format!("{}: {:#}", text::error("Error"), err);
        eprintln!("{}\n", text::bold(output));
        std::process::exit(1);
      }
      println!("  {}", text::light(format!("└─{} {}", text::ARROW, chart_name)));
    }
  }

  let elapsed_time = part_time.elapsed();
  println!(
    "\n{} {} surface(s) sampled and written in {:.2} seconds.",
    text::check_icon(),
    table.surface_count(),
    elapsed_time.as_secs_f64()
  );

  let elapsed_time = start_time.elapsed();
  println!("{}", line);
  println!("{}", text::success("Sampling completed successfully."));
  println!("Total elapsed time: {:.2} seconds.", elapsed_time.as_secs_f64());
  println!();

  Ok(())
}
