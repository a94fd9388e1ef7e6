use anyhow::{Context, Result};
use std::path::Path;

use crate::grid::SampledGrid;

// Write the sampled grid as comma-delimited x,y,z rows without a header.
// An existing file at the same path is replaced.
pub fn write_grid(path: &Path, grid: &SampledGrid) -> Result<()> {
  let file = std::fs::File::create(path)
    .with_context(|| format!("Failed to create output file: {}", path.display()))?;

  let mut writer = csv::Writer::from_writer(file);
  for point in grid.points() {
    writer
      .write_record(&[point.x.to_string(), point.y.to_string(), point.z.to_string()])
      .with_context(|| format!("Failed to write to {}", path.display()))?;
  }
  writer
    .flush()
    .with_context(|| format!("Failed to flush {}", path.display()))?;

  Ok(())
}
