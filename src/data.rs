use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::plane::{point3, Point3};

// A rectangular table of sample rows: x, y and one or more height columns.
// Each height column defines one surface over the shared x/y footprint.
#[derive(Debug, Clone)]
pub struct PointTable {
  columns: usize,
  rows: Vec<Vec<f64>>,
}

impl PointTable {
  // Build a table from raw rows, enforcing the shape invariants
  pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
    if rows.len() < 3 {
      bail!("a point table needs at least 3 rows, found {}", rows.len());
    }
    let columns = rows[0].len();
    if columns < 3 {
      bail!(
        "a point table needs at least 3 columns (x, y and a height), found {}",
        columns
      );
    }
    for (index, row) in rows.iter().enumerate() {
      if row.len() != columns {
        bail!("row {} has {} columns, expected {}", index + 1, row.len(), columns);
      }
      if row.iter().any(|value| !value.is_finite()) {
        bail!("row {} contains a non-finite value", index + 1);
      }
    }
    Ok(PointTable { columns, rows })
  }

  // Load a table from a delimited text file. Cells may be separated by
  // commas, semicolons, tabs or spaces; empty lines and lines starting
  // with '#' are skipped.
  pub fn from_file(path: &Path) -> Result<Self> {
    let file = File::open(path)
      .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for (number, line) in reader.lines().enumerate() {
      let line = line
        .with_context(|| format!("Failed to read line {} of {}", number + 1, path.display()))?;
      let trimmed = line.trim();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }
      let mut row = Vec::new();
      for cell in trimmed.split(|c: char| c == ',' || c == ';' || c.is_whitespace()) {
        if cell.is_empty() {
          continue;
        }
        let value = cell.parse::<f64>().with_context(|| {
          format!("Line {} of {}: '{}' is not a number", number + 1, path.display(), cell)
        })?;
        row.push(value);
      }
      rows.push(row);
    }

    Self::new(rows).with_context(|| format!("Invalid point table in {}", path.display()))
  }

  // The built-in validation table: x, y and two height columns
  pub fn demo() -> Self {
    let rows = vec![
      vec![1.0, 1.0, 1.0, 4.0],
      vec![1.0, 2.0, 3.0, 5.0],
      vec![2.0, 1.0, 1.0, 5.0],
      vec![2.0, 2.0, 3.0, 6.0],
    ];
    PointTable { columns: 4, rows }
  }

  pub fn row_count(&self) -> usize {
    self.rows.len()
  }

  pub fn column_count(&self) -> usize {
    self.columns
  }

  // Number of height columns (everything after x and y)
  pub fn surface_count(&self) -> usize {
    self.columns - 2
  }

  // Points of one surface: the shared x/y columns paired with the selected
  // height column
  pub fn surface_points(&self, surface: usize) -> Vec<Point3> {
    assert!(surface < self.surface_count(), "surface index out of range");
    self.rows
      .iter()
      .map(|row| point3(row[0], row[1], row[2 + surface]))
      .collect()
  }
}
