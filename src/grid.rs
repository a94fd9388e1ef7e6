use crate::plane::{point3, PlaneCoefficients, PlaneError, Point3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
  pub min_x: f64,
  pub max_x: f64,
  pub min_y: f64,
  pub max_y: f64,
}

impl BoundingBox {
  // Axis-aligned x/y extent of a point set; None when the set is empty
  pub fn of(points: &[Point3]) -> Option<Self> {
    let first = points.first()?;
    let mut bounds = BoundingBox {
      min_x: first.x,
      max_x: first.x,
      min_y: first.y,
      max_y: first.y,
    };
    for point in &points[1..] {
      bounds.min_x = bounds.min_x.min(point.x);
      bounds.max_x = bounds.max_x.max(point.x);
      bounds.min_y = bounds.min_y.min(point.y);
      bounds.max_y = bounds.max_y.max(point.y);
    }
    Some(bounds)
  }
}

// Evenly spaced values over [start, end], both endpoints included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
  if count == 0 {
    return Vec::new();
  }
  if count == 1 {
    return vec![start];
  }
  let step = (end - start) / (count - 1) as f64;
  (0..count)
    .map(|i| if i + 1 == count { end } else { start + step * i as f64 })
    .collect()
}

// A plane evaluated over a regular grid. Points are stored row-major with
// y as the outer loop and x as the inner loop, which fixes the row order
// of the written output files.
#[derive(Debug, Clone)]
pub struct SampledGrid {
  resolution: usize,
  xs: Vec<f64>,
  ys: Vec<f64>,
  points: Vec<Point3>,
}

impl SampledGrid {
  pub fn resolution(&self) -> usize {
    self.resolution
  }

  pub fn xs(&self) -> &[f64] {
    &self.xs
  }

  pub fn ys(&self) -> &[f64] {
    &self.ys
  }

  pub fn points(&self) -> &[Point3] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  // Height at a grid cell addressed by row (y index) and column (x index)
  pub fn z_at(&self, row: usize, col: usize) -> f64 {
    self.points[row * self.resolution + col].z
  }
}

// Evaluate the plane over a resolution x resolution grid spanning the bounds
pub fn sample_plane(
  plane: &PlaneCoefficients,
  bounds: BoundingBox,
  resolution: usize,
) -> Result<SampledGrid, PlaneError> {
  let xs = linspace(bounds.min_x, bounds.max_x, resolution);
  let ys = linspace(bounds.min_y, bounds.max_y, resolution);

  let mut points = Vec::with_capacity(resolution * resolution);
  for &y in &ys {
    for &x in &xs {
      let z = plane.height_at(x, y)?;
      points.push(point3(x, y, z));
    }
  }

  Ok(SampledGrid { resolution, xs, ys, points })
}
