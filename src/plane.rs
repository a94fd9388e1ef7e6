use nalgebra::Matrix3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

// Helper function to create a Point3 instance
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
  Point3 { x, y, z }
}

// Conditions under which no plane (or no height function) exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneError {
  NotEnoughPoints,
  Collinear,
  Vertical,
}

impl fmt::Display for PlaneError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PlaneError::NotEnoughPoints => {
        write!(f, "at least three points are required to fit a plane")
      }
      PlaneError::Collinear => {
        write!(f, "the points are collinear and do not define a unique plane")
      }
      PlaneError::Vertical => {
        write!(f, "the plane is vertical and has no height function z(x, y)")
      }
    }
  }
}

impl std::error::Error for PlaneError {}

// Coefficients of the implicit plane equation a*x + b*y + c*z + d = 0
#[derive(Debug, Clone, Copy)]
pub struct PlaneCoefficients {
  pub a: f64,
  pub b: f64,
  pub c: f64,
  pub d: f64,
}

impl PlaneCoefficients {
  // Fit the plane through the first three points of the slice using the
  // homogeneous determinant formulas. The remaining points take no part
  // in the fit.
  pub fn fit(points: &[Point3]) -> Result<Self, PlaneError> {
    if points.len() < 3 {
      return Err(PlaneError::NotEnoughPoints);
    }
    let (p, q, r) = (points[0], points[1], points[2]);

    let a = Matrix3::new(
      p.y, p.z, 1.0,
      q.y, q.z, 1.0,
      r.y, r.z, 1.0,
    ).determinant();
    let b = -Matrix3::new(
      p.x, p.z, 1.0,
      q.x, q.z, 1.0,
      r.x, r.z, 1.0,
    ).determinant();
    let c = Matrix3::new(
      p.x, p.y, 1.0,
      q.x, q.y, 1.0,
      r.x, r.y, 1.0,
    ).determinant();
    let d = -Matrix3::new(
      p.x, p.y, p.z,
      q.x, q.y, q.z,
      r.x, r.y, r.z,
    ).determinant();

    // (a, b, c) is the plane normal; collinear points collapse it to zero
    let normal_length_squared = a * a + b * b + c * c;
    if normal_length_squared <= f64::EPSILON {
      return Err(PlaneError::Collinear);
    }

    Ok(PlaneCoefficients { a, b, c, d })
  }

  // Height of the plane above (x, y); undefined for vertical planes (c = 0)
  pub fn height_at(&self, x: f64, y: f64) -> Result<f64, PlaneError> {
    if self.c.abs() <= f64::EPSILON {
      return Err(PlaneError::Vertical);
    }
    Ok((-self.a * x - self.b * y - self.d) / self.c)
  }

  // Signed residual of the plane equation at a point, zero on the plane
  pub fn residual(&self, point: Point3) -> f64 {
    self.a * point.x + self.b * point.y + self.c * point.z + self.d
  }
}
