use anyhow::{Context, Result};
use charming::{
  component::{Axis, Legend, Title},
  element::{AxisType, Tooltip, Trigger, TriggerOn},
  series::Line,
  Chart, HtmlRenderer,
};
use std::path::Path;

use crate::grid::SampledGrid;

// Render a sampled plane as one height profile per grid row. The x axis is
// categorical with the grid's x coordinates as labels, so the chart stays
// readable for non-uniform coordinate ranges.
pub fn save_surface_chart(path: &Path, title_text: &str, grid: &SampledGrid) -> Result<()> {
  let x_labels: Vec<String> = grid.xs().iter().map(|x| format!("{:.3}", x)).collect();

  let mut chart = Chart::new()
    .title(Title::new().text(title_text).left("center"))
    .legend(Legend::new())
    .x_axis(Axis::new().type_(AxisType::Category).name("x").data(x_labels))
    .y_axis(Axis::new().type_(AxisType::Value).name("z"))
    .tooltip(
      Tooltip::new()
        .trigger(Trigger::Axis)
        .trigger_on(TriggerOn::Mousemove),
    );

  for (row, y) in grid.ys().iter().enumerate() {
    let profile: Vec<f64> = (0..grid.resolution()).map(|col| grid.z_at(row, col)).collect();
    chart = chart.series(Line::new().name(format!("y = {:.3}", y)).data(profile));
  }

  let mut renderer = HtmlRenderer::new(title_text, 1024, 768);
  renderer
    .save(&chart, path)
    .context("Failed to save surface chart to file")?;

  Ok(())
}
