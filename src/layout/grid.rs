use std::collections::HashSet;

use crate::{
    composition::presets::{GridPreset, grid_preset},
    composition::zone::Zone,
    foundation::core::{Bounds, Canvas, GridPosition},
    foundation::error::{StudioError, StudioResult},
};

/// Default pixel gap between neighbouring cells.
pub const DEFAULT_GAP_PX: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Grid generation options.
pub struct GridOpts {
    /// Pixel gap between neighbouring cells.
    pub gap: u32,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP_PX,
        }
    }
}

/// Subdivide `canvas` using the grid preset named `preset_key`.
///
/// Unknown keys yield an empty list. Zones come out row-major with `order` equal to the
/// emission index, `role = empty`, fresh ids and no project association.
pub fn generate_grid(preset_key: &str, canvas: Canvas, opts: GridOpts) -> Vec<Zone> {
    match grid_preset(preset_key) {
        Some(preset) => generate_grid_for(preset, canvas, opts),
        None => {
            tracing::debug!(preset_key, "unknown grid preset, no zones generated");
            Vec::new()
        }
    }
}

/// Subdivide `canvas` using an explicit preset.
///
/// Cell sizes are rounded to whole pixels independently; rounding residue is not
/// redistributed. A cell that would cross the canvas edge is clipped to it.
pub fn generate_grid_for(preset: &GridPreset, canvas: Canvas, opts: GridOpts) -> Vec<Zone> {
    let col_widths = track_sizes(
        canvas.width,
        preset.cols,
        opts.gap,
        preset.ratios_for(preset.cols),
    );
    let row_heights = track_sizes(
        canvas.height,
        preset.rows,
        opts.gap,
        preset.ratios_for(preset.rows),
    );

    let mut zones = Vec::with_capacity(col_widths.len() * row_heights.len());
    let mut y = 0u64;
    for (row, &height) in row_heights.iter().enumerate() {
        let mut x = 0u64;
        for (col, &width) in col_widths.iter().enumerate() {
            let order = zones.len() as u32;
            zones.push(Zone::new(
                GridPosition::cell(row as u32, col as u32),
                clip_to_canvas(x, y, width, height, canvas),
                order,
            ));
            x += width + u64::from(opts.gap);
        }
        y += height + u64::from(opts.gap);
    }

    tracing::debug!(
        preset = preset.key,
        width = canvas.width,
        height = canvas.height,
        gap = opts.gap,
        zones = zones.len(),
        "grid generated"
    );
    zones
}

fn track_sizes(extent: u32, count: u32, gap: u32, ratios: Option<&[f64]>) -> Vec<u64> {
    if count == 0 {
        return Vec::new();
    }
    let total_gap = u64::from(gap) * u64::from(count - 1);
    let available = u64::from(extent).saturating_sub(total_gap) as f64;
    match ratios {
        Some(ratios) => ratios
            .iter()
            .map(|r| (available * r).round().max(0.0) as u64)
            .collect(),
        None => vec![(available / f64::from(count)).round() as u64; count as usize],
    }
}

fn clip_to_canvas(x: u64, y: u64, width: u64, height: u64, canvas: Canvas) -> Bounds {
    let cw = u64::from(canvas.width);
    let ch = u64::from(canvas.height);
    let x = x.min(cw);
    let y = y.min(ch);
    // Every value below is bounded by a canvas side, which fits in u32.
    Bounds {
        x: x as u32,
        y: y as u32,
        width: width.min(cw - x) as u32,
        height: height.min(ch - y) as u32,
    }
}

/// Check that `zones` form one valid grid generation on `canvas`: unique ids, orders
/// forming `0..n`, every zone inside the canvas and no two zones overlapping.
pub fn validate_partition(zones: &[Zone], canvas: Canvas) -> StudioResult<()> {
    let mut ids = HashSet::with_capacity(zones.len());
    let mut orders = vec![false; zones.len()];
    for zone in zones {
        if !ids.insert(&zone.id) {
            return Err(StudioError::validation(format!(
                "duplicate zone id '{}'",
                zone.id
            )));
        }
        match orders.get_mut(zone.order as usize) {
            Some(seen) if !*seen => *seen = true,
            _ => {
                return Err(StudioError::validation(format!(
                    "zone orders must be a permutation of 0..{}, found {}",
                    zones.len(),
                    zone.order
                )));
            }
        }
        zone.validate(Some(canvas))?;
    }
    for (i, a) in zones.iter().enumerate() {
        for b in &zones[i + 1..] {
            if a.bounds.overlaps(b.bounds) {
                return Err(StudioError::validation(format!(
                    "zones '{}' and '{}' overlap",
                    a.id, b.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
