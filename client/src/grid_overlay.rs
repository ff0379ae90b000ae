use bevy::prelude::*;

pub const GRID_OVERLAY_COLOR: Color = Color::srgb(0.53, 0.53, 0.53);
pub const GRID_CENTER_COLOR: Color = Color::srgb(0.27, 0.27, 0.27);

/// A flat square grid centred on a point: `divisions` cells of `cell_size`
/// along each axis.
#[derive(Clone, Copy, Debug)]
pub struct GridOverlayConfig {
    pub cell_size: f32,
    pub divisions: u32,
    pub y_offset: f32,
    pub color: Color,
    pub center_color: Color,
}

impl Default for GridOverlayConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            divisions: 10,
            y_offset: 0.0,
            color: GRID_OVERLAY_COLOR,
            center_color: GRID_CENTER_COLOR,
        }
    }
}

impl GridOverlayConfig {
    pub fn extent(&self) -> f32 {
        self.cell_size * self.divisions as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineSegment {
    pub start: Vec3,
    pub end: Vec3,
    /// Passes through the grid centre.
    pub is_center: bool,
}

pub fn grid_line_count(divisions: u32) -> usize {
    if divisions == 0 {
        return 0;
    }
    2 * (divisions as usize + 1)
}

pub fn build_grid_segments(center: Vec3, config: GridOverlayConfig) -> Vec<GridLineSegment> {
    if config.cell_size <= 0.0 || config.divisions == 0 {
        return Vec::new();
    }

    let half = config.extent() * 0.5;
    let y = center.y + config.y_offset;
    let mut lines = Vec::with_capacity(grid_line_count(config.divisions));

    for i in 0..=config.divisions {
        let offset = -half + i as f32 * config.cell_size;
        let is_center = 2 * i == config.divisions;

        lines.push(GridLineSegment {
            start: Vec3::new(center.x - half, y, center.z + offset),
            end: Vec3::new(center.x + half, y, center.z + offset),
            is_center,
        });
        lines.push(GridLineSegment {
            start: Vec3::new(center.x + offset, y, center.z - half),
            end: Vec3::new(center.x + offset, y, center.z + half),
            is_center,
        });
    }

    lines
}

pub fn draw_grid_overlay(gizmos: &mut Gizmos, center: Vec3, config: GridOverlayConfig) {
    for segment in build_grid_segments(center, config) {
        let color = if segment.is_center {
            config.center_color
        } else {
            config.color
        };
        gizmos.line(segment.start, segment.end, color);
    }
}
