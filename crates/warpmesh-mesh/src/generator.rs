//! Per-vertex fisheye warp: output grid position to source UV.
//!
//! The output grid is normalized to `[-1, 1]` on both axes. A vertex at
//! radius `r` sits at angle `r * output_fov / 2` from the view axis, seen
//! from the viewer's head. The lens sits `z_shift_ratio` dome radii further
//! along the axis, so the same dome point is seen from the lens at a
//! different angle `alpha`. That angle, scaled by the lens's own field of
//! view, gives the radial UV distance to sample.

use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, UVec2};
use warpmesh_config::WarpParams;

/// Normalized output position of a grid vertex, in `[-1, 1]` per axis.
///
/// An axis with a single vertex has nowhere to spread, so its coordinate is 0.
pub fn normalized_position(index: UVec2, resolution: UVec2) -> DVec2 {
    DVec2::new(
        normalize_axis(index.x, resolution.x),
        normalize_axis(index.y, resolution.y),
    )
}

fn normalize_axis(index: u32, dim: u32) -> f64 {
    if dim <= 1 {
        return 0.0;
    }
    let center = f64::from((dim - 1) / 2);
    (f64::from(index) - center) * 2.0 / f64::from(dim - 1)
}

/// Source UV for a normalized output position.
///
/// `input_fov` is [`WarpParams::input_fov`], passed in so it is computed
/// once per mesh rather than per vertex. The centre vertex always maps to
/// `(0.5, 0.5)`. Out-of-domain parameters are not checked; they surface as
/// NaN in the result.
pub fn warp_uv(normalized: DVec2, output_fov: f64, z_shift_ratio: f64, input_fov: f64) -> DVec2 {
    let length = normalized.length();
    if length == 0.0 {
        return DVec2::splat(0.5);
    }

    let angle = length * output_fov / 2.0;
    let hyp = DVec2::new(angle.sin(), angle.cos() - z_shift_ratio);
    let alpha =
        FRAC_PI_2 - (1.0 / hyp.length() * ((FRAC_PI_2 - angle).sin() - z_shift_ratio)).asin();

    let normalized_alpha = alpha / input_fov * 2.0;
    normalized_alpha * normalized / length / 2.0 + 0.5
}

/// A rectangular grid of source UVs, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpMesh {
    resolution: UVec2,
    uvs: Vec<DVec2>,
}

impl WarpMesh {
    /// Compute the UV of every vertex for the given parameters.
    pub fn generate(params: &WarpParams) -> Self {
        let resolution = params.resolution;
        let output_fov = params.output_fov;
        let z_shift_ratio = params.z_shift_ratio;
        let input_fov = params.input_fov();

        tracing::debug!(
            width = resolution.x,
            height = resolution.y,
            output_fov,
            z_shift_ratio,
            input_fov,
            "generating warp mesh"
        );

        let row = move |y: u32| {
            (0..resolution.x).map(move |x| {
                let normalized = normalized_position(UVec2::new(x, y), resolution);
                warp_uv(normalized, output_fov, z_shift_ratio, input_fov)
            })
        };

        #[cfg(feature = "parallel")]
        let uvs = {
            use rayon::prelude::*;
            (0..resolution.y).into_par_iter().flat_map_iter(row).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let uvs = (0..resolution.y).flat_map(row).collect();

        Self { resolution, uvs }
    }

    pub fn width(&self) -> u32 {
        self.resolution.x
    }

    pub fn height(&self) -> u32 {
        self.resolution.y
    }

    /// UV at a grid index, or `None` outside the grid.
    pub fn uv(&self, index: UVec2) -> Option<DVec2> {
        if index.x >= self.resolution.x || index.y >= self.resolution.y {
            return None;
        }
        self.uvs
            .get(index.y as usize * self.resolution.x as usize + index.x as usize)
            .copied()
    }

    /// All UVs in row-major order (y outer, x inner).
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// `(output_position, uv)` for every vertex in row-major order.
    ///
    /// The output position is the normalized grid position with its x
    /// coordinate scaled by `aspect`.
    pub fn rows(&self, aspect: f64) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let resolution = self.resolution;
        (0..resolution.y)
            .flat_map(move |y| (0..resolution.x).map(move |x| UVec2::new(x, y)))
            .zip(self.uvs.iter().copied())
            .map(move |(index, uv)| {
                let normalized = normalized_position(index, resolution);
                (DVec2::new(normalized.x * aspect, normalized.y), uv)
            })
    }
}
