//! CPU reference of the shader stages.
//!
//! Both stages are pure functions of their declared inputs, with no shared
//! state between invocations, so their numeric behavior can be pinned down
//! without a GPU. Each function here mirrors `triangle.wgsl` statement for
//! statement; the WGSL stays authoritative.

/// Position derived from the built-in vertex index.
///
/// Maps indices 0, 1, 2 onto (-1,-1), (0,1), (1,-1): x walks -1..1 with the
/// index, y flips on index parity. In the WGSL this value is computed and
/// then overwritten before the stage returns, so it never reaches the
/// rasterizer; it is observable only here.
pub fn index_position(index: u32) -> [f32; 2] {
    let x = (index as i32 - 1) as f32;
    let y = ((index & 1) as i32 * 2 - 1) as f32;
    [x, y]
}

/// Full vertex stage: the clip-space output for one invocation.
///
/// Mirrors the WGSL assignment order: the index-derived position is written
/// first, then replaced by the attribute passthrough, which zero-fills both
/// z and w.
#[allow(unused_assignments)]
pub fn vertex_stage(index: u32, pos: [f32; 2]) -> [f32; 4] {
    let [x, y] = index_position(index);
    let mut position = [x, y, 0.0, 1.0];

    // Second assignment wins. w stays 0.0 because the shader writes 0.0;
    // see `diagnostics` for what that means at the rasterizer.
    position = [pos[0], pos[1], 0.0, 0.0];

    position
}

/// Fragment stage: flat opaque yellow for every covered sample, regardless
/// of any input.
pub fn fragment_stage() -> [f32; 4] {
    [1.0, 1.0, 0.0, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── index-derived position (the dead computation) ─────────────────────

    #[test]
    fn index_zero_maps_to_lower_left() {
        assert_eq!(index_position(0), [-1.0, -1.0]);
    }

    #[test]
    fn index_one_maps_to_top_center() {
        assert_eq!(index_position(1), [0.0, 1.0]);
    }

    #[test]
    fn index_two_maps_to_lower_right() {
        assert_eq!(index_position(2), [1.0, -1.0]);
    }

    #[test]
    fn index_parity_drives_y() {
        for index in 0..8u32 {
            let expected = if index % 2 == 0 { -1.0 } else { 1.0 };
            assert_eq!(index_position(index)[1], expected);
        }
    }

    // ── vertex stage ──────────────────────────────────────────────────────

    #[test]
    fn vertex_stage_passes_the_attribute_through() {
        assert_eq!(vertex_stage(0, [0.25, -0.75]), [0.25, -0.75, 0.0, 0.0]);
    }

    #[test]
    fn vertex_stage_w_is_exactly_zero() {
        // Exact comparison on purpose: any nonzero w, however small, would
        // rasterize. The authored output does not.
        let clip = vertex_stage(1, [0.5, 0.5]);
        assert_eq!(clip[3].to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn vertex_stage_ignores_the_index() {
        // The overwrite makes the index-derived triangle unobservable.
        let pos = [-0.5, 0.5];
        let from_zero = vertex_stage(0, pos);
        for index in 1..16u32 {
            assert_eq!(vertex_stage(index, pos), from_zero);
        }
    }

    // ── fragment stage ────────────────────────────────────────────────────

    #[test]
    fn fragment_stage_is_constant_yellow() {
        assert_eq!(fragment_stage(), [1.0, 1.0, 0.0, 1.0]);
    }
}
