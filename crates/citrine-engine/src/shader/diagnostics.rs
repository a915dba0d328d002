//! Degenerate clip-output detection.
//!
//! A zeroed w in a clip-space position is not a wgpu validation error: the
//! pipeline builds and the draw records; the geometry just silently never
//! appears. This module classifies such outputs so the renderer can report
//! them once at pipeline build.

use std::fmt;

use super::reference;

/// A defect found in a vertex-stage clip output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipIssue {
    /// A component of the clip position is NaN or infinite.
    NonFinite { index: u32, position: [f32; 4] },

    /// The homogeneous w component is exactly zero, so the perspective
    /// divide is undefined and the vertex cannot rasterize.
    ZeroW { index: u32, position: [f32; 4] },
}

impl fmt::Display for ClipIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipIssue::NonFinite { index, position } => write!(
                f,
                "vertex {index}: clip output {position:?} has a non-finite component"
            ),
            ClipIssue::ZeroW { index, position } => write!(
                f,
                "vertex {index}: clip output {position:?} has w = 0; \
                 the perspective divide is undefined and the vertex cannot rasterize"
            ),
        }
    }
}

impl std::error::Error for ClipIssue {}

/// Classifies a single clip-space position.
///
/// Non-finite components take precedence over the w check, since a NaN w
/// would otherwise slip past the equality.
pub fn classify(index: u32, position: [f32; 4]) -> Option<ClipIssue> {
    if position.iter().any(|c| !c.is_finite()) {
        return Some(ClipIssue::NonFinite { index, position });
    }

    // Exact comparison on purpose: any nonzero finite w survives the divide.
    if position[3] == 0.0 {
        return Some(ClipIssue::ZeroW { index, position });
    }

    None
}

/// Evaluates the vertex stage over `positions` (one entry per vertex index,
/// in draw order) and collects every defect found.
pub fn scan(positions: &[[f32; 2]]) -> Vec<ClipIssue> {
    let mut issues = Vec::new();

    for (i, pos) in positions.iter().enumerate() {
        let index = i as u32;
        let clip = reference::vertex_stage(index, *pos);
        if let Some(issue) = classify(index, clip) {
            issues.push(issue);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify ──────────────────────────────────────────────────────────

    #[test]
    fn classify_accepts_a_valid_homogeneous_coordinate() {
        assert_eq!(classify(0, [0.5, -0.5, 0.0, 1.0]), None);
    }

    #[test]
    fn classify_reports_zero_w() {
        let position = [0.5, -0.5, 0.0, 0.0];
        assert_eq!(classify(2, position), Some(ClipIssue::ZeroW { index: 2, position }));
    }

    #[test]
    fn classify_reports_negative_zero_w() {
        // -0.0 == 0.0 under IEEE comparison; it is just as degenerate.
        assert!(matches!(
            classify(0, [0.0, 0.0, 0.0, -0.0]),
            Some(ClipIssue::ZeroW { .. })
        ));
    }

    #[test]
    fn classify_prefers_non_finite_over_zero_w() {
        assert!(matches!(
            classify(1, [f32::NAN, 0.0, 0.0, 0.0]),
            Some(ClipIssue::NonFinite { index: 1, .. })
        ));
    }

    // ── scan ──────────────────────────────────────────────────────────────

    #[test]
    fn scan_flags_every_vertex_of_the_triangle() {
        let issues = scan(&[[-1.0, -1.0], [0.0, 1.0], [1.0, -1.0]]);

        assert_eq!(issues.len(), 3);
        for (i, issue) in issues.iter().enumerate() {
            assert!(matches!(issue, ClipIssue::ZeroW { index, .. } if *index == i as u32));
        }
    }

    #[test]
    fn scan_carries_non_finite_inputs_through_the_stage() {
        let issues = scan(&[[f32::NAN, 0.0]]);
        assert!(matches!(issues.as_slice(), [ClipIssue::NonFinite { index: 0, .. }]));
    }

    #[test]
    fn scan_of_no_vertices_is_clean() {
        assert!(scan(&[]).is_empty());
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn zero_w_message_names_the_vertex_and_the_divide() {
        let msg = ClipIssue::ZeroW { index: 1, position: [0.0, 1.0, 0.0, 0.0] }.to_string();
        assert!(msg.contains("vertex 1"));
        assert!(msg.contains("w = 0"));
        assert!(msg.contains("perspective divide"));
    }
}
