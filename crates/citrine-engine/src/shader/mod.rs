//! The fixed two-stage shader hosted by this crate.
//!
//! `triangle.wgsl` is carried verbatim, defect included: the vertex stage
//! derives a triangle from the built-in vertex index, then unconditionally
//! overwrites that result with the `pos` attribute, zero-filling both z and
//! w. A clip-space w of 0.0 makes the perspective divide undefined, so the
//! primitive never rasterizes. The [`diagnostics`] scan reports this at
//! pipeline build instead of altering the source.
//!
//! [`reference`] mirrors both stages on the CPU so their numeric behavior is
//! testable without a GPU.

pub mod diagnostics;
pub mod reference;

/// WGSL source of the pipeline's only shader module.
pub const SOURCE: &str = include_str!("triangle.wgsl");

/// Vertex stage entry point name, as configured in the render pipeline.
pub const VERTEX_ENTRY: &str = "vertex";

/// Fragment stage entry point name, as configured in the render pipeline.
pub const FRAGMENT_ENTRY: &str = "fragment";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(SOURCE).expect("shader source failed to parse")
    }

    // ── source validity ───────────────────────────────────────────────────

    #[test]
    fn source_parses_and_validates() {
        let module = parse();
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .expect("shader source failed validation");
    }

    // ── entry points ──────────────────────────────────────────────────────

    #[test]
    fn exposes_exactly_the_two_configured_entry_points() {
        let module = parse();
        let stages: Vec<(&str, naga::ShaderStage)> = module
            .entry_points
            .iter()
            .map(|ep| (ep.name.as_str(), ep.stage))
            .collect();

        assert_eq!(stages.len(), 2);
        assert!(stages.contains(&(VERTEX_ENTRY, naga::ShaderStage::Vertex)));
        assert!(stages.contains(&(FRAGMENT_ENTRY, naga::ShaderStage::Fragment)));
    }

    // ── authored defect ───────────────────────────────────────────────────

    #[test]
    fn source_keeps_the_zero_w_overwrite() {
        // The second position assignment zero-fills w. Guard against a
        // well-meaning edit "fixing" the artifact; the defect is load-bearing
        // for everything the diagnostics layer reports.
        assert!(SOURCE.contains("vec4<f32>(in.pos, 0.0, 0.0)"));
        assert!(SOURCE.contains("// doesn't work"));
    }
}
