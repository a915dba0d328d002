use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::shader;
use crate::shader::diagnostics;

use super::{RenderCtx, RenderTarget};

/// Per-vertex input: a 2-component position at shader location 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The three vertices uploaded for the draw.
///
/// Same positions the vertex stage derives from the index alone, so the
/// buffer and the index fallback describe one triangle.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { pos: [-1.0, -1.0] },
    Vertex { pos: [0.0, 1.0] },
    Vertex { pos: [1.0, -1.0] },
];

/// Renderer for the fixed triangle pipeline.
///
/// Owns the render pipeline (lazily built, keyed on surface format) and the
/// vertex buffer. On pipeline build it scans the clip outputs the shader
/// will produce for [`TRIANGLE_VERTICES`] and warns per defect found. With
/// the shader as authored that is one degenerate-w warning per vertex, and
/// the presented frame shows only the clear color.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vertex_buffer: Option<wgpu::Buffer>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the triangle into `target`.
    ///
    /// Records a single pass over the frame's color view (`LoadOp::Load`; the
    /// clear happened earlier in the frame) and draws vertices 0..3.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_vertex_buffer(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("citrine triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));

        let vertex_count = TRIANGLE_VERTICES.len() as u32;
        rpass.draw(0..vertex_count, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        report_degenerate_clips();

        let module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("citrine triangle shader"),
            source: wgpu::ShaderSource::Wgsl(shader::SOURCE.into()),
        });

        // The shader binds no resources, so the layout carries no bind groups.
        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("citrine triangle pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("citrine triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(shader::VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(shader::FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_some() {
            return;
        }

        self.vertex_buffer = Some(ctx.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("citrine triangle vbo"),
                contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
    }
}

/// Warns once per defect the shader will produce for the uploaded vertices.
fn report_degenerate_clips() {
    let positions: Vec<[f32; 2]> = TRIANGLE_VERTICES.iter().map(|v| v.pos).collect();
    for issue in diagnostics::scan(&positions) {
        log::warn!("{issue}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::reference;

    // ── vertex layout ─────────────────────────────────────────────────────

    #[test]
    fn vertex_is_two_packed_floats() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn position_attribute_sits_at_location_zero() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn vertex_data_casts_to_tightly_packed_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 3 * 8);
    }

    // ── vertex data ───────────────────────────────────────────────────────

    #[test]
    fn buffer_matches_the_index_derived_positions() {
        // The uploaded data and the dead index computation agree vertex for
        // vertex; only the zeroed w keeps the triangle off screen.
        for (i, vertex) in TRIANGLE_VERTICES.iter().enumerate() {
            assert_eq!(vertex.pos, reference::index_position(i as u32));
        }
    }

    // ── diagnostics wiring ────────────────────────────────────────────────

    #[test]
    fn pipeline_build_scan_flags_every_uploaded_vertex() {
        // Same scan report_degenerate_clips() logs at pipeline build.
        let positions: Vec<[f32; 2]> = TRIANGLE_VERTICES.iter().map(|v| v.pos).collect();
        let issues = diagnostics::scan(&positions);

        assert_eq!(issues.len(), TRIANGLE_VERTICES.len());
        assert!(issues
            .iter()
            .all(|i| matches!(i, diagnostics::ClipIssue::ZeroW { .. })));
    }
}
