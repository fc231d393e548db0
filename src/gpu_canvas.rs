use std::mem;
use winit::dpi::PhysicalSize;
use wgpu::util::DeviceExt;
use thiserror::Error;
use super::{
    color::Color,
    mesh::{Mesh, Vertex},
    render::RenderState,
};

/// A finished mesh uploaded to the gpu, ready to be presented every frame
pub struct GPUCanvas {
    /// The number of vertices in the vertex buffer
    vertex_count: u32,
    /// The tessellated hexagons
    buffer_vertices: wgpu::Buffer,
    /// The scale from canvas coordinates to clip space
    buffer_view: wgpu::Buffer,
    /// The bind group for the view
    bind_group: wgpu::BindGroup,
    /// The render pipeline for the triangles
    pipeline: wgpu::RenderPipeline,
    /// The color to clear the surface with
    background: wgpu::Color,
}

impl GPUCanvas {
    /// Uploads a mesh, this is the single flush after every hexagon has been drawn
    ///
    /// # Parameters
    ///
    /// mesh: The drawn hexagons
    ///
    /// background: The color behind the hexagons
    ///
    /// render_state: The render state to use for rendering
    ///
    /// # Errors
    ///
    /// NewGPUCanvasError::EmptyScene if nothing has been drawn
    pub fn new(mesh: &Mesh, background: &Color, render_state: &RenderState) -> Result<Self, NewGPUCanvasError> {
        if mesh.is_empty() {
            return Err(NewGPUCanvasError::EmptyScene);
        }

        let vertex_count = u32::try_from(mesh.len()).map_err(|_| NewGPUCanvasError::TooManyVertices(mesh.len()))?;
        let device = render_state.get_device();

        // Create the vertex buffer
        let buffer_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Hexagon Vertex Buffer"),
            contents: bytemuck::cast_slice(mesh.get_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Create the view buffer
        let buffer_view = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("View Buffer"),
            size: (mem::size_of::<f32>() * 4) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Create bind group for the view
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bind Group View Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bind Group View"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer_view.as_entire_binding(),
                },
            ]
        });

        // Create shader
        let shader = device.create_shader_module(wgpu::include_wgsl!("shader.wgsl"));

        // Create render pipeline
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pipeline Layout Descriptor"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline Hexagons"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.get_config().format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })]
            }),
            // Strokes are quads of either winding so nothing is culled
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
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let [r, g, b, a] = background.to_linear_rgba();
        let canvas = Self {
            vertex_count,
            buffer_vertices,
            buffer_view,
            bind_group,
            pipeline,
            background: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
        };
        canvas.set_viewport(render_state.get_size(), render_state);
        log::debug!("Uploaded {} vertices", vertex_count);

        Ok(canvas)
    }

    /// Keeps one canvas unit equal to one pixel for the given surface size
    ///
    /// # Parameters
    ///
    /// size: The size of the surface
    ///
    /// render_state: The render state to use for rendering
    pub fn set_viewport(&self, size: PhysicalSize<u32>, render_state: &RenderState) {
        render_state.get_queue().write_buffer(&self.buffer_view, 0, bytemuck::cast_slice(&view_scale(size)));
    }

    /// Renders the hexagons and presents the frame
    ///
    /// # Parameters
    ///
    /// render_state: The render state to use for rendering
    ///
    /// # Errors
    ///
    /// See RenderError for the possible errors
    pub fn render(&self, render_state: &RenderState) -> Result<(), RenderError> {
        // Get the current view
        let output_texture = render_state.get_surface().get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Create the encoder
        let mut encoder = render_state.get_device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Command Encoder"),
        });

        // Initialize the render pass
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                timestamp_writes: None,
                occlusion_query_set: None,
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    }
                })],
                depth_stencil_attachment: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.buffer_vertices.slice(..));

            // Triangles are in drawing order so later hexagons cover earlier ones
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        // Submit and show to screen
        render_state.get_queue().submit(std::iter::once(encoder.finish()));
        output_texture.present();

        Ok(())
    }
}

/// The scale from pixels around the center of the surface to clip space, padded to 16 bytes
fn view_scale(size: PhysicalSize<u32>) -> [f32; 4] {
    let axis = |pixels: u32| if pixels == 0 { 0.0 } else { 2.0 / pixels as f32 };
    [axis(size.width), axis(size.height), 0.0, 0.0]
}

/// The error types for when uploading a mesh
#[derive(Error, Debug, Clone)]
pub enum NewGPUCanvasError {
    /// Nothing has been drawn
    #[error("The scene contains no hexagons")]
    EmptyScene,
    /// The vertex count does not fit in a draw call
    #[error("The scene has {:?} vertices which is more than a single draw call supports", .0)]
    TooManyVertices(usize),
}

#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Unable to get surface texture: {:?}", .0)]
    SurfaceTexture(wgpu::SurfaceError),
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> RenderError {
        RenderError::SurfaceTexture(err)
    }
}
