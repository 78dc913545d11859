//! Rendering system for the table and atom views
//!
//! Table mode draws instanced cell quads plus a line outline around the
//! selected cell under a fixed 0..100 orthographic projection. Atom mode
//! draws orbit rings as line strips and nucleons/electrons as shaded
//! billboard sprites under the orbital perspective camera, with a depth
//! buffer so near particles occlude far ones.

use common::{CameraUniform, GraphicsContext, OrbitCamera};
use glam::Mat3;
use wgpu::util::DeviceExt;

use crate::elements::{BlockRow, ELEMENTS};
use crate::nucleus::nucleon_layout;
use crate::session::{ViewMode, ViewSession};
use crate::table::table_layout;

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.08,
    a: 1.0,
};

const CELL_MAIN: [f32; 4] = [0.2, 0.4, 0.8, 1.0];
const CELL_SERIES: [f32; 4] = [0.3, 0.5, 0.9, 1.0];
const CELL_SELECTED: [f32; 4] = [1.0, 0.8, 0.2, 1.0];
const OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const PROTON_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
const NEUTRON_COLOR: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
const ELECTRON_COLOR: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
const ORBIT_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 0.8];

const NUCLEON_RADIUS: f32 = 0.4;
const ELECTRON_RADIUS: f32 = 1.0;
const ORBIT_SEGMENTS: usize = 100;

const MAX_PARTICLES: usize = 256;
const MAX_CELLS: usize = 128;
const MAX_RING_VERTICES: usize = 7 * (ORBIT_SEGMENTS + 1);

/// Billboard particle instance
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl ParticleInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x3,
        3 => Float32,
        4 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Table cell instance in 0..100 space
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CellInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl CellInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CellInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad vertex shared by billboards and cells
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Line vertex for orbit rings and the selection outline
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Per-frame draw counts produced by [`Renderer::prepare`]
pub struct FrameData {
    pub mode: ViewMode,
    pub cell_count: u32,
    pub outline_vertex_count: u32,
    pub particle_count: u32,
    pub ring_ranges: Vec<(u32, u32)>,
}

pub struct Renderer {
    particle_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    cell_pipeline: wgpu::RenderPipeline,
    outline_pipeline: wgpu::RenderPipeline,

    quad_buffer: wgpu::Buffer,
    particle_buffer: wgpu::Buffer,
    ring_buffer: wgpu::Buffer,
    cell_buffer: wgpu::Buffer,
    outline_buffer: wgpu::Buffer,

    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    depth_texture: wgpu::TextureView,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Atom Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/atom.wgsl").into()),
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_texture = Self::create_depth_texture(device, ctx.size.width, ctx.size.height);

        let depth_stencil_state = Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Particle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_particle",
                buffers: &[QuadVertex::layout(), ParticleInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_particle",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: depth_stencil_state.clone(),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let ring_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Ring Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_line",
                buffers: &[LineVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_line",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                ..Default::default()
            },
            depth_stencil: depth_stencil_state.clone(),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let cell_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cell Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_cell",
                buffers: &[QuadVertex::layout(), CellInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_cell",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let outline_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Outline Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_line",
                buffers: &[LineVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_line",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let particle_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Particle Buffer"),
            size: (std::mem::size_of::<ParticleInstance>() * MAX_PARTICLES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let ring_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Ring Buffer"),
            size: (std::mem::size_of::<LineVertex>() * MAX_RING_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let cell_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Cell Buffer"),
            size: (std::mem::size_of::<CellInstance>() * MAX_CELLS) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let outline_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Outline Buffer"),
            size: (std::mem::size_of::<LineVertex>() * 8) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            particle_pipeline,
            ring_pipeline,
            cell_pipeline,
            outline_pipeline,
            quad_buffer,
            particle_buffer,
            ring_buffer,
            cell_buffer,
            outline_buffer,
            camera_buffer,
            camera_bind_group,
            depth_texture,
        }
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Upload this frame's camera uniform and geometry for `session`.
    pub fn prepare(
        &self,
        queue: &wgpu::Queue,
        session: &ViewSession,
        camera: &OrbitCamera,
    ) -> FrameData {
        match session.mode {
            ViewMode::Table => self.prepare_table(queue, session),
            ViewMode::Atom => self.prepare_atom(queue, session, camera),
        }
    }

    fn prepare_table(&self, queue: &wgpu::Queue, session: &ViewSession) -> FrameData {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_table()]),
        );

        let cells = table_layout(&ELEMENTS);
        let instances: Vec<CellInstance> = cells
            .iter()
            .take(MAX_CELLS)
            .map(|c| {
                let e = &ELEMENTS[c.element];
                let color = if c.element == session.selected {
                    CELL_SELECTED
                } else if e.block_row == BlockRow::Main {
                    CELL_MAIN
                } else {
                    CELL_SERIES
                };
                CellInstance {
                    position: [c.x, c.y],
                    size: [c.w, c.h],
                    color,
                }
            })
            .collect();
        queue.write_buffer(&self.cell_buffer, 0, bytemuck::cast_slice(&instances));

        // White border around the selected cell
        let mut outline_vertex_count = 0;
        if let Some(c) = cells.iter().find(|c| c.element == session.selected) {
            let corners = [
                [c.x, c.y],
                [c.x + c.w, c.y],
                [c.x + c.w, c.y + c.h],
                [c.x, c.y + c.h],
            ];
            let mut vertices = Vec::with_capacity(8);
            for i in 0..4 {
                for corner in [corners[i], corners[(i + 1) % 4]] {
                    vertices.push(LineVertex {
                        position: [corner[0], corner[1], 0.0],
                        color: OUTLINE_COLOR,
                    });
                }
            }
            queue.write_buffer(&self.outline_buffer, 0, bytemuck::cast_slice(&vertices));
            outline_vertex_count = vertices.len() as u32;
        }

        FrameData {
            mode: ViewMode::Table,
            cell_count: instances.len() as u32,
            outline_vertex_count,
            particle_count: 0,
            ring_ranges: Vec::new(),
        }
    }

    fn prepare_atom(
        &self,
        queue: &wgpu::Queue,
        session: &ViewSession,
        camera: &OrbitCamera,
    ) -> FrameData {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_orbit(camera)]),
        );

        let spin = Mat3::from_rotation_y(session.spin.to_radians());
        let element = session.selected_element();

        // Nucleons regenerate deterministically per frame; same Z, same cloud
        let mut instances: Vec<ParticleInstance> = Vec::new();
        let layout = nucleon_layout(element.z);
        for p in &layout.protons {
            let pos = spin * *p;
            instances.push(ParticleInstance {
                position: pos.to_array(),
                radius: NUCLEON_RADIUS,
                color: PROTON_COLOR,
            });
        }
        for n in &layout.neutrons {
            let pos = spin * *n;
            instances.push(ParticleInstance {
                position: pos.to_array(),
                radius: NUCLEON_RADIUS,
                color: NEUTRON_COLOR,
            });
        }
        for e in &session.electrons {
            let pos = spin * e.position();
            instances.push(ParticleInstance {
                position: pos.to_array(),
                radius: ELECTRON_RADIUS,
                color: ELECTRON_COLOR,
            });
        }
        instances.truncate(MAX_PARTICLES);
        queue.write_buffer(&self.particle_buffer, 0, bytemuck::cast_slice(&instances));

        // One ring per occupied shell; electrons of a shell share the orbit
        let mut ring_vertices: Vec<LineVertex> = Vec::new();
        let mut ring_ranges = Vec::new();
        let mut last_radius = f32::NEG_INFINITY;
        for e in &session.electrons {
            if e.radius <= last_radius {
                continue;
            }
            last_radius = e.radius;
            if ring_vertices.len() + ORBIT_SEGMENTS + 1 > MAX_RING_VERTICES {
                break;
            }

            let start = ring_vertices.len() as u32;
            for i in 0..=ORBIT_SEGMENTS {
                let t = std::f32::consts::TAU * i as f32 / ORBIT_SEGMENTS as f32;
                let pos = spin * e.orbit_point(t);
                ring_vertices.push(LineVertex {
                    position: pos.to_array(),
                    color: ORBIT_COLOR,
                });
            }
            ring_ranges.push((start, ring_vertices.len() as u32 - start));
        }
        if !ring_vertices.is_empty() {
            queue.write_buffer(&self.ring_buffer, 0, bytemuck::cast_slice(&ring_vertices));
        }

        FrameData {
            mode: ViewMode::Atom,
            cell_count: 0,
            outline_vertex_count: 0,
            particle_count: instances.len() as u32,
            ring_ranges,
        }
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        data: &FrameData,
    ) {
        match data.mode {
            ViewMode::Table => self.render_table(encoder, view, data),
            ViewMode::Atom => self.render_atom(encoder, view, data),
        }
    }

    fn render_table(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        data: &FrameData,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Table Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if data.cell_count > 0 {
            pass.set_pipeline(&self.cell_pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            pass.set_vertex_buffer(1, self.cell_buffer.slice(..));
            pass.draw(0..6, 0..data.cell_count);
        }

        if data.outline_vertex_count > 0 {
            pass.set_pipeline(&self.outline_pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.outline_buffer.slice(..));
            pass.draw(0..data.outline_vertex_count, 0..1);
        }
    }

    fn render_atom(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        data: &FrameData,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Atom Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_texture,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !data.ring_ranges.is_empty() {
            pass.set_pipeline(&self.ring_pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.ring_buffer.slice(..));
            for (start, count) in &data.ring_ranges {
                pass.draw(*start..(*start + *count), 0..1);
            }
        }

        if data.particle_count > 0 {
            pass.set_pipeline(&self.particle_pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            pass.set_vertex_buffer(1, self.particle_buffer.slice(..));
            pass.draw(0..6, 0..data.particle_count);
        }
    }
}
