use super::camera::Camera;
use super::context::GpuContext;
use super::mesh::Mesh;
use super::pipeline::{RenderPipelines, Uniforms};
use crate::arm::Arm;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

const MAX_INSTANCES: usize = 64;
const AXIS_GIZMO_LENGTH: f32 = 0.25;
const GRID_COLOR: [f32; 4] = [0.25, 0.25, 0.28, 1.0];
const AXIS_COLORS: [[f32; 4]; 3] = [
    [0.9, 0.2, 0.2, 1.0],
    [0.2, 0.9, 0.2, 1.0],
    [0.2, 0.4, 0.9, 1.0],
];

#[derive(Clone, Copy)]
enum MeshKind {
    Cylinder,
    Cuboid,
    Grid,
    AxisLine,
}

struct DrawCall {
    kind: MeshKind,
    offset: u32,
}

/// Draws the arm by walking its frames: the model matrix of every part is
/// the frame's composed world transform times the part's local matrix, so
/// the forward-kinematic pose comes entirely from the frame chain.
pub struct SceneRenderer {
    pipelines: RenderPipelines,
    line_pipeline: wgpu::RenderPipeline,
    cylinder_mesh: Mesh,
    cuboid_mesh: Mesh,
    grid_mesh: Mesh,
    axis_mesh: Mesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform_alignment: u32,
}

impl SceneRenderer {
    pub fn new(context: &GpuContext) -> Self {
        let pipelines = RenderPipelines::new(context);
        let line_pipeline = pipelines.create_line_pipeline(context);
        let cylinder_mesh = Mesh::cylinder(&context.device, 1.0, 1.0, 32);
        let cuboid_mesh = Mesh::cuboid(&context.device, Vec3::ONE);
        let grid_mesh = Mesh::grid(&context.device, 5.0, 10);
        let axis_mesh = Mesh::unit_line(&context.device);

        let uniform_alignment = context.device.limits().min_uniform_buffer_offset_alignment;
        let aligned_size = Self::align_to(std::mem::size_of::<Uniforms>() as u32, uniform_alignment);
        let buffer_size = (aligned_size as usize * MAX_INSTANCES) as u64;

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Dynamic Uniform Buffer"),
            size: buffer_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = pipelines.create_dynamic_bind_group(&context.device, &uniform_buffer);

        Self {
            pipelines,
            line_pipeline,
            cylinder_mesh,
            cuboid_mesh,
            grid_mesh,
            axis_mesh,
            uniform_buffer,
            bind_group,
            uniform_alignment,
        }
    }

    fn align_to(size: u32, alignment: u32) -> u32 {
        (size + alignment - 1) & !(alignment - 1)
    }

    fn aligned_uniform_size(&self) -> u32 {
        Self::align_to(std::mem::size_of::<Uniforms>() as u32, self.uniform_alignment)
    }

    pub fn render(
        &self,
        context: &GpuContext,
        view: &wgpu::TextureView,
        arm: &Arm,
        camera: &Camera,
        show_axes: bool,
    ) {
        let view_proj = camera.view_projection();
        let aligned_size = self.aligned_uniform_size() as usize;

        let mut uniform_data = vec![0u8; aligned_size * MAX_INSTANCES];
        let mut instance_idx = 0;
        let mut solid_calls: Vec<DrawCall> = Vec::new();
        let mut line_calls: Vec<DrawCall> = Vec::new();

        let mut push = |kind: MeshKind, model: Mat4, color: [f32; 4]| {
            if instance_idx >= MAX_INSTANCES {
                return None;
            }
            let uniforms = Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                color,
            };
            let offset = instance_idx * aligned_size;
            let bytes = bytemuck::bytes_of(&uniforms);
            uniform_data[offset..offset + bytes.len()].copy_from_slice(bytes);
            instance_idx += 1;
            Some(DrawCall {
                kind,
                offset: offset as u32,
            })
        };

        if let Some(call) = push(MeshKind::Grid, Mat4::IDENTITY, GRID_COLOR) {
            line_calls.push(call);
        }

        let world_transforms = arm.world_transforms();
        for (frame, world) in arm.frames().iter().zip(&world_transforms) {
            for part in &frame.parts {
                let model = *world * part.local_matrix();
                let kind = match part.shape {
                    crate::arm::PartShape::Cylinder { .. } => MeshKind::Cylinder,
                    crate::arm::PartShape::Cuboid { .. } => MeshKind::Cuboid,
                };
                if let Some(call) = push(kind, model, part.color) {
                    solid_calls.push(call);
                }
            }
        }

        if show_axes {
            // The unit line runs along +X; swing it onto Y and Z for the
            // other two gizmo arms.
            let arms = [
                Quat::IDENTITY,
                Quat::from_rotation_z(FRAC_PI_2),
                Quat::from_rotation_y(-FRAC_PI_2),
            ];
            for world in &world_transforms {
                for (rotation, color) in arms.iter().zip(AXIS_COLORS) {
                    let model = *world
                        * Mat4::from_quat(*rotation)
                        * Mat4::from_scale(Vec3::splat(AXIS_GIZMO_LENGTH));
                    if let Some(call) = push(MeshKind::AxisLine, model, color) {
                        line_calls.push(call);
                    }
                }
            }
        }

        context
            .queue
            .write_buffer(&self.uniform_buffer, 0, &uniform_data);

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipelines.pipeline);
            for call in &solid_calls {
                render_pass.set_bind_group(0, &self.bind_group, &[call.offset]);
                let mesh = match call.kind {
                    MeshKind::Cylinder => &self.cylinder_mesh,
                    MeshKind::Cuboid => &self.cuboid_mesh,
                    MeshKind::Grid => &self.grid_mesh,
                    MeshKind::AxisLine => &self.axis_mesh,
                };
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            render_pass.set_pipeline(&self.line_pipeline);
            for call in &line_calls {
                render_pass.set_bind_group(0, &self.bind_group, &[call.offset]);
                let mesh = match call.kind {
                    MeshKind::Grid => &self.grid_mesh,
                    MeshKind::AxisLine => &self.axis_mesh,
                    MeshKind::Cylinder => &self.cylinder_mesh,
                    MeshKind::Cuboid => &self.cuboid_mesh,
                };
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}
