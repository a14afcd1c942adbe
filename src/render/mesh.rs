use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };
}

pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn from_data(device: &wgpu::Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        use wgpu::util::DeviceExt;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// Closed cylinder along Y, centered at the origin.
    pub fn cylinder(device: &wgpu::Device, radius: f32, height: f32, segments: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        let half_height = height / 2.0;

        for i in 0..=segments {
            let theta = 2.0 * PI * i as f32 / segments as f32;
            let x = theta.cos();
            let z = theta.sin();

            vertices.push(Vertex {
                position: [x * radius, -half_height, z * radius],
                normal: [x, 0.0, z],
            });

            vertices.push(Vertex {
                position: [x * radius, half_height, z * radius],
                normal: [x, 0.0, z],
            });
        }

        for i in 0..segments {
            let base = i * 2;
            indices.push(base);
            indices.push(base + 1);
            indices.push(base + 3);

            indices.push(base);
            indices.push(base + 3);
            indices.push(base + 2);
        }

        let base_center_idx = vertices.len() as u32;
        vertices.push(Vertex {
            position: [0.0, -half_height, 0.0],
            normal: [0.0, -1.0, 0.0],
        });

        for i in 0..=segments {
            let theta = 2.0 * PI * i as f32 / segments as f32;
            let x = theta.cos();
            let z = theta.sin();
            vertices.push(Vertex {
                position: [x * radius, -half_height, z * radius],
                normal: [0.0, -1.0, 0.0],
            });
        }

        for i in 0..segments {
            indices.push(base_center_idx);
            indices.push(base_center_idx + 1 + i + 1);
            indices.push(base_center_idx + 1 + i);
        }

        let top_center_idx = vertices.len() as u32;
        vertices.push(Vertex {
            position: [0.0, half_height, 0.0],
            normal: [0.0, 1.0, 0.0],
        });

        for i in 0..=segments {
            let theta = 2.0 * PI * i as f32 / segments as f32;
            let x = theta.cos();
            let z = theta.sin();
            vertices.push(Vertex {
                position: [x * radius, half_height, z * radius],
                normal: [0.0, 1.0, 0.0],
            });
        }

        for i in 0..segments {
            indices.push(top_center_idx);
            indices.push(top_center_idx + 1 + i);
            indices.push(top_center_idx + 1 + i + 1);
        }

        Self::from_data(device, &vertices, &indices)
    }

    /// Axis-aligned box centered at the origin with full extents `size`.
    pub fn cuboid(device: &wgpu::Device, size: Vec3) -> Self {
        let hx = size.x / 2.0;
        let hy = size.y / 2.0;
        let hz = size.z / 2.0;

        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            (
                [1.0, 0.0, 0.0],
                [
                    [hx, -hy, -hz],
                    [hx, hy, -hz],
                    [hx, hy, hz],
                    [hx, -hy, hz],
                ],
            ),
            (
                [-1.0, 0.0, 0.0],
                [
                    [-hx, -hy, hz],
                    [-hx, hy, hz],
                    [-hx, hy, -hz],
                    [-hx, -hy, -hz],
                ],
            ),
            (
                [0.0, 1.0, 0.0],
                [
                    [-hx, hy, -hz],
                    [-hx, hy, hz],
                    [hx, hy, hz],
                    [hx, hy, -hz],
                ],
            ),
            (
                [0.0, -1.0, 0.0],
                [
                    [-hx, -hy, hz],
                    [-hx, -hy, -hz],
                    [hx, -hy, -hz],
                    [hx, -hy, hz],
                ],
            ),
            (
                [0.0, 0.0, 1.0],
                [
                    [-hx, -hy, hz],
                    [hx, -hy, hz],
                    [hx, hy, hz],
                    [-hx, hy, hz],
                ],
            ),
            (
                [0.0, 0.0, -1.0],
                [
                    [hx, -hy, -hz],
                    [-hx, -hy, -hz],
                    [-hx, hy, -hz],
                    [hx, hy, -hz],
                ],
            ),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u32;
            for position in corners {
                vertices.push(Vertex { position, normal });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self::from_data(device, &vertices, &indices)
    }

    /// Square line grid in the XZ plane at y = 0.
    pub fn grid(device: &wgpu::Device, half_size: f32, divisions: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        let step = 2.0 * half_size / divisions as f32;
        for i in 0..=divisions {
            let t = -half_size + step * i as f32;

            let base = vertices.len() as u32;
            vertices.push(Vertex {
                position: [t, 0.0, -half_size],
                normal: [0.0, 1.0, 0.0],
            });
            vertices.push(Vertex {
                position: [t, 0.0, half_size],
                normal: [0.0, 1.0, 0.0],
            });
            vertices.push(Vertex {
                position: [-half_size, 0.0, t],
                normal: [0.0, 1.0, 0.0],
            });
            vertices.push(Vertex {
                position: [half_size, 0.0, t],
                normal: [0.0, 1.0, 0.0],
            });
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 3]);
        }

        Self::from_line_data(device, &vertices, &indices)
    }

    /// Unit line segment from the origin along +X.
    pub fn unit_line(device: &wgpu::Device) -> Self {
        let vertices = [
            Vertex {
                position: [0.0, 0.0, 0.0],
                normal: [0.0, 1.0, 0.0],
            },
            Vertex {
                position: [1.0, 0.0, 0.0],
                normal: [0.0, 1.0, 0.0],
            },
        ];
        Self::from_line_data(device, &vertices, &[0, 1])
    }

    pub fn from_line_data(device: &wgpu::Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        use wgpu::util::DeviceExt;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Line Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Line Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
