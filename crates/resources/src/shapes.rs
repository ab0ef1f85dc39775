//! Analytic shape generators.
//!
//! These build [`Geometry`] for the primitives a demo scene needs without
//! any asset loading. Winding is counter-clockwise viewed from outside.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::{Geometry, Vertex};

/// Build an axis-aligned cube centered at the origin.
///
/// Each face has its own four vertices so normals stay hard; 24 vertices and
/// 36 indices total.
pub fn cube(size: f32) -> Geometry {
    let h = size * 0.5;

    // (normal, four corners in CCW order)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Z,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
        ),
    ];

    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            vertices.push(Vertex::new(corner, normal, uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    Geometry::new(vertices, indices)
}

/// Build a UV sphere centered at the origin.
///
/// `sectors` is clamped to at least 3 and `stacks` to at least 2. The top
/// and bottom rings collapse to the poles, so the first and last stacks emit
/// one triangle per sector instead of two.
pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> Geometry {
    let sectors = sectors.max(3);
    let stacks = stacks.max(2);

    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    let mut indices = Vec::new();

    for stack in 0..=stacks {
        // phi sweeps from +PI/2 (north pole) to -PI/2 (south pole)
        let phi = PI / 2.0 - PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for sector in 0..=sectors {
            let theta = 2.0 * PI * sector as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let dir = Vec3::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta);
            let uv = Vec2::new(
                sector as f32 / sectors as f32,
                stack as f32 / stacks as f32,
            );
            vertices.push(Vertex::new(dir * radius, dir, uv));
        }
    }

    for stack in 0..stacks {
        let mut k1 = stack * (sectors + 1);
        let mut k2 = k1 + sectors + 1;

        for _ in 0..sectors {
            if stack != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if stack != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    Geometry::new(vertices, indices)
}
