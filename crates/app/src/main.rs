//! Headless demo frame driver.
//!
//! Builds the canonical demo scene (a cube with a child sphere and a camera
//! looking at them) and runs a fixed number of mutate-then-render frames,
//! standing in for the window collaborator that would normally own the loop.

use anyhow::Result;
use arbor_core::Timer;
use arbor_render::RenderPass;
use arbor_resources::{Material, ShaderHandle, shapes};
use arbor_scene::{Camera, Payload, Scene};
use glam::{Quat, Vec3, Vec4};
use tracing::{debug, info};

fn main() -> Result<()> {
    arbor_core::init_logging();
    info!("starting arbor demo");

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(240);

    let mut scene = Scene::new();
    let cube_geometry = scene.add_geometry(shapes::cube(1.0));
    let sphere_geometry = scene.add_geometry(shapes::uv_sphere(0.35, 24, 12));
    let red = scene.add_material(Material::with_base_color(Vec4::new(0.8, 0.2, 0.2, 1.0)));
    let white = scene.add_material(Material::default());

    let cube = scene.create_node(Payload::mesh(cube_geometry, red));
    // the sphere rides along as a child of the cube
    let sphere = scene.create_child(cube, Payload::mesh(sphere_geometry, white))?;
    scene
        .node_mut(sphere)?
        .transform_mut()
        .set_position(Vec3::new(1.2, 0.0, 0.0));

    let camera = scene.create_node(Payload::Camera(Camera::default()));
    scene
        .node_mut(camera)?
        .transform_mut()
        .set_position(Vec3::new(0.0, 1.5, 6.0));
    scene.camera_mut(camera)?.apply_shader(ShaderHandle::new(1));
    scene.look_at(camera, cube)?;

    let mut pass = RenderPass::new();
    let mut timer = Timer::new();

    for _ in 0..frames {
        let delta = timer.delta_secs();
        scene
            .node_mut(cube)?
            .transform_mut()
            .rotate(Quat::from_rotation_y(delta * 0.8));

        let frame = pass.run(&mut scene, camera)?;
        debug!(
            frame = timer.frames(),
            commands = frame.commands.len(),
            "frame rendered"
        );
    }

    info!(
        frames = timer.frames(),
        elapsed = ?timer.elapsed(),
        nodes = scene.node_count(),
        "demo finished"
    );
    Ok(())
}
