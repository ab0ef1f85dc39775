//! End-to-end tests: scene construction through draw-command emission.

use arbor_core::Error;
use arbor_render::RenderPass;
use arbor_resources::{Material, ShaderHandle, shapes};
use arbor_scene::{Camera, GeometryId, NodeId, Payload, Scene};
use glam::{Quat, Vec3, Vec4};

const EPSILON: f32 = 1e-5;

fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

/// Scene with a cube geometry, a default material, and a camera at +Z.
fn demo_scene() -> (Scene, GeometryId, NodeId) {
    let mut scene = Scene::new();
    let geometry = scene.add_geometry(shapes::cube(1.0));
    let camera = scene.create_node(Payload::Camera(Camera::default()));
    scene
        .node_mut(camera)
        .unwrap()
        .transform_mut()
        .set_position(Vec3::new(0.0, 0.0, 5.0));
    (scene, geometry, camera)
}

#[test]
fn test_child_world_translation_reaches_commands() {
    let (mut scene, geometry, camera) = demo_scene();
    let material = scene.add_material(Material::default());

    let a = scene.create_node(Payload::mesh(geometry, material));
    scene
        .node_mut(a)
        .unwrap()
        .transform_mut()
        .set_position(Vec3::new(1.0, 0.0, 0.0));
    let b = scene
        .create_child(a, Payload::mesh(geometry, material))
        .unwrap();
    scene
        .node_mut(b)
        .unwrap()
        .transform_mut()
        .set_position(Vec3::new(2.0, 0.0, 0.0));

    let mut pass = RenderPass::new();
    let frame = pass.run(&mut scene, camera).unwrap();

    assert_eq!(frame.commands.len(), 2);
    let b_translation = frame.commands[1].world_matrix.w_axis.truncate();
    assert!(
        approx_eq_vec3(b_translation, Vec3::new(3.0, 0.0, 0.0)),
        "got {:?}",
        b_translation
    );
}

#[test]
fn test_commands_follow_mesh_insertion_order() {
    let (mut scene, geometry, camera) = demo_scene();
    // one material per mesh so commands are distinguishable
    let materials: Vec<_> = (0..3)
        .map(|_| scene.add_material(Material::default()))
        .collect();

    let _first = scene.create_node(Payload::mesh(geometry, materials[0]));
    let group = scene.create_node(Payload::Empty);
    let _second = scene
        .create_child(group, Payload::mesh(geometry, materials[1]))
        .unwrap();
    let _third = scene.create_node(Payload::mesh(geometry, materials[2]));

    let mut pass = RenderPass::new();
    let frame = pass.run(&mut scene, camera).unwrap();

    // insertion order, independent of tree depth
    let order: Vec<_> = frame.commands.iter().map(|c| c.material).collect();
    assert_eq!(order, materials);
}

#[test]
fn test_render_auto_resolves_stale_transforms() {
    let (mut scene, geometry, camera) = demo_scene();
    let material = scene.add_material(Material::default());
    let mesh = scene.create_node(Payload::mesh(geometry, material));

    let mut pass = RenderPass::new();
    pass.run(&mut scene, camera).unwrap();

    // mutate and render again with no explicit resolve in between
    scene
        .node_mut(mesh)
        .unwrap()
        .transform_mut()
        .move_to(Vec3::new(0.0, 7.0, 0.0));
    let frame = pass.run(&mut scene, camera).unwrap();

    let translation = frame.commands[0].world_matrix.w_axis.truncate();
    assert!(approx_eq_vec3(translation, Vec3::new(0.0, 7.0, 0.0)));
}

#[test]
fn test_detached_meshes_are_skipped() {
    let (mut scene, geometry, camera) = demo_scene();
    let material = scene.add_material(Material::default());

    let kept = scene.create_node(Payload::mesh(geometry, material));
    let group = scene.create_node(Payload::Empty);
    let _hidden = scene
        .create_child(group, Payload::mesh(geometry, material))
        .unwrap();

    let mut pass = RenderPass::new();
    assert_eq!(pass.run(&mut scene, camera).unwrap().commands.len(), 2);

    let root = scene.root();
    scene.detach(root, group).unwrap();
    let frame = pass.run(&mut scene, camera).unwrap();
    assert_eq!(frame.commands.len(), 1);
    assert_eq!(
        frame.commands[0].world_matrix,
        scene.node(kept).unwrap().world_matrix()
    );

    scene.attach(root, group).unwrap();
    assert_eq!(pass.run(&mut scene, camera).unwrap().commands.len(), 2);
}

#[test]
fn test_camera_shader_and_material_override() {
    let (mut scene, geometry, camera) = demo_scene();
    let plain = scene.add_material(Material::default());
    let overridden = scene.add_material(Material::with_shader(ShaderHandle::new(9)));
    scene.create_node(Payload::mesh(geometry, plain));
    scene.create_node(Payload::mesh(geometry, overridden));

    scene.camera_mut(camera).unwrap().apply_shader(ShaderHandle::new(7));

    let mut pass = RenderPass::new();
    let frame = pass.run(&mut scene, camera).unwrap();

    assert_eq!(frame.shader, Some(ShaderHandle::new(7)));
    let shaders: Vec<_> = frame
        .commands
        .iter()
        .map(|c| scene.material(c.material).unwrap().shader)
        .collect();
    assert_eq!(shaders, vec![None, Some(ShaderHandle::new(9))]);
}

#[test]
fn test_view_matrix_maps_target_into_view_space() {
    let (mut scene, _geometry, camera) = demo_scene();
    let target = scene.create_node(Payload::Empty);
    scene.look_at(camera, target).unwrap();

    let mut pass = RenderPass::new();
    let frame = pass.run(&mut scene, camera).unwrap();

    // the camera sits at (0,0,5) looking at the origin: the target lands
    // five units down the view-space -Z axis
    let in_view = frame.view.transform_point3(Vec3::ZERO);
    assert!(
        approx_eq_vec3(in_view, Vec3::new(0.0, 0.0, -5.0)),
        "got {:?}",
        in_view
    );
}

#[test]
fn test_shared_material_edit_between_frames() {
    let (mut scene, geometry, camera) = demo_scene();
    let shared = scene.add_material(Material::default());
    scene.create_node(Payload::mesh(geometry, shared));
    scene.create_node(Payload::mesh(geometry, shared));

    let mut pass = RenderPass::new();
    pass.run(&mut scene, camera).unwrap();

    scene
        .material_mut(shared)
        .unwrap()
        .set_color(Vec3::new(100.0, 100.0, 100.0));

    let frame = pass.run(&mut scene, camera).unwrap();
    for command in frame.commands {
        assert_eq!(
            scene.material(command.material).unwrap().color(),
            Vec3::new(100.0, 100.0, 100.0)
        );
    }
}

#[test]
fn test_rotating_a_group_moves_its_children_on_screen() {
    let (mut scene, geometry, camera) = demo_scene();
    let material = scene.add_material(Material::with_base_color(Vec4::ONE));

    let group = scene.create_node(Payload::Empty);
    let mesh = scene
        .create_child(group, Payload::mesh(geometry, material))
        .unwrap();
    scene
        .node_mut(mesh)
        .unwrap()
        .transform_mut()
        .set_position(Vec3::new(1.0, 0.0, 0.0));

    let mut pass = RenderPass::new();
    pass.run(&mut scene, camera).unwrap();

    scene
        .node_mut(group)
        .unwrap()
        .transform_mut()
        .set_rotation(Quat::from_rotation_y(std::f32::consts::PI));
    let frame = pass.run(&mut scene, camera).unwrap();

    let translation = frame.commands[0].world_matrix.w_axis.truncate();
    assert!(
        approx_eq_vec3(translation, Vec3::new(-1.0, 0.0, 0.0)),
        "got {:?}",
        translation
    );
}

#[test]
fn test_destroyed_camera_handle_is_rejected() {
    let (mut scene, _geometry, camera) = demo_scene();
    scene.destroy(camera).unwrap();

    let mut pass = RenderPass::new();
    assert!(matches!(
        pass.run(&mut scene, camera),
        Err(Error::InvalidHandle(_))
    ));
}
