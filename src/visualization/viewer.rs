//! Bevy 2D viewer for a running simulation
//!
//! Spawns one circle sprite per particle at startup, advances the world by
//! one `dt` per frame, and syncs sprite transforms afterwards. The camera
//! pans with a left-button drag and zooms with the mouse wheel.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Pixels per world unit at zoom 0.
const BASE_SCALE: f32 = 250.0;

/// Particles never drop below this drawn radius, whatever the zoom.
const MIN_RADIUS_PX: f32 = 1.0;

pub fn run(scenario: Scenario) {
    println!(
        "viewer: starting with {} particles, dt = {}",
        scenario.world.len(),
        scenario.dt
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, camera_control_system),
        )
        .run();
}

fn world_scale(scenario: &Scenario) -> f32 {
    BASE_SCALE * (scenario.display.zoom as f32).exp2()
}

fn setup_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let scale = world_scale(&scenario);
    let radius = ((scenario.display.particle_size as f32) * scale).max(MIN_RADIUS_PX);

    for (i, particle) in scenario.world.particles.iter().enumerate() {
        let [r, g, b] = particle.color;
        let x = particle.position.x as f32 * scale;
        let y = particle.position.y as f32 * scale;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(Color::rgb_u8(r, g, b))),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario { world, dt, .. } = &mut *scenario;

    world.update(*dt);
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    let scale = world_scale(&scenario);

    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(particle) = scenario.world.particles.get(*i) {
            transform.translation.x = (particle.position.x as f32) * scale;
            transform.translation.y = (particle.position.y as f32) * scale;
        }
    }
}

fn camera_control_system(
    mut wheel_events: EventReader<MouseWheel>,
    mut motion_events: EventReader<MouseMotion>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut cameras: Query<(&mut Transform, &mut OrthographicProjection), With<Camera>>,
) {
    let Ok((mut transform, mut projection)) = cameras.get_single_mut() else {
        return;
    };

    for event in wheel_events.read() {
        projection.scale *= 0.9_f32.powf(event.y);
    }

    if buttons.pressed(MouseButton::Left) {
        for event in motion_events.read() {
            transform.translation.x -= event.delta.x * projection.scale;
            transform.translation.y += event.delta.y * projection.scale;
        }
    } else {
        motion_events.clear();
    }
}
