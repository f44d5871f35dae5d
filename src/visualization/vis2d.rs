//! Bevy 2D viewer
//!
//! Draws each body as a filled circle and each trail as a line strip. The
//! 2D camera is centred on the world origin with +y up, so a world position
//! maps to a window pixel as `(x + w/2, h/2 - y)` without any extra work.
//!
//! Physics runs in `FixedUpdate`, one `Scenario::step` per fixed tick at
//! `engine.ticks_per_second`. The virtual clock's max delta caps how many
//! ticks a slow frame can queue up.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowMode;

use std::time::Duration;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::Rgb;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Pixels per world unit
#[derive(Resource, Clone, Copy)]
struct ViewScale(f32);

const TRAIL_COLOR: Color = Color::WHITE;
const MIN_RADIUS_PX: f32 = 1.0;

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.len());

    let window = &scenario.window;
    let primary = Window {
        title: window.title.clone(),
        resolution: (window.width as f32, window.height as f32).into(),
        mode: if window.fullscreen {
            WindowMode::BorderlessFullscreen
        } else {
            WindowMode::Windowed
        },
        ..Default::default()
    };
    // Engine settings are validated by Scenario::build, so the rate is > 0
    let hz = scenario.engine.ticks_per_second;
    let fixed_time = Time::<Fixed>::from_hz(hz);
    let mut virtual_time = Time::<Virtual>::default();
    virtual_time.set_max_delta(Duration::from_secs_f64(
        f64::from(scenario.engine.max_ticks_per_frame) / hz,
    ));
    let scale = ViewScale(window.scale);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(fixed_time)
        .insert_resource(virtual_time)
        .insert_resource(scale)
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (exit_on_escape_system, sync_transforms_system, draw_trails_system),
        )
        .run();
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    scale: Res<ViewScale>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.iter().enumerate() {
        let radius_screen = (body.radius() as f32 * scale.0).max(MIN_RADIUS_PX);
        let x = body.x.x as f32 * scale.0;
        let y = body.x.y as f32 * scale.0;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(to_color(body.color()))),
                // later bodies on top
                transform: Transform::from_xyz(x, y, i as f32),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn exit_on_escape_system(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    scale: Res<ViewScale>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * scale.0;
            transform.translation.y = (b.x.y as f32) * scale.0;
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, scale: Res<ViewScale>, mut gizmos: Gizmos) {
    for body in scenario.system.iter() {
        let Some(trail) = body.trail() else {
            continue;
        };
        if trail.len() < 2 {
            continue;
        }
        gizmos.linestrip_2d(
            trail.iter().map(|p| Vec2::new(p.x as f32, p.y as f32) * scale.0),
            TRAIL_COLOR,
        );
    }
}
