//! Bevy viewer for a sticky-box scenario
//!
//! The window is the container: dragging the red box with the left mouse
//! button suspends the simulation, releasing it lets the corner fields pull
//! it back. `R` swaps the window's width and height (orientation change),
//! `D` toggles the field overlay. Resizing the window feeds the same
//! bounds-change path as `R`.

use bevy::math::primitives::Rectangle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Bounds, NVec2};

#[derive(Component)]
struct ItemMarker;

/// Whether the mouse currently holds the box
#[derive(Resource, Default)]
struct DragState {
    active: bool,
}

/// Countdown standing in for the host's rotation animation; while it runs
/// the box stays seated and forces stay suspended
#[derive(Resource)]
struct BoundsTransition {
    timer: Timer,
    active: bool,
}

const TRANSITION_SECS: f32 = 0.3;

pub fn run_2d(scenario: Scenario) {
    let w = scenario.system.bounds.w as f32;
    let h = scenario.system.bounds.h as f32;
    println!("run_2d: starting Bevy viewer, container {}x{}", w, h);

    App::new()
        .insert_resource(scenario)
        .insert_resource(DragState::default())
        .insert_resource(BoundsTransition {
            timer: Timer::from_seconds(TRANSITION_SECS, TimerMode::Once),
            active: false,
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "stickybox".into(),
                resolution: WindowResolution::new(w, h),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                resize_system,
                rotate_key_system,
                transition_system,
                drag_system,
                debug_key_system,
                physics_step_system,
                sync_transform_system,
                debug_overlay_system,
            )
                .chain(),
        )
        .run();
}

/// Simulation coordinates (top-left origin, y down) to Bevy world space
/// (center origin, y up)
fn to_world(p: NVec2, bounds: Bounds) -> Vec3 {
    Vec3::new(
        (p.x - 0.5 * bounds.w) as f32,
        (0.5 * bounds.h - p.y) as f32,
        0.0,
    )
}

/// Window cursor position is already top-left origin, matching sim space
fn to_sim(cursor: Vec2) -> NVec2 {
    NVec2::new(cursor.x as f64, cursor.y as f64)
}

fn setup_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let item = &scenario.system.item;
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Rectangle::new(item.size.x as f32, item.size.y as f32))),
            material: materials.add(ColorMaterial::from(Color::rgb(0.85, 0.2, 0.2))),
            transform: Transform::from_translation(to_world(item.x, scenario.system.bounds)),
            ..Default::default()
        },
        ItemMarker,
    ));
}

/// Window size changes are container bounds changes; the transition timer
/// stands in for the rotation animation and re-enables the forces when done
fn resize_system(
    mut events: EventReader<WindowResized>,
    mut scenario: ResMut<Scenario>,
    mut transition: ResMut<BoundsTransition>,
) {
    for ev in events.read() {
        let new_bounds = Bounds {
            w: ev.width as f64,
            h: ev.height as f64,
        };
        if new_bounds == scenario.system.bounds {
            continue;
        }

        let Scenario {
            behavior, system, ..
        } = &mut *scenario;
        behavior.bounds_changed(system, new_bounds);

        transition.timer.reset();
        transition.active = true;
    }
}

/// `R` swaps width and height like a device rotation; the resulting resize
/// event drives the bounds-change choreography above
fn rotate_key_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        let w = window.resolution.width();
        let h = window.resolution.height();
        window.resolution.set(h, w);
    }
}

fn transition_system(
    time: Res<Time>,
    mut transition: ResMut<BoundsTransition>,
    mut scenario: ResMut<Scenario>,
) {
    if !transition.active {
        return;
    }
    transition.timer.tick(time.delta());
    if transition.timer.finished() {
        transition.active = false;
        let Scenario {
            behavior, system, ..
        } = &mut *scenario;
        behavior.transition_finished(system);
    }
}

/// Left mouse drag on the box = the pan gesture
fn drag_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<DragState>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    let Scenario {
        behavior, system, ..
    } = &mut *scenario;

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(c) = cursor {
            let p = to_sim(c);
            let half = system.item.half_extent();
            let d = p - system.item.x;
            // Grab only when the press lands on the box
            if d.x.abs() <= half.x && d.y.abs() <= half.y {
                drag.active = true;
                behavior.drag_began(system);
            }
        }
    }

    if drag.active {
        if buttons.pressed(MouseButton::Left) {
            if let Some(c) = cursor {
                behavior.drag_moved(system, to_sim(c));
            }
        } else {
            drag.active = false;
            behavior.drag_ended(system);
        }
    }
}

/// `D` is the long-press stand-in: toggle the field overlay
fn debug_key_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::KeyD) {
        scenario.debug_enabled = !scenario.debug_enabled;
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        behavior, system, ..
    } = &mut *scenario;

    behavior.tick(system);
}

fn sync_transform_system(
    scenario: Res<Scenario>,
    mut query: Query<&mut Transform, With<ItemMarker>>,
) {
    for mut transform in &mut query {
        transform.translation = to_world(scenario.system.item.x, scenario.system.bounds);
    }
}

/// Draw anchor points and their field regions when the overlay is on
fn debug_overlay_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    if !scenario.debug_enabled {
        return;
    }

    let bounds = scenario.system.bounds;
    for anchor in scenario.system.anchors.iter() {
        let p = to_world(anchor.point, bounds).truncate();
        gizmos.circle_2d(p, 3.0, Color::YELLOW);
        gizmos.rect_2d(
            p,
            0.0,
            Vec2::new(anchor.region.x as f32, anchor.region.y as f32),
            Color::rgba(1.0, 1.0, 0.0, 0.4),
        );
    }
}
