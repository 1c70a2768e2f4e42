use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::frames::{BodyLabel, Frame};
use crate::simulation::states::BodyKind;
use super::ViewMode;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Recorded frames being played back; the viewer never touches the
/// simulation itself
#[derive(Resource)]
struct Playback {
    frames: Vec<Frame>,
    labels: Vec<BodyLabel>,
    cursor: usize,
    timer: Timer,
    show_asteroids: bool,
    scale: f32, // pixels per AU
    mode: ViewMode,
    titled_cursor: Option<usize>,
}

impl Playback {
    fn current(&self) -> &Frame {
        &self.frames[self.cursor]
    }

    fn is_visible(&self, i: usize) -> bool {
        self.show_asteroids || self.labels.get(i).map_or(true, |l| l.kind != BodyKind::Asteroid)
    }
}

const WINDOW_SIZE: f32 = 900.0;
const FRAME_INTERVAL_SECS: f32 = 0.05;

fn srgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}

/// Loop over `frames` in a 2D window until it is closed
pub fn run_2d(frames: Vec<Frame>, labels: Vec<BodyLabel>, mode: ViewMode, show_asteroids: bool) {
    if frames.is_empty() {
        tracing::warn!("no frames to show");
        return;
    }
    tracing::info!(frames = frames.len(), bodies = labels.len(), "starting 2D viewer");

    let scale = 0.5 * WINDOW_SIZE / mode.extent() as f32;
    let playback = Playback {
        frames,
        labels,
        cursor: 0,
        timer: Timer::from_seconds(FRAME_INTERVAL_SECS, TimerMode::Repeating),
        show_asteroids,
        scale,
        mode,
        titled_cursor: None,
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(playback)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: mode.title().into(),
                        resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // tracing is already initialized by the binary
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                advance_playback_system,
                sync_transforms_system,
                draw_trails_system,
                update_title_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    playback: Res<Playback>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let first = playback.current();
    for i in 0..first.body_count() {
        if !playback.is_visible(i) {
            continue;
        }
        let Some(label) = playback.labels.get(i) else {
            continue;
        };

        // hint sizes are marker areas; turn them into a pixel radius
        let radius_screen = (label.hints.size.sqrt() * 0.5).max(1.0);
        let (x, y) = first.positions[i];

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(srgb(label.hints.color))),
                transform: Transform::from_xyz(x as f32 * playback.scale, y as f32 * playback.scale, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn advance_playback_system(time: Res<Time>, mut playback: ResMut<Playback>) {
    if playback.timer.tick(time.delta()).just_finished() {
        playback.cursor = (playback.cursor + 1) % playback.frames.len();
    }
}

fn sync_transforms_system(playback: Res<Playback>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let frame = playback.current();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(&(x, y)) = frame.positions.get(*i) {
            transform.translation.x = x as f32 * playback.scale;
            transform.translation.y = y as f32 * playback.scale;
        }
    }
}

fn draw_trails_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    let frame = playback.current();
    for (i, trail) in frame.trails.iter().enumerate() {
        if trail.len() < 2 || !playback.is_visible(i) {
            continue;
        }
        let Some(label) = playback.labels.get(i) else {
            continue;
        };

        let alpha = if label.kind == BodyKind::Asteroid { 0.3 } else { 0.6 };
        let [r, g, b] = label.hints.color;
        let points = trail
            .xs
            .iter()
            .zip(trail.ys.iter())
            .map(|(&x, &y)| Vec2::new(x as f32 * playback.scale, y as f32 * playback.scale));
        gizmos.linestrip_2d(points, Color::srgba(r, g, b, alpha));
    }
}

fn update_title_system(mut playback: ResMut<Playback>, mut windows: Query<&mut Window>) {
    if playback.titled_cursor == Some(playback.cursor) {
        return;
    }
    let title = playback.mode.window_title(playback.current().time);
    for mut window in &mut windows {
        window.title.clone_from(&title);
    }
    playback.titled_cursor = Some(playback.cursor);
}
