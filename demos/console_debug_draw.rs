use phys_debug_draw::{
    Body, BodyType, Contact, DebugDrawConfig, DebugRenderer, DrawColor, FixtureRef, FrameInfo,
    Joint, PhysicsWorld, RecordingSink, RenderMetadata, RenderMetadataMap, Shape, WorldManifold,
    math::{to_radians, Transform, Vector2},
};
use nalgebra::Matrix4;
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use std::thread::sleep;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType, size},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const DEMO_DURATION: f32 = 10.0; // seconds
const VIEW_HALF_WIDTH: f32 = 20.0;
const VIEW_HALF_HEIGHT: f32 = 10.0;
const SPIN_DEGREES_PER_SECOND: f32 = 45.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut stdout = stdout();
    stdout.execute(Hide)?;
    let (width, height) = size()?;

    // Scene: static ground, a spinning kinematic box, a sleeping circle and a
    // pendulum hanging from a pulley
    let mut world = PhysicsWorld::new();
    let mut metadata = RenderMetadataMap::new();

    let ground = world.add_body(
        Body::new_static(Vector2::new(0.0, -8.0))
            .with_fixture(Shape::box_shape(18.0, 0.5))
            .with_fixture(Shape::chain(vec![
                Vector2::new(-18.0, 0.5),
                Vector2::new(-18.0, 6.0),
                Vector2::new(-15.0, 6.0),
            ])),
    );
    metadata.insert(ground, RenderMetadata::new(0.0));

    let spinner = world.add_body(
        Body::new(Transform::from_position_angle(Vector2::new(-8.0, 0.0), 0.0), BodyType::Kinematic)
            .with_fixture(Shape::box_shape(3.0, 1.0)),
    );
    metadata.insert(spinner, RenderMetadata::new(1.0));

    let sleeper = world.add_body(
        Body::new_dynamic(Vector2::new(0.0, -5.5))
            .with_fixture(Shape::circle(2.0))
            .with_awake(false),
    );
    metadata.insert(sleeper, RenderMetadata::new(1.0));

    let left = world.add_body(Body::new_dynamic(Vector2::new(8.0, 0.0)).with_fixture(Shape::box_shape(1.0, 1.0)));
    let right = world.add_body(Body::new_dynamic(Vector2::new(14.0, -2.0)).with_fixture(Shape::circle(1.0)));
    metadata.insert(left, RenderMetadata::new(2.0));
    metadata.insert(right, RenderMetadata::new(2.0));
    world.add_joint(Joint::pulley(
        left,
        right,
        Vector2::new(8.0, 8.0),
        Vector2::new(14.0, 8.0),
        Vector2::new(8.0, 1.0),
        Vector2::new(14.0, -1.0),
    ));

    let config = DebugDrawConfig::new(true, true, true);
    let mut renderer = DebugRenderer::new(config)?;
    let projection = Matrix4::new_orthographic(
        -VIEW_HALF_WIDTH,
        VIEW_HALF_WIDTH,
        -VIEW_HALF_HEIGHT,
        VIEW_HALF_HEIGHT,
        -10.0,
        10.0,
    );
    let mut sink = RecordingSink::new();

    let start_time = Instant::now();
    let mut frame_time = Instant::now();
    let mut fps = 30.0;

    while start_time.elapsed().as_secs_f32() < DEMO_DURATION {
        let t = start_time.elapsed().as_secs_f32();

        if let Some(body) = world.get_body_mut(spinner) {
            let angle = to_radians(SPIN_DEGREES_PER_SECOND * t);
            body.set_transform(Transform::from_position_angle(Vector2::new(-8.0, 0.0), angle));
        }

        world.clear_contacts();
        world.add_contact(Contact::new(
            FixtureRef::new(ground, 0),
            FixtureRef::new(sleeper, 0),
            WorldManifold::from_points(Vector2::new(0.0, 1.0), &[Vector2::new(0.0, -7.5)]),
        ));

        sink.clear();
        renderer.render(&world, &metadata, &projection, FrameInfo::new(fps, true), &mut sink)?;

        stdout.queue(Clear(ClearType::All))?;
        draw_frame(&mut stdout, &sink, width, height)?;
        stdout.flush()?;

        let elapsed = frame_time.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
        fps = 1.0 / frame_time.elapsed().as_secs_f32().max(f32::EPSILON);
        frame_time = Instant::now();
    }

    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, height.saturating_sub(1)))?;

    Ok(())
}

/// Maps normalized device coordinates to a terminal cell
fn to_cell(x: f32, y: f32, width: u16, height: u16) -> (i32, i32) {
    let col = ((x + 1.0) * 0.5 * (width as f32 - 1.0)).round() as i32;
    // Terminal rows grow downwards
    let row = ((1.0 - y) * 0.5 * (height as f32 - 1.0)).round() as i32;
    (col, row)
}

fn to_terminal_color(color: DrawColor) -> Color {
    Color::Rgb {
        r: (color.r * 255.0) as u8,
        g: (color.g * 255.0) as u8,
        b: (color.b * 255.0) as u8,
    }
}

fn plot(stdout: &mut std::io::Stdout, col: i32, row: i32, width: u16, height: u16, glyph: char) -> Result<(), std::io::Error> {
    if col >= 0 && row >= 0 && col < width as i32 && row < height as i32 {
        stdout.queue(MoveTo(col as u16, row as u16))?
              .queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_frame(stdout: &mut std::io::Stdout, sink: &RecordingSink, width: u16, height: u16) -> Result<(), std::io::Error> {
    for (start, end, color) in sink.projected_lines() {
        stdout.queue(SetForegroundColor(to_terminal_color(color)))?;

        // Bresenham between the two cells
        let (mut x0, mut y0) = to_cell(start.x, start.y, width, height);
        let (x1, y1) = to_cell(end.x, end.y, width, height);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            plot(stdout, x0, y0, width, height, '·')?;
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    for (position, color) in sink.projected_points() {
        let (col, row) = to_cell(position.x, position.y, width, height);
        stdout.queue(SetForegroundColor(to_terminal_color(color)))?;
        plot(stdout, col, row, width, height, '●')?;
    }

    stdout.queue(ResetColor)?;
    Ok(())
}
