use macroquad::prelude::*;
use walker::simulation::world::World;

const BONE_THICKNESS: f32 = 2.0;

/// Draws every biped's skeleton and head, then the ground line.
pub fn draw_world(world: &World) {
    for index in 0..world.bipeds().len() {
        for (from, to) in world.segments(index) {
            draw_line(from.x, from.y, to.x, to.y, BONE_THICKNESS, WHITE);
        }

        let head = world.head(index);
        draw_circle(head.center.x, head.center.y, head.radius, WHITE);
    }

    let ground_y = world.ground_y();
    draw_line(
        0.0,
        ground_y,
        screen_width(),
        ground_y,
        1.0,
        Color::from_rgba(150, 150, 150, 255),
    );
}
