use macroquad::prelude::*;
use ndarray::Array1;
use petri::simulation::ecosystem::Ecosystem;
use petri::simulation::params::Params;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Array1<f64> {
    type Output = (f32, f32);
    fn to_screen(&self, params: &Params) -> (f32, f32) {
        let scale_x = screen_width() / params.box_width as f32;
        let scale_y = screen_height() / params.box_height as f32;
        (self[0] as f32 * scale_x, self[1] as f32 * scale_y)
    }
}

impl ToScreen for f64 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let scale_x = screen_width() / params.box_width as f32;
        let scale_y = screen_height() / params.box_height as f32;
        *self as f32 * scale_x.min(scale_y)
    }
}

pub fn draw_food(state: &Ecosystem, params: &Params) {
    state.food.iter().for_each(|item| {
        let (x, y) = item.pos.to_screen(params);
        let [r, g, b] = item.color;
        draw_circle(
            x,
            y,
            item.radius.to_screen(params),
            Color::from_rgba(r, g, b, 255),
        );
    });
}

pub fn draw_organisms(state: &Ecosystem, params: &Params) {
    state.organisms.iter().for_each(|organism| {
        let (x, y) = organism.pos.to_screen(params);

        // field of view ring
        draw_circle_lines(
            x,
            y,
            params.fov_radius.to_screen(params),
            1.0,
            Color::from_rgba(0, 0, 255, 77),
        );

        // body shade runs white (fed) to black (starving)
        let starvation = (organism.hunger / organism.max_hunger).min(1.0);
        let shade = (255.0 * (1.0 - starvation)) as u8;
        draw_circle(
            x,
            y,
            organism.radius.to_screen(params),
            Color::from_rgba(shade, shade, shade, 255),
        );
    });
}
