use macroquad::prelude::*;

use petri::simulation::ecosystem::Ecosystem;
use petri::simulation::params::Params;

mod graphics;

#[macroquad::main("Petri")]
async fn main() {
    let mut genesis = true;

    let mut state: Option<(Params, Ecosystem)> = None;

    println!("Starting petri ecosystem simulation");

    loop {
        if genesis {
            clear_background(LIGHTGRAY);
            let text = "Seed a new dish by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_down(KeyCode::Enter) {
                genesis = false;

                // the world spans whatever the window is at seed time
                let params = Params {
                    n_organism: 20,
                    n_food: 50,
                    box_width: screen_width() as f64,
                    box_height: screen_height() as f64,
                    fov_radius: 50.0,
                    starvation_time: 500.0,
                    reproduction_chance: 0.03,
                    extra_reproduction_chance: 0.01,
                    reproduction_cooldown: 600.0,
                    fullness_limit: 300.0,
                    organism_radius: 5.0,
                    spawn_spread: 10.0,
                    food_radius: 3.0,
                    food_growth_rate: 0.01,
                    food_split_threshold: 10.0,
                    maturity_radius: 10.0,
                    food_color: [0, 128, 0],
                };

                println!(
                    "Seeding {} organisms and {} food items",
                    params.n_organism, params.n_food
                );

                let ecosystem = Ecosystem::new(&params);
                state = Some((params, ecosystem));
            }
            next_frame().await;
            continue;
        }

        clear_background(LIGHTGRAY);

        if let Some((ref params, ref mut ecosystem)) = state {
            ecosystem.step(params);

            graphics::draw_food(ecosystem, params);
            graphics::draw_organisms(ecosystem, params);
        }

        next_frame().await
    }
}
