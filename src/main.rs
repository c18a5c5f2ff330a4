use std::path::PathBuf;

use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use clap::Parser;
use macroquad::prelude::*;
use voxel_life::{
    CameraState, CellLayout, Config, ConfigError, Simulation, StepStrategy, input, rendering,
    ui,
};

/// 3D Game of Life viewer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid edge length
    #[arg(long)]
    edge: Option<usize>,

    /// Probability that each cell starts alive
    #[arg(long)]
    probability: Option<f64>,

    /// RNG seed for reproducible starting grids
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long)]
    interval_ms: Option<f32>,

    /// Step cells on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn into_config(self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(edge) = self.edge {
            config.edge = edge;
        }
        if let Some(p) = self.probability {
            config.live_probability = p;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ms) = self.interval_ms {
            config.update_interval_ms = ms;
        }
        if self.parallel {
            config.step_strategy = StepStrategy::Parallel;
        }
        config.validate()?;
        Ok(config)
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "3D Game of Life".to_owned(),
        window_width: 1200,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (mut sim, mut camera) = match (
        Simulation::new(&config, &mut rng),
        CameraState::new(&config.camera),
    ) {
        (Ok(sim), Ok(camera)) => (sim, camera),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };
    let layout = CellLayout::from_config(&config);
    let mut drag = input::DragTracker::default();
    let mut slider = ui::create_interval_slider(sim.update_interval_ms());

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(sim.phase());

        slider.set_position(ui::panel_x() + 10.0, 210.0);
        if let Some(ms) = slider.update(mouse_pos) {
            sim = sim.set_update_interval(ms);
        }

        let over_button = buttons.iter().any(|(_, btn)| btn.is_hovered(mouse_pos));
        drag.handle_orbit(&mut camera, mouse_pos, slider.is_dragging() || over_button);
        input::handle_zoom(&mut camera);

        let handled = input::process_button_clicks(sim, &buttons, mouse_pos, &mut rng)
            .and_then(|s| input::process_keyboard_input(s, &mut camera, &config.camera, &mut rng));
        sim = match handled {
            Ok(s) => s,
            Err(err) => {
                log::error!("{err}");
                break;
            }
        };
        if !slider.is_dragging() {
            slider.set_value(sim.update_interval_ms());
        }

        sim = sim.tick(get_frame_time() * 1000.0);

        clear_background(BLACK);
        rendering::draw_cells(&sim, &camera, &layout);
        rendering::draw_controls(&sim, &camera, &buttons, &slider, mouse_pos);

        next_frame().await;
    }
}
