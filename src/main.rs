#[macro_use]
extern crate derive_new;

#[macro_use]
mod body;
mod asteroids;
mod canvas;
mod config;
mod moons;
mod planet;
mod scenario;
mod system;
mod tools;
mod trails;

use anyhow::{anyhow, Result};
use glutin_window::GlutinWindow;
use opengl_graphics::{GlGraphics, GlyphCache, OpenGL, TextureSettings};
use piston::event_loop::{EventLoop, EventSettings, Events};
use piston::input::{CloseEvent, RenderEvent, UpdateEvent};
use piston::window::WindowSettings;
use tracing::{debug, info, warn, Level};

use asteroids::AsteroidBelt;
use canvas::{Canvas, GlCanvas, Projection, BLACK, WHITE};
use config::Settings;
use system::SolarSystem;

pub type Float = f64;

pub const GRAV_CONST: Float = 6.67428e-11;
pub const AU: Float = 149.6e6 * 1000.0;
pub const TIMESTEP: Float = 3600.0 * 24.0;    // One day
pub const SCREEN_DIMS: (f64, f64) = (1000.0, 900.0);
pub const SCALE: Float = 200.0 / AU;    // 1 AU = 200 pixels

const STEPS_PER_ENERGY_LOG: u64 = 365;
const CLOCK_POSITION: [f64; 2] = [10.0, 20.0];

struct MainState {
    settings: Settings,
    system: SolarSystem,
    asteroids: AsteroidBelt,
    projection: Projection,
}

impl MainState {
    fn new(settings: Settings) -> MainState {
        let system = SolarSystem::new(scenario::inner_solar_system(), settings.update_order);
        let (inner, outer) = settings.asteroid_band;
        let asteroids = AsteroidBelt::generate(&mut rand::thread_rng(), settings.asteroid_count, inner, outer);

        for planet in system.planets() {
            debug!(planet = planet.name, moons = planet.moons.count(), sun = planet.sun, "body");
        }
        info!(
            bodies = system.len(),
            sun = ?system.sun().map(|s| s.name),
            asteroids = asteroids.len(),
            order = ?system.order(),
            "solar system ready"
        );

        MainState {
            settings,
            system,
            asteroids,
            projection: Projection::new(SCALE, SCREEN_DIMS),
        }
    }

    fn update(&mut self) {
        self.system.step(TIMESTEP);

        if self.system.steps() % STEPS_PER_ENERGY_LOG == 0 {
            debug!(
                day = self.system.elapsed_days(),
                energy = self.system.total_energy(),
                "orbital energy"
            );
        }
    }

    fn draw<C: Canvas>(&self, canvas: &mut C, has_font: bool) {
        let label_size = if has_font && self.settings.show_labels {
            Some(self.settings.label_size)
        } else {
            None
        };

        for planet in self.system.planets() {
            planet.draw(canvas, &self.projection, label_size);
        }

        self.asteroids.draw(canvas, &self.projection);

        if has_font && self.settings.show_clock {
            canvas.text(
                CLOCK_POSITION,
                self.settings.label_size,
                &format!("Day {:.0}", self.system.elapsed_days()),
                WHITE,
            );
        }
    }
}

fn load_font(settings: &Settings) -> Option<GlyphCache<'static>> {
    for &path in settings.font_candidates {
        match GlyphCache::new(path, (), TextureSettings::new()) {
            Ok(glyphs) => {
                info!(font = path, "loaded label font");
                return Some(glyphs);
            }
            Err(e) => debug!(font = path, error = %e, "font not usable"),
        }
    }

    warn!("no usable font found, labels are disabled");
    None
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let settings = Settings::default();
    let opengl = OpenGL::V3_2;

    let mut window: GlutinWindow = WindowSettings::new(settings.title, settings.window_size)
        .graphics_api(opengl)
        .samples(settings.samples)
        .exit_on_esc(true)
        .build()
        .map_err(|e| anyhow!("could not create the window: {}", e))?;
    info!(width = settings.window_size[0], height = settings.window_size[1], "window open");

    let mut gl = GlGraphics::new(opengl);
    let mut glyphs = load_font(&settings);

    let mut events = Events::new(
        EventSettings::new()
            .max_fps(settings.frames_per_second)
            .ups(settings.frames_per_second),
    );
    let mut state = MainState::new(settings);

    while let Some(e) = events.next(&mut window) {
        if e.update_args().is_some() {
            state.update();
        }

        if let Some(args) = e.render_args() {
            let has_font = glyphs.is_some();
            gl.draw(args.viewport(), |c, g| {
                graphics::clear(BLACK, g);
                let mut canvas = GlCanvas::new(c, g, glyphs.as_mut());
                state.draw(&mut canvas, has_font);
            });
        }

        if e.close_args().is_some() {
            info!(days = state.system.elapsed_days(), "window closed");
        }
    }

    Ok(())
}
