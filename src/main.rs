//! Rock Field entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use rock_field::KeyState;
    use rock_field::Tuning;
    use rock_field::hud::HudText;
    use rock_field::renderer::RenderState;
    use rock_field::sim::{GameEvent, World, autopilot, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        keys: KeyState,
        render_state: Option<RenderState>,
        /// Computer plays instead of the keyboard
        idle_mode: bool,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
            Self {
                world: World::new(seed, width, height, tuning),
                keys: KeyState::new(),
                render_state: None,
                idle_mode: false,
            }
        }

        /// Sample input and advance one frame
        fn update(&mut self) {
            let input = if self.idle_mode {
                autopilot::drive(&self.world)
            } else {
                self.keys.sample()
            };

            for event in tick(&mut self.world, &input) {
                match event {
                    GameEvent::WaveStarted { level, asteroids } => {
                        log::info!("Level {} ({} asteroids)", level, asteroids)
                    }
                    GameEvent::ShipDestroyed { score, level } => {
                        log::info!("Game over: score {} on level {}", score, level)
                    }
                    GameEvent::BulletFired | GameEvent::AsteroidDestroyed { .. } => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.world.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudText::from_snapshot(&self.world.snapshot());

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("hud-level") {
                el.set_text_content(Some(&hud.level));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match hud.game_over {
                    Some((title, final_score)) => {
                        let _ = el.set_attribute("class", "");
                        if let Some(title_el) = document.get_element_by_id("game-over-title") {
                            title_el.set_text_content(Some(&title));
                        }
                        if let Some(score_el) = document.get_element_by_id("final-score") {
                            score_el.set_text_content(Some(&final_score));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Rock Field starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // The simulation works in canvas pixels; the surface in device pixels
        let dpr = window.device_pixel_ratio();
        let world_w = canvas.width() as f32;
        let world_h = canvas.height() as f32;
        let surface_w = (world_w as f64 * dpr) as u32;
        let surface_h = (world_h as f64 * dpr) as u32;
        canvas.set_width(surface_w);
        canvas.set_height(surface_h);

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let game = Rc::new(RefCell::new(Game::new(seed, world_w, world_h, tuning)));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, surface_w, surface_h)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone())?;
        setup_focus_loss(game.clone())?;

        request_animation_frame(game);

        log::info!("Rock Field running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if key == "i" || key == "I" {
                    if !event.repeat() {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    return;
                }
                // Arrows and space would otherwise scroll the page
                if g.keys.key_down(&key, event.key_code()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.key_up(&event.key(), event.key_code()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Key-up events never arrive for keys held while focus leaves the page
    fn setup_focus_loss(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.release_all();
                log::info!("Released held keys (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().keys.release_all();
                    log::info!("Released held keys (tab hidden)");
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use rock_field::Tuning;
    use rock_field::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use rock_field::hud::HudText;
    use rock_field::sim::{GameEvent, World, autopilot, tick};

    /// Headless demo options
    pub struct Options {
        pub seed: u64,
        pub frames: u64,
        pub tuning: Option<PathBuf>,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: 1,
                frames: 60 * 60 * 5,
                tuning: None,
            }
        }
    }

    impl Options {
        /// `--seed <n> --frames <n> --tuning <path.json>`, all optional
        pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
            let mut options = Self::default();
            while let Some(arg) = args.next() {
                let mut value = |name: &str| {
                    args.next()
                        .ok_or_else(|| format!("missing value for {}", name))
                };
                match arg.as_str() {
                    "--seed" => {
                        options.seed = value("--seed")?
                            .parse()
                            .map_err(|e| format!("bad --seed: {}", e))?
                    }
                    "--frames" => {
                        options.frames = value("--frames")?
                            .parse()
                            .map_err(|e| format!("bad --frames: {}", e))?
                    }
                    "--tuning" => options.tuning = Some(PathBuf::from(value("--tuning")?)),
                    other => return Err(format!("unknown argument: {}", other)),
                }
            }
            Ok(options)
        }
    }

    /// Let the autopilot play until the ship dies or the frame budget runs out
    pub fn run(options: &Options) -> World {
        let tuning = match &options.tuning {
            Some(path) => Tuning::load_from_path(path).unwrap_or_else(|e| {
                log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };

        let mut world = World::new(options.seed, CANVAS_WIDTH, CANVAS_HEIGHT, tuning);
        log::info!("Autopilot demo, seed {}", options.seed);

        let mut kills = 0u64;
        let mut shots = 0u64;
        for _ in 0..options.frames {
            let input = autopilot::drive(&world);
            for event in tick(&mut world, &input) {
                match event {
                    GameEvent::BulletFired => shots += 1,
                    GameEvent::AsteroidDestroyed { score } => {
                        kills += 1;
                        log::debug!("Frame {}: asteroid destroyed, score {}", world.frame, score);
                    }
                    GameEvent::WaveStarted { level, asteroids } => {
                        log::info!("Frame {}: level {} ({} asteroids)", world.frame, level, asteroids)
                    }
                    GameEvent::ShipDestroyed { .. } => {}
                }
            }
            if world.game_over {
                break;
            }
        }

        log::info!(
            "Demo finished after {} frames: {} shots, {} kills",
            world.frame,
            shots,
            kills
        );
        world
    }

    pub fn main() {
        env_logger::init();
        log::info!("Rock Field (native) starting...");
        log::info!("Native mode is a headless autopilot demo - run with `trunk serve` for the game");

        let options = match Options::from_args(std::env::args().skip(1)) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("usage: rock-field [--seed <n>] [--frames <n>] [--tuning <file.json>]");
                std::process::exit(2);
            }
        };

        let world = run(&options);
        let hud = HudText::from_snapshot(&world.snapshot());
        println!("{}  {}", hud.score, hud.level);
        if let Some((title, final_score)) = hud.game_over {
            println!("{} - {}", title, final_score);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> impl Iterator<Item = String> {
            list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
        }

        #[test]
        fn test_options_parse() {
            let options =
                Options::from_args(args(&["--seed", "7", "--frames", "100", "--tuning", "t.json"]))
                    .unwrap();
            assert_eq!(options.seed, 7);
            assert_eq!(options.frames, 100);
            assert_eq!(options.tuning, Some(PathBuf::from("t.json")));
        }

        #[test]
        fn test_options_reject_garbage() {
            assert!(Options::from_args(args(&["--seed"])).is_err());
            assert!(Options::from_args(args(&["--seed", "x"])).is_err());
            assert!(Options::from_args(args(&["--bogus"])).is_err());
        }

        #[test]
        fn test_demo_run_is_reproducible() {
            let options = Options {
                seed: 11,
                frames: 600,
                tuning: None,
            };
            let a = run(&options);
            let b = run(&options);
            assert_eq!(a.snapshot(), b.snapshot());
            assert!(a.frame <= 600);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
