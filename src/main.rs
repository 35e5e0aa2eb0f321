//! Blocks entry point
//!
//! On the web: sets up WebGPU on the page canvas, wires keyboard and focus
//! events into a [`Session`], and runs it from `requestAnimationFrame`.
//! Natively: replays a scripted input sequence through the same session
//! with silent audio and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use blocks::audio::web::WebAudio;
    use blocks::consts::*;
    use blocks::input::Key;
    use blocks::platform::PlatformError;
    use blocks::renderer::RenderState;
    use blocks::renderer::batch::tessellate;
    use blocks::{Session, Settings};

    const CANVAS_ID: &str = "canvas";

    /// Game instance shared between browser callbacks
    struct Game {
        session: Session<WebAudio>,
        render_state: Option<RenderState>,
        last_time: f64,
        stopped: bool,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            let audio = WebAudio::new(&settings);
            Self {
                session: Session::new(settings, audio),
                render_state: None,
                last_time: 0.0,
                stopped: false,
            }
        }

        fn update(&mut self, dt: f32) {
            self.session.advance(dt);
            if self.session.quit_requested() && !self.stopped {
                self.stopped = true;
                log::info!("Quit requested, stopping game loop");
            }
        }

        fn render(&mut self) {
            let vertices = tessellate(&self.session.frame());
            if let Some(render_state) = &mut self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| PlatformError::NoCanvas(CANVAS_ID.into()))?;

        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(SCREEN_WIDTH as u32);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(SCREEN_HEIGHT as u32);
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(Settings::load())));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| PlatformError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, game.clone())?;
        setup_focus_handlers(&window, game.clone())?;

        request_animation_frame(game);
        log::info!("Blocks running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom_key(&event.key()) else {
                    return;
                };
                // Keep arrows and space from scrolling the page
                event.prevent_default();
                let mut g = game.borrow_mut();
                // Browsers only start audio after a user gesture
                g.session.audio_mut().resume();
                g.session.key_down(key);
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|_| PlatformError::Listener("keydown"))?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().session.key_up(key);
                }
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(|_| PlatformError::Listener("keyup"))?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_focus_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        // Window blur (click outside, tab switch)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().session.blur();
            });
            window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .map_err(|_| PlatformError::Listener("blur"))?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().session.focus();
            });
            window
                .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())
                .map_err(|_| PlatformError::Listener("focus"))?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let stopped = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.stopped
        };

        if !stopped {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Blocks starting...");

    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted key events for the native run: (tick, key, pressed)
#[cfg(not(target_arch = "wasm32"))]
const SCRIPT: &[(u64, blocks::input::Key, bool)] = {
    use blocks::input::Key;
    &[
        (125, Key::Confirm, true),
        (126, Key::Confirm, false),
        (130, Key::Launch, true),
        (131, Key::Launch, false),
        (600, Key::Pause, true),
        (601, Key::Pause, false),
        (660, Key::Pause, true),
        (661, Key::Pause, false),
        (900, Key::Right, true),
        (930, Key::Right, false),
        (3000, Key::Quit, true),
    ]
};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use blocks::audio::SilentAudio;
    use blocks::sim::GameEvent;
    use blocks::{Session, Settings};

    env_logger::init();
    log::info!("Blocks (native, headless) starting...");

    let max_ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3600);

    let settings = Settings::load();
    let audio = SilentAudio::new(&settings);
    let mut session = Session::new(settings, audio);

    let mut bricks_destroyed = 0;
    let mut script = SCRIPT.iter().peekable();
    for t in 0..max_ticks {
        while let Some(&&(at, key, pressed)) = script.peek() {
            if at > t {
                break;
            }
            if pressed {
                session.key_down(key);
            } else {
                session.key_up(key);
            }
            script.next();
        }

        let events = session.step();
        bricks_destroyed += events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count();

        if session.quit_requested() {
            log::info!("Quit at tick {}", t);
            break;
        }
    }

    let state = session.state();
    log::info!(
        "Finished on {:?}: lives {}, bricks {}/{} ({} destroyed), {} sfx, {} music notes",
        state.screen.kind(),
        state.player.lives,
        state.bricks.active_count(),
        state.bricks.len(),
        bricks_destroyed,
        session.audio().effects_played(),
        session.audio().notes_scheduled(),
    );
}
