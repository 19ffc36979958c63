//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use breakout::persistence::KeyValueStore;
    use breakout::platform::{Key, KeyEvent, LocalStore};
    use breakout::renderer::{self, CanvasSurface};
    use breakout::{Game, GameError, TickOutcome, Transition, Tuning};

    /// Canvas element the game draws into
    const CANVAS_ID: &str = "gameCanvas";

    /// Browser-side state: the game plus its host resources
    struct App {
        game: Game<LocalStore>,
        surface: CanvasSurface,
        /// Handle of the running tick interval
        interval_id: Option<i32>,
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Breakout starting...");

        let store = LocalStore::open()?;
        let tuning = load_tuning(&store)?;
        let surface = CanvasSurface::from_element_id(CANVAS_ID)?;

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(store, tuning, seed),
            surface,
            interval_id: None,
        }));
        log::info!("Game initialized with seed: {}", seed);

        {
            let mut guard = app.borrow_mut();
            let App { game, surface, .. } = &mut *guard;
            renderer::draw_title(surface, game.tuning());
        }

        setup_input_handlers(app)?;

        log::info!("Breakout ready!");
        Ok(())
    }

    /// Optional JSON overrides from LocalStorage; a bad override is fatal
    fn load_tuning(store: &LocalStore) -> Result<Tuning, GameError> {
        match store.get(Tuning::STORAGE_KEY)? {
            Some(json) => {
                let tuning = Tuning::from_json(&json)?;
                log::info!("Loaded tuning overrides from LocalStorage");
                Ok(tuning)
            }
            None => Ok(Tuning::default()),
        }
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), GameError> {
        let window = web_sys::window()
            .ok_or_else(|| GameError::SurfaceUnavailable("no window".to_string()))?;

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let Some(key) = Key::from_code(&event.code()) else {
                    return;
                };
                // Keep space/arrows from scrolling the page
                event.prevent_default();

                let result = app.borrow_mut().game.handle_key(KeyEvent::Down(key));
                match result {
                    Ok(Some(Transition::Started)) => start_ticking(&app),
                    Ok(None) => {}
                    Err(e) => log::error!("Input handling failed: {}", e),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_code(&event.code()) else {
                    return;
                };
                if let Err(e) = app.borrow_mut().game.handle_key(KeyEvent::Up(key)) {
                    log::error!("Input handling failed: {}", e);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn start_ticking(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, cannot start ticking");
            return;
        };
        let interval_ms = match i32::try_from(app.borrow().game.tuning().tick_interval_ms) {
            Ok(ms) => ms,
            Err(e) => {
                log::error!("Tick interval out of range: {}", e);
                return;
            }
        };

        let tick_app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || on_tick(&tick_app));
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        ) {
            Ok(id) => app.borrow_mut().interval_id = Some(id),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
        closure.forget();
    }

    fn on_tick(app: &Rc<RefCell<App>>) {
        let mut guard = app.borrow_mut();
        let App {
            game,
            surface,
            interval_id,
        } = &mut *guard;

        match game.tick() {
            Ok(TickOutcome::Running) => {}
            Ok(TickOutcome::Ended(ending)) => {
                log::info!("Stopping tick loop: {:?}", ending);
                stop_ticking(interval_id);
            }
            Ok(TickOutcome::Idle) => {
                stop_ticking(interval_id);
                return;
            }
            // The phase is already Ended; still show the end screen
            Err(e) => {
                log::error!("Tick failed: {}", e);
                stop_ticking(interval_id);
            }
        }
        renderer::draw(surface, game.phase(), game.session(), game.tuning());
    }

    /// Cancel the tick interval (at most once)
    fn stop_ticking(interval_id: &mut Option<i32>) {
        if let Some(id) = interval_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Breakout (native) starting...");
    log::info!("Native mode runs a headless demo session - build for wasm32 to play");

    if let Err(e) = run_headless() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one autopilot session without a window, drawing into a recorder
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), breakout::GameError> {
    use breakout::persistence::MemoryStore;
    use breakout::platform::{Key, KeyEvent};
    use breakout::renderer::{self, RecordingSurface};
    use breakout::{Game, TickOutcome, Tuning};

    /// Ten minutes of play at 50 Hz
    const MAX_TICKS: u32 = 50 * 60 * 10;

    let tuning = match std::env::var("BREAKOUT_TUNING") {
        Ok(json) => Tuning::from_json(&json)?,
        Err(_) => Tuning::default(),
    };
    let seed = std::env::var("BREAKOUT_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);

    let mut game = Game::new(MemoryStore::new(), tuning, seed);
    let mut surface = RecordingSurface::new();
    renderer::draw_title(&mut surface, game.tuning());

    game.set_idle(true);
    game.handle_key(KeyEvent::Down(Key::Space))?;

    for _ in 0..MAX_TICKS {
        surface.reset();
        let outcome = game.tick()?;
        renderer::draw(&mut surface, game.phase(), game.session(), game.tuning());
        if outcome != TickOutcome::Running {
            break;
        }
    }

    if let Some(session) = game.session() {
        log::info!(
            "Session over: {:?}, score {}/{}, {} ticks, last frame {} draw calls",
            game.phase(),
            session.score,
            session.brick_total,
            session.time_ticks,
            surface.commands.len()
        );
        println!(
            "{:?}: score {} after {} ticks",
            game.phase(),
            session.score,
            session.time_ticks
        );
    }
    Ok(())
}
