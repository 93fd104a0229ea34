//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use canvas_pong::audio::{Mix, WebAudio};
    use canvas_pong::platform::web::{DomScoreDisplay, hide, sync_canvas_size};
    use canvas_pong::platform::PointerInput;
    use canvas_pong::renderer::CanvasRenderer;
    use canvas_pong::sim::Arena;
    use canvas_pong::{Game, Settings};

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "startButton";

    /// Game instance plus the input it reads each frame
    struct App {
        game: Game<CanvasRenderer, WebAudio, DomScoreDisplay>,
        input: PointerInput,
    }

    impl App {
        /// Feed a touch/mouse sample in client coordinates
        fn pointer_sample(&mut self, canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) {
            let rect = canvas.get_bounding_client_rect();
            let viewport_width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(f64::INFINITY);
            self.input.handle_sample(
                client_x as f32,
                client_y as f32,
                rect.top() as f32,
                viewport_width as f32,
            );
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let settings = Settings::load();
        log::set_max_level(settings.level_filter());

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let (width, height) = sync_canvas_size(&canvas);
        let arena = Arena::new(width, height);
        log::info!("Arena {}x{}", width, height);

        let game = Game::new(
            arena,
            CanvasRenderer::new(&canvas)?,
            WebAudio::new(Mix::from_settings(&settings)),
            DomScoreDisplay::new(&document),
        );
        let app = Rc::new(RefCell::new(App {
            game,
            input: PointerInput::new(),
        }));

        setup_start_button(&document, app.clone());
        setup_input_handlers(&canvas, app.clone())?;
        setup_resize(&window, &canvas, app.clone())?;

        request_animation_frame(app);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_start_button(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id(START_BUTTON_ID) else {
            log::warn!("No #{} element, game cannot be started", START_BUTTON_ID);
            return;
        };

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if app.borrow_mut().game.start() {
                hide(&btn_clone);
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Touch start and move steer the paddle the same way
        for event_name in ["touchstart", "touchmove"] {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut()
                        .pointer_sample(&canvas_clone, touch.client_x(), touch.client_y());
                }
            });
            canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .pointer_sample(&canvas_clone, event.client_x(), event.client_y());
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = sync_canvas_size(&canvas);
            app.borrow_mut().game.resize(width, height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    /// One step per display frame; no delta time
    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut app = app.borrow_mut();
            let App { game, input } = &mut *app;
            game.frame(&*input);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::audio::Mix;
    use canvas_pong::platform::headless::{FollowBall, LogAudio, LogRenderer, LogScoreDisplay};
    use canvas_pong::sim::Arena;
    use canvas_pong::{Game, Settings};

    /// Headless demo length (about ten seconds at 60 Hz)
    const DEMO_FRAMES: u32 = 600;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = Settings::load();
    log::set_max_level(settings.level_filter());

    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in a browser");

    let mut game = Game::new(
        Arena::new(800.0, 600.0),
        LogRenderer::default(),
        LogAudio::new(Mix::from_settings(&settings)),
        LogScoreDisplay::default(),
    );
    game.start();

    let mut player = FollowBall::default();
    for _ in 0..DEMO_FRAMES {
        player.observe(game.state());
        game.frame(&player);
    }

    let scores = game.state().scores;
    println!(
        "After {} frames: player {} - ai {}",
        game.frames(),
        scores.player,
        scores.ai
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
