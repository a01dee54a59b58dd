//! Sprite Breakout entry point
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

    use sprite_breakout::platform::ImageLoader;
    use sprite_breakout::renderer::{FrameRecorder, QuadPipeline};
    use sprite_breakout::scene::Viewport;
    use sprite_breakout::{GameConfig, GameSession, Level};

    /// Game instance holding the session and the GPU state
    struct Game {
        session: GameSession,
        recorder: Rc<FrameRecorder>,
        render_state: Option<QuadPipeline>,
    }

    impl Game {
        /// Run one frame; `false` stops the loop
        fn frame(&mut self, time: f64) -> bool {
            if let Err(e) = self.session.tick(time) {
                log::error!("Tick failed, stopping: {e}");
                return false;
            }

            let frame = self.recorder.take_frame();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&frame) {
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
            true
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Sprite Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = GameConfig::load();
        let recorder = FrameRecorder::new(Viewport::new(width as f32, height as f32));
        let loader = ImageLoader::new(recorder.clone());
        let session = GameSession::new(
            recorder.clone(),
            recorder.clone(),
            Box::new(loader),
            &Level::level_1(),
            config,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            session,
            recorder,
            render_state: None,
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        let render_state = QuadPipeline::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone())?;

        request_animation_frame(game);

        log::info!("Sprite Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
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
        let keep_going = game.borrow_mut().frame(time);
        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

/// Headless run: simulate a fixed number of ticks against the recorder
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::Path;
    use std::process::ExitCode;

    use sprite_breakout::consts::*;
    use sprite_breakout::renderer::FrameRecorder;
    use sprite_breakout::scene::Viewport;
    use sprite_breakout::{GameConfig, GameSession, Level, LoadedImage, MemoryAssets, RunState};

    env_logger::init();
    log::info!("Sprite Breakout (native, headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from(Path::new(&path)),
        None => GameConfig::default(),
    };

    let recorder = FrameRecorder::new(Viewport::new(HEADLESS_WIDTH, HEADLESS_HEIGHT));
    let mut assets = MemoryAssets::new().with_delay(1);
    for (id, url) in [&config.brick_image, &config.ball_image, &config.paddle_image]
        .into_iter()
        .enumerate()
    {
        assets.insert(
            url.clone(),
            LoadedImage::new(128, 128).with_texture(recorder.texture(id as u32)),
        );
    }

    let mut session = match GameSession::new(
        recorder.clone(),
        recorder.clone(),
        Box::new(assets),
        &Level::level_1(),
        config,
    ) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            return ExitCode::FAILURE;
        }
    };
    session.set_state(RunState::Running);

    for frame in 0..HEADLESS_TICKS {
        if let Err(e) = session.tick(frame as f64 * 1000.0 / 60.0) {
            log::error!("Tick {frame} failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    let drawn = recorder.take_frame().instances.len();
    log::info!(
        "Simulated {} ticks: {} of {} bricks left, {} quads in last frame",
        session.frames(),
        session.live_brick_count(),
        session.bricks().len(),
        drawn
    );
    if let Some(ball) = session.ball() {
        use sprite_breakout::scene::Renderable;
        log::info!("Ball at {:?}", ball.sprite().position());
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
