//! Color Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

    use color_hop::renderer::{canvas::present, frame};
    use color_hop::sim::{ClickOutcome, GameEvent, GameState, PaletteColor};
    use color_hop::{GameConfig, GameLoop};

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop,
        config: GameConfig,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
        /// Click handlers for the current color buttons (dropped on rebuild)
        button_handlers: Vec<Closure<dyn FnMut(web_sys::MouseEvent)>>,
    }

    impl Game {
        /// Match the canvas backing store to its laid-out size
        fn resize_canvas(&mut self) {
            let width = self.canvas.offset_width().max(0) as u32;
            let height = self.canvas.offset_height().max(0) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            if let Some(state) = self.game_loop.state_mut() {
                state.resize(width as f32, height as f32);
            }
        }

        /// Build a fresh session and hand it to the loop
        fn start(&mut self) -> Option<u64> {
            let seed = js_sys::Date::now() as u64;
            let width = self.canvas.width() as f32;
            let height = self.canvas.height() as f32;
            self.last_time = 0.0;
            match GameState::new(seed, self.config.clone(), width, height) {
                Ok(state) => Some(self.game_loop.start(state)),
                Err(e) => {
                    log::error!("Cannot start game: {}", e);
                    None
                }
            }
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                self.config.sim_dt()
            };
            self.last_time = time;
            self.game_loop.advance(dt);
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(state) = self.game_loop.state() {
                if let Err(e) = present(&self.ctx, &frame(state)) {
                    log::warn!("Render error: {:?}", e);
                }
            }
        }

        /// React to what the simulation reported since last frame
        fn handle_events(&mut self) {
            let Some(state) = self.game_loop.state_mut() else {
                return;
            };
            for event in state.drain_events() {
                if let GameEvent::GameOver { score, .. } = event {
                    show_game_over(score);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Color Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game {
            game_loop: GameLoop::new(),
            config: GameConfig::default(),
            canvas,
            ctx,
            last_time: 0.0,
            button_handlers: Vec::new(),
        }));
        game.borrow_mut().resize_canvas();

        setup_resize_handler(game.clone());
        setup_start_buttons(game.clone());

        // Buttons are visible behind the start screen from the first load
        create_color_buttons(&document, game);
        set_display(&document, "startScreen", "block");

        log::info!("Color Hop ready!");
    }

    fn set_display(document: &Document, id: &str, value: &str) {
        let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let _ = el.style().set_property("display", value);
    }

    fn show_game_over(score: u32) {
        let document = web_sys::window().unwrap().document().unwrap();
        set_display(&document, "gameOverScreen", "block");
        if let Some(el) = document.get_element_by_id("finalScore") {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    /// One button per palette color, replacing any existing ones
    fn create_color_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(container) = document.get_element_by_id("colorButtons") else {
            log::warn!("Missing element #colorButtons");
            return;
        };
        container.set_inner_html("");

        let mut handlers = Vec::with_capacity(PaletteColor::ALL.len());
        for color in PaletteColor::ALL {
            let Ok(button) = document.create_element("button") else {
                continue;
            };
            button.set_class_name("colorButton");
            let _ = button.set_attribute("data-color", color.hex());
            if let Some(el) = button.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("background-color", color.hex());
            }

            let game = game.clone();
            let source = button.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let clicked = source
                    .get_attribute("data-color")
                    .map(|hex| hex.parse::<PaletteColor>());
                let clicked = match clicked {
                    Some(Ok(color)) => color,
                    Some(Err(e)) => {
                        log::warn!("{}", e);
                        return;
                    }
                    None => {
                        log::warn!("Color button without data-color");
                        return;
                    }
                };
                let mut g = game.borrow_mut();
                if g.game_loop.click(clicked) == ClickOutcome::WrongColor {
                    log::info!("Wrong color: {}", clicked);
                }
                g.handle_events();
            });
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            handlers.push(closure);

            let _ = container.append_child(&button);
        }

        // Old buttons are gone from the DOM, so their handlers can drop
        game.borrow_mut().button_handlers = handlers;
    }

    fn start_game(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        set_display(&document, "startScreen", "none");
        set_display(&document, "gameOverScreen", "none");
        create_color_buttons(&document, game.clone());

        let generation = game.borrow_mut().start();
        match generation {
            Some(generation) => {
                log::info!("Session {} started", generation);
                request_animation_frame(game, generation);
            }
            None => set_display(&document, "startScreen", "block"),
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, generation: u64) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, generation, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, generation: u64, time: f64) {
        {
            let mut g = game.borrow_mut();

            // A newer session (or game over) owns the canvas now
            if !g.game_loop.is_current(generation) {
                return;
            }

            g.update(time);
            g.render();
            g.handle_events();

            if !g.game_loop.is_current(generation) {
                return;
            }
        }

        request_animation_frame(game, generation);
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in ["startButton", "restartButton"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing element #{}", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_game(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize_canvas();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use color_hop::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use color_hop::sim::{Autoplay, GameEvent, GameState};
    use color_hop::{GameConfig, GameLoop};

    env_logger::init();
    log::info!("Color Hop (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let config = GameConfig::load_or_default(std::env::args().nth(1).as_deref());
    let seed = std::env::var("COLOR_HOP_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    let max_ticks: u64 = std::env::var("COLOR_HOP_TICKS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 60);

    let sim_dt = config.sim_dt();
    let state = match GameState::new(seed, config, DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start game: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = GameLoop::new();
    game.start(state);
    let mut bot = Autoplay::default();
    let mut recycled = 0u64;

    while game.is_running() {
        let Some(state) = game.state() else {
            break;
        };
        if state.time_ticks >= max_ticks {
            game.stop();
            break;
        }
        if let Some(color) = bot.next_click(state) {
            game.click(color);
        }
        game.advance(sim_dt);

        let Some(state) = game.state_mut() else {
            break;
        };
        for event in state.drain_events() {
            match event {
                GameEvent::PlatformRecycled { .. } => recycled += 1,
                GameEvent::GameOver { cause, score } => {
                    log::info!("Demo over ({:?}) with score {}", cause, score);
                }
                _ => {}
            }
        }
    }

    if let Some(state) = game.state() {
        println!(
            "seed {}: score {} after {} ticks (speed {:.1}, {} platforms recycled, {:?})",
            seed,
            state.score,
            state.time_ticks,
            state.speed,
            recycled,
            state.phase()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
