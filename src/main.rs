//! Coin Dash entry point
//!
//! Hosts the frame driver: in the browser one simulation tick runs per
//! `requestAnimationFrame` callback; natively a scripted headless run
//! exercises the same loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use coin_dash::audio::{AudioManager, SoundEffect};
    use coin_dash::input::{Action, InputAdapter, InputSource, SWIPE_PULSE_TICKS, Swipe};
    use coin_dash::renderer::{CanvasRenderer, DrawList, Frame};
    use coin_dash::report::{FetchReporter, ScoreReport, report_final_score};
    use coin_dash::sim::{GameEvent, GameState, Viewport, tick};
    use coin_dash::{HighScores, Settings, input};

    const MOBILE_AGENTS: [&str; 8] = [
        "Android",
        "webOS",
        "iPhone",
        "iPad",
        "iPod",
        "BlackBerry",
        "IEMobile",
        "Opera Mini",
    ];

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputAdapter,
        renderer: Option<CanvasRenderer>,
        audio: AudioManager,
        reporter: FetchReporter,
        highscores: HighScores,
        settings: Settings,
        /// Where the current canvas touch started (for swipes)
        touch_start: (f32, f32),
    }

    impl Game {
        fn new(viewport: Viewport, renderer: Option<CanvasRenderer>) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.apply_settings(&settings);
            Self {
                state: GameState::new(viewport),
                input: InputAdapter::new(),
                renderer,
                audio,
                reporter: FetchReporter,
                highscores: HighScores::load(),
                settings,
                touch_start: (0.0, 0.0),
            }
        }

        /// One frame: read input, tick, react to events
        fn update(&mut self) {
            let input = self.input.snapshot();
            tick(&mut self.state, &input);
            self.input.end_tick();
            self.handle_events();
        }

        fn handle_events(&mut self) {
            for event in self.state.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }

                if let GameEvent::GameCompleted { score, level } = event {
                    let report = ScoreReport::new(self.settings.player_name.clone(), score, level);
                    report_final_score(&mut self.reporter, &report);
                    if let Some(rank) = self.highscores.record(&report) {
                        log::info!("New high score! Rank #{}", rank);
                        self.highscores.save();
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(renderer) = &self.renderer {
                let frame = Frame::capture(&self.state);
                renderer.paint(&DrawList::build(&frame, self.settings.show_controls_hint));
            }
        }
    }

    fn is_mobile() -> bool {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| MOBILE_AGENTS.iter().any(|agent| ua.contains(agent)))
            .unwrap_or(false)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Coin Dash starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #gameCanvas not found");
            return;
        };

        let mobile = is_mobile();
        if mobile {
            let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(400.0);
            let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(300.0);
            let viewport = Viewport::mobile(inner_w as f32, inner_h as f32);
            canvas.set_width(viewport.width as u32);
            canvas.set_height(viewport.height as u32);
        }
        let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
        log::info!("Viewport {}x{} (mobile: {})", viewport.width, viewport.height, mobile);

        let renderer = CanvasRenderer::new(&canvas);
        if renderer.is_none() {
            log::warn!("No 2D context - rendering disabled");
        }

        let game = Rc::new(RefCell::new(Game::new(viewport, renderer)));

        setup_keyboard(game.clone());
        setup_blur(game.clone());
        if mobile {
            setup_touch_buttons(game.clone());
            setup_swipes(game.clone(), &canvas);
        }

        request_animation_frame(game);
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                g.audio.resume();
                if let Some(action) = Action::from_key(&key, &event.code()) {
                    g.input.press(InputSource::Keyboard, action);
                }
                if input::is_restart_key(&key) {
                    g.state.restart_game();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key(), &event.code()) {
                    game.borrow_mut().input.release(InputSource::Keyboard, action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keys released while unfocused never send keyup; drop them on blur
    fn setup_blur(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            if g.settings.release_on_blur {
                g.input.release_all(InputSource::Keyboard);
                log::debug!("Released keyboard input (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(controls) = document
            .get_element_by_id("mobileControls")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = controls.style().set_property("display", "block");
        }

        let buttons = [
            ("btnLeft", Action::Left),
            ("btnRight", Action::Right),
            ("btnJump", Action::Jump),
        ];

        for (id, action) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Touch button #{} not found", id);
                continue;
            };

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    g.audio.resume();
                    g.input.press(InputSource::TouchButton, action);
                });
                let _ = btn
                    .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    game.borrow_mut()
                        .input
                        .release(InputSource::TouchButton, action);
                });
                let _ = btn
                    .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_swipes(game: Rc<RefCell<Game>>, canvas: &HtmlCanvasElement) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().touch_start =
                        (touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                let dx = touch.client_x() as f32 - g.touch_start.0;
                let dy = touch.client_y() as f32 - g.touch_start.1;
                if let Some(action) = Swipe::classify(dx, dy) {
                    g.input.pulse(action, SWIPE_PULSE_TICKS);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
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
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Dash (native) starting...");
    log::info!("Native mode runs a scripted headless game - serve the wasm build to play");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted headless run: hold right and hop every so often
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use coin_dash::audio::SoundEffect;
    use coin_dash::consts::TICK_RATE;
    use coin_dash::input::{Action, InputAdapter, InputSource, SWIPE_PULSE_TICKS};
    use coin_dash::report::{LogReporter, ScoreReport, report_final_score};
    use coin_dash::sim::{GameEvent, GameState, tick};
    use coin_dash::{HighScores, Settings};

    /// Two minutes of frames
    const MAX_TICKS: u32 = 120 * TICK_RATE;
    /// Ticks between scripted jumps
    const JUMP_INTERVAL: u32 = 40;

    pub fn run() {
        let settings = Settings::load();
        let mut highscores = HighScores::load();
        let mut reporter = LogReporter;
        let mut state = GameState::default();
        let mut input = InputAdapter::new();

        input.press(InputSource::Keyboard, Action::Right);

        let mut deaths = 0u32;
        for frame in 0..MAX_TICKS {
            if frame % JUMP_INTERVAL == 0 {
                input.pulse(Action::Jump, SWIPE_PULSE_TICKS);
            }

            let snapshot = input.snapshot();
            tick(&mut state, &snapshot);
            input.end_tick();

            for event in state.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    log::trace!("sfx {:?}", effect);
                }
                match event {
                    GameEvent::Died { cause } => {
                        deaths += 1;
                        log::debug!("Frame {}: died ({:?})", frame, cause);
                    }
                    GameEvent::CoinCollected { score, .. } => {
                        log::debug!("Frame {}: coin, score {}", frame, score);
                    }
                    GameEvent::GameCompleted { score, level } => {
                        let report = ScoreReport::new(settings.player_name.clone(), score, level);
                        report_final_score(&mut reporter, &report);
                        if let Some(rank) = highscores.record(&report) {
                            log::info!("Leaderboard rank #{}", rank);
                            highscores.save();
                        }
                    }
                    _ => {}
                }
            }

            if state.game_complete() {
                break;
            }
        }

        println!(
            "Ran {} ticks: level {}, score {}, deaths {}, complete: {}",
            state.time_ticks,
            state.level,
            state.score,
            deaths,
            state.game_complete()
        );
    }
}
