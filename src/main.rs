//! Arena Dash entry point
//!
//! Wires the browser DOM (keyboard, buttons, HUD) to the simulation shell on
//! wasm32; runs a scripted headless demo natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use arena_dash::App;
    use arena_dash::platform::LocalStorage;
    use arena_dash::sim::{GamePhase, Snapshot};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Arena Dash starting...");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, Box::new(LocalStorage))));

        setup_key_listeners(app.clone());
        setup_play_button(app.clone());
        setup_restart_button(app.clone());

        render(&app.borrow());
        log::info!("Arena Dash ready (seed {seed})");
    }

    fn setup_key_listeners(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                event.prevent_default();
                app.borrow_mut().key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                event.prevent_default();
                app.borrow_mut().key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // A keyup lost to focus change would leave a phantom held key
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().clear_input();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_play_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("play-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                // Arm the loop only on the actual transition; a repeated
                // click while already running must not start a second loop
                if app.borrow_mut().play() {
                    schedule_frame(app.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if app.borrow_mut().restart() {
                    schedule_frame(app.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Arm the next animation-frame tick.
    ///
    /// The loop re-arms itself only while the run is still active, so a
    /// transition out of `Running` inside a tick is observed before another
    /// tick could fire. Play/Restart arm it again.
    fn schedule_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        let phase = {
            let mut a = app.borrow_mut();
            let phase = a.frame();
            render(&a);
            phase
        };
        if phase == GamePhase::Running {
            schedule_frame(app);
        } else {
            log::info!("frame loop stopped in {phase:?}");
        }
    }

    /// Push the snapshot into the DOM: HUD text, overlay visibility and the
    /// absolutely-positioned entity elements.
    fn render(app: &App) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let snapshot = app.snapshot();

        set_text(&document, "score", &snapshot.score.to_string());
        set_text(&document, "high-score", &snapshot.high_score.to_string());

        place(&document, "player", snapshot.player);
        place(&document, "pickup", snapshot.pickup);
        place_obstacles(&document, &snapshot);

        set_hidden(&document, "intro", snapshot.phase != GamePhase::NotStarted);
        set_hidden(&document, "game-over", snapshot.phase != GamePhase::GameOver);
        if let Some(message) = snapshot.message {
            set_text(&document, "end-message", message);
            set_text(&document, "final-score", &snapshot.score.to_string());
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn place(document: &Document, id: &str, pos: glam::Vec2) {
        if let Some(el) = document.get_element_by_id(id) {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("left", &format!("{}px", pos.x));
                let _ = style.set_property("top", &format!("{}px", pos.y));
            }
        }
    }

    /// Keep one div per obstacle under #obstacles and move them into place.
    /// Obstacles only ever get added during a run, so children are appended,
    /// never removed mid-run; restarts shrink the list back down.
    fn place_obstacles(document: &Document, snapshot: &Snapshot) {
        let Some(container) = document.get_element_by_id("obstacles") else {
            return;
        };

        while (container.child_element_count() as usize) < snapshot.obstacles.len() {
            if let Ok(div) = document.create_element("div") {
                let _ = div.set_attribute("class", "obstacle");
                let _ = container.append_child(&div);
            } else {
                return;
            }
        }
        while (container.child_element_count() as usize) > snapshot.obstacles.len() {
            if let Some(last) = container.last_element_child() {
                last.remove();
            }
        }

        let children = container.children();
        for (i, pos) in snapshot.obstacles.iter().enumerate() {
            if let Some(el) = children.item(i as u32) {
                if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("left", &format!("{}px", pos.x));
                    let _ = style.set_property("top", &format!("{}px", pos.y));
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use arena_dash::App;
    use arena_dash::platform::MemoryStore;
    use arena_dash::sim::GamePhase;

    env_logger::init();
    log::info!("Arena Dash (native) starting...");

    // Headless demo run: drift toward the far corner until an obstacle wins
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut app = App::new(seed, Box::new(MemoryStore::new()));
    app.play();
    app.key_down("ArrowRight");
    app.key_down("ArrowDown");

    let mut frames = 0u64;
    while app.frame() == GamePhase::Running && frames < 100_000 {
        frames += 1;
    }

    log::info!("run ended after {frames} frames");
    let snapshot = app.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );
}
