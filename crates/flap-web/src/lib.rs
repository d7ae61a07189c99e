pub mod runner;

pub use runner::GameRunner;

/// Export a game to the browser through `wasm-bindgen`.
///
/// The page drives the game with:
/// * `game_init`, once, then `game_tick(dt)` every animation frame.
/// * `game_pointer_down(x, y)` and `game_key_down(code)`.
/// * `game_load_manifest(json)` and `game_load_config(json)`. Both restart
///   the run.
///
/// After each tick it reads three buffers straight from wasm memory:
/// * sprite instances: 8 floats each.
/// * sound words: one `u32` each.
/// * game events: 4 floats each.
///
/// It also reads the view's left edge and the world size to place the
/// camera.
///
/// ```ignore
/// flap_web::export_game!(FlappyBird, "flappy-bird");
/// ```
///
/// `$game_type` must implement `flap_engine::Game` and have a `new()`. The
/// calling crate needs `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook` as dependencies.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use wasm_bindgen::prelude::*;
        use flap_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut slot = cell.borrow_mut();
                f(slot.as_mut().expect("game_init() must run before any other export"))
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            runner.init();
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("{} ready", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_load_config(json: &str) {
            with_runner(|r| r.load_config(json));
        }

        // Per-frame buffers

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u32 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        // View

        #[wasm_bindgen]
        pub fn get_camera_x() -> f32 {
            with_runner(|r| r.camera_x())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
