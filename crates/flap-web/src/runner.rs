use flap_engine::{
    build_render_buffer, tick_animations, AssetManifest, EngineContext, FixedTimestep, Game,
    GameConfig, InputEvent, InputQueue, RenderBuffer, SpriteRegistry,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Flat buffer of sound event words for the host to read.
    sound_buffer: Vec<u32>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();

        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            config,
            game,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.rebuild();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: fixed steps of game logic and physics, then
    /// rebuild the render and sound buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        let step_dt = self.timestep.dt();
        let no_input = InputQueue::new();
        for step in 0..steps {
            // Input is delivered to the first step only.
            let input = if step == 0 { &self.input } else { &no_input };

            self.ctx.advance_time(step_dt);
            self.game.update(&mut self.ctx, input);
            tick_animations(&mut self.ctx.scene, step_dt);
            #[cfg(feature = "physics")]
            self.ctx.step_physics();
        }

        // Input that arrived between steps waits for the next one.
        if steps > 0 {
            self.input.clear();
        }

        build_render_buffer(
            self.ctx.scene.iter(),
            &mut self.render_buffer,
            self.config.max_instances,
        );

        self.sound_buffer.clear();
        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!(
                "dropping {} sound events over capacity",
                self.ctx.sounds.len() - self.config.max_sounds
            );
        }
        self.sound_buffer.extend(
            self.ctx
                .sounds
                .iter()
                .take(self.config.max_sounds)
                .map(|sound| sound.0),
        );
    }

    /// Replace the sprite registry from a manifest and restart the game on it.
    /// A manifest that fails to parse is logged and the current assets are kept.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.assets = SpriteRegistry::from_manifest(&manifest);
                log::info!("manifest loaded: {} sprites", self.ctx.assets.len());
                if self.initialized {
                    self.rebuild();
                }
            }
            Err(err) => log::error!("failed to load manifest: {}", err),
        }
    }

    /// Hand game tuning JSON to the game and restart it with the new values.
    pub fn load_config(&mut self, json: &str) {
        match self.game.load_config(json) {
            Ok(()) => {
                log::info!("game config loaded");
                if self.initialized {
                    self.rebuild();
                }
            }
            Err(err) => log::error!("failed to load game config: {}", err),
        }
    }

    /// Fresh context from the game's current config, keeping loaded assets.
    fn rebuild(&mut self) {
        self.config = self.game.config();
        let assets = std::mem::take(&mut self.ctx.assets);
        self.ctx = EngineContext::from_config(&self.config);
        self.ctx.assets = assets;
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);
        self.input.clear();
        self.game.init(&mut self.ctx);
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const u32 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.config.max_events) as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    /// Left edge of the camera's view in world units.
    pub fn camera_x(&self) -> f32 {
        self.ctx.camera.rect().min_x
    }
}
