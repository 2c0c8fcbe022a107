use anyhow::Result;
use log::{debug, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use dog_vs_cat::engine::assets::AssetLoader;
use dog_vs_cat::engine::game_loop::GameLoop;
use dog_vs_cat::engine::input::{Action as InputAction, InputManager};
use dog_vs_cat::game::combat::{CombatEvent, Duel, Player, PlayerId, PowerUp, ThrowableItem};
use dog_vs_cat::game::config::{GameConfig, PetConfig};
use dog_vs_cat::game::pets::{Action, Direction, SpriteAnimator};

const DOG: PlayerId = 0;
const CAT: PlayerId = 1;

/// What the power-up key hands out
const TREAT_MS: u64 = 5_000;

/// Load a pet's sheet and build its animator. A missing or broken sheet only
/// costs the visuals, so failures are logged and the pet goes undrawn.
fn load_animator(loader: &AssetLoader, config: &GameConfig, pet: &PetConfig) -> Option<SpriteAnimator> {
    let sheet = match loader.load_sprite_sheet(&pet.sprite_sheet) {
        Ok(sheet) => sheet,
        Err(e) => {
            warn!("No sprites for {}: {:#}", pet.name, e);
            return None;
        }
    };

    let mut animator =
        match SpriteAnimator::new(sheet, config.frame_width, config.frame_height, pet.color) {
            Ok(animator) => animator,
            Err(e) => {
                warn!("No sprites for {}: {}", pet.name, e);
                return None;
            }
        };
    if let Err(e) = animator.set_frame_duration(config.frame_duration_ms) {
        warn!("{}; keeping the default cadence", e);
    }
    Some(animator)
}

/// Facing for a walking input, horizontal movement winning ties
fn facing(dx: i32, dy: i32) -> Option<Direction> {
    match (dx.signum(), dy.signum()) {
        (1, _) => Some(Direction::Right),
        (-1, _) => Some(Direction::Left),
        (_, -1) => Some(Direction::Up),
        (_, 1) => Some(Direction::Down),
        _ => None,
    }
}

/// Everything the window drives each frame
struct Scene {
    config: GameConfig,
    duel: Duel,
    dog_sprite: Option<SpriteAnimator>,
    cat_sprite: Option<SpriteAnimator>,
    dog_facing: Direction,
    /// Most recent combat event, shown in the title
    last_event: Option<CombatEvent>,
    input: InputManager,
    game_loop: GameLoop,
}

impl Scene {
    fn new(config: GameConfig) -> Result<Self> {
        let duel = Duel::new(
            Player::dog(DOG, &config.dog.name, config.dog.spawn.x, config.dog.spawn.y),
            Player::cat(CAT, &config.cat.name, config.cat.spawn.x, config.cat.spawn.y),
        )?;

        let loader = AssetLoader::new(&config.assets_dir);
        let dog_sprite = load_animator(&loader, &config, &config.dog);
        let mut cat_sprite = load_animator(&loader, &config, &config.cat);
        if let Some(sprite) = cat_sprite.as_mut() {
            sprite.set_animation(Action::Idle, Direction::Left);
        }

        Ok(Self {
            config,
            duel,
            dog_sprite,
            cat_sprite,
            dog_facing: Direction::Right,
            last_event: None,
            input: InputManager::default(),
            game_loop: GameLoop::new(),
        })
    }

    /// React to this frame's key presses. Returns false once the player quits.
    fn handle_actions(&mut self) -> bool {
        let pressed: Vec<InputAction> = self.input.pressed_this_frame().collect();
        for action in pressed {
            match action {
                InputAction::Throw(slot) => self.throw(slot),
                InputAction::PowerUp => self.power_up(),
                InputAction::CycleColor => {
                    if let Some(sprite) = self.dog_sprite.as_mut() {
                        sprite.set_color_variant(sprite.color_variant().next());
                    }
                }
                InputAction::Pause => self.game_loop.toggle_pause(),
                InputAction::Quit => return false,
                _ => {}
            }
        }
        true
    }

    /// Thrower and target for this frame; Shift hands the throw to the cat
    fn sides(&self) -> (PlayerId, PlayerId) {
        if self.input.is_pressed(InputAction::SwapThrower) {
            (CAT, DOG)
        } else {
            (DOG, CAT)
        }
    }

    fn throw(&mut self, slot: u8) {
        let Some(&item) = ThrowableItem::ALL.get(slot as usize) else {
            return;
        };
        let (thrower, target) = self.sides();
        debug!(
            "Slot {} holds {} (speed {}, {})",
            slot + 1,
            item,
            item.speed(),
            item.effect().as_str()
        );

        if let Err(e) = self.duel.throw(thrower, item, target) {
            warn!("Throw refused: {}", e);
            return;
        }
        if let Some(winner) = self.duel.winner() {
            info!("{} wins!", winner.name());
        }
    }

    fn power_up(&mut self) {
        let (player, _) = self.sides();
        if let Err(e) = self.duel.apply_power_up(player, &PowerUp::new("treat", TREAT_MS)) {
            warn!("Power-up refused: {}", e);
        }
    }

    /// Run the simulation ticks due this frame and advance both sprites
    fn frame(&mut self) {
        let ticks = self.game_loop.begin_frame();
        let (dx, dy) = self.input.direction();

        for _ in 0..ticks {
            self.duel.tick(self.game_loop.tick_millis());
            if (dx, dy) != (0, 0) {
                if let Some(dog) = self.duel.get_mut(DOG) {
                    dog.move_by(dx * self.config.walk_step, dy * self.config.walk_step);
                }
            }
        }

        if let Some(direction) = facing(dx, dy) {
            self.dog_facing = direction;
        }
        let dog_action = self.action_for(DOG, (dx, dy) != (0, 0));
        let cat_action = self.action_for(CAT, false);
        if let Some(sprite) = self.dog_sprite.as_mut() {
            sprite.set_animation(dog_action, self.dog_facing);
        }
        if let Some(sprite) = self.cat_sprite.as_mut() {
            sprite.set_animation(cat_action, Direction::Left);
        }

        if let Some(event) = self.duel.drain_history().pop() {
            self.last_event = Some(event);
        }

        // Painting is left to a renderer; the sprites only need to keep time
        let now = self.game_loop.now_nanos();
        for sprite in [self.dog_sprite.as_mut(), self.cat_sprite.as_mut()].into_iter().flatten() {
            sprite.update(now);
        }

        self.input.update();
    }

    fn action_for(&self, id: PlayerId, walking: bool) -> Action {
        match self.duel.get(id) {
            Some(p) if !p.is_alive() => Action::Sleep,
            Some(p) if walking && !p.is_stunned() => Action::Walk,
            _ => Action::Idle,
        }
    }

    /// Window title doubling as the health display
    fn title(&self) -> String {
        let health = |id| {
            self.duel
                .get(id)
                .map(|p| format!("{} {}", p.name(), p.health()))
                .unwrap_or_default()
        };
        let paused = if self.game_loop.is_paused() { " (paused)" } else { "" };
        let last = self
            .last_event
            .as_ref()
            .map(|e| format!(" | {}", e))
            .unwrap_or_default();
        format!("Dog vs Cat | {} | {}{}{}", health(DOG), health(CAT), paused, last)
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Dog vs Cat...");

    let config = GameConfig::from_env();
    let mut scene = Scene::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(scene.title())
        .with_inner_size(winit::dpi::LogicalSize::new(
            scene.config.window_width,
            scene.config.window_height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut shown_title = scene.title();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                scene.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let title = scene.title();
                if title != shown_title {
                    window.set_title(&title);
                    shown_title = title;
                }
            }
            Event::AboutToWait => {
                if !scene.handle_actions() {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                scene.frame();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
