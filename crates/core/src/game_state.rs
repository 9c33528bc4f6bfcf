//! Game state machine - ties the screens, the menu and the world together.
//!
//! One call to [`Game::tick`] is one frame: the screen that was active when
//! the frame began handles every drained input event in arrival order, then
//! the world is stepped if that screen was `Playing`.

use crate::canvas::Canvas;
use crate::menu::Menu;
use crate::screens::{ScreenHandler, Transition};
use crate::sky::Sky;
use crate::types::{InputEvent, Screen};
use crate::world::{StepOutcome, World, WorldConfig};

/// Whether the frame driver should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Game {
    screen: Screen,
    menu: Menu,
    world: World,
    sky: Sky,
    frame: u64,
}

impl Game {
    /// Create a game on the main menu with the given RNG seed
    pub fn new(config: WorldConfig, seed: u32) -> Self {
        Self {
            screen: Screen::Menu,
            menu: Menu::new(),
            world: World::new(config, seed),
            sky: Sky::default(),
            frame: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn sky(&self) -> &Sky {
        &self.sky
    }

    /// Number of completed frames.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame with the input drained for it.
    ///
    /// A quit (signal, menu Exit, or Escape on the game-over screen) returns
    /// immediately and leaves the rest of the frame undone.
    pub fn tick(&mut self, events: &[InputEvent]) -> Flow {
        let screen = self.screen;

        for event in events {
            let key = match *event {
                InputEvent::Quit => return Flow::Quit,
                InputEvent::Key(key) => key,
            };
            match screen.handle_key(key, &mut self.world, &mut self.menu) {
                Some(Transition::Quit) => return Flow::Quit,
                Some(Transition::To(next)) => self.screen = next,
                None => {}
            }
        }

        if screen == Screen::Playing && self.world.step() == StepOutcome::Crashed {
            self.screen = Screen::GameOver;
        }

        self.sky.advance();
        self.frame += 1;
        Flow::Continue
    }

    /// Draw the current screen over the cycling background.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill(self.sky.color());
        self.screen.render(&self.world, &self.menu, canvas);
    }
}
