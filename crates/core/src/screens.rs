//! Per-screen behavior: how each screen reacts to a key and what it draws.
//!
//! Every screen offers the same two operations through [`ScreenHandler`], so
//! the state machine dispatches without knowing any screen's details.

use crate::canvas::Canvas;
use crate::menu::Menu;
use crate::types::palette::{BLACK, WHITE};
use crate::types::{Key, MenuOption, Rect, Screen};
use crate::world::World;

pub const TITLE: &str = "Flappy Airplane";

pub const INSTRUCTIONS: [&str; 5] = [
    "Controls:",
    "Press SPACE to jump",
    "Avoid obstacles.",
    "Score increases over time.",
    "Press any key to start.",
];

pub const GAME_OVER: &str = "Game Over";
/// Retry/exit hint, two lines so it fits a 30-column playfield.
pub const RETRY_HINT: [&str; 2] = ["Press R to Retry", "or ESC to Exit"];
pub const MENU_HINT: &str = "Press M for Menu";

/// What a key press asks the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(Screen),
    Quit,
}

pub trait ScreenHandler {
    /// React to one key press. World resets happen here, before the
    /// transition is returned.
    fn handle_key(&self, key: Key, world: &mut World, menu: &mut Menu) -> Option<Transition>;

    /// Draw the screen's content on top of the background.
    fn render<C: Canvas>(&self, world: &World, menu: &Menu, canvas: &mut C);
}

impl ScreenHandler for Screen {
    fn handle_key(&self, key: Key, world: &mut World, menu: &mut Menu) -> Option<Transition> {
        match self {
            Screen::Menu => menu_key(key, menu),
            // Pure pass-through gate: the world is already fresh.
            Screen::Controls => Some(Transition::To(Screen::Playing)),
            Screen::Playing => {
                if key == Key::Jump {
                    world.player.jump();
                }
                None
            }
            Screen::GameOver => game_over_key(key, world),
        }
    }

    fn render<C: Canvas>(&self, world: &World, menu: &Menu, canvas: &mut C) {
        match self {
            Screen::Menu => draw_menu(menu, canvas),
            Screen::Controls => draw_controls(canvas),
            Screen::Playing => draw_playing(world, canvas),
            Screen::GameOver => draw_game_over(world, canvas),
        }
    }
}

fn menu_key(key: Key, menu: &mut Menu) -> Option<Transition> {
    match key {
        Key::Up => menu.up(),
        Key::Down => menu.down(),
        Key::Confirm => {
            return match menu.selected() {
                MenuOption::Play => Some(Transition::To(Screen::Controls)),
                // High scores are not kept.
                MenuOption::Scores => None,
                MenuOption::Exit => Some(Transition::Quit),
            };
        }
        _ => {}
    }
    None
}

fn game_over_key(key: Key, world: &mut World) -> Option<Transition> {
    match key {
        Key::Retry => {
            world.reset();
            Some(Transition::To(Screen::Playing))
        }
        Key::MenuReturn => {
            world.reset();
            Some(Transition::To(Screen::Menu))
        }
        Key::Escape => Some(Transition::Quit),
        _ => None,
    }
}

fn draw_menu<C: Canvas>(menu: &Menu, canvas: &mut C) {
    canvas.text_centered(100.0, TITLE, WHITE);

    for (i, option) in MenuOption::ALL.iter().enumerate() {
        let y = 200.0 + i as f32 * 50.0;
        let selected = i == menu.index();
        let color = if selected { WHITE } else { BLACK };
        let x = canvas.text_centered(y, option.label(), color);

        if selected {
            let underline = Rect::new(
                x,
                y + canvas.line_height() + 5.0,
                canvas.text_width(option.label()),
                2.0,
            );
            canvas.fill_rect(underline, WHITE);
        }
    }
}

fn draw_controls<C: Canvas>(canvas: &mut C) {
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        canvas.text_centered(150.0 + i as f32 * 40.0, line, WHITE);
    }
}

fn draw_playing<C: Canvas>(world: &World, canvas: &mut C) {
    canvas.fill_rect(world.player.bounds(), WHITE);

    for pair in &world.track {
        for rect in pair.rects() {
            canvas.fill_rect(rect, BLACK);
        }
    }

    let score = format!("Score: {}", world.score.whole());
    canvas.text(10.0, 10.0, &score, WHITE);
}

fn draw_game_over<C: Canvas>(world: &World, canvas: &mut C) {
    canvas.text_centered(150.0, GAME_OVER, WHITE);
    let score = format!("Score: {}", world.score.whole());
    canvas.text_centered(200.0, &score, WHITE);
    canvas.text_centered(250.0, RETRY_HINT[0], WHITE);
    canvas.text_centered(290.0, RETRY_HINT[1], WHITE);
    canvas.text_centered(350.0, MENU_HINT, WHITE);
}
