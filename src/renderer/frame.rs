//! Per-frame draw snapshot
//!
//! [`build_frame`] turns the game state into an ordered list of draw
//! commands. It is a pure function: nothing in here touches the GPU, so the
//! layout of every screen is testable without a device.

use glam::Vec2;

use super::font::{self, FontStyle};
use super::vertex::{Color, colors};
use crate::consts::*;
use crate::resources::{GameResources, Texture};
use crate::sim::{GameState, Screen};

/// One drawing operation, in logical screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole playfield
    Clear(Color),
    /// Sprite with its top-left corner at `position`
    Texture {
        texture: Texture,
        position: Vec2,
        tint: Color,
    },
    Text {
        text: &'static str,
        position: Vec2,
        size: f32,
        spacing: f32,
        style: FontStyle,
        color: Color,
    },
    Rect {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Text in the default UI font
    fn text(&mut self, text: &'static str, position: Vec2, size: f32, color: Color) {
        self.push(DrawCommand::Text {
            text,
            position,
            size,
            spacing: font::default_spacing(size),
            style: FontStyle::Regular,
            color,
        });
    }

    /// Default-font text centered horizontally on the playfield
    fn centered_text(&mut self, text: &'static str, y: f32, size: f32, color: Color) {
        let x = SCREEN_WIDTH / 2.0 - font::measure_text(text, size) / 2.0;
        self.text(text, Vec2::new(x, y), size, color);
    }

    /// Every text command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(*text),
            _ => None,
        })
    }
}

/// Prompts show for 30 ticks, hide for 30
fn blink_visible(frames_counter: u32) -> bool {
    (frames_counter / BLINK_TICKS) % 2 == 0
}

/// Build the draw commands for the current screen
pub fn build_frame(state: &GameState, resources: &GameResources) -> Frame {
    let mut frame = Frame::default();
    frame.push(DrawCommand::Clear(colors::RAYWHITE));

    match state.screen {
        Screen::Logo { .. } => {
            let logo = resources.tex_logo;
            let position = Vec2::new(
                SCREEN_WIDTH / 2.0 - logo.width / 2.0,
                SCREEN_HEIGHT / 2.0 - logo.height / 2.0,
            );
            frame.push(DrawCommand::Texture {
                texture: logo,
                position,
                tint: colors::WHITE,
            });
        }
        Screen::Title { .. } => {
            frame.push(DrawCommand::Text {
                text: "BLOCKS",
                position: Vec2::new(100.0, 80.0),
                size: 160.0,
                spacing: 10.0,
                style: resources.font,
                color: colors::MAROON,
            });
            if blink_visible(state.screen.frames_counter()) {
                frame.centered_text(
                    "PRESS [ENTER] to START",
                    SCREEN_HEIGHT / 2.0 + 60.0,
                    20.0,
                    colors::DARKGRAY,
                );
            }
        }
        Screen::Gameplay { paused } => {
            draw_playfield(&mut frame, state, resources);
            if paused {
                frame.centered_text(
                    "GAME PAUSED",
                    SCREEN_HEIGHT / 2.0 + 60.0,
                    40.0,
                    colors::GRAY,
                );
            }
        }
        Screen::Ending { .. } => {
            frame.push(DrawCommand::Text {
                text: "GAME FINISHED",
                position: Vec2::new(80.0, 100.0),
                size: 80.0,
                spacing: 6.0,
                style: resources.font,
                color: colors::MAROON,
            });
            if blink_visible(state.screen.frames_counter()) {
                frame.centered_text(
                    "PRESS [ENTER] TO PLAY AGAIN",
                    SCREEN_HEIGHT / 2.0 + 80.0,
                    20.0,
                    colors::GRAY,
                );
            }
        }
    }

    frame
}

fn draw_playfield(frame: &mut Frame, state: &GameState, resources: &GameResources) {
    frame.push(DrawCommand::Texture {
        texture: resources.tex_paddle,
        position: state.player.position,
        tint: colors::WHITE,
    });

    // Sprite centered on the ball's collision circle
    let ball = resources.tex_ball;
    frame.push(DrawCommand::Texture {
        texture: ball,
        position: state.ball.position - ball.size() / 2.0,
        tint: colors::MAROON,
    });

    for (row, col, brick) in state.bricks.iter() {
        if !brick.active {
            continue;
        }
        let tint = if (row + col) % 2 == 0 {
            colors::GRAY
        } else {
            colors::DARKGRAY
        };
        frame.push(DrawCommand::Texture {
            texture: resources.tex_brick,
            position: brick.position,
            tint,
        });
    }

    for i in 0..state.player.lives.max(0) as u32 {
        frame.push(DrawCommand::Rect {
            position: Vec2::new(20.0 + 40.0 * i as f32, SCREEN_HEIGHT - 30.0),
            size: Vec2::new(35.0, 10.0),
            color: colors::LIGHTGRAY,
        });
    }
}
