//! Game resources
//!
//! Every asset is procedural, so "loading" means building the descriptors
//! the renderer and audio backends draw from. Handles are immutable once
//! loaded and live for the whole run.

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::audio::music::MusicTrack;
use crate::renderer::font::FontStyle;

/// Procedural sprite kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Logo,
    Ball,
    Paddle,
    Brick,
}

/// A sprite handle: what to draw and how big it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    pub kind: TextureKind,
    pub width: f32,
    pub height: f32,
}

impl Texture {
    pub const fn new(kind: TextureKind, width: f32, height: f32) -> Self {
        Self {
            kind,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// All handles the game draws and plays
#[derive(Debug)]
pub struct GameResources {
    pub tex_logo: Texture,
    pub tex_ball: Texture,
    pub tex_paddle: Texture,
    pub tex_brick: Texture,
    /// Display font for titles
    pub font: FontStyle,
    pub fx_start: SoundEffect,
    pub fx_bounce: SoundEffect,
    pub fx_explode: SoundEffect,
    pub music: MusicTrack,
}

impl GameResources {
    pub fn load() -> Self {
        let resources = Self {
            tex_logo: Texture::new(TextureKind::Logo, 256.0, 256.0),
            tex_ball: Texture::new(TextureKind::Ball, 20.0, 20.0),
            tex_paddle: Texture::new(TextureKind::Paddle, 100.0, 24.0),
            tex_brick: Texture::new(TextureKind::Brick, 40.0, 20.0),
            font: FontStyle::Bold,
            fx_start: SoundEffect::Start,
            fx_bounce: SoundEffect::Bounce,
            fx_explode: SoundEffect::Explosion,
            music: MusicTrack::default(),
        };
        log::info!(
            "Loaded resources: 4 textures, display font, 3 sounds, music (seed {})",
            resources.music.seed
        );
        resources
    }
}

impl Drop for GameResources {
    fn drop(&mut self) {
        log::info!("Unloaded game resources");
    }
}
