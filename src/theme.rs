//! Live theme palette.
//!
//! Indexed color lists shared by every theme-resolved keyframe. The palette
//! is mutable at runtime and read fresh on every resolve, so a theme swap
//! shows up on the very next sample without rebuilding any sequence.
//! Access is single-threaded by contract; nothing here synchronizes.

use std::cell::Cell;

use log::warn;

use crate::color::Rgba;

/// Which palette list a theme keyframe reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteGroup {
    Object,
    Background,
    Effect,
}

/// Swappable set of indexed color lists.
#[derive(Debug, Clone, Default)]
pub struct ThemePalette {
    object: Vec<Rgba>,
    background: Vec<Rgba>,
    effect: Vec<Rgba>,
    generation: u64,
    warned: Cell<Option<u64>>,
}

impl ThemePalette {
    #[must_use]
    pub fn new(object: Vec<Rgba>, background: Vec<Rgba>, effect: Vec<Rgba>) -> Self {
        Self {
            object,
            background,
            effect,
            generation: 0,
            warned: Cell::new(None),
        }
    }

    /// Bumped on every mutation; lets callers observe swaps.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn colors(&self, group: PaletteGroup) -> &[Rgba] {
        match group {
            PaletteGroup::Object => &self.object,
            PaletteGroup::Background => &self.background,
            PaletteGroup::Effect => &self.effect,
        }
    }

    /// Resolves a palette color.
    ///
    /// An out-of-range slot clamps to the last entry of the group, and an
    /// empty group resolves to opaque white; both log one warning per
    /// palette generation.
    #[must_use]
    pub fn color(&self, group: PaletteGroup, slot: usize) -> Rgba {
        let list = self.colors(group);
        if let Some(color) = list.get(slot) {
            return *color;
        }
        if self.warned.get() != Some(self.generation) {
            self.warned.set(Some(self.generation));
            warn!(
                "palette slot {slot} out of range for {group:?} ({} entries), clamping",
                list.len()
            );
        }
        list.last().copied().unwrap_or(Rgba::WHITE)
    }

    /// Writes one slot, growing the group with white as needed.
    pub fn set_color(&mut self, group: PaletteGroup, slot: usize, color: Rgba) {
        let list = self.colors_mut(group);
        if slot >= list.len() {
            list.resize(slot + 1, Rgba::WHITE);
        }
        list[slot] = color;
        self.generation += 1;
    }

    /// Replaces one group wholesale.
    pub fn set_group(&mut self, group: PaletteGroup, colors: Vec<Rgba>) {
        *self.colors_mut(group) = colors;
        self.generation += 1;
    }

    /// Swaps in a whole new theme.
    pub fn replace(&mut self, other: ThemePalette) {
        self.object = other.object;
        self.background = other.background;
        self.effect = other.effect;
        self.generation += 1;
    }

    fn colors_mut(&mut self, group: PaletteGroup) -> &mut Vec<Rgba> {
        match group {
            PaletteGroup::Object => &mut self.object,
            PaletteGroup::Background => &mut self.background,
            PaletteGroup::Effect => &mut self.effect,
        }
    }
}
