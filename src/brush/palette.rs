//! Named brushes: a prototype list plus a scale range each

use serde::{Deserialize, Serialize};
use crate::core::{Error, Result};

/// Opaque reference to a prototype object owned by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrototypeId(pub u32);

/// One named brush
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushPreset {
    pub name: String,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Prototypes the sampler picks from, uniformly
    pub elements: Vec<PrototypeId>,
}

impl BrushPreset {
    pub fn new(name: impl Into<String>, min_scale: f32, max_scale: f32) -> Self {
        Self {
            name: name.into(),
            min_scale,
            max_scale,
            elements: Vec::new(),
        }
    }

    pub fn with_elements(mut self, elements: impl IntoIterator<Item = PrototypeId>) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Clamp the scale range: min >= 0, max >= min
    pub fn sanitize(&mut self) {
        self.min_scale = self.min_scale.max(0.0);
        if self.max_scale < self.min_scale || self.max_scale.is_nan() {
            self.max_scale = self.min_scale;
        }
    }
}

impl Default for BrushPreset {
    fn default() -> Self {
        Self::new("New Brush", 1.0, 1.0)
    }
}

/// Ordered brush list with a current selection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushPalette {
    presets: Vec<BrushPreset>,
    selected: usize,
}

impl BrushPalette {
    /// Palette holding a single empty "New Brush"
    pub fn new() -> Self {
        Self {
            presets: vec![BrushPreset::default()],
            selected: 0,
        }
    }

    /// Palette with no presets at all
    pub fn empty() -> Self {
        Self {
            presets: Vec::new(),
            selected: 0,
        }
    }

    /// Append a preset, returning its index
    pub fn push(&mut self, mut preset: BrushPreset) -> usize {
        preset.sanitize();
        self.presets.push(preset);
        self.presets.len() - 1
    }

    /// Remove a preset. Selection falls back to 0 if it no longer exists.
    pub fn remove(&mut self, index: usize) -> Result<BrushPreset> {
        if index >= self.presets.len() {
            return Err(Error::BrushIndexOutOfRange { index, len: self.presets.len() });
        }
        let removed = self.presets.remove(index);
        if self.selected >= self.presets.len() {
            self.selected = 0;
        }
        Ok(removed)
    }

    pub fn select(&mut self, index: usize) -> Result<&BrushPreset> {
        if index >= self.presets.len() {
            return Err(Error::BrushIndexOutOfRange { index, len: self.presets.len() });
        }
        self.selected = index;
        Ok(&self.presets[index])
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently selected preset, `None` for an empty palette
    pub fn selected(&self) -> Option<&BrushPreset> {
        self.presets.get(self.selected)
    }

    pub fn get(&self, index: usize) -> Option<&BrushPreset> {
        self.presets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BrushPreset> {
        self.presets.get_mut(index)
    }

    pub fn presets(&self) -> &[BrushPreset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for BrushPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_palette() {
        let palette = BrushPalette::new();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.selected().unwrap().name, "New Brush");
        assert!(palette.selected().unwrap().elements.is_empty());
    }

    #[test]
    fn test_push_sanitizes() {
        let mut palette = BrushPalette::empty();
        let idx = palette.push(BrushPreset::new("rocks", -1.0, -5.0));
        assert_eq!(idx, 0);
        let preset = palette.get(0).unwrap();
        assert_eq!(preset.min_scale, 0.0);
        assert_eq!(preset.max_scale, 0.0);
    }

    #[test]
    fn test_select() {
        let mut palette = BrushPalette::new();
        palette.push(BrushPreset::new("trees", 0.8, 1.2).with_elements([PrototypeId(7)]));
        let preset = palette.select(1).unwrap();
        assert_eq!(preset.name, "trees");
        assert_eq!(palette.selected_index(), 1);

        let err = palette.select(5).unwrap_err();
        assert_eq!(err, Error::BrushIndexOutOfRange { index: 5, len: 2 });
        assert_eq!(palette.selected_index(), 1);
    }

    #[test]
    fn test_remove_resets_selection() {
        let mut palette = BrushPalette::new();
        palette.push(BrushPreset::new("grass", 1.0, 1.0));
        palette.select(1).unwrap();
        let removed = palette.remove(1).unwrap();
        assert_eq!(removed.name, "grass");
        assert_eq!(palette.selected_index(), 0);
        assert!(palette.remove(3).is_err());
    }

    #[test]
    fn test_remove_last_empties() {
        let mut palette = BrushPalette::new();
        palette.remove(0).unwrap();
        assert!(palette.is_empty());
        assert!(palette.selected().is_none());
    }
}
