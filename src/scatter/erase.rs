//! Erase-volume query: which existing objects sit inside the brush

use glam::Vec3;
use crate::brush::BrushConfiguration;
use crate::surface::SurfaceProbe;
use crate::volume::BrushVolume;

/// Selects existing objects inside the brush volume for deletion
pub struct EraseQuery<'a> {
    config: &'a BrushConfiguration,
}

impl<'a> EraseQuery<'a> {
    pub fn new(config: &'a BrushConfiguration) -> Self {
        Self { config }
    }

    /// Ids of the objects whose position lies inside the brush at `probe`.
    ///
    /// Evaluates nothing and returns an empty list unless erase mode is
    /// active and a probe exists. Input order is preserved.
    pub fn select<I, P>(&self, probe: Option<&SurfaceProbe>, erase_active: bool, objects: P) -> Vec<I>
    where
        P: IntoIterator<Item = (I, Vec3)>,
    {
        let Some(probe) = probe.filter(|_| erase_active) else {
            return Vec::new();
        };

        let volume = BrushVolume::at(probe, self.config);
        let bounds = volume.culling_bounds();
        objects
            .into_iter()
            .filter(|(_, position)| {
                bounds.is_none_or(|b| b.contains_point(*position)) && volume.contains(*position)
            })
            .map(|(id, _)| id)
            .collect()
    }
}
