//! Paint session: owns the brush state between ticks

use glam::Vec3;
use rand::Rng;
use crate::brush::{BrushConfiguration, BrushPalette, PrototypeId};
use crate::core::Result;
use crate::surface::{Raycaster, SurfaceProbe};
use super::candidate::{CandidateSet, Placement};
use super::erase::EraseQuery;
use super::projector::SurfaceProjector;
use super::sampler::FootprintSampler;

/// Brush state carried across interaction ticks.
///
/// Holds the configuration, the brush palette, the current candidate set
/// and the injected RNG. The candidate set is only ever replaced whole,
/// when something that affects sampling changes.
#[derive(Debug)]
pub struct PaintSession<R: Rng> {
    config: BrushConfiguration,
    palette: BrushPalette,
    candidates: CandidateSet,
    rng: R,
    probe: Option<SurfaceProbe>,
    erase_active: bool,
}

impl<R: Rng> PaintSession<R> {
    /// Create a session and sample its first candidate set
    pub fn new(config: BrushConfiguration, palette: BrushPalette, rng: R) -> Self {
        let mut session = Self {
            config: config.sanitized(),
            palette,
            candidates: CandidateSet::default(),
            rng,
            probe: None,
            erase_active: false,
        };
        session.take_preset_scale();
        session.resample();
        session
    }

    pub fn config(&self) -> &BrushConfiguration {
        &self.config
    }

    pub fn palette(&self) -> &BrushPalette {
        &self.palette
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Probe seen by the last tick
    pub fn probe(&self) -> Option<&SurfaceProbe> {
        self.probe.as_ref()
    }

    pub fn is_erasing(&self) -> bool {
        self.erase_active
    }

    /// Install a new configuration, resampling only if it changes sampling
    pub fn set_config(&mut self, config: BrushConfiguration) {
        let config_clean = config.sanitized();
        if config_clean != config {
            log::warn!("Brush configuration out of range, clamped: {:?}", config_clean);
        }
        let resample = config_clean.resamples_from(&self.config);
        self.config = config_clean;
        if resample {
            self.resample();
        }
    }

    /// Apply an in-place edit to the configuration, e.g. one of the
    /// `BrushConfiguration` adjusters
    pub fn update_config(&mut self, edit: impl FnOnce(&mut BrushConfiguration)) {
        let mut config = self.config.clone();
        edit(&mut config);
        self.set_config(config);
    }

    /// Switch brushes: takes the preset's scale range and resamples
    pub fn select_brush(&mut self, index: usize) -> Result<()> {
        self.palette.select(index)?;
        self.take_preset_scale();
        self.resample();
        Ok(())
    }

    /// Copy the selected preset's scale range into the configuration,
    /// clamped like any other configuration change
    fn take_preset_scale(&mut self) {
        if let Some(preset) = self.palette.selected() {
            self.config.min_scale = preset.min_scale;
            self.config.max_scale = preset.max_scale;
            self.config = self.config.sanitized();
        }
    }

    /// Mutable palette access. Call [`PaintSession::resample`] after
    /// changing the selected preset's elements.
    pub fn palette_mut(&mut self) -> &mut BrushPalette {
        &mut self.palette
    }

    /// Replace the candidate set with a freshly sampled one
    pub fn resample(&mut self) {
        let elements: &[PrototypeId] = self
            .palette
            .selected()
            .map(|preset| preset.elements.as_slice())
            .unwrap_or_default();
        let sampled = FootprintSampler::new(&self.config).sample(elements, &mut self.rng);
        self.candidates = self.candidates.succeed(sampled);
        log::debug!(
            "Resampled brush: generation {}, {} candidates",
            self.candidates.generation(),
            self.candidates.len()
        );
    }

    /// Run one interaction tick, returning the number of active candidates
    pub fn tick<C>(&mut self, probe: Option<SurfaceProbe>, erase_active: bool, raycaster: &C) -> usize
    where
        C: Raycaster + ?Sized,
    {
        self.probe = probe;
        self.erase_active = erase_active;
        SurfaceProjector::new(&self.config, raycaster).project(
            &mut self.candidates,
            self.probe.as_ref(),
            erase_active,
        )
    }

    /// Objects the brush would erase at the last tick
    pub fn erase_targets<I, P>(&self, objects: P) -> Vec<I>
    where
        P: IntoIterator<Item = (I, Vec3)>,
    {
        EraseQuery::new(&self.config).select(self.probe.as_ref(), self.erase_active, objects)
    }

    /// Take the active placements and start over with a new candidate set.
    ///
    /// Produces nothing while erasing.
    pub fn commit_paint(&mut self) -> Vec<Placement> {
        if self.erase_active {
            return Vec::new();
        }
        let placements = self.candidates.placements();
        if !placements.is_empty() {
            log::debug!("Painted {} elements", placements.len());
        }
        self.resample();
        placements
    }

    /// Objects to delete for an erase commit; empty when not erasing
    pub fn commit_erase<I, P>(&self, objects: P) -> Vec<I>
    where
        P: IntoIterator<Item = (I, Vec3)>,
    {
        let targets = self.erase_targets(objects);
        if !targets.is_empty() {
            log::debug!("Erasing {} objects", targets.len());
        }
        targets
    }
}
