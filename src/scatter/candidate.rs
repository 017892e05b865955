//! Sampled brush elements and the versioned set that owns them

use glam::{Quat, Vec2, Vec3};
use crate::brush::PrototypeId;

/// One sampled, not yet committed placement of a prototype.
///
/// The sampled fields (prototype, footprint offset, yaw, scale) are fixed at
/// creation. Only the projector moves the world transform and toggles the
/// active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementCandidate {
    prototype: PrototypeId,
    local_offset: Vec2,
    rotation_angle: f32,
    scale: f32,
    position: Vec3,
    rotation: Quat,
    active: bool,
}

impl PlacementCandidate {
    /// Fresh candidate, inactive until first projected
    pub fn new(prototype: PrototypeId, local_offset: Vec2, rotation_angle: f32, scale: f32) -> Self {
        Self {
            prototype,
            local_offset,
            rotation_angle,
            scale,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            active: false,
        }
    }

    pub fn prototype(&self) -> PrototypeId {
        self.prototype
    }

    /// Offset in the footprint plane (x = right, y = forward)
    pub fn local_offset(&self) -> Vec2 {
        self.local_offset
    }

    /// Sampled yaw about the surface normal, in degrees
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Sampled uniform scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn world_scale(&self) -> Vec3 {
        Vec3::splat(self.scale)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn place(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.rotation = rotation;
        self.active = true;
    }

    /// Hide the candidate, keeping its last transform
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    fn placement(&self) -> Placement {
        Placement {
            prototype: self.prototype,
            position: self.position,
            rotation: self.rotation,
            scale: self.world_scale(),
        }
    }
}

/// Final transform of an active candidate, ready to instantiate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub prototype: PrototypeId,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

/// All candidates of one configuration, tagged with a generation number.
///
/// A new configuration produces a whole new set through [`CandidateSet::succeed`];
/// sets are never resampled piecemeal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    generation: u64,
    candidates: Vec<PlacementCandidate>,
}

impl CandidateSet {
    pub fn new(generation: u64, candidates: Vec<PlacementCandidate>) -> Self {
        Self { generation, candidates }
    }

    /// Replacement set one generation newer than `self`
    pub fn succeed(&self, candidates: Vec<PlacementCandidate>) -> Self {
        Self::new(self.generation.wrapping_add(1), candidates)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn candidates(&self) -> &[PlacementCandidate] {
        &self.candidates
    }

    pub(crate) fn candidates_mut(&mut self) -> &mut [PlacementCandidate] {
        &mut self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_active()).count()
    }

    /// Transforms of every active candidate
    pub fn placements(&self) -> Vec<Placement> {
        self.candidates
            .iter()
            .filter(|c| c.is_active())
            .map(PlacementCandidate::placement)
            .collect()
    }

    pub(crate) fn deactivate_all(&mut self) {
        for candidate in &mut self.candidates {
            candidate.deactivate();
        }
    }
}
