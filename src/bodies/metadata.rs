use std::collections::HashMap;

use crate::core::BodyHandle;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Host-supplied drawing hints for a body
///
/// Bodies without an entry in the [`RenderMetadataMap`] are not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RenderMetadata {
    /// Depth coordinate stamped on every primitive derived from the body
    pub z_index: f32,
}

impl RenderMetadata {
    pub fn new(z_index: f32) -> Self {
        Self { z_index }
    }
}

/// Association from body handle to its render metadata
#[derive(Debug, Clone, Default)]
pub struct RenderMetadataMap {
    entries: HashMap<BodyHandle, RenderMetadata>,
}

impl RenderMetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches metadata to a body, returning the previous entry
    pub fn insert(&mut self, body: BodyHandle, metadata: RenderMetadata) -> Option<RenderMetadata> {
        self.entries.insert(body, metadata)
    }

    /// Detaches metadata from a body
    pub fn remove(&mut self, body: BodyHandle) -> Option<RenderMetadata> {
        self.entries.remove(&body)
    }

    pub fn get(&self, body: BodyHandle) -> Option<&RenderMetadata> {
        self.entries.get(&body)
    }

    /// Depth of a body, if it has metadata
    pub fn z_index(&self, body: BodyHandle) -> Option<f32> {
        self.get(body).map(|m| m.z_index)
    }

    /// Depth of `preferred`, falling back to `fallback`
    ///
    /// Joints and contacts use this to inherit depth from their second body
    /// first.
    pub fn z_index_with_fallback(&self, preferred: BodyHandle, fallback: BodyHandle) -> Option<f32> {
        self.z_index(preferred).or_else(|| self.z_index(fallback))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(BodyHandle, RenderMetadata)> for RenderMetadataMap {
    fn from_iter<I: IntoIterator<Item = (BodyHandle, RenderMetadata)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
