use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// Entries are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedSet {
    regions: BTreeSet<RegionId>,
}

impl RevealedSet {
    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains(id)
    }

    /// Union with `ids`; returns whether anything new was added.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = RegionId>) -> bool {
        let before = self.regions.len();
        self.regions.extend(ids);
        self.regions.len() != before
    }
}

pub trait RegionGeometry {
    fn viewport_height(&self) -> f64;

    /// `None` when the region is not mounted.
    fn region_top(&self, id: &RegionId) -> Option<f64>;
}

#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    threshold: f64,
    pending: Vec<RegionId>,
}

impl VisibilityTracker {
    pub fn new(candidates: impl IntoIterator<Item = RegionId>, threshold: f64) -> Self {
        let mut pending: Vec<RegionId> = Vec::new();
        for id in candidates {
            if !pending.contains(&id) {
                pending.push(id);
            }
        }

        Self { threshold, pending }
    }

    pub fn pending(&self) -> &[RegionId] {
        &self.pending
    }

    /// Returns the regions revealed by this call. They leave the pending list,
    /// so a region is never reported twice.
    pub fn scan(&mut self, geometry: &impl RegionGeometry) -> Vec<RegionId> {
        let limit = geometry.viewport_height() * self.threshold;
        let mut newly_revealed = Vec::new();

        self.pending.retain(|id| match geometry.region_top(id) {
            Some(top) if top < limit => {
                newly_revealed.push(id.clone());
                false
            }
            _ => true,
        });

        newly_revealed
    }
}

pub fn nav_is_scrolled(scroll_y: f64, offset_px: f64) -> bool {
    scroll_y > offset_px
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;

    // Offsets are in document coordinates.
    pub struct FakePage {
        pub viewport_height: f64,
        pub scroll_y: f64,
        pub offsets: HashMap<RegionId, f64>,
    }

    impl FakePage {
        pub fn new(viewport_height: f64, regions: &[(&str, f64)]) -> Self {
            Self {
                viewport_height,
                scroll_y: 0.0,
                offsets: regions
                    .iter()
                    .map(|(id, offset)| (RegionId::from(*id), *offset))
                    .collect(),
            }
        }

        pub fn place(&mut self, id: &str, fraction: f64) {
            let offset = self.offsets[&RegionId::from(id)];
            self.scroll_y = offset - fraction * self.viewport_height;
        }
    }

    impl RegionGeometry for FakePage {
        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }

        fn region_top(&self, id: &RegionId) -> Option<f64> {
            self.offsets.get(id).map(|offset| offset - self.scroll_y)
        }
    }
}
