//! Grid region registry
//!
//! Immutable bidirectional mapping between Carbon Intensity API region ids
//! and their display names, per the official region list:
//! <https://carbon-intensity.github.io/api-definitions/#region-list>
//!
//! Only the 14 disjoint DNO regions are included. The API also reports
//! aggregate regions (15 England, 16 Scotland, 17 Wales) which overlap the
//! DNO regions; those are excluded so per-region emission comparisons stay
//! apples-to-apples. Intensity data arriving for an excluded id is simply
//! not resolvable here and gets dropped by the caller.

use serde::Serialize;

/// One grid region: upstream numeric id plus display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Carbon Intensity API region id
    pub id: u16,
    /// Canonical display name
    pub name: &'static str,
}

/// The 14 disjoint DNO regions, in upstream id order
const REGIONS: [Region; 14] = [
    Region { id: 1, name: "North Scotland" },
    Region { id: 2, name: "South Scotland" },
    Region { id: 3, name: "North West England" },
    Region { id: 4, name: "North East England" },
    Region { id: 5, name: "South Yorkshire" },
    Region { id: 6, name: "North Wales, Merseyside and Cheshire" },
    Region { id: 7, name: "South Wales" },
    Region { id: 8, name: "West Midlands" },
    Region { id: 9, name: "East Midlands" },
    Region { id: 10, name: "East England" },
    Region { id: 11, name: "South West England" },
    Region { id: 12, name: "South England" },
    Region { id: 13, name: "London" },
    Region { id: 14, name: "South East England" },
];

/// All registered regions, in upstream id order
pub fn all() -> &'static [Region] {
    &REGIONS
}

/// Resolve a region id to its display name
///
/// Returns `None` for ids outside the registry, including the upstream
/// aggregate ids. Callers decide whether a miss is an error or a skip.
pub fn name_of(id: u16) -> Option<&'static str> {
    REGIONS.iter().find(|r| r.id == id).map(|r| r.name)
}

/// Resolve a display name to its region id
///
/// Exact match only; returns `None` for unknown names.
pub fn id_of(name: &str) -> Option<u16> {
    REGIONS.iter().find(|r| r.name == name).map(|r| r.id)
}
