// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Regional parameters revisions and per-revision band overlays.
use core::fmt;

use crate::band::Band;
use crate::error::{Error, Result};

/// Revision of the LoRaWAN Regional Parameters. Ordered from oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhyVersion {
    V1_0,
    V1_0_1,
    V1_0_2RevA,
    V1_0_2RevB,
    V1_1RevA,
}

impl PhyVersion {
    /// Every revision, newest first.
    pub const ALL: [PhyVersion; 5] = [
        PhyVersion::V1_1RevA,
        PhyVersion::V1_0_2RevB,
        PhyVersion::V1_0_2RevA,
        PhyVersion::V1_0_1,
        PhyVersion::V1_0,
    ];

    pub const LATEST: PhyVersion = PhyVersion::V1_1RevA;

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PhyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhyVersion::V1_0 => "1.0",
            PhyVersion::V1_0_1 => "1.0.1",
            PhyVersion::V1_0_2RevA => "1.0.2-RevA",
            PhyVersion::V1_0_2RevB => "1.0.2-RevB",
            PhyVersion::V1_1RevA => "1.1-RevA",
        })
    }
}

/// Turns the band of the next newer revision into the band of this revision.
pub type Downgrade = fn(Band) -> Band;

/// Downgrade for revisions that did not change the band.
pub fn identity(band: Band) -> Band {
    band
}

/// Revisions a band supports and how to derive each of them.
#[derive(Debug, Clone, Copy)]
pub enum VersionOverlays {
    /// One downgrade per revision, indexed oldest first; `None` marks an unsupported
    /// revision. Resolving a revision applies every downgrade from the newest revision down
    /// to the requested one, so a revision is reachable only if every newer one is.
    Cascade([Option<Downgrade>; 5]),
    /// A resolved band: it describes exactly one revision.
    Pinned(PhyVersion),
}

impl VersionOverlays {
    /// Every revision supported and identical.
    pub const fn all() -> Self {
        VersionOverlays::Cascade([Some(identity as Downgrade); 5])
    }

    /// Identical for `oldest` and every newer revision, unsupported before.
    pub fn since(oldest: PhyVersion) -> Self {
        let mut slots: [Option<Downgrade>; 5] = [None; 5];
        for version in PhyVersion::ALL.into_iter().filter(|v| *v >= oldest) {
            slots[version.slot()] = Some(identity);
        }
        VersionOverlays::Cascade(slots)
    }

    /// Replaces the downgrade producing `version`.
    pub fn with(self, version: PhyVersion, downgrade: Option<Downgrade>) -> Self {
        match self {
            VersionOverlays::Cascade(mut slots) => {
                slots[version.slot()] = downgrade;
                VersionOverlays::Cascade(slots)
            }
            pinned @ VersionOverlays::Pinned(_) => pinned,
        }
    }

    pub fn supports(&self, version: PhyVersion) -> bool {
        match self {
            VersionOverlays::Cascade(slots) => {
                PhyVersion::ALL.into_iter().filter(|v| *v >= version).all(|v| slots[v.slot()].is_some())
            }
            VersionOverlays::Pinned(pinned) => *pinned == version,
        }
    }

    /// Supported revisions, newest first.
    pub fn supported(&self) -> heapless::Vec<PhyVersion, 5> {
        PhyVersion::ALL.into_iter().filter(|v| self.supports(*v)).collect()
    }

    /// Derives the band of `version` from `band`, the band these overlays belong to.
    pub(crate) fn resolve(&self, band: Band, version: PhyVersion) -> Result<Band> {
        match self {
            VersionOverlays::Pinned(pinned) if *pinned == version => Ok(band),
            VersionOverlays::Pinned(_) => Err(Error::UnsupportedVersion(version)),
            VersionOverlays::Cascade(slots) => {
                let mut band = band;
                for step in PhyVersion::ALL.into_iter().filter(|v| *v >= version) {
                    let downgrade = slots[step.slot()].ok_or(Error::UnsupportedVersion(version))?;
                    band = downgrade(band);
                }
                band.versions = VersionOverlays::Pinned(version);
                Ok(band)
            }
        }
    }
}
