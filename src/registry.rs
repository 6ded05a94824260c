// Copyright (c) 2017,2018 Ivaylo Petrov
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//
// author: Ivaylo Petrov <ivajloip@gmail.com>

//! Registry of the bands known to a process.
use crate::band::Band;
use crate::error::{Error, Result};
use crate::region;
use crate::version::PhyVersion;

/// Number of bands a registry can hold.
pub const MAX_REGIONS: usize = 8;

/// Append-only mapping from region id to [`Band`].
///
/// A registry is filled during start-up and only read afterwards; hand out shared references
/// once it is complete.
#[derive(Debug, Clone, Default)]
pub struct BandRegistry {
    bands: heapless::Vec<Band, MAX_REGIONS>,
}

impl BandRegistry {
    pub const fn new() -> Self {
        Self { bands: heapless::Vec::new() }
    }

    /// Registry holding every band enabled through the `region-*` features.
    pub fn with_all_regions() -> Result<Self> {
        let mut registry = Self::new();
        for band in region::REGIONS {
            registry.register(band()?)?;
        }
        Ok(registry)
    }

    /// Process-wide registry of every enabled band, built on first use.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn global() -> Result<&'static BandRegistry> {
        static GLOBAL: std::sync::OnceLock<Result<BandRegistry>> = std::sync::OnceLock::new();
        GLOBAL
            .get_or_init(|| {
                let registry = BandRegistry::with_all_regions();
                if let Ok(registry) = &registry {
                    info!("band registry ready with {} regions", registry.len());
                }
                registry
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Adds a band. Registering an id twice is an error, never an override.
    pub fn register(&mut self, band: Band) -> Result {
        if self.bands.iter().any(|b| b.id == band.id) {
            warn!("band {} is already registered", band.id);
            return Err(Error::DuplicateRegion);
        }
        band.validate()?;
        debug!("registering band {}", band.id);
        self.bands.push(band).map_err(|_| Error::RegistryFull)
    }

    pub fn get(&self, id: &str) -> Result<&Band> {
        self.bands.iter().find(|b| b.id == id).ok_or(Error::UnknownRegion)
    }

    /// The band `id` at a regional parameters revision.
    pub fn get_version(&self, id: &str, version: PhyVersion) -> Result<Band> {
        self.get(id)?.version(version)
    }

    /// Registered region ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bands.iter().map(|b| b.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Band> {
        self.bands.iter()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_and_unknown_regions() {
        let mut registry = BandRegistry::new();
        assert!(registry.is_empty());
        let band = region::REGIONS[0]().unwrap();
        let id = band.id;
        registry.register(band.clone()).unwrap();
        assert_eq!(registry.register(band), Err(Error::DuplicateRegion));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(id).map(|b| b.id), Ok(id));
        assert_eq!(registry.get("XX_000_000").map(|b| b.id), Err(Error::UnknownRegion));
    }

    #[test]
    fn invalid_bands_are_rejected() {
        let mut registry = BandRegistry::new();
        let mut band = region::REGIONS[0]().unwrap();
        band.frequency_range = 1..=2;
        assert_eq!(registry.register(band), Err(Error::InvalidBand));
        assert!(registry.is_empty());
    }

    #[test]
    fn all_regions() {
        let registry = BandRegistry::with_all_regions().unwrap();
        assert_eq!(registry.len(), region::REGIONS.len());
        let ids: heapless::Vec<&str, MAX_REGIONS> = registry.ids().collect();
        assert!(ids.iter().all(|id| registry.get(id).is_ok()));
        for band in registry.iter() {
            assert_eq!(
                registry.get_version(band.id, PhyVersion::V1_0).is_ok(),
                band.supports_version(PhyVersion::V1_0)
            );
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn global_registry_is_shared() {
        let first = BandRegistry::global().unwrap();
        let second = BandRegistry::global().unwrap();
        assert!(core::ptr::eq(first, second));
    }
}
