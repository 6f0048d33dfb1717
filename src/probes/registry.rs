//! The ordered set of probes.
//!
//! The standard sequence is fixed: HIP, HSA, rocBLAS, hipBLAS, rocFFT,
//! rocRAND, rocSPARSE, rocSOLVER. Extended probes follow it and are only
//! included on request.

use crate::config::ProbeSelection;
use crate::error::{Result, SmokeError};

use super::libs::{
    HipProbe, HipblasProbe, HipfftProbe, HipsolverProbe, HipsparseProbe, HsaProbe, MiopenProbe,
    RcclProbe, RocblasProbe, RocfftProbe, RocrandProbe, RocsolverProbe, RocsparseProbe,
};
use super::Probe;

/// Probes every ROCm installation is expected to pass.
pub fn standard_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(HipProbe),
        Box::new(HsaProbe),
        Box::new(RocblasProbe),
        Box::new(HipblasProbe),
        Box::new(RocfftProbe),
        Box::new(RocrandProbe),
        Box::new(RocsparseProbe),
        Box::new(RocsolverProbe),
    ]
}

/// Probes for optional packages.
pub fn extended_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(HipfftProbe),
        Box::new(HipsparseProbe),
        Box::new(HipsolverProbe),
        Box::new(MiopenProbe),
        Box::new(RcclProbe),
    ]
}

/// An ordered list of probes.
pub struct ProbeRegistry {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRegistry {
    /// The standard probe sequence.
    pub fn standard() -> Self {
        Self::from_probes(standard_probes())
    }

    /// Only the extended probes.
    pub fn extended() -> Self {
        Self::from_probes(extended_probes())
    }

    /// The standard sequence followed by the extended probes.
    pub fn all() -> Self {
        let mut probes = standard_probes();
        probes.extend(extended_probes());
        Self::from_probes(probes)
    }

    /// A registry over an explicit list of probes.
    pub fn from_probes(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    /// Build the registry for a run.
    ///
    /// Every name in `only` and `skip` must be a known probe id. Extended
    /// probes are included when `extended` is set or when `only` names
    /// probes explicitly.
    pub fn for_selection(selection: &ProbeSelection) -> Result<Self> {
        let registry = if selection.extended || !selection.only.is_empty() {
            Self::all()
        } else {
            Self::standard()
        };
        registry.select(&selection.only, &selection.skip)
    }

    /// Keep the probes named by `only` (all if empty) minus those in `skip`.
    ///
    /// Registry order is preserved regardless of the order of the names.
    pub fn select(self, only: &[String], skip: &[String]) -> Result<Self> {
        let known = Self::all().ids();
        let only = normalize(only, &known)?;
        let skip = normalize(skip, &known)?;

        let probes = self
            .probes
            .into_iter()
            .filter(|p| only.is_empty() || only.contains(&p.id()))
            .filter(|p| !skip.contains(&p.id()))
            .collect();
        Ok(Self { probes })
    }

    /// The probes in execution order.
    pub fn probes(&self) -> &[Box<dyn Probe>] {
        &self.probes
    }

    /// Probe ids in execution order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.id()).collect()
    }

    /// Number of probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether the registry has no probes.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

/// Check names against `known` and map them to the canonical ids.
fn normalize(names: &[String], known: &[&'static str]) -> Result<Vec<&'static str>> {
    names
        .iter()
        .map(|name| {
            let wanted = name.trim().to_lowercase();
            known
                .iter()
                .copied()
                .find(|id| *id == wanted)
                .ok_or_else(|| SmokeError::UnknownProbe {
                    name: name.clone(),
                    available: known.join(", "),
                })
        })
        .collect()
}
