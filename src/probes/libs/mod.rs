//! Probes for individual vendor libraries.
//!
//! One module per library. The standard set mirrors what a ROCm package
//! installation must provide; the extended set covers optional packages
//! and only runs when asked for.

pub mod hip;
pub mod hipblas;
pub mod hipfft;
pub mod hipsolver;
pub mod hipsparse;
pub mod hsa;
pub mod miopen;
pub mod rccl;
pub mod rocblas;
pub mod rocfft;
pub mod rocrand;
pub mod rocsolver;
pub mod rocsparse;

pub use hip::HipProbe;
pub use hipblas::HipblasProbe;
pub use hipfft::HipfftProbe;
pub use hipsolver::HipsolverProbe;
pub use hipsparse::HipsparseProbe;
pub use hsa::HsaProbe;
pub use miopen::MiopenProbe;
pub use rccl::RcclProbe;
pub use rocblas::RocblasProbe;
pub use rocfft::RocfftProbe;
pub use rocrand::RocrandProbe;
pub use rocsolver::RocsolverProbe;
pub use rocsparse::RocsparseProbe;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::Probe;

    fn all() -> Vec<Box<dyn Probe>> {
        vec![
            Box::new(HipProbe),
            Box::new(HsaProbe),
            Box::new(RocblasProbe),
            Box::new(HipblasProbe),
            Box::new(RocfftProbe),
            Box::new(RocrandProbe),
            Box::new(RocsparseProbe),
            Box::new(RocsolverProbe),
            Box::new(HipfftProbe),
            Box::new(HipsparseProbe),
            Box::new(HipsolverProbe),
            Box::new(MiopenProbe),
            Box::new(RcclProbe),
        ]
    }

    #[test]
    fn every_probe_names_a_library() {
        for probe in all() {
            assert!(!probe.libraries().is_empty(), "{} has no library", probe.id());
        }
    }

    #[test]
    fn labels_match_primary_library_names() {
        for probe in all() {
            assert_eq!(probe.label(), probe.libraries()[0].name);
        }
    }

    #[test]
    fn ids_are_lowercase_and_unique() {
        let probes = all();
        let mut ids: Vec<&str> = probes.iter().map(|p| p.id()).collect();
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_lowercase())));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), probes.len());
    }

    #[test]
    fn rocsolver_also_needs_rocblas() {
        let names: Vec<&str> = RocsolverProbe.libraries().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["rocSOLVER", "rocBLAS"]);
    }

    #[test]
    fn wrong_library_count_records_failure_under_label() {
        for probe in all() {
            let mut results = crate::results::TestResults::new();
            probe.run(&[], &mut results);

            assert_eq!(results.total(), 1, "{}", probe.id());
            assert_eq!(results.failed(), 1);
            let outcome = &results.outcomes()[0];
            assert_eq!(outcome.name(), probe.label());
            assert!(outcome
                .message()
                .is_some_and(|m| m.ends_with("loaded libraries, got 0")));
        }
    }
}
