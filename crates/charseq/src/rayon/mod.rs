//! # Rayon Parallelism

mod parallel_translator;

pub use parallel_translator::ParallelRayonTranslator;
