//! Header generation driver.
//!
//! Validates the configuration once, then renders each requested artifact.
//! Artifacts are independent, so a full run renders them in parallel.

use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::factory_map::{self, MapFragments};
use crate::functor;
use crate::skeleton::{self, SkeletonFragments};
use crate::GenError;

/// One rendered header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub artifact: Artifact,
    /// File name relative to the output directory.
    pub file_name: &'static str,
    /// Complete header text.
    pub code: String,
}

/// Renders headers for a validated configuration.
#[derive(Clone, Debug)]
pub struct HeaderGenerator {
    config: GeneratorConfig,
}

impl HeaderGenerator {
    /// Create a generator, rejecting invalid configurations up front.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(HeaderGenerator { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render every artifact, in [`Artifact::ALL`] order.
    pub fn generate(&self) -> Vec<GeneratedHeader> {
        self.generate_only(&Artifact::ALL)
    }

    /// Render the given artifacts, in the order given.
    pub fn generate_only(&self, artifacts: &[Artifact]) -> Vec<GeneratedHeader> {
        let _span = info_span!("generate", max_params = self.config.max_params).entered();
        artifacts
            .par_iter()
            .map(|&artifact| self.generate_artifact(artifact))
            .collect()
    }

    /// Render a single artifact.
    pub fn generate_artifact(&self, artifact: Artifact) -> GeneratedHeader {
        let config = &self.config;
        let code = if let Some(fragments) = SkeletonFragments::for_artifact(artifact) {
            skeleton::render_header(config, artifact, fragments)
        } else if let Some(fragments) = MapFragments::for_artifact(artifact) {
            factory_map::render_header(config, artifact, fragments)
        } else {
            functor::render_header(config)
        };
        debug!(
            %artifact,
            file = artifact.file_name(),
            bytes = code.len(),
            "rendered header"
        );
        GeneratedHeader {
            artifact,
            file_name: artifact.file_name(),
            code,
        }
    }
}
