//! The fixed set of generated artifacts.

use std::fmt;

/// One generated header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    /// Object factories.
    Factory,
    /// Factories whose products adjust a shared live-object counter.
    CountedFactory,
    /// Function-pointer wrappers and the shared-library handle.
    SharedLibrary,
    /// Type-indexed map of factory containers.
    FactoryMap,
    /// Type-indexed map of counted factory containers.
    CountedFactoryMap,
}

impl Artifact {
    /// Every artifact, in generation order.
    pub const ALL: [Artifact; 5] = [
        Artifact::Factory,
        Artifact::CountedFactory,
        Artifact::SharedLibrary,
        Artifact::FactoryMap,
        Artifact::CountedFactoryMap,
    ];

    /// Header file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Factory => "factory.hpp",
            Artifact::CountedFactory => "counted_factory.hpp",
            Artifact::SharedLibrary => "shared_library.hpp",
            Artifact::FactoryMap => "factory_map.hpp",
            Artifact::CountedFactoryMap => "counted_factory_map.hpp",
        }
    }

    /// Include-guard stem, appended to the configured guard prefix.
    ///
    /// The shared-library header keeps its historical `LINKED_LIBRARY` guard.
    pub fn guard_stem(self) -> &'static str {
        match self {
            Artifact::Factory => "FACTORY_HPP",
            Artifact::CountedFactory => "COUNTED_FACTORY_HPP",
            Artifact::SharedLibrary => "LINKED_LIBRARY_HPP",
            Artifact::FactoryMap => "FACTORY_MAP_HPP",
            Artifact::CountedFactoryMap => "COUNTED_FACTORY_MAP_HPP",
        }
    }

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Artifact::Factory => "factory",
            Artifact::CountedFactory => "counted-factory",
            Artifact::SharedLibrary => "shared-library",
            Artifact::FactoryMap => "factory-map",
            Artifact::CountedFactoryMap => "counted-factory-map",
        }
    }

    /// Look up an artifact by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|artifact| artifact.name() == name)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
