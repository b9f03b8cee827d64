//! Name → [`ParameterSpec`] lookup, one registry per section.
//!
//! Registries are built once and never mutated. A [`RegistrySet`] owns all of
//! them and is shared behind an `Arc` between the encode and decode paths, so
//! any number of threads can read it without locking.

use crate::error::{Error, Result};
use crate::params::Section;
use crate::spec::ParameterSpec;
use crate::tags::{AreaTag, ToneTag};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Parameter table for one section.
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    section: Section,
    /// Sorted by address offset
    specs: Vec<ParameterSpec>,
    index: HashMap<String, usize>,
}

impl ParameterRegistry {
    /// Build the lookup table. Specs that fail validation are skipped with a warning.
    pub fn build(section: Section, section_specs: &[ParameterSpec]) -> Self {
        let mut specs: Vec<ParameterSpec> = section_specs
            .iter()
            .filter(|spec| match spec.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping {} parameter: {}", section, e);
                    false
                }
            })
            .cloned()
            .collect();
        specs.sort_by_key(|spec| spec.address_offset);

        let mut index = HashMap::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            if index.insert(spec.name.to_string(), i).is_some() {
                warn!("Duplicate {} parameter name: {}", section, spec.name);
            }
        }

        debug!("Built {} registry: {} parameters", section, specs.len());

        Self {
            section,
            specs,
            index,
        }
    }

    /// Union of several registries. Later registries win on name clashes.
    pub fn merge(section: Section, registries: &[&ParameterRegistry]) -> Self {
        let specs: Vec<ParameterSpec> = registries
            .iter()
            .flat_map(|registry| registry.specs.iter().cloned())
            .collect();
        Self::build(section, &specs)
    }

    #[inline]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Look up a parameter by name. `None` means "not supported here", not an error.
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<&ParameterSpec> {
        self.index.get(name).map(|&i| &self.specs[i])
    }

    /// Like [`resolve`](Self::resolve), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<&ParameterSpec> {
        self.resolve(name)
            .ok_or_else(|| Error::UnknownParameter(format!("{} in {}", name, self.section)))
    }

    /// Specs in address order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.specs.iter()
    }

    /// Parameters that skip reserved raw values.
    pub fn skip_switches(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.specs.iter().filter(|spec| spec.value_map.is_some())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Every section registry, built once.
#[derive(Debug, Clone)]
pub struct RegistrySet {
    registries: HashMap<Section, ParameterRegistry>,
}

impl RegistrySet {
    /// Build every section table plus the merged effects registry.
    pub fn new() -> Self {
        let mut registries: HashMap<Section, ParameterRegistry> = Section::ALL
            .iter()
            .map(|&section| (section, ParameterRegistry::build(section, &section.specs())))
            .collect();

        let effects = ParameterRegistry::merge(
            Section::Effects,
            &[
                &registries[&Section::Effect1],
                &registries[&Section::Effect2],
                &registries[&Section::Delay],
                &registries[&Section::Reverb],
            ],
        );
        registries.insert(Section::Effects, effects);

        Self { registries }
    }

    #[inline]
    pub fn get(&self, section: Section) -> Option<&ParameterRegistry> {
        self.registries.get(&section)
    }

    /// Registry holding the parameters of `tone` inside `area`.
    pub fn registry_for(&self, area: AreaTag, tone: ToneTag) -> Option<&ParameterRegistry> {
        section_for(area, tone).and_then(|section| self.get(section))
    }

    /// Resolve `name` inside the registry for `(area, tone)`.
    pub fn resolve(&self, area: AreaTag, tone: ToneTag, name: &str) -> Option<&ParameterSpec> {
        self.registry_for(area, tone)?.resolve(name)
    }

    /// Merged Effect 1/Effect 2/Delay/Reverb registry.
    pub fn effects(&self) -> Option<&ParameterRegistry> {
        self.get(Section::Effects)
    }
}

impl Default for RegistrySet {
    fn default() -> Self {
        Self::new()
    }
}

/// Which section table describes `tone` inside `area`.
pub fn section_for(area: AreaTag, tone: ToneTag) -> Option<Section> {
    use AreaTag as A;
    use ToneTag as T;

    match (area, tone) {
        (A::Digital1 | A::Digital2, T::Common) => Some(Section::DigitalCommon),
        (A::Digital1 | A::Digital2, T::Partial(1..=3)) => Some(Section::DigitalPartial),
        (A::Digital1 | A::Digital2, T::Modify) => Some(Section::DigitalModify),
        (A::Analog, T::Common) => Some(Section::Analog),
        (A::DrumKit, T::Common) => Some(Section::DrumCommon),
        (A::DrumKit, T::DrumPad(_)) => Some(Section::DrumPartial),
        (A::Program, T::Common) => Some(Section::ProgramCommon),
        (A::Program, T::VocalEffect) => Some(Section::VocalEffect),
        (A::Program, T::Effect1) => Some(Section::Effect1),
        (A::Program, T::Effect2) => Some(Section::Effect2),
        (A::Program, T::Delay) => Some(Section::Delay),
        (A::Program, T::Reverb) => Some(Section::Reverb),
        (A::System, T::Common) => Some(Section::SystemCommon),
        (A::System, T::Controller) => Some(Section::SystemController),
        _ => None,
    }
}
