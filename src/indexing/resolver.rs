//! Cross-unit dependency resolution
//!
//! Turns raw call receivers and inheritance edges into class-name
//! dependencies. This is a textual heuristic, not symbol resolution: a
//! receiver is matched against the unit's imports, then against units of
//! the same package, and otherwise guessed by capitalizing its first letter.
//! It never fails; every reference produces some name.
//!
//! The pass needs the whole batch, so it runs after every file is parsed.
//! The name index is built once, read-only, and passed explicitly.

use crate::parsing::calls::SUPER_RECEIVER;
use crate::parsing::method_call::SELF_RECEIVER;
use crate::types::CompilationUnit;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

/// Read-only index from unit name to the packages declaring a unit of that name
#[derive(Debug, Default, Clone)]
pub struct UnitIndex {
    by_name: HashMap<String, Vec<Option<String>>>,
}

impl UnitIndex {
    pub fn build(units: &[CompilationUnit]) -> Self {
        let mut by_name: HashMap<String, Vec<Option<String>>> = HashMap::new();
        for unit in units {
            by_name
                .entry(unit.name.clone())
                .or_default()
                .push(unit.package.clone());
        }
        Self { by_name }
    }

    /// Whether a unit called `name` lives in `package` (`None` is the default package)
    pub fn contains_in_package(&self, name: &str, package: Option<&str>) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|packages| packages.iter().any(|p| p.as_deref() == package))
    }
}

/// Fill every unit's dependency set from the batch as a whole.
///
/// Replaces any previous result, so running it twice on the same batch
/// gives the same sets.
pub fn resolve_dependencies(units: &mut [CompilationUnit]) {
    let index = UnitIndex::build(units);

    let resolved: Vec<BTreeSet<String>> = units
        .par_iter()
        .map(|unit| dependencies_of(unit, &index))
        .collect();

    for (unit, dependencies) in units.iter_mut().zip(resolved) {
        debug!(
            unit = %unit.name,
            count = dependencies.len(),
            "resolved dependencies"
        );
        unit.dependencies = dependencies;
    }
}

/// Dependencies of one unit: call targets, superclass and interfaces,
/// minus the unit itself
pub fn dependencies_of(unit: &CompilationUnit, index: &UnitIndex) -> BTreeSet<String> {
    let mut dependencies: BTreeSet<String> = unit
        .methods
        .iter()
        .flat_map(|method| &method.calls)
        .map(|call| resolve_target(call.receiver.as_deref(), unit, index))
        .collect();

    if let Some(superclass) = &unit.superclass {
        dependencies.insert(superclass.simple_name().to_string());
    }
    for interface in &unit.interfaces {
        dependencies.insert(interface.simple_name().to_string());
    }

    dependencies.remove(&unit.name);
    dependencies
}

/// Best-effort class name for a call receiver
///
/// - no receiver or `this`: the unit itself
/// - `super`: the declared superclass, or the unit itself
/// - an import whose last segment matches case-insensitively: that segment
/// - a unit of the same package named like the capitalized receiver
/// - otherwise the receiver with its first letter capitalized
pub fn resolve_target(receiver: Option<&str>, unit: &CompilationUnit, index: &UnitIndex) -> String {
    let Some(reference) = receiver.filter(|r| *r != SELF_RECEIVER) else {
        return unit.name.clone();
    };

    if reference == SUPER_RECEIVER {
        return unit
            .superclass
            .as_ref()
            .map_or_else(|| unit.name.clone(), |s| s.simple_name().to_string());
    }

    if let Some(segment) = unit
        .imports
        .iter()
        .filter_map(|import| import.rsplit('.').next())
        .find(|segment| segment.eq_ignore_ascii_case(reference))
    {
        return segment.to_string();
    }

    let capitalized = capitalize(reference);
    if !index.contains_in_package(&capitalized, unit.package.as_deref()) {
        trace!(
            unit = %unit.name,
            receiver = reference,
            guess = %capitalized,
            "receiver not found in imports or package, using capitalized guess"
        );
    }
    capitalized
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
