//! Installation request dispatcher
//!
//! Turns one [`InstallRequest`] into an ordered sequence of engine calls:
//! security pre-filter, local-file exclusivity check, module tier, file
//! intake, classic groups, packages, then one finalization over everything
//! the phases could not resolve.
//!
//! "Not found" outcomes are collected per phase and only escalate at
//! finalization under strict policy, so one bad target never prevents a
//! later phase from running. Invalid combinations of request shapes are
//! usage errors and escalate immediately instead.

use crate::engine::{Engine, EngineError, FileOutcome};
use crate::error::{Result, RpkgError};
use crate::nevra::NevraForm;
use crate::output;
use crate::request::{InstallRequest, Policy};

/// Unresolved targets accumulated across phases. Append-only during a run,
/// consumed exactly once at finalization.
#[derive(Debug, Default)]
pub struct AggregatedResult {
    unmatched_specs: Vec<String>,
    unmatched_files: Vec<String>,
}

impl AggregatedResult {
    fn record_spec(&mut self, spec: &str) {
        if !self.unmatched_specs.iter().any(|s| s == spec) {
            self.unmatched_specs.push(spec.to_string());
        }
    }

    fn record_file(&mut self, target: &str) {
        if !self.unmatched_files.iter().any(|t| t == target) {
            self.unmatched_files.push(target.to_string());
        }
    }

    fn is_empty(&self) -> bool {
        self.unmatched_specs.is_empty() && self.unmatched_files.is_empty()
    }

    fn into_error(self) -> RpkgError {
        RpkgError::UnmatchedTargets {
            pkg_specs: self.unmatched_specs,
            filenames: self.unmatched_files,
        }
    }
}

/// Module-tier outcome for one group spec.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
enum GroupOutcome {
    /// The spec was satisfied by a module stream; classic groups never see it.
    SatisfiedByModule(String),
    /// No module took the spec; it falls through to classic group install.
    FallThrough(String),
}

/// Dispatch one install request against the engine.
pub fn dispatch<E: Engine>(request: &InstallRequest, engine: &mut E) -> Result<()> {
    let policy = &request.policy;
    let forms = request.nevra_forms();

    engine.apply_security_filter();

    check_local_exclusivity(request, policy)?;
    let group_outcomes = resolve_module_tier(request, engine, policy)?;

    let mut aggregated = AggregatedResult::default();
    install_files_phase(request, engine, policy, &forms, &mut aggregated)?;
    install_groups_phase(request, engine, policy, &forms, &group_outcomes)?;
    install_packages_phase(request, engine, policy, &forms, &mut aggregated)?;

    finalize(aggregated, policy)
}

/// A `localinstall` request only accepts rpm file paths.
fn check_local_exclusivity(request: &InstallRequest, policy: &Policy) -> Result<()> {
    if !request.command.is_local()
        || (request.pkg_specs.is_empty() && request.grp_specs.is_empty())
    {
        return Ok(());
    }
    for spec in &request.pkg_specs {
        output::info(format!(
            "Not a valid rpm file path: {}",
            output::bold(spec)
        ));
    }
    for group in &request.grp_specs {
        output::info(format!(
            "Not a valid rpm file path: {}",
            output::bold(&format!("@{}", group))
        ));
    }
    if policy.strict {
        return Err(RpkgError::NothingToDo);
    }
    Ok(())
}

/// Try each group spec against the module layer first.
///
/// `localinstall` requests never enter the module tier; their group specs
/// stay untouched and are filtered out again by the group phase.
fn resolve_module_tier<E: Engine>(
    request: &InstallRequest,
    engine: &mut E,
    policy: &Policy,
) -> Result<Vec<GroupOutcome>> {
    if request.grp_specs.is_empty() || request.command.is_local() {
        return Ok(request
            .grp_specs
            .iter()
            .cloned()
            .map(GroupOutcome::FallThrough)
            .collect());
    }
    let skipped = engine.resolve_modules(&request.grp_specs, policy.assume_yes)?;
    Ok(request
        .grp_specs
        .iter()
        .map(|spec| {
            if skipped.iter().any(|s| s == spec) {
                GroupOutcome::FallThrough(spec.clone())
            } else {
                GroupOutcome::SatisfiedByModule(spec.clone())
            }
        })
        .collect())
}

/// Stage local rpm files.
///
/// File paths combined with an explicit NEVRA form are a usage conflict;
/// unmatched paths are collected, never raised mid-phase.
fn install_files_phase<E: Engine>(
    request: &InstallRequest,
    engine: &mut E,
    policy: &Policy,
    forms: &[NevraForm],
    aggregated: &mut AggregatedResult,
) -> Result<()> {
    if request.filenames.is_empty() {
        return Ok(());
    }
    if !forms.is_empty() {
        inform_not_a_valid_combination(&request.filenames);
        if policy.strict {
            return Err(RpkgError::NothingToDo);
        }
        return Ok(());
    }
    for outcome in engine.install_files(&request.filenames, policy.strict) {
        match outcome {
            FileOutcome::Staged { .. } => {}
            FileOutcome::Unmatched { target } => {
                output::info(format!(
                    "No match for argument: {}",
                    output::bold(&target)
                ));
                aggregated.record_file(&target);
            }
        }
    }
    Ok(())
}

/// Stage classic groups for the specs the module tier let fall through.
fn install_groups_phase<E: Engine>(
    request: &InstallRequest,
    engine: &mut E,
    policy: &Policy,
    forms: &[NevraForm],
    outcomes: &[GroupOutcome],
) -> Result<()> {
    let fall_through: Vec<String> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            GroupOutcome::FallThrough(spec) => Some(spec.clone()),
            GroupOutcome::SatisfiedByModule(_) => None,
        })
        .collect();
    if fall_through.is_empty() {
        return Ok(());
    }
    if !forms.is_empty() {
        inform_not_a_valid_combination(&fall_through);
        if policy.strict {
            return Err(RpkgError::NothingToDo);
        }
        return Ok(());
    }
    if request.command.is_local() {
        return Ok(());
    }
    match engine.install_groups(&fall_through, &policy.group_package_types, policy.strict) {
        Ok(()) => Ok(()),
        Err(EngineError::Group { message }) => {
            if policy.strict {
                Err(RpkgError::GroupResolution { message })
            } else {
                output::warning(message);
                Ok(())
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// Stage every package spec.
///
/// A "no match" is logged with a spelling hint and collected; any other
/// engine failure aborts the run.
fn install_packages_phase<E: Engine>(
    request: &InstallRequest,
    engine: &mut E,
    policy: &Policy,
    forms: &[NevraForm],
    aggregated: &mut AggregatedResult,
) -> Result<()> {
    if request.command.is_local() {
        return Ok(());
    }
    for spec in &request.pkg_specs {
        match engine.install_package(spec, policy.strict, forms) {
            Ok(()) => {}
            Err(EngineError::NoMatch { .. }) => {
                output::info(format!("No package {} available.", output::bold(spec)));
                if let Some(hint) = engine.suggest_case_insensitive(spec) {
                    output::info(format!("  * Maybe you meant: {}", hint));
                }
                aggregated.record_spec(spec);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Escalate collected unresolved targets under strict policy.
fn finalize(aggregated: AggregatedResult, policy: &Policy) -> Result<()> {
    if !aggregated.is_empty() && policy.strict {
        return Err(aggregated.into_error());
    }
    Ok(())
}

fn inform_not_a_valid_combination(specs: &[String]) {
    for spec in specs {
        output::warning(format!("Not a valid form: {}", output::bold(spec)));
    }
}
