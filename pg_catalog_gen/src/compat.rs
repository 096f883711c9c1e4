//! Deterministic ordering of generated functions, plus the compatibility overrides layered on top of it
//!
//! Downstream overload resolution is positional: when several signatures of a function match, the first one listed
//! wins. The base order below makes output independent of catalog scan order. The override and exclusion tables pin
//! a handful of functions to the positions existing regression tests were written against. They are data, scoped to
//! one schema or extension each, and looked up separately from the sort.

use super::sql_tree::Proc;

/// Where a rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
	Schema(&'a str),
	Extension(&'a str),
}

/// Moves one exact signature ahead of the other overloads sharing its name
#[derive(Debug, Clone, Copy)]
pub struct OverrideRule {
	pub scope: Scope<'static>,
	pub name: &'static str,
	pub arg_types: &'static [&'static str],
	/// higher sorts first among overloads of `name`, unmatched overloads have priority 0
	pub priority: u32,
}

/// Drops a function from the output of one scope
#[derive(Debug, Clone, Copy)]
pub struct Exclusion {
	pub scope: Scope<'static>,
	pub name: &'static str,
}

pub const OVERRIDES: &[OverrideRule] = &[
	OverrideRule {
		scope: Scope::Schema("pg_catalog"),
		name: "lower",
		arg_types: &["text"],
		priority: 1,
	},
	OverrideRule {
		scope: Scope::Schema("pg_catalog"),
		name: "generate_series",
		arg_types: &["numeric", "numeric"],
		priority: 1,
	},
	OverrideRule {
		scope: Scope::Extension("pgcrypto"),
		name: "digest",
		arg_types: &["text", "text"],
		priority: 1,
	},
];

pub const EXCLUSIONS: &[Exclusion] = &[Exclusion {
	scope: Scope::Schema("pg_catalog"),
	name: "concat",
}];

impl OverrideRule {
	pub fn matches(&self, scope: Scope, proc: &Proc) -> bool {
		self.scope == scope && self.name == proc.name && proc.arg_types().eq(self.arg_types.iter().copied())
	}
}

pub fn priority_of(rules: &[OverrideRule], scope: Scope, proc: &Proc) -> u32 {
	rules
		.iter()
		.filter(|r| r.matches(scope, proc))
		.map(|r| r.priority)
		.max()
		.unwrap_or(0)
}

pub fn is_excluded(exclusions: &[Exclusion], scope: Scope, proc: &Proc) -> bool {
	exclusions.iter().any(|e| e.scope == scope && e.name == proc.name)
}

/// (name, return type, arg types, arg names, default names)
fn base_key(p: &Proc) -> (String, String, String, String, String) {
	(
		p.name.clone(),
		p.return_type.clone(),
		p.arg_types().collect::<Vec<_>>().join(","),
		p.arg_names().collect::<Vec<_>>().join(","),
		p.default_names.join(","),
	)
}

/// Orders and filters `procs` for `scope` using the built in rule tables
pub fn reconcile(scope: Scope, procs: Vec<Proc>) -> Vec<Proc> {
	reconcile_with(OVERRIDES, EXCLUSIONS, scope, procs)
}

pub fn reconcile_with(
	rules: &[OverrideRule],
	exclusions: &[Exclusion],
	scope: Scope,
	mut procs: Vec<Proc>,
) -> Vec<Proc> {
	procs.sort_by_cached_key(base_key);
	// stable, and the base order already groups by name, so only overload order within a name can change
	procs.sort_by_cached_key(|p| (p.name.clone(), std::cmp::Reverse(priority_of(rules, scope, p))));
	procs.retain(|p| !is_excluded(exclusions, scope, p));
	procs
}
