use super::Schema;

/// Constructor of one generated schema
pub type SchemaFn = fn() -> Schema;

/// Maps an extension name to the generated function that builds its catalog
///
/// Generated `extension.rs` files hold one of these in a `static`. Lookup is an exact string match; no case folding
/// and no `-`/`_` normalisation, the key is the name the extension was created with.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionRegistry {
	entries: &'static [(&'static str, SchemaFn)],
}

impl ExtensionRegistry {
	pub const fn new(entries: &'static [(&'static str, SchemaFn)]) -> ExtensionRegistry {
		ExtensionRegistry { entries }
	}

	/// Builds the catalog for `name`, `None` if no such extension was generated
	pub fn load(&self, name: &str) -> Option<Schema> {
		self.entries
			.iter()
			.find(|(key, _)| *key == name)
			.map(|(_, ctor)| ctor())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|(key, _)| *key == name)
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> {
		self.entries.iter().map(|(key, _)| *key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Function, TypeName};
	use pretty_assertions::assert_eq;

	fn uuid_ossp() -> Schema {
		let mut s = Schema::new("pg_catalog");
		s.funcs.push(Function {
			name: "uuid_generate_v4".to_string(),
			args: Vec::new(),
			return_type: TypeName::new("uuid"),
		});
		s
	}

	fn pgcrypto() -> Schema {
		let mut s = Schema::new("pg_catalog");
		s.funcs.push(Function {
			name: "gen_random_uuid".to_string(),
			args: Vec::new(),
			return_type: TypeName::new("uuid"),
		});
		s
	}

	static REGISTRY: ExtensionRegistry = ExtensionRegistry::new(&[("pgcrypto", pgcrypto), ("uuid-ossp", uuid_ossp)]);

	#[test]
	fn load_returns_matching_constructor() {
		let s = REGISTRY.load("uuid-ossp").unwrap();
		assert_eq!(s.funcs[0].name, "uuid_generate_v4");
		let s = REGISTRY.load("pgcrypto").unwrap();
		assert_eq!(s.funcs[0].name, "gen_random_uuid");
	}

	#[test]
	fn lookup_is_exact() {
		assert!(REGISTRY.load("uuid_ossp").is_none());
		assert!(REGISTRY.load("PGCRYPTO").is_none());
		assert!(REGISTRY.load("").is_none());
		assert!(!REGISTRY.contains("hstore"));
	}

	#[test]
	fn names_in_registration_order() {
		assert_eq!(REGISTRY.names().collect::<Vec<_>>(), vec!["pgcrypto", "uuid-ossp"]);
		assert_eq!(REGISTRY.len(), 2);
		assert!(ExtensionRegistry::new(&[]).is_empty());
	}
}
