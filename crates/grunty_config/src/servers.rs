//! Server rule registry.

use grunty_search::{ClassificationRule, NOBLE, TraitVector};
use indexmap::IndexMap;

/// Registry of classification rules keyed by lowercase server name.
///
/// Lookups are case-insensitive. Registration order is preserved so listings
/// and error messages are stable.
///
/// ```
/// use grunty_config::ServerRegistry;
///
/// let servers = ServerRegistry::builtin();
/// let theta = servers.get("Theta").expect("theta is built in");
/// assert_eq!(theta.primary, "iron");
/// assert_eq!(theta.size_threshold, 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServerRegistry {
    rules: IndexMap<String, ClassificationRule>,
}

impl ServerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four servers the game ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "theta",
            ClassificationRule::new(TraitVector::new(0, -5, 10, 5, -5), "iron", "poison")
                .with_size_threshold(30),
        );
        registry.register(
            "lamda",
            ClassificationRule::new(TraitVector::new(10, 0, 5, 5, -5), "bony", "snakey"),
        );
        registry.register(
            "sigma",
            ClassificationRule::new(TraitVector::new(5, 5, -5, 10, 0), "aqua", "milky"),
        );
        registry.register(
            "omega",
            ClassificationRule::new(TraitVector::new(0, 5, -5, 5, 10), "rocker", "woody"),
        );
        registry
    }

    /// Registers a server rule.
    ///
    /// # Panics
    ///
    /// Panics if a server with the same name is already registered.
    pub fn register(&mut self, name: impl AsRef<str>, rule: ClassificationRule) {
        let name = name.as_ref().to_lowercase();
        assert!(
            !self.rules.contains_key(&name),
            "server '{name}' is already registered"
        );
        self.rules.insert(name, rule);
    }

    /// Looks up a server by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&ClassificationRule> {
        self.rules.get(&name.as_ref().to_lowercase())
    }

    /// Registered server names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Every label some server can produce, `"noble"` last.
    #[must_use]
    pub fn known_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::with_capacity(self.rules.len() * 2 + 1);
        labels.extend(self.rules.values().map(|rule| rule.primary.as_str()));
        labels.extend(self.rules.values().map(|rule| rule.secondary.as_str()));
        labels.push(NOBLE);
        labels
    }

    /// Returns `true` if any registered server can produce `label`.
    #[must_use]
    pub fn is_known_label(&self, label: &str) -> bool {
        self.known_labels().contains(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_servers_in_order() {
        let servers = ServerRegistry::builtin();
        let names: Vec<_> = servers.names().collect();
        assert_eq!(names, ["theta", "lamda", "sigma", "omega"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let servers = ServerRegistry::builtin();
        assert_eq!(servers.get("OMEGA"), servers.get("omega"));
        assert!(servers.get("delta").is_none());
    }

    #[test]
    fn only_theta_overrides_size() {
        let servers = ServerRegistry::builtin();
        for name in ["lamda", "sigma", "omega"] {
            let rule = servers.get(name).expect("builtin server");
            assert_eq!(rule.size_threshold, 40, "{name}");
            assert_eq!(rule.range, 20, "{name}");
        }
    }

    #[test]
    fn known_labels_cover_every_server() {
        let servers = ServerRegistry::builtin();
        assert_eq!(
            servers.known_labels(),
            [
                "iron", "bony", "aqua", "rocker", "poison", "snakey", "milky", "woody", "noble"
            ]
        );
        assert!(servers.is_known_label("woody"));
        assert!(!servers.is_known_label("Woody"));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let mut servers = ServerRegistry::builtin();
        servers.register("Theta", ClassificationRule::new(TraitVector::ZERO, "a", "b"));
    }
}
