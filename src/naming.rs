//! Codename generation for new projects.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::constants::PREFIXES;

/// A generated `PREFIX-TYPE-DOMAIN` project name.
///
/// All three components are upper-cased on construction, whatever casing
/// they arrive in. `Display` yields the hyphen-joined identifier; [`slug`]
/// yields the lower-cased form used for directory and repository names.
///
/// [`slug`]: ProjectName::slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    prefix: String,
    type_tag: String,
    domain: String,
}

impl ProjectName {
    pub fn new(prefix: &str, type_tag: &str, domain: &str) -> Self {
        Self {
            prefix: prefix.to_uppercase(),
            type_tag: type_tag.to_uppercase(),
            domain: domain.to_uppercase(),
        }
    }

    /// Lower-cased identifier, e.g. `ares-lab-api`.
    pub fn slug(&self) -> String {
        self.to_string().to_lowercase()
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.prefix, self.type_tag, self.domain)
    }
}

/// Picks a codename prefix uniformly from the fixed candidate list.
///
/// The RNG is a parameter so callers can seed it in tests; there is no
/// uniqueness check against previously created projects.
pub fn random_prefix<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PREFIXES.choose(rng).copied().unwrap_or(PREFIXES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn identifier_is_uppercase_hyphen_joined() {
        let name = ProjectName::new("ares", "Lab", "aPi");
        assert_eq!(name.to_string(), "ARES-LAB-API");
        assert_eq!(name.slug(), "ares-lab-api");
        assert_eq!(name.type_tag(), "LAB");
        assert_eq!(name.domain(), "API");
    }

    #[test]
    fn casing_of_inputs_does_not_matter() {
        let lower = ProjectName::new("hydra", "ops", "auth");
        let upper = ProjectName::new("HYDRA", "OPS", "AUTH");
        assert_eq!(lower, upper);
    }

    #[test]
    fn random_prefix_comes_from_candidate_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let prefix = random_prefix(&mut rng);
            assert!(PREFIXES.contains(&prefix));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = random_prefix(&mut StdRng::seed_from_u64(42));
        let b = random_prefix(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
