use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to the identity claims of the current user.
pub trait ClaimsSource {
    /// Returns the value of the first claim of `claim_type`, if any.
    fn claim(&self, claim_type: &str) -> Option<&str>;

    /// Tries `candidates` in order and returns the first claim that is present, even if its
    /// value is empty.
    fn preferred_claim(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|claim_type| self.claim(claim_type))
    }
}

/// A single identity claim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

/// Ordered claims of an authenticated principal.
///
/// Deserializes either from a list of `{ "type": ..., "value": ... }` objects or from a plain
/// `{ "type": "value" }` map.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ClaimsRepr")]
pub struct Claims {
    entries: Vec<Claim>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClaimsRepr {
    List(Vec<Claim>),
    Map(BTreeMap<String, String>),
}

impl From<ClaimsRepr> for Claims {
    fn from(repr: ClaimsRepr) -> Self {
        match repr {
            ClaimsRepr::List(entries) => Self { entries },
            ClaimsRepr::Map(map) => map.into_iter().collect(),
        }
    }
}

impl Claims {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a claim, builder style.
    #[must_use]
    pub fn with(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(claim_type, value);
        self
    }

    pub fn push(&mut self, claim_type: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Claim { claim_type: claim_type.into(), value: value.into() });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Claims
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut claims = Self::new();
        for (claim_type, value) in iter {
            claims.push(claim_type, value);
        }
        claims
    }
}

impl ClaimsSource for Claims {
    fn claim(&self, claim_type: &str) -> Option<&str> {
        self.entries.iter().find(|c| c.claim_type == claim_type).map(|c| c.value.as_str())
    }
}

impl<S: BuildHasher> ClaimsSource for HashMap<String, String, S> {
    fn claim(&self, claim_type: &str) -> Option<&str> {
        self.get(claim_type).map(String::as_str)
    }
}

impl ClaimsSource for BTreeMap<String, String> {
    fn claim(&self, claim_type: &str) -> Option<&str> {
        self.get(claim_type).map(String::as_str)
    }
}
