//! Record id generation.
//!
//! Ids are opaque strings. Uniqueness is guaranteed per collection for the
//! lifetime of a store: the generator never mints the same sequential id
//! twice, and [`IdGenerator::next_unused`] skips any candidate the
//! collection already holds (seeded records, random collisions).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How fresh ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// `<prefix><n>` with `n` counting up from 1.
    #[default]
    Sequential,
    /// `<prefix><random v4 uuid>`.
    Uuid,
}

/// Mints ids for one collection.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    scheme: IdScheme,
    prefix: String,
    /// Next sequential number; `None` once the counter has passed `u64::MAX`.
    next: Option<u64>,
}

impl IdGenerator {
    #[must_use]
    pub fn new(scheme: IdScheme, prefix: impl Into<String>) -> Self {
        Self {
            scheme,
            prefix: prefix.into(),
            next: Some(1),
        }
    }

    /// Record an id that already exists so the counter moves past it.
    ///
    /// Ids that do not look like `<prefix><n>` are ignored; `next_unused`
    /// still guards against them.
    pub fn observe(&mut self, id: &str) {
        let Some(n) = id
            .strip_prefix(self.prefix.as_str())
            .and_then(|digits| digits.parse::<u64>().ok())
        else {
            return;
        };
        self.next = match (self.next, n.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }

    /// Mint ids until one is not `taken`.
    ///
    /// Sequential candidates strictly increase and fall back to uuids once
    /// the counter is spent, so a finite `taken` set always ends the loop.
    pub fn next_unused(&mut self, mut taken: impl FnMut(&str) -> bool) -> String {
        loop {
            let candidate = self.mint();
            if !taken(&candidate) {
                return candidate;
            }
            tracing::trace!(%candidate, "id already in use, minting another");
        }
    }

    fn mint(&mut self) -> String {
        match self.scheme {
            IdScheme::Sequential => match self.next {
                Some(n) => {
                    self.next = n.checked_add(1);
                    format!("{}{n}", self.prefix)
                }
                None => {
                    tracing::warn!(
                        prefix = %self.prefix,
                        "sequential ids exhausted, minting a uuid"
                    );
                    self.random()
                }
            },
            IdScheme::Uuid => self.random(),
        }
    }

    fn random(&self) -> String {
        format!("{}{}", self.prefix, Uuid::new_v4())
    }
}
