//! Edit/play mode and the teacher access gate.

use serde::{Deserialize, Serialize};

/// Global interaction mode. Play is the default; edit unlocks every
/// authoring affordance and changes what a drop means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Play,
    Edit,
}

/// Credential check guarding the switch into edit mode. Pluggable so the
/// host decides where the secret lives and how it is compared.
pub trait AccessGate {
    fn verify(&self, secret: &str) -> bool;
}

/// Gate backed by a single shared secret configured by the host page.
#[derive(Clone)]
pub struct SharedSecretGate {
    secret: String,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AccessGate for SharedSecretGate {
    fn verify(&self, secret: &str) -> bool {
        self.secret == secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_gate_compares_exactly() {
        let gate = SharedSecretGate::new("maestra123");
        assert!(gate.verify("maestra123"));
        assert!(!gate.verify("maestra12"));
        assert!(!gate.verify(""));
    }
}
