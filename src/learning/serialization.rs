//! Serialization support for learning agents.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::learning::agent::{AgentSnapshot, LearningAgent};

/// Versioned on-disk snapshot of a [`LearningAgent`].
///
/// Persists the learned table, parameters, decay schedule, action set, and
/// RNG seed as MessagePack. The snapshot captures the agent, not session
/// metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAgent {
    pub version: u32,
    state: AgentSnapshot,
}

impl SavedAgent {
    pub const VERSION: u32 = 1;

    /// Capture the agent's current state.
    pub fn from_agent(agent: &LearningAgent) -> Self {
        Self {
            version: Self::VERSION,
            state: agent.export_state(),
        }
    }

    /// Reconstruct the agent from the snapshot.
    ///
    /// A fresh RNG is built from the stored seed; an unseeded agent comes
    /// back with a new nondeterministic RNG.
    pub fn to_agent(&self) -> Result<LearningAgent> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported agent save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }
        Ok(LearningAgent::from_snapshot(self.state.clone())?)
    }

    /// Write the snapshot to a file as MessagePack.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize agent")?;

        Ok(())
    }

    /// Read a snapshot back from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize agent")
    }
}
