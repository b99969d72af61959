//! Dataset loading: one CSV read at startup, immutable afterwards.
//!
//! A read or parse failure is fatal; the chart is never constructed from a
//! partially loaded dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::core::Observation;
use crate::error::{ChartError, ChartResult};

/// Ordered, immutable collection of observations plus an abbr lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
    by_abbr: IndexMap<String, usize>,
}

impl Dataset {
    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            observations = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader(reader: impl Read) -> ChartResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

        let mut observations = Vec::new();
        for record in csv_reader.deserialize() {
            let observation: Observation = record?;
            observations.push(observation);
        }

        Self::from_observations(observations)
    }

    pub fn from_observations(observations: Vec<Observation>) -> ChartResult<Self> {
        if observations.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let mut by_abbr = IndexMap::with_capacity(observations.len());
        for (index, observation) in observations.iter().enumerate() {
            observation.validate()?;
            if by_abbr.insert(observation.abbr.clone(), index).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate observation abbr `{}`",
                    observation.abbr
                )));
            }
        }

        Ok(Self {
            observations,
            by_abbr,
        })
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// Looks up an observation's index by its region abbreviation.
    #[must_use]
    pub fn index_of_abbr(&self, abbr: &str) -> Option<usize> {
        self.by_abbr.get(abbr).copied()
    }
}
