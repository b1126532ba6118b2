use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use predprey_models::{Parameters, Population, Simulator, defaults};
use predprey_solvers::{optimization::grid_search::SearchRange, transient::rk4};
use serde::Deserialize;

/// Settings for both commands, read from TOML.
///
/// Every field is optional; anything left out keeps its built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub simulate: SimulateConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Reads a config file, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulateConfig {
    pub initial_state: Population,
    pub parameters: Parameters,
    pub step_size: f64,
    pub horizon: f64,
    pub output: PathBuf,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            initial_state: defaults::SIMULATE_INITIAL,
            parameters: defaults::SIMULATE_PARAMETERS,
            step_size: defaults::SIMULATE_STEP,
            horizon: defaults::SIMULATE_HORIZON,
            output: PathBuf::from(defaults::SIMULATE_OUTPUT),
        }
    }
}

impl SimulateConfig {
    pub fn simulator(&self) -> Result<Simulator> {
        simulator(self.initial_state, self.step_size, self.horizon)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub initial_state: Population,
    pub step_size: f64,
    pub horizon: f64,
    pub alpha_range: RangeConfig,
    pub beta_range: RangeConfig,
    pub delta_range: RangeConfig,
    pub eta_range: RangeConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let [alpha, beta, delta, eta] = defaults::SEARCH_RANGES.map(RangeConfig::from);
        Self {
            initial_state: defaults::SEARCH_INITIAL,
            step_size: defaults::SEARCH_STEP,
            horizon: defaults::SEARCH_HORIZON,
            alpha_range: alpha,
            beta_range: beta,
            delta_range: delta,
            eta_range: eta,
        }
    }
}

impl SearchConfig {
    pub fn simulator(&self) -> Result<Simulator> {
        simulator(self.initial_state, self.step_size, self.horizon)
    }

    /// Validates the ranges in `[alpha, beta, delta, eta]` order.
    pub fn ranges(&self) -> Result<[SearchRange; 4]> {
        Ok([
            self.alpha_range.build("alpha_range")?,
            self.beta_range.build("beta_range")?,
            self.delta_range.build("delta_range")?,
            self.eta_range.build("eta_range")?,
        ])
    }
}

/// An unvalidated `{ min, max, step }` table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RangeConfig {
    fn build(&self, name: &str) -> Result<SearchRange> {
        SearchRange::new(self.min, self.max, self.step).with_context(|| format!("invalid {name}"))
    }
}

impl From<(f64, f64, f64)> for RangeConfig {
    fn from((min, max, step): (f64, f64, f64)) -> Self {
        Self { min, max, step }
    }
}

fn simulator(initial: Population, step_size: f64, horizon: f64) -> Result<Simulator> {
    let config = rk4::Config::new(step_size, horizon).context("invalid step_size or horizon")?;
    Ok(Simulator::new(initial, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    use predprey_solvers::optimization::grid_search::RangeError;

    #[test]
    fn defaults_match_the_reference_runs() {
        let config = Config::load(None).unwrap();

        assert_eq!(config.simulate.initial_state, Population::new(110.0, 12.0));
        assert_eq!(config.simulate.step_size, 1e-4);
        assert_eq!(config.simulate.output, PathBuf::from("lotka_volterra.dat"));
        assert_eq!(config.search.initial_state, Population::new(100.0, 10.0));
        assert_eq!(config.search.horizon, 50.0);
        assert_eq!(
            config.search.beta_range,
            RangeConfig {
                min: 0.001,
                max: 0.1,
                step: 0.001
            }
        );
    }

    #[test]
    fn partial_files_keep_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [simulate]
            horizon = 2.5
            parameters = { alpha = 0.5, beta = 0.02, delta = 0.01, eta = 0.3 }

            [search]
            eta_range = { min = 0.1, max = 0.2, step = 0.1 }
            "#,
        )
        .unwrap();

        assert_eq!(config.simulate.horizon, 2.5);
        assert_eq!(
            config.simulate.parameters,
            Parameters::new(0.5, 0.02, 0.01, 0.3)
        );
        assert_eq!(config.simulate.step_size, defaults::SIMULATE_STEP);
        assert_eq!(config.search.eta_range.max, 0.2);
        assert_eq!(config.search.alpha_range, SearchConfig::default().alpha_range);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("[simulate]\nhorizn = 3.0\n").is_err());
        assert!(toml::from_str::<Config>("[optimize]\n").is_err());

        let misspelled = "[search]\nalpha_range = { min = 0.1, max = 1.0, stride = 0.1 }\n";
        assert!(toml::from_str::<Config>(misspelled).is_err());
    }

    #[test]
    fn invalid_ranges_name_the_offending_table() {
        let mut search = SearchConfig::default();
        search.delta_range.step = 0.0;

        let error = search.ranges().unwrap_err();

        assert_eq!(error.to_string(), "invalid delta_range");
        assert_eq!(
            error.downcast_ref::<RangeError>(),
            Some(&RangeError::Step(0.0))
        );
    }

    #[test]
    fn invalid_step_size_is_rejected() {
        let simulate = SimulateConfig {
            step_size: -1.0,
            ..SimulateConfig::default()
        };

        assert!(simulate.simulator().is_err());
    }

    #[test]
    fn default_ranges_are_valid() {
        let ranges = SearchConfig::default().ranges().unwrap();

        assert_eq!(ranges[0].min(), 0.1);
        assert_eq!(ranges[3].step(), 0.01);
    }
}
