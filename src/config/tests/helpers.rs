//! Builds configurations from explicit source layers.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::RepofolioConfig;

/// Configuration source, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in order into a [`RepofolioConfig`].
pub fn build_config_from_layers(layers: &[(Layer, Value)]) -> RepofolioConfig {
    let mut composer = MergeComposer::new();

    for (layer, value) in layers.iter().cloned() {
        match layer {
            Layer::Defaults => composer.push_defaults(value),
            Layer::File => composer.push_file(value, None),
            Layer::Environment => composer.push_environment(value),
            Layer::Cli => composer.push_cli(value),
        }
    }

    RepofolioConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
