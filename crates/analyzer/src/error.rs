use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid analyzer configuration: {0}")]
    Config(#[from] configuration::ConfigError),
}
