/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerformanceError {
    #[error("{quantity} {value} is outside the valid range [{min}, {max}]")]
    Domain {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Invalid aircraft configuration: {0}")]
    Configuration(String),

    #[error("Invalid flight plan: {0}")]
    Structure(String),

    #[error("The flight plan has not been evaluated")]
    NotEvaluated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] yaml_rust::ScanError),

    #[error("Failed to parse XML: {0}")]
    Xml(#[from] xmltree::ParseError),
}

pub type Result<T> = std::result::Result<T, PerformanceError>;
