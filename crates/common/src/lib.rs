//! Common types and utilities for the gRPC Handler Generator
//!
//! This crate contains the extracted service model, the error type, and the
//! file naming rules shared by the parser, generator, and CLI components.

pub mod naming;

pub use naming::{handler_file_name, handler_test_file_name, to_file_token};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during handler generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("no go package option")]
    NoPackageOption,

    #[error("no service name")]
    NoServiceName,

    #[error("no rpcs")]
    NoRpcs,

    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A service extracted from one descriptor file
///
/// Only ever built fully populated: extraction either yields all three
/// facts or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Go import path from `option go_package`
    pub go_package: String,

    /// Lowercased service identifier
    pub service_name: String,

    /// RPC identifiers in declaration order, duplicates kept
    pub rpc_names: Vec<String>,
}

impl ServiceDescriptor {
    /// Build one generation context per RPC, in declaration order
    pub fn handler_specs(&self) -> impl Iterator<Item = HandlerSpec> + '_ {
        self.rpc_names.iter().map(move |rpc| HandlerSpec {
            go_package: self.go_package.clone(),
            service_name: self.service_name.clone(),
            rpc_name: rpc.clone(),
        })
    }
}

/// Generation context for a single RPC
///
/// Field names double as the template placeholder names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerSpec {
    pub go_package: String,
    pub service_name: String,
    pub rpc_name: String,
}

/// A rendered output file, not yet written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory
    pub file_name: String,
    pub contents: String,
}
