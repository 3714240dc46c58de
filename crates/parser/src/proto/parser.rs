//! `.proto` descriptor parser

use super::patterns::{GO_PACKAGE, RPC_NAME, SERVICE_NAME};
use grpc_handler_generator_common::{GeneratorError, Result, ServiceDescriptor};
use std::fs;
use std::io::Read;
use std::path::Path;

/// gRPC service descriptor parser
///
/// Holds the full descriptor text; extraction happens in [`ProtoParser::parse`].
#[derive(Debug, Clone)]
pub struct ProtoParser {
    text: String,
}

impl ProtoParser {
    /// Wrap descriptor text that is already in memory
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read the whole descriptor from a stream
    ///
    /// Read failures are returned unchanged as `GeneratorError::Io`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(text))
    }

    /// Load a descriptor from a `.proto` file
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = ProtoParser::from_file("proto/sample.proto")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(Self::new(text))
    }

    /// Extract the service descriptor
    ///
    /// Checks run in a fixed order (package, service, RPCs) and the first
    /// missing fact is reported.
    pub fn parse(&self) -> Result<ServiceDescriptor> {
        let go_package = GO_PACKAGE
            .captures(&self.text)
            .map(|caps| caps[1].to_string())
            .ok_or(GeneratorError::NoPackageOption)?;

        let service_name = SERVICE_NAME
            .captures(&self.text)
            .map(|caps| caps[1].to_lowercase())
            .ok_or(GeneratorError::NoServiceName)?;

        let rpc_names: Vec<String> = RPC_NAME
            .captures_iter(&self.text)
            .map(|caps| caps[1].to_string())
            .collect();
        if rpc_names.is_empty() {
            return Err(GeneratorError::NoRpcs);
        }

        Ok(ServiceDescriptor {
            go_package,
            service_name,
            rpc_names,
        })
    }

    /// Get the raw descriptor text
    pub fn text(&self) -> &str {
        &self.text
    }
}
