//! Descriptor parsing for gRPC services
//!
//! This crate extracts the facts the generator needs from `.proto` text:
//! the Go import path, the service name, and the RPC names.
//!
//! ## Parsing Strategy
//!
//! The descriptor is treated as plain text and pattern-matched, not parsed
//! as a grammar. Each fact is searched for independently across the whole
//! input, so unrelated blocks (method options, HTTP annotations, comments)
//! do not get in the way.
//!
//! Facts are checked in a fixed order and the first missing one is reported:
//! - `option go_package = "...";` → `NoPackageOption`
//! - `service Name {` → `NoServiceName`
//! - `rpc Name(...) returns (...)` → `NoRpcs`

mod proto;

pub use proto::ProtoParser;

use grpc_handler_generator_common::{Result, ServiceDescriptor};

/// Extract a service descriptor from `.proto` text
///
/// # Returns
/// * `ServiceDescriptor` - the package path, lowercased service name and RPCs
pub fn extract(text: &str) -> Result<ServiceDescriptor> {
    ProtoParser::new(text).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grpc_handler_generator_common::GeneratorError;

    #[test]
    fn test_extract_minimal_service() {
        let text = r#"option go_package = "example.com/echo";
service Echo {
  rpc Ping(PingRequest) returns (PingResponse);
}
"#;
        let descriptor = extract(text).unwrap();
        assert_eq!(descriptor.go_package, "example.com/echo");
        assert_eq!(descriptor.service_name, "echo");
        assert_eq!(descriptor.rpc_names, vec!["Ping"]);
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(matches!(extract(""), Err(GeneratorError::NoPackageOption)));
    }
}
