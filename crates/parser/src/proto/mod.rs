//! `.proto` text extraction
//!
//! ## Example
//! ```rust,ignore
//! use grpc_handler_generator_parser::ProtoParser;
//!
//! let parser = ProtoParser::from_file("service.proto")?;
//! let descriptor = parser.parse()?;
//! ```

mod parser;
mod patterns;

pub use parser::ProtoParser;
