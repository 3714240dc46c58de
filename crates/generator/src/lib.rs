//! Handler and test stub generation for gRPC services
//!
//! This crate turns an extracted `ServiceDescriptor` into one handler stub
//! and one paired test stub per RPC.

mod sink;
mod templates;

pub use sink::{DirectorySink, FileSink};
pub use templates::{
    compile, load_templates, HANDLER_TEMPLATE, HANDLER_TEMPLATE_BODY, HANDLER_TEST_TEMPLATE,
    HANDLER_TEST_TEMPLATE_BODY,
};

use grpc_handler_generator_common::{
    handler_file_name, handler_test_file_name, GeneratedFile, HandlerSpec, Result,
    ServiceDescriptor,
};
use std::path::Path;
use tera::Tera;

/// Default extension of generated files
pub const DEFAULT_EXTENSION: &str = "go";

/// Handler generator
///
/// Produces, for every RPC in declaration order:
/// - `<rpc>_handler.<ext>`
/// - `<rpc>_handler_test.<ext>`
pub struct HandlerGenerator {
    descriptor: ServiceDescriptor,
    tera: Tera,
    extension: String,
}

impl HandlerGenerator {
    /// Create a new handler generator from a ServiceDescriptor
    pub fn new(descriptor: ServiceDescriptor) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            descriptor,
            tera,
            extension: DEFAULT_EXTENSION.to_string(),
        })
    }

    /// Use a different extension for generated file names
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File names that generation would produce, in emission order
    pub fn file_names(&self) -> Vec<String> {
        self.descriptor
            .rpc_names
            .iter()
            .flat_map(|rpc| {
                [
                    handler_file_name(rpc, &self.extension),
                    handler_test_file_name(rpc, &self.extension),
                ]
            })
            .collect()
    }

    /// Render the handler and test stub for one RPC
    pub fn render_rpc(&self, spec: &HandlerSpec) -> Result<[GeneratedFile; 2]> {
        let handler = GeneratedFile {
            file_name: handler_file_name(&spec.rpc_name, &self.extension),
            contents: templates::render(&self.tera, HANDLER_TEMPLATE, spec)?,
        };
        let test = GeneratedFile {
            file_name: handler_test_file_name(&spec.rpc_name, &self.extension),
            contents: templates::render(&self.tera, HANDLER_TEST_TEMPLATE, spec)?,
        };
        Ok([handler, test])
    }

    /// Render every file without writing anything
    pub fn render_files(&self) -> Result<Vec<GeneratedFile>> {
        let mut files = Vec::with_capacity(self.descriptor.rpc_names.len() * 2);
        for spec in self.descriptor.handler_specs() {
            files.extend(self.render_rpc(&spec)?);
        }
        Ok(files)
    }

    /// Render and hand each file to `sink`, one RPC at a time
    ///
    /// Stops at the first failure. Files written before it are left in place.
    pub fn write_to(&self, sink: &mut dyn FileSink) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for spec in self.descriptor.handler_specs() {
            for file in self.render_rpc(&spec)? {
                sink.write_file(&file)?;
                written.push(file.file_name);
            }
        }
        Ok(written)
    }

    /// Generate all handler files into a directory
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<Vec<String>> {
        let mut sink = DirectorySink::new(output_dir)?;
        self.write_to(&mut sink)
    }
}

/// Generate handler files (convenience function)
pub fn generate_handlers(descriptor: ServiceDescriptor, output_path: &str) -> Result<Vec<String>> {
    let generator = HandlerGenerator::new(descriptor)?;
    generator.generate_to_directory(Path::new(output_path))
}
