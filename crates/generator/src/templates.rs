//! Template loading and compilation

use grpc_handler_generator_common::{GeneratorError, HandlerSpec, Result};
use tera::{Context, Tera};

/// Built-in handler stub
pub const HANDLER_TEMPLATE: &str = "handler.go";

/// Built-in handler test stub
pub const HANDLER_TEST_TEMPLATE: &str = "handler_test.go";

const CUSTOM_TEMPLATE: &str = "custom";

/// Source text of the built-in handler stub
pub const HANDLER_TEMPLATE_BODY: &str = include_str!("../templates/handler.go.tera");

/// Source text of the built-in handler test stub
pub const HANDLER_TEST_TEMPLATE_BODY: &str = include_str!("../templates/handler_test.go.tera");

/// Load the built-in templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);

    tera.add_raw_template(HANDLER_TEMPLATE, HANDLER_TEMPLATE_BODY)
        .map_err(template_syntax)?;

    tera.add_raw_template(HANDLER_TEST_TEMPLATE, HANDLER_TEST_TEMPLATE_BODY)
        .map_err(template_syntax)?;

    Ok(tera)
}

/// Compile an arbitrary template body against one RPC
///
/// The body may reference `go_package`, `service_name` and `rpc_name`.
/// Malformed syntax or a reference to any other variable is reported as
/// `GeneratorError::TemplateSyntax`.
///
/// # Examples
/// ```
/// use grpc_handler_generator_common::HandlerSpec;
/// use grpc_handler_generator_generator::compile;
///
/// let spec = HandlerSpec {
///     go_package: "example.com/greeter".to_string(),
///     service_name: "greeter".to_string(),
///     rpc_name: "SayHello".to_string(),
/// };
/// let out = compile("{{ service_name }}.{{ rpc_name }}Request", &spec).unwrap();
/// assert_eq!(out, "greeter.SayHelloRequest");
/// ```
pub fn compile(template_body: &str, spec: &HandlerSpec) -> Result<String> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(CUSTOM_TEMPLATE, template_body)
        .map_err(template_syntax)?;

    render(&tera, CUSTOM_TEMPLATE, spec)
}

/// Render a registered template with the placeholders taken from `spec`
pub(crate) fn render(tera: &Tera, template_name: &str, spec: &HandlerSpec) -> Result<String> {
    let context = Context::from_serialize(spec).map_err(template_syntax)?;
    tera.render(template_name, &context).map_err(template_syntax)
}

/// Flatten a tera error and its causes into one message
fn template_syntax(err: tera::Error) -> GeneratorError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    GeneratorError::TemplateSyntax(message)
}
