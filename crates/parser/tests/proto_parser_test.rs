//! Integration tests for the .proto descriptor parser

use grpc_handler_generator_common::{GeneratorError, ServiceDescriptor};
use grpc_handler_generator_parser::{extract, ProtoParser};
use std::fs::File;
use std::path::Path;

fn sample_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        go_package: "github.com/myorg/myproto/sample".to_string(),
        service_name: "sample".to_string(),
        rpc_names: vec!["SignIn".to_string(), "SignUp".to_string()],
    }
}

fn testdata(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

#[test]
fn test_parse_proto_file() {
    let parser = ProtoParser::from_file(testdata("test.proto")).unwrap();
    let descriptor = parser.parse().unwrap();

    assert_eq!(descriptor, sample_descriptor());
}

#[test]
fn test_parse_proto_reader() {
    let file = File::open(testdata("test.proto")).unwrap();
    let descriptor = ProtoParser::from_reader(file).unwrap().parse().unwrap();

    assert_eq!(descriptor, sample_descriptor());
}

#[test]
fn test_grpc_gateway_proto_with_comments() {
    let text = r#"syntax = "proto3";

package v1.sample;

option go_package = "github.com/myorg/myproto/sample";

service Sample {
  // no whitespace between rpc and request message
  rpc SignIn(SignInRequest) returns (SignInResponse) {
    option (google.api.http) = {
      post: "/v1/sample/sign-in"
    };
  }
  // whitespace between rpc and request message
  rpc SignUp (SignUpRequest) returns (SignUpResponse) {
    option (google.api.http) = {
      post: "/v1/sample/sign-up"
    };
  }
}
"#;

    assert_eq!(extract(text).unwrap(), sample_descriptor());
}

#[test]
fn test_streaming_rpcs() {
    let text = r#"option go_package = "example.com/chat";

service Chat {
  rpc Subscribe(SubscribeRequest) returns (stream Message);
  rpc Publish(stream Message) returns (PublishResponse);
  rpc Converse(stream Message) returns (stream Message);
}
"#;

    let descriptor = extract(text).unwrap();
    assert_eq!(descriptor.service_name, "chat");
    assert_eq!(descriptor.rpc_names, vec!["Subscribe", "Publish", "Converse"]);
}

#[test]
fn test_no_go_package_option() {
    let text = "syntax = \"proto3\";\n\npackage v1.sample;\n";

    let err = extract(text).unwrap_err();
    assert!(matches!(err, GeneratorError::NoPackageOption));
    assert_eq!(err.to_string(), "no go package option");
}

#[test]
fn test_no_service_name() {
    let text = r#"syntax = "proto3";

package v1.sample;

option go_package = "github.com/myorg/myproto/sample";
"#;

    let err = extract(text).unwrap_err();
    assert!(matches!(err, GeneratorError::NoServiceName));
    assert_eq!(err.to_string(), "no service name");
}

#[test]
fn test_no_rpcs() {
    let text = r#"syntax = "proto3";

package v1.sample;

option go_package = "github.com/myorg/myproto/sample";

service Sample {
}
"#;

    let err = extract(text).unwrap_err();
    assert!(matches!(err, GeneratorError::NoRpcs));
    assert_eq!(err.to_string(), "no rpcs");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = ProtoParser::from_file(dir.path().join("missing.proto"));

    assert!(matches!(result, Err(GeneratorError::Io(_))));
}
