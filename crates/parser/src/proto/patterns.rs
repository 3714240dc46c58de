//! Declaration patterns matched against raw descriptor text

use regex::Regex;
use std::sync::LazyLock;

/// `option go_package = "<path>";`
pub(super) static GO_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"option go_package = "(.*)";"#).expect("valid regex"));

/// `service <Name> {` where the name starts uppercase
pub(super) static SERVICE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"service ([A-Z]\w*) \{").expect("valid regex"));

/// `rpc <Name>(...) returns ...`, the rest of the line is ignored
pub(super) static RPC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rpc (\w+)\s?\(.*\)\s?returns.*").expect("valid regex"));
