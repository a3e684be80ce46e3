// src/render.rs
use crate::version::Version;

/// Render the header document for `name` at `raw` version.
///
/// Pure function of its inputs, so repeated runs stay byte-for-byte
/// identical. `raw` is embedded untruncated in the `VERSION` string
/// constant (suffixes included); the numeric constants come from `parsed`.
pub fn render_header(name: &str, raw: &str, parsed: &Version) -> String {
    let namespace = name.to_uppercase();
    format!(
        r#"/// @file Version.h
/// @brief Auto-generated version information
/// @warning DO NOT EDIT - Generated from library.json by gen_version
#pragma once

namespace {namespace} {{

/// Library version string
static constexpr const char* VERSION = "{raw}";

/// Version components
static constexpr int VERSION_MAJOR = {major};
static constexpr int VERSION_MINOR = {minor};
static constexpr int VERSION_PATCH = {patch};

/// Version as single integer (major * 10000 + minor * 100 + patch)
static constexpr int VERSION_INT = {version_int};

}} // namespace {namespace}
"#,
        major = parsed.major,
        minor = parsed.minor,
        patch = parsed.patch,
        version_int = parsed.as_int(),
    )
}
