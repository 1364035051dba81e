//! Dependency source adapters.

mod package_json;

pub use package_json::PackageJsonDependencies;
