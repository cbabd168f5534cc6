//! Distribution metadata for this package.
//!
//! All values come from `Cargo.toml` at compile time, so what the client
//! reports about itself always matches what was published.

use serde::Serialize;

/// Distribution name used on package indexes.
pub const DIST_NAME: &str = "apiverve_inflationrate";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The `requests` + `setuptools` pair of the Python wrapper maps to these.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["reqwest", "tokio"];

pub const OS_CLASSIFIER: &str = "Operating System :: OS Independent";

/// Snapshot of the package manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub crate_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub author_email: &'static str,
    pub homepage: &'static str,
    pub rust_version: &'static str,
    pub dependencies: &'static [&'static str],
    pub classifier: &'static str,
}

impl PackageInfo {
    pub fn current() -> Self {
        let (author, author_email) = split_author(env!("CARGO_PKG_AUTHORS"));
        Self {
            name: DIST_NAME,
            crate_name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            description: env!("CARGO_PKG_DESCRIPTION"),
            author,
            author_email,
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            rust_version: env!("CARGO_PKG_RUST_VERSION"),
            dependencies: RUNTIME_DEPENDENCIES,
            classifier: OS_CLASSIFIER,
        }
    }
}

/// User agent sent with every request.
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), VERSION)
}

/// Splits a cargo author entry of the form `Name <email>`.
fn split_author(authors: &'static str) -> (&'static str, &'static str) {
    // Cargo joins multiple authors with ':'; only the first one is reported.
    let first = authors.split(':').next().unwrap_or_default().trim();
    match (first.find('<'), first.rfind('>')) {
        (Some(start), Some(end)) if start < end => {
            (first[..start].trim(), first[start + 1..end].trim())
        }
        _ => (first, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_info_matches_manifest() {
        let info = PackageInfo::current();
        assert_eq!(info.name, "apiverve_inflationrate");
        assert_eq!(info.crate_name, "apiverve-inflationrate");
        assert_eq!(info.version, "1.1.13");
        assert_eq!(info.author, "APIVerve");
        assert_eq!(info.author_email, "hello@apiverve.com");
        assert_eq!(
            info.homepage,
            "https://apiverve.com/marketplace/inflation?utm_source=pypi&utm_medium=homepage"
        );
        assert!(info.description.starts_with("Inflation Rate is a tool"));
        assert!(info.description.contains("1960"));
        assert_eq!(info.classifier, "Operating System :: OS Independent");
    }

    #[test]
    fn test_package_info_is_stable_across_calls() {
        assert_eq!(PackageInfo::current(), PackageInfo::current());
    }

    #[test]
    fn test_user_agent() {
        assert_eq!(user_agent(), "apiverve-inflationrate/1.1.13");
    }

    #[test]
    fn test_split_author_with_email() {
        assert_eq!(
            split_author("Jane Doe <jane@example.com>"),
            ("Jane Doe", "jane@example.com")
        );
    }

    #[test]
    fn test_split_author_without_email() {
        assert_eq!(split_author("Jane Doe"), ("Jane Doe", ""));
    }

    #[test]
    fn test_split_author_multiple() {
        assert_eq!(
            split_author("A <a@example.com>:B <b@example.com>"),
            ("A", "a@example.com")
        );
    }
}
