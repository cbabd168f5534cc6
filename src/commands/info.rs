use anyhow::Result;
use std::io::Write;

use crate::package::PackageInfo;

/// Print the package metadata
pub fn info(json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    print_info(&PackageInfo::current(), json, &mut stdout.lock())
}

pub fn print_info<W: Write>(info: &PackageInfo, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, info)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Package: {}", info.name)?;
    writeln!(out, "Crate: {}", info.crate_name)?;
    writeln!(out, "Version: {}", info.version)?;
    writeln!(out, "Description: {}", info.description)?;
    writeln!(out, "Author: {} <{}>", info.author, info.author_email)?;
    writeln!(out, "Homepage: {}", info.homepage)?;
    writeln!(out, "Minimum Rust: {}", info.rust_version)?;
    writeln!(out, "Dependencies: {}", info.dependencies.join(", "))?;
    writeln!(out, "Classifier: {}", info.classifier)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_info_text() {
        let mut out = Vec::new();
        print_info(&PackageInfo::current(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Package: apiverve_inflationrate"));
        assert!(text.contains("Version: 1.1.13"));
        assert!(text.contains("Author: APIVerve <hello@apiverve.com>"));
        assert!(text.contains("Dependencies: reqwest, tokio"));
    }

    #[test]
    fn test_print_info_json() {
        let mut out = Vec::new();
        print_info(&PackageInfo::current(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["name"], "apiverve_inflationrate");
        assert_eq!(value["version"], "1.1.13");
        assert_eq!(value["author_email"], "hello@apiverve.com");
    }
}
