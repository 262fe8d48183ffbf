//! Package lookup via `package.xml` manifests
//!
//! Used by `build --this` to resolve the package containing the current
//! directory. A malformed manifest is treated as "no name found here" and
//! the upward search continues, so a broken nested manifest never masks a
//! valid one further up.

use std::fs;
use std::path::Path;

use super::find_ancestor;

/// Package manifest marker file name.
pub const PACKAGE_MANIFEST: &str = "package.xml";

/// Find the name of the nearest enclosing package, starting at `start`
/// (inclusive) and walking toward the filesystem root.
pub fn find_enclosing_package(start: &Path) -> Option<String> {
    let dir = find_ancestor(start, |dir| {
        let manifest = dir.join(PACKAGE_MANIFEST);
        manifest.is_file() && parse_package_name(&manifest).is_some()
    })?;

    parse_package_name(&dir.join(PACKAGE_MANIFEST))
}

/// Extract `<name>` from a `package.xml` manifest.
///
/// Returns `None` for any read or parse failure, a root element other than
/// `<package>`, a missing `<name>` element, or empty/whitespace-only text.
fn parse_package_name(manifest: &Path) -> Option<String> {
    let text = fs::read_to_string(manifest).ok()?;
    let doc = roxmltree::Document::parse(&text).ok()?;

    let root = doc.root_element();
    if root.tag_name().name() != "package" {
        return None;
    }

    let name = root
        .children()
        .find(|node| node.is_element() && node.tag_name().name() == "name")?
        .text()?
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
