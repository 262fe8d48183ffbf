//! Version banner for `hatch --version`

use chrono::{Datelike, Utc};

const COPYRIGHT_START_YEAR: i32 = 2025;

/// Print the tool name, version, copyright range, license, and toolchain
/// version, then return to the caller (which exits 0).
pub fn print_version() {
    let version = env!("CARGO_PKG_VERSION");
    let year = Utc::now().year();
    let years = if year > COPYRIGHT_START_YEAR {
        format!("{COPYRIGHT_START_YEAR}-{year}")
    } else {
        COPYRIGHT_START_YEAR.to_string()
    };

    println!("hatch_colcon {version} (C) {years} Hatchbed LLC");
    println!(
        "hatch_colcon is released under the BSD 3-Clause License \
         (https://opensource.org/license/bsd-3-clause)"
    );
    println!("---");
    println!("Using Rust {}", env!("CARGO_PKG_RUST_VERSION"));
}
