// File: crates/chart-core/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    // Check the target, not the host, so cross builds link correctly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
