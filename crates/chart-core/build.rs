// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's registry font lookup (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
