// File: crates/plot-core/build.rs
// Summary: Build script to link Windows system libraries required by the Skia raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
