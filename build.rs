//! Build script for the FEM bring-up firmware
//!
//! Handles:
//! - Memory layout configuration for the nRF52840 target
//! - Linker scripts for cortex-m-rt and defmt

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (library + tests) need no linker setup
    #[cfg(feature = "embedded")]
    {
        // Link memory.x from project directory
        println!(
            "cargo:rustc-link-search={}",
            std::env::var("CARGO_MANIFEST_DIR").unwrap()
        );

        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
