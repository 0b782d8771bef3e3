//! Build script for sweph-sys
//!
//! Finds a prebuilt `libswe` or compiles the Swiss Ephemeris C sources.
//! When no library can be found the crate still builds; only binaries that
//! actually call into the engine will fail at link time.

use std::env;
use std::path::PathBuf;

const LIB_NAME: &str = "swe";

#[cfg_attr(not(feature = "build-native"), allow(dead_code))]
const SOURCES: [&str; 9] = [
    "swecl.c",
    "swedate.c",
    "swehel.c",
    "swehouse.c",
    "swejpl.c",
    "swemmoon.c",
    "swemplan.c",
    "sweph.c",
    "swephlib.c",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SWISSEPH_LIB_DIR");
    println!("cargo:rerun-if-env-changed=SWISSEPH_SRC_DIR");

    // Strategy 1: Check for pre-built library via environment variable
    if let Ok(lib_dir) = env::var("SWISSEPH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=dylib={}", LIB_NAME);
        link_system_deps();
        return;
    }

    // Strategy 2: Try pkg-config
    if try_pkg_config() {
        return;
    }

    // Strategy 3: Build from source if feature enabled
    #[cfg(feature = "build-native")]
    {
        if build_from_source() {
            return;
        }
    }

    // Strategy 4: Look for library in common locations
    let search_paths = [
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
        "/opt/homebrew/lib",
    ];

    for path in &search_paths {
        for file in ["libswe.so", "libswe.dylib", "libswe.a"] {
            if PathBuf::from(path).join(file).exists() {
                println!("cargo:rustc-link-search=native={}", path);
                println!("cargo:rustc-link-lib={}", LIB_NAME);
                link_system_deps();
                return;
            }
        }
    }

    println!("cargo:warning=libswe not found; native calls will not link.");
    println!("cargo:warning=Set SWISSEPH_LIB_DIR or install libswe.");
    println!("cargo:warning=Or enable 'build-native' with SWISSEPH_SRC_DIR set.");
}

fn try_pkg_config() -> bool {
    match pkg_config::Config::new().probe("libswe") {
        Ok(_) => {
            println!("cargo:info=Found libswe via pkg-config");
            true
        }
        Err(_) => false,
    }
}

#[cfg(feature = "build-native")]
fn build_from_source() -> bool {
    let Ok(src_dir) = env::var("SWISSEPH_SRC_DIR").map(PathBuf::from) else {
        println!("cargo:warning=build-native enabled but SWISSEPH_SRC_DIR is not set");
        return false;
    };

    let missing: Vec<&str> = SOURCES
        .iter()
        .copied()
        .filter(|file| !src_dir.join(file).exists())
        .collect();
    if !missing.is_empty() {
        println!(
            "cargo:warning=Swiss Ephemeris sources missing in {}: {}",
            src_dir.display(),
            missing.join(", ")
        );
        return false;
    }

    let mut build = cc::Build::new();
    build.include(&src_dir).warnings(false).opt_level(2);
    for file in SOURCES {
        build.file(src_dir.join(file));
    }
    build.compile(LIB_NAME);

    println!("cargo:include={}", src_dir.display());
    link_system_deps();
    true
}

fn link_system_deps() {
    // libswe uses libm
    #[cfg(unix)]
    println!("cargo:rustc-link-lib=dylib=m");
}
