fn main() {
    // The ESP-IDF sysenv is only meaningful when cross-compiling for an Xtensa
    // ESP32. Host builds (simulation, tests) skip it entirely.
    let target = std::env::var("TARGET").unwrap_or_default();
    if target.contains("xtensa") && std::env::var_os("CARGO_FEATURE_ESP32").is_some() {
        embuild::espidf::sysenv::output();
    }
    println!("cargo:rerun-if-changed=build.rs");
}
