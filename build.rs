fn main() {
    // Forward the ESP-IDF sysenv only for device builds; host builds
    // (tests, CI) have no IDF toolchain to forward.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
