fn main() {
    // ESP-IDF link arguments are only needed for the target firmware.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
