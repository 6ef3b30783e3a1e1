use std::fs;

/// Read a canned catalog response from the standard fixture path
pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("test/fixtures/{}", name)).unwrap()
}
