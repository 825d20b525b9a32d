use crate::bumpers::Bumper;

/// Handles the `Version="..."` identity attribute of a UWP
/// `Package.appxmanifest`.
pub struct AppxManifestBumper;

impl Bumper for AppxManifestBumper {
    fn basename() -> &'static str {
        "Package.appxmanifest"
    }

    // The leading space is significant: bare "Version=" would also match
    // inside longer attribute names.
    fn markers() -> &'static [&'static str] {
        &[" Version="]
    }
}
