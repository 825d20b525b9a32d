use crate::bumpers::Bumper;

/// Handles the `AssemblyVersion` / `AssemblyFileVersion` attribute lines of
/// a C# `AssemblyInfo.cs`.
pub struct AssemblyInfoBumper;

impl Bumper for AssemblyInfoBumper {
    fn basename() -> &'static str {
        "AssemblyInfo.cs"
    }

    // Both markers are tested in sequence against the possibly-updated
    // line; a line carrying both attributes is bumped once per marker.
    fn markers() -> &'static [&'static str] {
        &["AssemblyVersion", "AssemblyFileVersion"]
    }
}
