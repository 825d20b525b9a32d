use crate::bumpers::Bumper;

/// Handles the `<version>` element of the `IotWeb.nuspec` NuGet manifest.
pub struct NuspecBumper;

impl Bumper for NuspecBumper {
    fn basename() -> &'static str {
        "IotWeb.nuspec"
    }

    fn markers() -> &'static [&'static str] {
        &["<version>"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bump::BumpMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bump_version_element() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("IotWeb.nuspec");
        fs::write(
            &file,
            concat!(
                "<package>\n",
                "  <metadata>\n",
                "    <id>IotWeb</id>\n",
                "    <version>2.5.9</version>\n",
                "  </metadata>\n",
                "</package>\n",
            ),
        )
        .unwrap();

        let changes = NuspecBumper::bump_file(&file, BumpMode::Minor).unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].old, "2.5.9");
        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("<version>2.6.0</version>"));
    }

    #[test]
    fn test_dependency_version_attributes_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("IotWeb.nuspec");
        fs::write(
            &file,
            concat!(
                "<version>1.0.0</version>\n",
                "<dependency id=\"Newtonsoft.Json\" version=\"9.0.1\" />\n",
            ),
        )
        .unwrap();

        NuspecBumper::bump_file(&file, BumpMode::Patch).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("<version>1.0.1</version>"));
        assert!(content.contains("version=\"9.0.1\""));
    }
}
