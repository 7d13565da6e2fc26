//! Keeps `tests/unit` in step with `src`: one test file per source file, each with tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Entry points and module declarations need no test file of their own
    fn is_organisational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        collect(root, root, &mut paths)?;
        Ok(paths)
    }

    fn collect(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, root, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = relative_paths(Path::new(SOURCE_ROOT)).unwrap();
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_organisational(path) && !units.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = relative_paths(Path::new(SOURCE_ROOT)).unwrap();
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_unit_test_files_contain_tests() {
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap();

        let empty: Vec<&String> = units
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                let content = fs::read_to_string(Path::new(UNIT_ROOT).join(path.as_str()))
                    .unwrap_or_default();
                !content.contains("#[test]")
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Unit test files without any #[test] functions: {empty:?}"
        );
    }
}
