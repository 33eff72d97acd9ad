#![allow(dead_code)]

pub mod project {
    use std::fs;
    use std::path::{Path, PathBuf};

    use modforge::{Layout, ModuleGenerator, ScaffoldConfig};

    /// Registration list of a freshly installed application
    pub const PROVIDERS: &str =
        "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n];\n";

    /// A temporary project with `bootstrap/providers.php` in place
    pub struct Project {
        dir: tempfile::TempDir,
    }

    impl Project {
        pub fn new() -> Self {
            Self::with_providers(PROVIDERS)
        }

        pub fn with_providers(contents: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("bootstrap")).unwrap();
            fs::write(dir.path().join("bootstrap/providers.php"), contents).unwrap();
            Self { dir }
        }

        /// A project without a registration file
        pub fn bare() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        pub fn root(&self) -> &Path {
            self.dir.path()
        }

        pub fn path(&self, relative: &str) -> PathBuf {
            self.dir.path().join(relative)
        }

        pub fn read(&self, relative: &str) -> String {
            fs::read_to_string(self.path(relative)).unwrap()
        }

        pub fn providers(&self) -> String {
            self.read("bootstrap/providers.php")
        }

        pub fn generator(&self) -> ModuleGenerator {
            ModuleGenerator::new(Layout::new(self.root(), ScaffoldConfig::default()))
        }

        /// Every regular file under `relative`, sorted
        pub fn files_under(&self, relative: &str) -> Vec<PathBuf> {
            fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
                let Ok(entries) = fs::read_dir(dir) else {
                    return;
                };
                for entry in entries {
                    let path = entry.unwrap().path();
                    if path.is_dir() {
                        walk(&path, out);
                    } else {
                        out.push(path);
                    }
                }
            }
            let mut out = Vec::new();
            walk(&self.path(relative), &mut out);
            out.sort();
            out
        }

        /// Every directory under the project root except `bootstrap`, sorted
        pub fn dirs_under_root(&self) -> Vec<PathBuf> {
            fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
                for entry in fs::read_dir(dir).unwrap() {
                    let path = entry.unwrap().path();
                    if path.is_dir() {
                        out.push(path.clone());
                        walk(&path, out);
                    }
                }
            }
            let mut out = Vec::new();
            walk(self.root(), &mut out);
            out.retain(|path| !path.starts_with(self.path("bootstrap")));
            out.sort();
            out
        }
    }
}
