//! Search-path resolver — serves descriptors from files on disk.
//!
//! The built-in fallback resolver. A dotted type name maps to a descriptor
//! file under each configured root (`shop.billing.Invoice` →
//! `<root>/shop/billing/Invoice.yaml`); the first root with a matching file
//! wins and its location is handed to the attached importer.

use std::env;
use std::path::{Path, PathBuf};

use crate::config;
use crate::descriptor::{TypeDescriptor, TypeUri};

use super::resolver::{TypeResolver, TypeUriImporter};

/// Environment variable listing descriptor roots, platform path separator.
pub const TYPE_PATH_ENV: &str = "ARCHSCOPE_TYPE_PATH";

/// Resolver that serves descriptors from an ordered list of search roots.
#[derive(Debug)]
pub struct SearchPathResolver {
    search_paths: Vec<PathBuf>,
    importer: Option<Box<dyn TypeUriImporter>>,
}

impl SearchPathResolver {
    /// Resolver over the given roots, in precedence order.
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            importer: None,
        }
    }

    /// Resolver over the ambient type path: [`TYPE_PATH_ENV`] when set,
    /// then the globally configured `type_paths`, then the working
    /// directory.
    pub fn from_type_path() -> Self {
        let search_paths = match env::var(TYPE_PATH_ENV) {
            Ok(paths) if !paths.is_empty() => env::split_paths(&paths).collect(),
            _ => {
                let configured = config::global().type_paths.clone();
                if configured.is_empty() {
                    vec![PathBuf::from(".")]
                } else {
                    configured
                }
            }
        };
        Self::new(search_paths)
    }

    /// Roots from configured factory arguments, one root per argument.
    pub fn from_args(args: &[String]) -> Self {
        Self::new(args.iter().map(PathBuf::from).collect())
    }

    /// The configured roots, in precedence order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// First existing descriptor file for `type_name` across the roots.
    fn find_descriptor_file(&self, type_name: &str) -> Option<PathBuf> {
        if type_name.is_empty() || type_name.contains(['/', '\\']) {
            return None;
        }
        let mut relative = PathBuf::new();
        for segment in type_name.split('.') {
            relative.push(segment);
        }
        relative.set_extension("yaml");
        self.search_paths
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.is_file())
    }
}

impl TypeResolver for SearchPathResolver {
    fn set_uri_importer(&mut self, importer: Box<dyn TypeUriImporter>) {
        self.importer = Some(importer);
    }

    fn try_resolve(&mut self, type_name: &str) -> Option<TypeDescriptor> {
        let file = self.find_descriptor_file(type_name)?;
        let Some(importer) = self.importer.as_ref() else {
            log::warn!(
                "No importer attached, cannot resolve {} from {}",
                type_name,
                file.display()
            );
            return None;
        };
        log::debug!("Resolving {} from {}", type_name, file.display());
        importer.try_import(&TypeUri::from_path(&file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Importer that parses local descriptor files directly.
    #[derive(Debug)]
    struct FileImporter;

    impl TypeUriImporter for FileImporter {
        fn try_import(&self, uri: &TypeUri) -> Option<TypeDescriptor> {
            let path = uri.to_path()?;
            TypeDescriptor::from_yaml_file(&path).ok()
        }
    }

    /// Write `<root>/<dotted name as dirs>.yaml` with a minimal descriptor.
    fn write_descriptor(root: &Path, name: &str) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in name.split('.') {
            path.push(segment);
        }
        path.set_extension("yaml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, format!("name: \"{}\"\n", name)).unwrap();
        path
    }

    fn resolver_over(root: &Path) -> SearchPathResolver {
        let mut resolver = SearchPathResolver::new(vec![root.to_path_buf()]);
        resolver.set_uri_importer(Box::new(FileImporter));
        resolver
    }

    /// Moves every descriptor file out of a search root into a backup
    /// directory, restoring the originals on drop. Lets tests exercise a
    /// root whose types are genuinely absent from the usual location.
    struct OutsideSearchPath {
        origin: PathBuf,
        target: TempDir,
        moved: Vec<(PathBuf, PathBuf)>,
    }

    impl OutsideSearchPath {
        fn relocate(origin: &Path) -> Self {
            let target = TempDir::new().unwrap();
            let mut fixture = Self {
                origin: origin.to_path_buf(),
                target,
                moved: Vec::new(),
            };
            let source = fixture.origin.clone();
            let destination = fixture.target.path().to_path_buf();
            fixture.move_tree(&source, &destination);
            fixture
        }

        /// Root the relocated files live under while the fixture is alive.
        fn target_root(&self) -> &Path {
            self.target.path()
        }

        fn move_tree(&mut self, source: &Path, destination: &Path) {
            std::fs::create_dir_all(destination).unwrap();
            for entry in std::fs::read_dir(source).unwrap() {
                let entry = entry.unwrap();
                let from = entry.path();
                let to = destination.join(entry.file_name());
                if from.is_dir() {
                    self.move_tree(&from, &to);
                } else {
                    std::fs::rename(&from, &to).unwrap();
                    self.moved.push((from, to));
                }
            }
        }
    }

    impl Drop for OutsideSearchPath {
        fn drop(&mut self) {
            for (original, relocated) in self.moved.drain(..) {
                std::fs::rename(&relocated, &original).unwrap();
            }
        }
    }

    #[test]
    fn test_resolves_descriptor_under_root() {
        init_logger();
        let root = TempDir::new().unwrap();
        write_descriptor(root.path(), "shop.billing.Invoice");

        let mut resolver = resolver_over(root.path());
        let descriptor = resolver.try_resolve("shop.billing.Invoice").unwrap();
        assert_eq!(descriptor.name, "shop.billing.Invoice");
        assert!(descriptor.uri.is_some());
    }

    #[test]
    fn test_declines_unknown_type() {
        let root = TempDir::new().unwrap();
        let mut resolver = resolver_over(root.path());
        assert!(resolver.try_resolve("shop.billing.Missing").is_none());
    }

    #[test]
    fn test_declines_names_with_path_separators() {
        let root = TempDir::new().unwrap();
        write_descriptor(root.path(), "shop.billing.Invoice");

        let mut resolver = resolver_over(root.path());
        assert!(resolver.try_resolve("shop/billing/Invoice").is_none());
        assert!(resolver.try_resolve("").is_none());
    }

    #[test]
    fn test_earlier_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_descriptor(first.path(), "shop.Shared");
        let second_file = write_descriptor(second.path(), "shop.Shared");

        let mut resolver =
            SearchPathResolver::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        resolver.set_uri_importer(Box::new(FileImporter));

        let descriptor = resolver.try_resolve("shop.Shared").unwrap();
        let origin = descriptor.uri.unwrap().to_path().unwrap();
        assert!(origin.starts_with(first.path()));
        assert_ne!(origin, second_file);
    }

    #[test]
    fn test_without_importer_declines() {
        init_logger();
        let root = TempDir::new().unwrap();
        write_descriptor(root.path(), "shop.billing.Invoice");

        let mut resolver = SearchPathResolver::new(vec![root.path().to_path_buf()]);
        assert!(resolver.try_resolve("shop.billing.Invoice").is_none());
    }

    #[test]
    fn test_relocated_descriptors_resolve_only_from_new_root() {
        let root = TempDir::new().unwrap();
        write_descriptor(root.path(), "plugin.extra.Widget");
        {
            let outside = OutsideSearchPath::relocate(root.path());

            // Gone from the original root.
            let mut original = resolver_over(root.path());
            assert!(original.try_resolve("plugin.extra.Widget").is_none());

            // Served from the relocated root.
            let mut relocated = resolver_over(outside.target_root());
            let descriptor = relocated.try_resolve("plugin.extra.Widget").unwrap();
            assert_eq!(descriptor.name, "plugin.extra.Widget");
        }

        // Restored once the fixture drops.
        let mut restored = resolver_over(root.path());
        assert!(restored.try_resolve("plugin.extra.Widget").is_some());
    }

    #[test]
    fn test_from_args_keeps_argument_order() {
        let resolver = SearchPathResolver::from_args(&["b".to_string(), "a".to_string()]);
        assert_eq!(
            resolver.search_paths(),
            &[PathBuf::from("b"), PathBuf::from("a")]
        );
    }

    #[test]
    fn test_from_type_path_env() {
        // The only test touching this variable; keeps parallel runs safe.
        env::set_var(TYPE_PATH_ENV, "/tmp/a:/tmp/b");
        let resolver = SearchPathResolver::from_type_path();
        env::remove_var(TYPE_PATH_ENV);

        assert_eq!(
            resolver.search_paths(),
            &[PathBuf::from("/tmp/a"), PathBuf::from("/tmp/b")]
        );
    }

    /// Sorted-by-name comparison of a resolved set against expected names.
    fn assert_descriptor_names(actual: &[TypeDescriptor], expected: &[&str]) {
        let mut actual: Vec<&str> = actual.iter().map(|d| d.name.as_str()).collect();
        actual.sort_unstable();
        let mut expected = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_resolves_every_descriptor_under_root() {
        let root = TempDir::new().unwrap();
        write_descriptor(root.path(), "shop.billing.Invoice");
        write_descriptor(root.path(), "shop.billing.LineItem");
        write_descriptor(root.path(), "shop.customer.Customer");

        let mut resolver = resolver_over(root.path());
        let resolved: Vec<TypeDescriptor> = [
            "shop.customer.Customer",
            "shop.billing.Invoice",
            "shop.billing.LineItem",
        ]
        .iter()
        .filter_map(|name| resolver.try_resolve(name))
        .collect();

        assert_descriptor_names(
            &resolved,
            &[
                "shop.billing.Invoice",
                "shop.billing.LineItem",
                "shop.customer.Customer",
            ],
        );
    }
}
