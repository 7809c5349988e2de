use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to locate the engine crate.
///
/// # Resolution rules
///
/// 1. If `vc_bean` is listed in `dependencies`, return `::vc_bean`.
/// 2. If the facade `vc_beans` is listed in `dependencies`, return `::vc_beans::bean`.
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::vc_bean`.
///
/// `vc_bean` itself declares `extern crate self as vc_bean;`, so the fallback
/// also works for its own tests and doctests.
#[derive(Debug)]
pub(crate) struct Manifest {
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const CRATE_NAME: &str = "vc_bean";
const FACADE_NAME: &str = "vc_beans";
const FACADE_MODULE: &str = "bean";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let manifest = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(manifest).ok()
    }

    fn find_in_deps(deps: &Table) -> Option<syn::Path> {
        if deps.contains_key(CRATE_NAME) {
            return Some(crate_path(&[CRATE_NAME]));
        }
        if deps.contains_key(FACADE_NAME) {
            return Some(crate_path(&[FACADE_NAME, FACADE_MODULE]));
        }
        None
    }

    /// Returns the path of the engine crate as seen from the caller.
    #[inline(never)]
    pub fn get_crate_path(&self) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return crate_path(&[CRATE_NAME]);
        };

        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps)
            {
                return path;
            }
        }

        crate_path(&[CRATE_NAME])
    }

    /// Runs `func` on the caller's manifest, read once per modification.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::get_manifest_modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
            && modified_time.is_some()
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

/// Builds `::a::b` from its segments.
fn crate_path(segments: &[&str]) -> syn::Path {
    let span = proc_macro2::Span::call_site();
    syn::Path {
        leading_colon: Some(<syn::Token![::]>::default()),
        segments: segments
            .iter()
            .map(|name| syn::PathSegment::from(syn::Ident::new(name, span)))
            .collect(),
    }
}
