use std::fs;
use std::path::{Path, PathBuf};

fn add_watch_path(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return; };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn main() {
    // site.json is pulled in with include_str!, and the stylesheet through asset!.
    // Watch the whole assets tree so edits to either trigger a rebuild.
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let assets_root = manifest_dir.join("assets");

    add_watch_path(&assets_root);

    let mut files = Vec::new();
    walk_dir(&assets_root, &mut files);
    for file in files {
        if file
            .extension()
            .is_some_and(|ext| ext == "json" || ext == "css")
        {
            add_watch_path(&file);
        }
    }
}
