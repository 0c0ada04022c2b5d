//! Small host probing helpers.

use std::path::Path;

/// Whether `name` resolves to an executable file on the `PATH`.
///
/// An absolute or relative path argument is checked directly.
pub(crate) fn binary_on_path(name: &str) -> bool {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return candidate.is_file();
    }

    let Some(path_var) = std::env::var_os("PATH") else {
        return false;
    };

    std::env::split_paths(&path_var).any(|dir| {
        let full = dir.join(name);
        if full.is_file() {
            return true;
        }
        // Windows resolves executables through PATHEXT extensions.
        if cfg!(windows) {
            return full.with_extension("exe").is_file();
        }
        false
    })
}
