use std::path::{Path, PathBuf};

/// Renders `path` relative to `base` when it lives beneath it, else as-is.
pub(crate) fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|b| path.strip_prefix(b).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}

pub(crate) fn current_dir() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|d| d.canonicalize().unwrap_or(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_base_when_nested() {
        let base = Path::new("/repo");
        assert_eq!(
            display_path(Path::new("/repo/app/Home.tsx"), Some(base)),
            Path::new("app/Home.tsx").display().to_string()
        );
    }

    #[test]
    fn keeps_path_outside_base() {
        let base = Path::new("/repo");
        let outside = Path::new("/elsewhere/Home.tsx");
        assert_eq!(display_path(outside, Some(base)), outside.display().to_string());
        assert_eq!(display_path(outside, None), outside.display().to_string());
    }
}
