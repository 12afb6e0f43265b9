//! Deterministic output placement.
//!
//! Every entity maps to `<base>/<Name_with_underscores>/<same>.jpg`. The
//! mapping is pure, so re-runs land on the same path and overwrite instead
//! of duplicating.

use std::path::{Path, PathBuf};

/// Fixed extension for normalized output images.
pub const OUTPUT_EXT: &str = "jpg";

/// Replaces every whitespace character in an entity name with `_`.
pub fn sanitize_entity_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Per-entity subdirectory under the base output dir.
pub fn entity_dir(base: &Path, entity_name: &str) -> PathBuf {
    base.join(sanitize_entity_name(entity_name))
}

/// Final output path: `<base>/<Name>/<Name>.jpg`.
pub fn output_path(base: &Path, entity_name: &str) -> PathBuf {
    let name = sanitize_entity_name(entity_name);
    base.join(&name).join(format!("{}.{}", name, OUTPUT_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_name_maps_to_underscored_path() {
        let p = output_path(Path::new("Images"), "Turdus merula");
        assert_eq!(
            p,
            Path::new("Images").join("Turdus_merula").join("Turdus_merula.jpg")
        );
    }

    #[test]
    fn all_whitespace_replaced() {
        assert_eq!(sanitize_entity_name("a b\tc\nd"), "a_b_c_d");
    }

    #[test]
    fn same_name_same_path() {
        let base = Path::new("out");
        assert_eq!(output_path(base, "Pica pica"), output_path(base, "Pica pica"));
    }

    #[test]
    fn entity_dir_is_parent_of_output_path() {
        let base = Path::new("Images");
        let dir = entity_dir(base, "Alcedo atthis");
        let file = output_path(base, "Alcedo atthis");
        assert_eq!(file.parent(), Some(dir.as_path()));
    }
}
