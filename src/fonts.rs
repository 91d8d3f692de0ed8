// SPDX-License-Identifier: MPL-2.0
//! Brand font faces.
//!
//! The font files are not shipped with the crate. When `[fonts] directory`
//! is configured, the faces found there are handed to Iced at startup;
//! missing faces are logged and text falls back to the default font.

use crate::error::{Error, Result};
use iced::font::{Family, Weight};
use iced::Font;
use std::fs;
use std::path::Path;

/// A font face the page styles refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace {
    /// Family name stored in the font file.
    pub family: &'static str,
    pub file: &'static str,
    /// Supported weight range of the (variable) face.
    pub weight_range: (u16, u16),
    /// Logical name used by the styles.
    pub variable: &'static str,
}

pub const KLAVIKA_MEDIUM: FontFace = FontFace {
    family: "BAM Klavika",
    file: "BAMKlavika-Medium.ttf",
    weight_range: (100, 900),
    variable: "font-klavika-medium",
};

pub const KLAVIKA_LIGHT: FontFace = FontFace {
    family: "BAM Klavika",
    file: "BAMKlavika-Light.ttf",
    weight_range: (100, 900),
    variable: "font-klavika-light",
};

pub const GEIST_MONO: FontFace = FontFace {
    family: "Geist Mono",
    file: "GeistMonoVF.woff",
    weight_range: (100, 900),
    variable: "font-geist-mono",
};

pub const FACES: [FontFace; 3] = [KLAVIKA_MEDIUM, KLAVIKA_LIGHT, GEIST_MONO];

/// Headings and prominent labels.
pub const HEADING: Font = Font {
    family: Family::Name(KLAVIKA_MEDIUM.family),
    weight: Weight::Medium,
    ..Font::DEFAULT
};

/// Running text.
pub const BODY: Font = Font {
    family: Family::Name(KLAVIKA_LIGHT.family),
    weight: Weight::Light,
    ..Font::DEFAULT
};

/// Raw bytes of a face read from disk.
#[derive(Debug)]
pub struct LoadedFace {
    pub face: FontFace,
    pub bytes: Vec<u8>,
}

/// Reads one face from `dir`.
pub fn read_face(dir: &Path, face: FontFace) -> Result<LoadedFace> {
    let path = dir.join(face.file);
    let bytes =
        fs::read(&path).map_err(|err| Error::Font(format!("{}: {err}", path.display())))?;
    Ok(LoadedFace { face, bytes })
}

/// Reads every known face available in `dir`, logging the ones that are not.
pub fn read_faces(dir: &Path) -> Vec<LoadedFace> {
    FACES
        .into_iter()
        .filter_map(|face| match read_face(dir, face) {
            Ok(loaded) => Some(loaded),
            Err(err) => {
                tracing::warn!(variable = face.variable, %err, "font face unavailable");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn variables_are_unique() {
        for (i, a) in FACES.iter().enumerate() {
            for b in &FACES[i + 1..] {
                assert_ne!(a.variable, b.variable);
            }
        }
    }

    #[test]
    fn read_faces_skips_missing_files() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(GEIST_MONO.file), b"not really a font")
            .expect("failed to write font file");

        let loaded = read_faces(dir.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].face, GEIST_MONO);
        assert_eq!(loaded[0].bytes, b"not really a font");
    }

    #[test]
    fn read_face_reports_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = read_face(dir.path(), KLAVIKA_LIGHT).unwrap_err();
        assert!(matches!(err, Error::Font(message) if message.contains("BAMKlavika-Light.ttf")));
    }
}
