//! Chart text needs a real font file. Look for one once per process.

use crate::ui::messages::warning;
use plotters::style::{FontStyle, register_font};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Family name every chart text style refers to.
pub const FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: [&str; 12] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Register a font for chart text and return the file it came from.
///
/// `None` means charts are drawn without any text.
pub fn ensure_font(configured: Option<&str>) -> Option<&'static Path> {
    REGISTERED
        .get_or_init(|| {
            if let Some(path) = configured {
                let expanded = crate::utils::path::expand_tilde(path);
                if try_register(&expanded) {
                    return Some(expanded);
                }
                warning(format!(
                    "Configured font '{}' could not be loaded, searching system fonts",
                    expanded.display()
                ));
            }

            let found = SYSTEM_FONTS
                .iter()
                .map(PathBuf::from)
                .find(|p| p.is_file() && try_register(p));

            if found.is_none() {
                warning("No usable font found: charts will be drawn without labels (set `font` in the config)");
            }
            found
        })
        .as_deref()
}

fn try_register(path: &Path) -> bool {
    let Ok(bytes) = fs::read(path) else {
        return false;
    };
    // plotters keeps a reference to the font data for the rest of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FAMILY, FontStyle::Normal, bytes).is_ok()
}
