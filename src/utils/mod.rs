// imgprep/src/utils/mod.rs
use image::{ExtendedColorType, ImageFormat};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path};

pub const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Suffix check used by the analyzer; ignores case.
pub fn is_image_file_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Suffix check used by the normalizer; `IMG.PNG` does not match.
pub fn has_image_suffix(name: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Last component of `dir` after lexical normalization.
///
/// `..` cancels the preceding name, leading `..` segments are kept, and a
/// path that collapses to the root yields an empty name.
pub fn dir_base_name(dir: &Path) -> OsString {
    let mut absolute = false;
    let mut parts: Vec<&OsStr> = Vec::new();

    for component in dir.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| *last != OsStr::new("..")) {
                    parts.pop();
                } else if !absolute {
                    // `..` above the root stays at the root
                    parts.push(OsStr::new(".."));
                }
            }
            Component::Normal(name) => parts.push(name),
        }
    }

    match parts.last() {
        Some(name) => name.to_os_string(),
        None if absolute => OsString::new(),
        None => OsString::from("."),
    }
}

pub fn output_file_name(base_name: &OsStr, file_name: &OsStr) -> OsString {
    let mut name = base_name.to_os_string();
    name.push("_");
    name.push(file_name);
    name
}

pub fn format_percentage(count: usize, total: usize) -> String {
    format!("{:.2}", count as f64 / total as f64 * 100.0)
}

pub fn image_format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Png => "PNG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Pnm => "PPM",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Dds => "DDS",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Ico => "ICO",
        ImageFormat::Hdr => "HDR",
        ImageFormat::OpenExr => "OPENEXR",
        ImageFormat::Farbfeld => "FARBFELD",
        ImageFormat::Avif => "AVIF",
        ImageFormat::Qoi => "QOI",
        _ => "UNKNOWN",
    }
    .to_string()
}

/// Short channel-layout tag for a decoder's native color type.
pub fn color_mode_tag(color: ExtendedColorType) -> String {
    match color {
        ExtendedColorType::L1 => "1",
        ExtendedColorType::L8 => "L",
        ExtendedColorType::La8 => "LA",
        ExtendedColorType::Rgb8 => "RGB",
        ExtendedColorType::Rgba8 => "RGBA",
        ExtendedColorType::L16 => "I;16",
        ExtendedColorType::La16 => "LA;16",
        ExtendedColorType::Rgb16 => "RGB;16",
        ExtendedColorType::Rgba16 => "RGBA;16",
        ExtendedColorType::Rgb32F => "RGB;F",
        ExtendedColorType::Rgba32F => "RGBA;F",
        ExtendedColorType::Cmyk8 => "CMYK",
        other => return format!("{:?}", other).to_uppercase(),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn analyzer_suffixes_ignore_case() {
        assert!(is_image_file_name("a.PNG"));
        assert!(is_image_file_name("b.Jpeg"));
        assert!(is_image_file_name("c.jpg"));
        assert!(!is_image_file_name("d.gif"));
        assert!(!is_image_file_name("image_analysis.txt"));
    }

    #[test]
    fn normalizer_suffixes_are_case_sensitive() {
        assert!(has_image_suffix("a.png"));
        assert!(has_image_suffix("b.jpeg"));
        assert!(!has_image_suffix("c.JPG"));
        assert!(!has_image_suffix("d.bmp"));
    }

    #[test]
    fn base_name_strips_trailing_separator() {
        assert_eq!(dir_base_name(Path::new("data/cats/")), "cats");
        assert_eq!(dir_base_name(Path::new("data/cats")), "cats");
        assert_eq!(dir_base_name(Path::new("data/cats/..")), "data");
        assert_eq!(dir_base_name(Path::new("./data/./cats/")), "cats");
    }

    #[test]
    fn base_name_follows_lexical_normalization() {
        assert_eq!(dir_base_name(Path::new(".")), ".");
        assert_eq!(dir_base_name(Path::new("a/..")), ".");
        assert_eq!(dir_base_name(&PathBuf::new()), ".");
        assert_eq!(dir_base_name(Path::new("..")), "..");
        assert_eq!(dir_base_name(Path::new("../x/..")), "..");
        assert_eq!(dir_base_name(Path::new("../../y")), "y");
        assert_eq!(dir_base_name(Path::new("/")), "");
        assert_eq!(dir_base_name(Path::new("/..")), "");
        assert_eq!(dir_base_name(Path::new("/srv/../photos")), "photos");
    }

    #[test]
    fn output_name_prefixes_base() {
        let name = output_file_name(OsStr::new("cats"), OsStr::new("img.png"));
        assert_eq!(name, "cats_img.png");
    }

    #[test]
    fn percentage_has_two_decimals() {
        assert_eq!(format_percentage(3, 4), "75.00");
        assert_eq!(format_percentage(1, 3), "33.33");
        assert_eq!(format_percentage(2, 3), "66.67");
    }

    #[test]
    fn color_modes_map_to_tags() {
        assert_eq!(color_mode_tag(ExtendedColorType::Rgb8), "RGB");
        assert_eq!(color_mode_tag(ExtendedColorType::L8), "L");
        assert_eq!(color_mode_tag(ExtendedColorType::Rgba8), "RGBA");
    }
}
