use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// (background, accent) fill pairs for the generated avatars
const PALETTE: [(&str, &str); 7] = [
    ("#d7d4ef", "#3949ab"),
    ("#fbd3e9", "#f50057"),
    ("#d7efd4", "#00bfa5"),
    ("#efd7d4", "#ff3d00"),
    ("#d7ebef", "#2196f3"),
    ("#efecd7", "#ffab00"),
    ("#e7d7ef", "#9c27b0"),
];

fn avatar_svg(background: &str, accent: &str) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 231 231">"#,
            r#"<path d="M33.83,33.83a115.5,115.5,0,1,1,0,163.34,115.49,115.49,0,0,1,0-163.34Z" style="fill:{bg};"/>"#,
            r#"<path d="m147.97,23.76c-60.27,5-107.7,52.43-112.7,112.7L93.03,178.26l85.21-41.93V23.76Z" style="fill:{accent};"/>"#,
            r#"<circle cx="115.5" cy="112.5" r="36.5" style="fill:#fff;"/></svg>"#
        ),
        bg = background,
        accent = accent,
    )
}

/// Placeholder avatar as a base64 SVG data URI; the palette wraps around.
pub fn default_avatar(index: usize) -> String {
    let (background, accent) = PALETTE[index % PALETTE.len()];
    let svg = avatar_svg(background, accent);
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_decodes_to_svg_with_palette_colors() {
        let uri = default_avatar(1);
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("fill:#fbd3e9;"));
        assert!(svg.contains("fill:#f50057;"));
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(default_avatar(0), default_avatar(PALETTE.len()));
        assert_ne!(default_avatar(0), default_avatar(1));
    }
}
