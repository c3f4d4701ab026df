//! Vector geometry of the INCO logo and its standalone SVG export.
//!
//! The canvas, the gallery previews and the copy/download actions all draw
//! from `LOGO_PATHS`, so a saved design looks the same everywhere.

#[cfg(test)]
#[path = "logo_svg_test.rs"]
mod logo_svg_test;

use crate::net::types::{LogoColorSet, LogoRegion};

pub const LOGO_VIEW_BOX: &str = "0 0 738 248";
pub const LOGO_WIDTH: u32 = 738;
pub const LOGO_HEIGHT: u32 = 248;

/// Region paths in paint order (background before the strokes on top of it).
pub const LOGO_PATHS: [(LogoRegion, &str); 8] = [
    (
        LogoRegion::Background,
        "M24 56C24 38.3269 38.2886 24 55.9145 24H191.551C209.177 24 223.466 38.3269 223.466 56V192C223.466 209.673 209.177 224 191.551 224H55.9145C38.2886 224 24 209.673 24 192V56Z",
    ),
    (LogoRegion::Line1, "M61.8986 162L82.0047 86H103.786L83.6802 162H61.8986Z"),
    (LogoRegion::Line2, "M103.786 162L123.893 86H145.674L125.568 162H103.786Z"),
    (LogoRegion::Line3, "M145.674 162L165.78 86H187.562L167.456 162H145.674Z"),
    (LogoRegion::LetterI, "M287.295 175.68V72H309.268V175.68H287.295Z"),
    (
        LogoRegion::LetterN,
        "M338.834 175.68V72H361.812L419.689 141.12V72H442.237V175.68H419.258L361.094 106.272V175.68H338.834Z",
    ),
    (
        LogoRegion::LetterC,
        "M496.815 175.68C492.89 175.68 489.299 174.72 486.044 172.8C482.885 170.88 480.347 168.336 478.432 165.168C476.518 161.904 475.56 158.304 475.56 154.368V93.312C475.56 89.376 476.518 85.824 478.432 82.656C480.347 79.392 482.885 76.8 486.044 74.88C489.299 72.96 492.89 72 496.815 72H578.676V94.464H502.56C501.028 94.464 499.831 94.848 498.969 95.616C498.204 96.384 497.821 97.584 497.821 99.216V148.464C497.821 150 498.204 151.2 498.969 152.064C499.831 152.832 501.028 153.216 502.56 153.216H578.676V175.68H496.815Z",
    ),
    (
        LogoRegion::LetterO,
        "M631.852 175.68C628.022 175.68 624.48 174.72 621.224 172.8C617.969 170.88 615.384 168.288 613.469 165.024C611.554 161.76 610.597 158.208 610.597 154.368V93.312C610.597 89.376 611.554 85.824 613.469 82.656C615.384 79.392 617.969 76.8 621.224 74.88C624.48 72.96 628.022 72 631.852 72H692.745C696.575 72 700.069 72.96 703.229 74.88C706.484 76.8 709.069 79.392 710.984 82.656C712.995 85.824 714 89.376 714 93.312V154.368C714 158.208 712.995 161.76 710.984 165.024C709.069 168.288 706.484 170.88 703.229 172.8C700.069 174.72 696.575 175.68 692.745 175.68H631.852ZM632.857 153.216H691.452V94.464H632.857V153.216Z",
    ),
];

/// Standalone SVG document for `colors`.
pub fn logo_svg_markup(colors: &LogoColorSet) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{LOGO_WIDTH}" height="{LOGO_HEIGHT}" viewBox="{LOGO_VIEW_BOX}" fill="none">"#
    );
    for (region, path) in LOGO_PATHS {
        svg.push_str(&format!(r#"<path d="{path}" fill="{}"/>"#, colors.get(region)));
    }
    svg.push_str("</svg>");
    svg
}
