#![warn(missing_docs)]

//! # Tincture Icons
//!
//! Stateless stroke icons on a 24x24 grid, rendered to SVG markup.
//!
//! ```rust
//! use tincture_icons::{icons, IconProps};
//!
//! let svg = icons::CURRENCY.render(&IconProps::default().with_size(16.0));
//! assert!(svg.contains("width=\"16\""));
//! ```

use indexmap::IndexMap;
use tincture_theme::{Theme, ThemeToken};

/// Built-in icon set.
pub mod icons;

pub use icons::icon_by_name;

/// Default viewBox (all icons are 24x24)
pub const VIEW_BOX: &str = "0 0 24 24";

/// Default stroke width
pub const STROKE_WIDTH: f32 = 2.0;

/// Default icon size in pixels
pub const SIZE: f32 = 24.0;

/// Default stroke color
pub const COLOR: &str = "black";

/// Properties an icon is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct IconProps {
    /// Stroke color.
    pub color: String,
    /// Width and height in pixels.
    pub size: f32,
    /// Stroke width in grid units.
    pub stroke_width: f32,
    /// Extra attributes for the `<svg>` element. These override the defaults.
    pub attrs: IndexMap<String, String>,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            color: COLOR.to_string(),
            size: SIZE,
            stroke_width: STROKE_WIDTH,
            attrs: IndexMap::new(),
        }
    }
}

impl IconProps {
    /// Props colored by the theme's foreground `color` token.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            color: theme.get(ThemeToken::Color).to_string(),
            ..Self::default()
        }
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the width and height.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Pass an extra attribute through to the `<svg>` element.
    ///
    /// Names that are not valid XML names are skipped when rendering.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

/// One shape of an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconNode {
    /// A circle.
    Circle {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        r: f32,
    },
    /// A straight line.
    Line {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
    },
    /// A path.
    Path {
        /// Path data.
        d: &'static str,
    },
    /// A rounded rectangle.
    Rect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Corner radius.
        rx: f32,
    },
    /// An open polyline.
    Polyline {
        /// Space-separated `x,y` pairs.
        points: &'static str,
    },
}

impl IconNode {
    fn to_svg(&self, color: &str) -> String {
        let color = escape(color);
        match self {
            IconNode::Circle { cx, cy, r } => {
                format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" stroke="{color}"/>"#)
            },
            IconNode::Line { x1, y1, x2, y2 } => {
                format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}"/>"#)
            },
            IconNode::Path { d } => format!(r#"<path d="{d}" stroke="{color}"/>"#),
            IconNode::Rect { x, y, width, height, rx } => format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}" stroke="{color}"/>"#
            ),
            IconNode::Polyline { points } => {
                format!(r#"<polyline points="{points}" stroke="{color}"/>"#)
            },
        }
    }
}

/// A named icon made of stroke shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    /// Kebab-case name.
    pub name: &'static str,
    /// Shapes in drawing order.
    pub nodes: &'static [IconNode],
}

impl Icon {
    /// Render the icon as a complete `<svg>` element.
    pub fn render(&self, props: &IconProps) -> String {
        let mut attrs: IndexMap<&str, String> = IndexMap::new();
        attrs.insert("xmlns", "http://www.w3.org/2000/svg".to_string());
        attrs.insert("width", props.size.to_string());
        attrs.insert("height", props.size.to_string());
        attrs.insert("viewBox", VIEW_BOX.to_string());
        attrs.insert("fill", "none".to_string());
        attrs.insert("stroke", props.color.clone());
        attrs.insert("stroke-width", props.stroke_width.to_string());
        attrs.insert("stroke-linecap", "round".to_string());
        attrs.insert("stroke-linejoin", "round".to_string());
        for (name, value) in &props.attrs {
            if !is_xml_name(name) {
                log::warn!("Skipping invalid SVG attribute name {:?} on icon '{}'", name, self.name);
                continue;
            }
            attrs.insert(name.as_str(), value.clone());
        }

        let mut svg = String::from("<svg");
        for (name, value) in &attrs {
            svg.push_str(&format!(r#" {}="{}""#, name, escape(value)));
        }
        svg.push('>');
        for node in self.nodes {
            svg.push_str(&node.to_svg(&props.color));
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Whether `name` can be used as an attribute name in XML.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_theme::{ThemeName, ThemeRegistry};

    #[test]
    fn test_defaults() {
        let svg = icons::CHECK.render(&IconProps::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("viewBox=\"0 0 24 24\""));
        assert!(svg.contains("width=\"24\""));
        assert!(svg.contains("stroke=\"black\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_pass_through_overrides() {
        let props = IconProps::default()
            .with_attr("stroke-width", "1.5")
            .with_attr("aria-label", "close");
        let svg = icons::X.render(&props);
        assert!(svg.contains("stroke-width=\"1.5\""));
        assert!(!svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("aria-label=\"close\""));
    }

    #[test]
    fn test_currency_shapes() {
        let svg = icons::CURRENCY.render(&IconProps::default().with_color("#ff0000"));
        assert!(svg.contains(r##"<circle cx="12" cy="12" r="8" stroke="#ff0000"/>"##));
        assert!(svg.contains(r##"<line x1="21" y1="21" x2="18" y2="18" stroke="#ff0000"/>"##));
        assert_eq!(svg.matches("<line").count(), 4);
    }

    #[test]
    fn test_themed_color() {
        let theme = ThemeRegistry::builtin().get(ThemeName::Dark);
        let props = IconProps::themed(theme);
        assert_eq!(props.color, theme.get(ThemeToken::Color).as_str());
    }

    #[test]
    fn test_escaping() {
        let svg = icons::PLUS.render(&IconProps::default().with_attr("title", "a \"b\" <c>"));
        assert!(svg.contains("title=\"a &quot;b&quot; &lt;c>\""));
    }

    #[test]
    fn test_invalid_attribute_names_are_skipped() {
        let props = IconProps::default()
            .with_attr("x\"><script>alert(1)</script><g a=\"", "1")
            .with_attr("", "empty")
            .with_attr("1st", "digit")
            .with_attr("data-id", "kept");
        let svg = icons::CHECK.render(&props);
        assert!(!svg.contains("<script"));
        assert!(!svg.contains("empty"));
        assert!(!svg.contains("digit"));
        assert!(svg.contains("data-id=\"kept\""));
        assert!(svg.contains("<path"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_xml_names() {
        assert!(is_xml_name("aria-label"));
        assert!(is_xml_name("xlink:href"));
        assert!(is_xml_name("_private.v2"));
        assert!(!is_xml_name("a b"));
        assert!(!is_xml_name("-dash"));
        assert!(!is_xml_name("a=b"));
    }
}
