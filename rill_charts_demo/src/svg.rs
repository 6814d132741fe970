// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for `rill_charts` marks.

use peniko::Brush;
use rill_charts::{Mark, MarkPayload, Size, TextAnchor, TextBaseline};

/// Renders a z-sorted mark list as an SVG document.
pub(crate) fn render(view: Size, marks: &[Mark]) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="xMinYMin meet">"#,
        w = view.width,
        h = view.height,
    ));
    out.push('\n');

    for mark in marks {
        let opacity = if mark.opacity < 1.0 {
            format!(r#" opacity="{}""#, mark.opacity)
        } else {
            String::new()
        };
        match &mark.payload {
            MarkPayload::Rect(r) => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                ));
                write_paint_attr(&mut out, "fill", &r.fill);
                out.push_str(&opacity);
                out.push_str("/>\n");
            }
            MarkPayload::Path(p) => {
                let d = p.path.to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_paint_attr(&mut out, "fill", &p.fill);
                if let Some(stroke) = &p.stroke {
                    write_paint_attr(&mut out, "stroke", &stroke.brush);
                    out.push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
                }
                out.push_str(&opacity);
                out.push_str("/>\n");
            }
            MarkPayload::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                    t.pos.x, t.pos.y, t.font_size, baseline
                ));
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push_str(&opacity);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let paint_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, paint_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use peniko::color::palette::css;
    use rill_charts::{PLOT_BACKGROUND, TOOLTIP};

    use super::*;

    #[test]
    fn renders_rects_text_and_opacity() {
        let marks = vec![
            Mark::rect(PLOT_BACKGROUND, Rect::new(0.0, 0.0, 10.0, 10.0), css::WHITE),
            Mark::text(
                TOOLTIP,
                Point::new(1.0, 2.0),
                "1999 <gross>",
                10.0,
                TextAnchor::Start,
                TextBaseline::Hanging,
                css::BLACK,
            )
            .with_opacity(0.5),
        ];
        let svg = render(
            Size {
                width: 10.0,
                height: 10.0,
            },
            &marks,
        );
        assert!(svg.contains("<rect"), "rect element missing");
        assert!(svg.contains("1999 &lt;gross&gt;"), "text must be escaped");
        assert!(svg.contains(r#"opacity="0.5""#), "opacity attribute missing");
        assert!(svg.ends_with("</svg>\n"), "document must be closed");
    }
}
