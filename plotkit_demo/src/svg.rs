// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export for recorded display lists.

use kurbo::{Cap, Rect, Size, Stroke};
use peniko::Brush;
use plotkit_core::{DisplayList, DrawOp, Font, HorizontalAlignment, VerticalAlignment};

/// Serializes `list` into a standalone SVG document of the given canvas size.
pub(crate) fn to_svg_string(list: &DisplayList, size: Size) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = size.width,
        h = size.height,
    ));
    out.push('\n');

    let clips = collect_clips(list);
    if !clips.is_empty() {
        out.push_str("<defs>\n");
        for (i, r) in clips.iter().enumerate() {
            out.push_str(&format!(
                r#"<clipPath id="clip{i}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
            ));
            out.push('\n');
        }
        out.push_str("</defs>\n");
    }

    for op in list.ops() {
        match op {
            DrawOp::StrokeLine {
                line,
                stroke,
                brush,
                ..
            } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" fill="none""#,
                    line.p0.x, line.p0.y, line.p1.x, line.p1.y
                ));
                write_stroke_attrs(&mut out, stroke, brush);
            }
            DrawOp::StrokePath {
                path,
                stroke,
                brush,
                ..
            } => {
                out.push_str(&format!(r#"<path d="{}" fill="none""#, path.to_svg()));
                write_stroke_attrs(&mut out, stroke, brush);
            }
            DrawOp::FillRect { rect, brush, .. } => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                ));
                write_paint_attr(&mut out, "fill", brush);
            }
            DrawOp::FillPath { path, brush, .. } => {
                out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                write_paint_attr(&mut out, "fill", brush);
            }
            DrawOp::Text {
                text,
                pos,
                font,
                h_align,
                v_align,
                ..
            } => {
                out.push_str(&format!(r#"<text x="{}" y="{}""#, pos.x, pos.y));
                write_font_attrs(&mut out, font);
                out.push_str(match h_align {
                    HorizontalAlignment::Left => r#" text-anchor="start""#,
                    HorizontalAlignment::Center => r#" text-anchor="middle""#,
                    HorizontalAlignment::Right => r#" text-anchor="end""#,
                });
                out.push_str(match v_align {
                    VerticalAlignment::Upper => r#" dominant-baseline="hanging""#,
                    VerticalAlignment::Middle => r#" dominant-baseline="middle""#,
                    VerticalAlignment::Lower => r#" dominant-baseline="text-after-edge""#,
                });
                write_common_attrs(&mut out, op, &clips);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
                continue;
            }
            DrawOp::Icon { icon, rect, .. } => {
                out.push_str(&format!(
                    r#"<image href="{}.png" x="{}" y="{}" width="{}" height="{}""#,
                    escape_xml(&icon.name),
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                ));
            }
        }
        write_common_attrs(&mut out, op, &clips);
        out.push_str("/>\n");
    }

    out.push_str("</svg>\n");
    out
}

/// Distinct clip rectangles, in first-use order.
fn collect_clips(list: &DisplayList) -> Vec<Rect> {
    let mut clips: Vec<Rect> = Vec::new();
    for clip in list.ops().iter().filter_map(DrawOp::clip) {
        if !clips.contains(&clip) {
            clips.push(clip);
        }
    }
    clips
}

fn write_common_attrs(out: &mut String, op: &DrawOp, clips: &[Rect]) {
    if let Some(i) = op.clip().and_then(|c| clips.iter().position(|r| *r == c)) {
        out.push_str(&format!(r#" clip-path="url(#clip{i})""#));
    }
    if !op.antialias() {
        out.push_str(r#" shape-rendering="crispEdges""#);
    }
}

fn write_stroke_attrs(out: &mut String, stroke: &Stroke, brush: &Brush) {
    write_paint_attr(out, "stroke", brush);
    out.push_str(&format!(r#" stroke-width="{}""#, stroke.width));
    if !stroke.dash_pattern.is_empty() {
        let dashes: Vec<String> = stroke.dash_pattern.iter().map(f64::to_string).collect();
        out.push_str(&format!(r#" stroke-dasharray="{}""#, dashes.join(" ")));
    }
    out.push_str(match stroke.start_cap {
        Cap::Butt => "",
        Cap::Round => r#" stroke-linecap="round""#,
        Cap::Square => r#" stroke-linecap="square""#,
    });
}

fn write_font_attrs(out: &mut String, font: &Font) {
    out.push_str(&format!(
        r#" font-family="{}" font-size="{}""#,
        escape_xml(font.family.as_css_family()),
        font.size
    ));
    if font.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    write_paint_attr(out, "fill", &Brush::Solid(font.color));
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
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
