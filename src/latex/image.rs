//! `\includegraphics` emission.

/// Image attributes that affect the emitted markup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageOptions<'a> {
    /// Percentage, e.g. `50.0` for half size.
    pub scale: Option<f64>,
    pub width: Option<&'a str>,
    pub align: Option<&'a str>,
    /// Whether the image sits inside running text.
    pub inline: bool,
}

/// Markup placed around the image for an alignment value.
///
/// Inline images align against the text line; block images against the
/// page. Values that do not apply to the image's placement are ignored.
fn alignment(inline: bool, align: &str) -> Option<(&'static str, &'static str)> {
    match (inline, align) {
        // LaTeX aligns the top of an image by default.
        (true, "top") => Some(("", "")),
        (true, "middle") => Some(("\\raisebox{-0.5\\height}{", "}")),
        (true, "bottom") => Some(("\\raisebox{-\\height}{", "}")),
        (false, "center") => Some(("{\\hfill", "\\hfill}")),
        (false, "left") => Some(("{", "\\hfill}")),
        (false, "right") => Some(("{\\hfill", "}")),
        _ => None,
    }
}

/// Render an image whose URI is already resolved.
pub fn render_image(path: &str, options: &ImageOptions<'_>) -> String {
    let align = options.align.and_then(|align| alignment(options.inline, align));
    let mut out = String::new();

    if !options.inline {
        out.push('\n');
    }
    if let Some((pre, _)) = align {
        out.push_str(pre);
    }
    if let Some(scale) = options.scale {
        out.push_str(&format!("\\scalebox{{{:.6}}}{{", scale / 100.0));
    }

    out.push_str("\\includegraphics");
    if let Some(width) = options.width {
        out.push_str(&format!("[width={width}]"));
    }
    out.push_str(&format!("{{{path}}}"));

    if options.scale.is_some() {
        out.push('}');
    }
    if let Some((_, post)) = align {
        out.push_str(post);
    }
    if !options.inline {
        out.push('\n');
    }
    out
}
