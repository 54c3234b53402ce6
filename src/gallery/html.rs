//! Self-contained HTML page with embedded CSS and play-all script

use crate::gallery::{Cell, Gallery, Row, RowGroup, SectionView};
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, gallery: &Gallery) -> io::Result<()> {
    writer.write_all(render(gallery).as_bytes())
}

/// Render the full document
///
/// Output depends only on the gallery, so the same videos root and
/// annotations always give the same bytes.
pub fn render(gallery: &Gallery) -> String {
    let intro = if gallery.introduction.is_empty() {
        String::new()
    } else {
        format!("    <p class=\"intro\">{}</p>\n", html_escape(&gallery.introduction))
    };
    let sections: String = gallery.sections.iter().map(render_section).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{document_title}</title>
    <style>{css}</style>
    <script>{js}</script>
</head>
<body>
    <h1>{title}</h1>
{intro}{sections}</body>
</html>
"#,
        document_title = html_escape(&gallery.document_title),
        css = inline_css(),
        js = inline_javascript(),
        title = html_escape(&gallery.title),
        intro = intro,
        sections = sections,
    )
}

fn render_section(section: &SectionView) -> String {
    let class = match &section.class {
        Some(extra) => format!("video-section {}", html_escape(extra)),
        None => "video-section".to_string(),
    };

    let mut out = format!(
        "    <div class=\"{}\">\n        <h2>{}</h2>\n",
        class,
        html_escape(&section.title)
    );
    if !section.description.is_empty() {
        out.push_str(&format!(
            "        <p class=\"section-description\">{}</p>\n",
            html_escape(&section.description)
        ));
    }
    for group in &section.groups {
        out.push_str(&render_group(group));
    }
    out.push_str("    </div>\n");
    out
}

fn render_group(group: &RowGroup) -> String {
    let mut out = String::new();
    if let Some(prompt) = &group.prompt {
        out.push_str(&format!(
            "        <p class=\"comparison-prompt\">{}</p>\n",
            html_escape(prompt)
        ));
    }

    out.push_str("        <div class=\"row-group\">\n");
    if group.play_button {
        out.push_str(&format!(
            "            <button class=\"play-row-btn\" onclick=\"{}\">&#9654; Play All Videos in Row</button>\n",
            html_escape(&play_action(&group.row_ids()))
        ));
    }
    for row in &group.rows {
        out.push_str(&render_row(row));
    }
    out.push_str("        </div>\n");
    out
}

/// Script call bound to a group's button
fn play_action(ids: &[&str]) -> String {
    match ids {
        [single] => format!("playRow('{}')", js_escape(single)),
        _ => {
            let quoted: Vec<String> = ids.iter().map(|id| format!("'{}'", js_escape(id))).collect();
            format!("playRows([{}])", quoted.join(","))
        }
    }
}

fn render_row(row: &Row) -> String {
    let ratio = row.ratio.css_class();
    let cells: String = row.cells.iter().map(|c| render_cell(c, ratio)).collect();
    format!(
        "            <div class=\"{}\" id=\"{}\">\n{}            </div>\n",
        row.kind.css_class(),
        html_escape(&row.id),
        cells
    )
}

fn render_cell(cell: &Cell, ratio_class: &str) -> String {
    match cell {
        Cell::Video { src, mime, caption } => format!(
            r#"                <div class="video-container">
                    <video class="{ratio}" controls muted loop playsinline preload="metadata">
                        <source src="{src}" type="{mime}">
                    </video>
                    <p>{caption}</p>
                </div>
"#,
            ratio = ratio_class,
            src = html_escape(&url_escape(src)),
            mime = mime,
            caption = html_escape(caption),
        ),
        Cell::Placeholder { label } => format!(
            r#"                <div class="video-container">
                    <div class="{ratio} video-placeholder">Not Available</div>
                    <p>{label}</p>
                </div>
"#,
            ratio = ratio_class,
            label = html_escape(label),
        ),
    }
}

fn inline_css() -> &'static str {
    r#"
        body { font-family: Arial, sans-serif; margin: 0 auto; max-width: 1200px; padding: 20px; color: #333; }
        h1 { text-align: center; }
        h2 {
            text-align: center;
            border-bottom: 2px solid #ccc;
            padding-bottom: 10px;
            margin-top: 40px;
        }
        .intro { text-align: left; margin-bottom: 40px; font-size: 1.1em; line-height: 1.6; }
        .section-description { font-size: 0.95em; color: #555; margin-top: -5px; margin-bottom: 25px; }
        .comparison-prompt {
            width: 100%;
            text-align: center;
            font-weight: bold;
            font-size: 1.1em;
            margin-top: 30px;
            margin-bottom: 5px;
            padding: 0 10px;
            box-sizing: border-box;
        }
        .video-section { margin-bottom: 30px; }
        .row-group { margin-bottom: 10px; }

        .video-row,
        .video-row-leading,
        .video-row-trailing {
            display: flex;
            flex-wrap: wrap;
            gap: 15px;
            margin: 0;
            align-items: flex-start;
            justify-content: center;
        }
        .video-row-leading { margin-bottom: 10px; }
        .video-container {
            flex: 1 0 0;
            margin: 0;
            box-sizing: border-box;
            text-align: center;
            display: flex;
            flex-direction: column;
            max-width: 180px;
        }
        .video-fixed-ratio { width: 100%; aspect-ratio: 2 / 3; object-fit: contain; background-color: #000; border: 1px solid #ddd; }
        .video-auto-ratio { width: 100%; height: auto; object-fit: contain; background-color: #000; border: 1px solid #ddd; }
        .video-square-ratio { width: 100%; aspect-ratio: 1 / 1; object-fit: contain; background-color: #000; border: 1px solid #ddd; }
        .video-portrait-ratio { width: 100%; aspect-ratio: 16 / 9; object-fit: contain; background-color: #000; border: 1px solid #ddd; }
        .video-original-size { max-width: 100%; height: auto; object-fit: contain; background-color: #000; border: 1px solid #ddd; }
        .video-placeholder {
            background-color: #f0f0f0;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #999;
        }
        .video-container p { margin-top: 8px; font-size: 14px; color: #555; word-wrap: break-word; }

        .non-human-section .video-container { max-width: 320px; }
        .non-human-section .video-portrait-ratio { max-width: 320px; }

        /* Demo video spans the page */
        .demo-section .video-container { max-width: 800px; margin: 0 auto; }
        .demo-section .video-original-size {
            width: 100%;
            aspect-ratio: 16 / 9;
            object-fit: cover;
            display: block;
            background: #000;
        }

        .play-row-btn {
            display: inline-block;
            margin-bottom: 10px;
            background: #6c757d;
            color: #ffffff;
            border: none;
            border-radius: 4px;
            padding: 5px 18px;
            cursor: pointer;
            font-size: 15px;
            transition: background 0.2s ease;
        }
        .play-row-btn:hover { background: #495057; }
    "#
}

fn inline_javascript() -> &'static str {
    r#"
        // Restart every video in one row. A video that refuses to play must
        // not stop its neighbours.
        function playRow(rowId) {
            var row = document.getElementById(rowId);
            if (!row) return;
            var videos = row.getElementsByTagName('video');
            for (var i = 0; i < videos.length; i++) {
                try {
                    videos[i].currentTime = 0;
                    var started = videos[i].play();
                    if (started && typeof started.catch === 'function') {
                        started.catch(function () {});
                    }
                } catch (e) {}
            }
        }

        function playRows(rowIds) {
            for (var i = 0; i < rowIds.length; i++) {
                playRow(rowIds[i]);
            }
        }
    "#
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode the characters that would otherwise end or corrupt a
/// relative URL path
fn url_escape(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            _ => out.push(c),
        }
    }
    out
}

fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
