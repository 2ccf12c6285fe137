//! Combines laid out icons into a single SVG document.

use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use fs_err as fs;
use regex::bytes::Regex;

use crate::layout::Sheet;

/// Writes `sheet` as one SVG document sized to the canvas.
///
/// Each icon's markup is wrapped in a group translated to its position, in
/// the sheet's placement order. Nothing is rescaled.
pub fn compose<W: Write>(sheet: &Sheet, mut output: W) -> io::Result<()> {
    write!(
        output,
        r#"<svg width="{}" height="{}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
        sheet.width, sheet.height
    )?;

    for icon in &sheet.icons {
        write!(output, r#"<g transform="translate({},{})">"#, icon.x, icon.y)?;
        output.write_all(embeddable_markup(&icon.content))?;
        output.write_all(b"</g>")?;
    }

    output.write_all(b"</svg>")?;

    Ok(())
}

pub fn write_sheet(sheet: &Sheet, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(fs::File::create(path)?);
    compose(sheet, &mut file)?;
    file.flush()?;

    log::debug!("Wrote sheet to {}", path.display());

    Ok(())
}

/// An XML declaration or doctype is only valid at the very start of a
/// document, so they're dropped from icons before nesting them.
fn embeddable_markup(content: &[u8]) -> &[u8] {
    lazy_static::lazy_static! {
        static ref PROLOG: Regex =
            Regex::new(r"^(?-u:\xEF\xBB\xBF)?\s*(?:<\?xml[^>]*\?>\s*)?(?:<!DOCTYPE[^>\[]*(?:\[[^\]]*\])?\s*>\s*)?")
                .unwrap();
    }

    match PROLOG.find(content) {
        Some(prolog) => &content[prolog.end()..],
        None => content,
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use sheetpack::VerticalStackPacker;

    use super::*;
    use crate::{icon::Icon, layout::layout};

    fn icon(path: &str, content: &str, width: u32, height: u32) -> Icon {
        Icon::new(PathBuf::from(path), content.as_bytes().to_vec(), width, height)
    }

    fn sample_sheet() -> Sheet {
        layout(
            vec![
                icon("b.svg", r#"<svg width="30" height="5"><path d="b"/></svg>"#, 30, 5),
                icon("a.svg", r#"<svg width="10" height="20"><path d="a"/></svg>"#, 10, 20),
            ],
            &VerticalStackPacker::new(),
        )
        .unwrap()
    }

    fn compose_to_string(sheet: &Sheet) -> String {
        let mut output = Vec::new();
        compose(sheet, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn groups_follow_placement_order() {
        insta::assert_snapshot!(
            compose_to_string(&sample_sheet()),
            @r###"<svg width="30" height="25" fill="none" xmlns="http://www.w3.org/2000/svg"><g transform="translate(0,0)"><svg width="10" height="20"><path d="a"/></svg></g><g transform="translate(0,20)"><svg width="30" height="5"><path d="b"/></svg></g></svg>"###
        );
    }

    #[test]
    fn empty_sheet() {
        let sheet = layout(Vec::new(), &VerticalStackPacker::new()).unwrap();

        assert_eq!(
            compose_to_string(&sheet),
            r#"<svg width="0" height="0" fill="none" xmlns="http://www.w3.org/2000/svg"></svg>"#
        );
    }

    #[test]
    fn composing_twice_is_identical() {
        let sheet = sample_sheet();

        assert_eq!(compose_to_string(&sheet), compose_to_string(&sheet));
    }

    #[test]
    fn strips_prolog_only() {
        let content = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n<svg width=\"1\" height=\"1\"/>\n";

        assert_eq!(
            embeddable_markup(content),
            &b"<svg width=\"1\" height=\"1\"/>\n"[..]
        );
    }

    #[test]
    fn markup_without_prolog_is_untouched() {
        let content = b"<svg width=\"1\" height=\"1\"/>";

        assert_eq!(embeddable_markup(content), &content[..]);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprites.svg");
        let sheet = sample_sheet();

        write_sheet(&sheet, &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            compose_to_string(&sheet)
        );
    }
}
