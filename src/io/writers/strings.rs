use std::io::Cursor;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// `<string name="...">` entries that carry the user-visible application name.
pub const APP_NAME_KEYS: [&str; 2] = ["app_name", "title_activity_main"];

pub fn strings_path(res_dir: &Path) -> PathBuf {
    res_dir.join("values").join("strings.xml")
}

fn is_app_name_entry(e: &BytesStart<'_>) -> Result<bool> {
    if e.name().as_ref() != b"string" {
        return Ok(false);
    }
    Ok(match e.try_get_attribute("name")? {
        Some(attr) => APP_NAME_KEYS
            .iter()
            .any(|key| attr.value.as_ref() == key.as_bytes()),
        None => false,
    })
}

/// Replace the text of every app-name entry in `xml` with `app_name`.
/// Returns the rewritten document and the number of entries replaced;
/// everything else passes through unchanged.
pub fn rename_app(xml: &str, app_name: &str) -> Result<(String, usize)> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    // Nesting depth inside an entry being replaced.
    let mut replacing: Option<usize> = None;
    let mut replaced = 0;

    loop {
        let event = reader.read_event()?;
        if let Some(depth) = replacing {
            match event {
                Event::Start(_) => replacing = Some(depth + 1),
                Event::End(e) if depth == 0 => {
                    writer.write_event(Event::End(e))?;
                    replacing = None;
                }
                Event::End(_) => replacing = Some(depth - 1),
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(e) if is_app_name_entry(&e)? => {
                writer.write_event(Event::Start(e))?;
                writer.write_event(Event::Text(BytesText::new(app_name)))?;
                replacing = Some(0);
                replaced += 1;
            }
            Event::Eof => break,
            e => writer.write_event(e)?,
        }
    }

    let bytes = writer.into_inner().into_inner();
    let out = String::from_utf8(bytes)
        .map_err(|e| Error::Processing(format!("strings.xml is not UTF-8: {}", e)))?;
    Ok((out, replaced))
}

/// Rewrite `values/strings.xml` under `res_dir` so the launcher shows
/// `app_name`. A missing file is not an error; `Ok(None)` is returned.
pub fn update_app_name(res_dir: &Path, app_name: &str) -> Result<Option<usize>> {
    let path = strings_path(res_dir);
    if !path.exists() {
        warn!("strings.xml not found: {:?}", path);
        return Ok(None);
    }

    let xml = std::fs::read_to_string(&path)?;
    let (updated, replaced) = rename_app(&xml, app_name)?;
    if updated != xml {
        std::fs::write(&path, updated)?;
    }
    info!(
        "strings.xml updated with name {:?} ({} entries)",
        app_name, replaced
    );
    Ok(Some(replaced))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRINGS: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<resources>
    <string name="app_name">Grimoire</string>
    <string name="title_activity_main">Grimoire</string>
    <string name="package_name">com.example.grimoire</string>
    <string name="custom_url_scheme">com.example.grimoire</string>
</resources>
"#;

    #[test]
    fn replaces_only_app_name_entries() {
        let (out, replaced) = rename_app(STRINGS, "Morsmordre").unwrap();
        assert_eq!(replaced, 2);
        assert!(out.contains(r#"<string name="app_name">Morsmordre</string>"#));
        assert!(out.contains(r#"<string name="title_activity_main">Morsmordre</string>"#));
        assert!(out.contains(r#"<string name="package_name">com.example.grimoire</string>"#));
        assert!(out.starts_with("<?xml version='1.0' encoding='utf-8'?>"));
    }

    #[test]
    fn nested_markup_is_replaced_wholesale() {
        let xml = r#"<resources><string name="app_name">My <b>App</b></string></resources>"#;
        let (out, replaced) = rename_app(xml, "Plain").unwrap();
        assert_eq!(replaced, 1);
        assert_eq!(
            out,
            r#"<resources><string name="app_name">Plain</string></resources>"#
        );
    }

    #[test]
    fn name_is_escaped() {
        let xml = r#"<resources><string name="app_name">x</string></resources>"#;
        let (out, _) = rename_app(xml, "Salt & <Pepper>").unwrap();
        assert!(out.contains("Salt &amp; &lt;Pepper&gt;"));
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(update_app_name(dir.path(), "Morsmordre").unwrap(), None);
    }

    #[test]
    fn file_is_rewritten_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = strings_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, STRINGS).unwrap();

        assert_eq!(update_app_name(dir.path(), "Morsmordre").unwrap(), Some(2));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#"<string name="app_name">Morsmordre</string>"#));
    }
}
