//! DOCX and PPTX extraction
//!
//! Both formats are ZIP containers of XML parts. Text lives in run elements
//! (`<w:t>` for Word, `<a:t>` for slides) grouped into paragraphs
//! (`<w:p>` / `<a:p>`).

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use zip::ZipArchive;

use crate::error::{AssayError, Result};

const DOCX_BODY: &str = "word/document.xml";
const SLIDE_PREFIX: &str = "ppt/slides/slide";

static WORD_PARAGRAPH_RE: OnceLock<Regex> = OnceLock::new();
static WORD_RUN_RE: OnceLock<Regex> = OnceLock::new();
static SLIDE_PARAGRAPH_RE: OnceLock<Regex> = OnceLock::new();
static SLIDE_RUN_RE: OnceLock<Regex> = OnceLock::new();
static WORD_HEADING_RE: OnceLock<Regex> = OnceLock::new();

struct Markup {
    paragraph: &'static OnceLock<Regex>,
    paragraph_pattern: &'static str,
    run: &'static OnceLock<Regex>,
    run_pattern: &'static str,
    /// Paragraph styles become markdown heading markers
    styled_headings: bool,
}

static WORD: Markup = Markup {
    paragraph: &WORD_PARAGRAPH_RE,
    paragraph_pattern: r"(?s)<w:p[\s>].*?</w:p>",
    run: &WORD_RUN_RE,
    run_pattern: r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>",
    styled_headings: true,
};

static SLIDE: Markup = Markup {
    paragraph: &SLIDE_PARAGRAPH_RE,
    paragraph_pattern: r"(?s)<a:p[\s>].*?</a:p>",
    run: &SLIDE_RUN_RE,
    run_pattern: r"(?s)<a:t(?:\s[^>]*)?>(.*?)</a:t>",
    styled_headings: false,
};

impl Markup {
    fn paragraph_re(&self) -> &Regex {
        self.paragraph
            .get_or_init(|| Regex::new(self.paragraph_pattern).expect("valid paragraph regex"))
    }

    fn run_re(&self) -> &Regex {
        self.run
            .get_or_init(|| Regex::new(self.run_pattern).expect("valid run regex"))
    }

    /// Non-empty paragraphs, runs concatenated, entities decoded.
    ///
    /// With `styled_headings`, a `HeadingN` paragraph is prefixed with N `#`
    /// and a `Title` paragraph with one.
    fn paragraphs(&self, xml: &str) -> Vec<String> {
        self.paragraph_re()
            .find_iter(xml)
            .filter_map(|para| {
                let text: String = self
                    .run_re()
                    .captures_iter(para.as_str())
                    .filter_map(|c| c.get(1))
                    .map(|m| decode_entities(m.as_str()))
                    .collect();
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                let level = if self.styled_headings {
                    heading_level(para.as_str())
                } else {
                    None
                };
                Some(match level {
                    Some(level) => format!("{} {}", "#".repeat(level), text),
                    None => text.to_string(),
                })
            })
            .collect()
    }
}

/// Heading depth from a Word paragraph's `<w:pStyle>`
fn heading_level(paragraph: &str) -> Option<usize> {
    let re = WORD_HEADING_RE.get_or_init(|| {
        Regex::new(r#"(?i)<w:pStyle\s+w:val="(?:(title)|heading\s*([1-6]))"\s*/?>"#)
            .expect("valid heading style regex")
    });
    let caps = re.captures(paragraph)?;
    if caps.get(1).is_some() {
        return Some(1);
    }
    caps.get(2)?.as_str().parse().ok()
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| AssayError::io_operation("open", path.display(), e))?;
    ZipArchive::new(file).map_err(|e| AssayError::io_operation("read archive", path.display(), e))
}

fn read_part(archive: &mut ZipArchive<File>, name: &str, path: &Path) -> Result<String> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| AssayError::io_operation("open part", format!("{}:{}", path.display(), name), e))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| AssayError::io_operation("read part", format!("{}:{}", path.display(), name), e))?;
    Ok(xml)
}

/// Paragraphs of the Word body, one per line
pub(super) fn extract_docx(path: &Path) -> Result<String> {
    let mut archive = open_archive(path)?;
    let xml = read_part(&mut archive, DOCX_BODY, path)?;
    Ok(WORD.paragraphs(&xml).join("\n"))
}

/// Slide number of a `ppt/slides/slideN.xml` part
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix(SLIDE_PREFIX)?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Slides in numeric order, paragraphs one per line, slides separated by a blank line
pub(super) fn extract_pptx(path: &Path) -> Result<String> {
    let mut archive = open_archive(path)?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slides.sort_by_key(|(n, _)| *n);

    let mut texts = Vec::new();
    for (_, name) in slides {
        let xml = read_part(&mut archive, &name, path)?;
        let paragraphs = SLIDE.paragraphs(&xml);
        if !paragraphs.is_empty() {
            texts.push(paragraphs.join("\n"));
        }
    }

    Ok(texts.join("\n\n"))
}
