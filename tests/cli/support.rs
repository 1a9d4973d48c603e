use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Get a Command for assay, isolated from the user's environment
pub fn assay() -> Command {
    let mut cmd = cargo_bin_cmd!("assay");
    cmd.env("ASSAY_CONFIG_DIR", "/nonexistent/assay-test-config")
        .env_remove("ASSAY_CONFIG")
        .env_remove("ASSAY_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Six headings, six rubric tokens, exactly 900 words
#[allow(dead_code)]
pub fn structured_text() -> String {
    let mut text = String::new();
    for n in 1..=6 {
        text.push_str(&format!("# Part {}\n", n));
    }
    text.push_str("hypothesis success criteria pilot refine protocol ethical\n");
    text.push_str(&"lorem ".repeat(881));
    text
}

/// Submission folder with one empty and one structured plain-text submission
#[allow(dead_code)]
pub fn setup_submissions() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Course - Jane Doe - A3.txt"), "").unwrap();
    fs::write(dir.path().join("A3 Alex Kim.txt"), structured_text()).unwrap();
    fs::write(dir.path().join("notes.md"), "research question").unwrap();
    dir
}

/// Write a minimal DOCX container holding the given paragraphs
#[allow(dead_code)]
pub fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\"?><w:document><w:body>{}</w:body></w:document>",
        body
    );

    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}
