// synmark-core/tests/rule_file_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use synmark_core::config::{AnnotateOptions, RuleSource};
use synmark_core::{AnnotationEngine, RegexEngine, StyleDescriptor};

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "if|else|while\tbold\n\n%d+\tcolor:00AA00, size:2\n")?;

    let source = RuleSource::load_from_file(file.path())?;
    assert_eq!(source.lines.len(), 3);
    assert_eq!(source.rule_line_count(), 2);

    let rules = source.compile()?;
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.rules[0].styles, vec![StyleDescriptor::Bold]);
    assert_eq!(
        rules.rules[1].styles,
        vec![StyleDescriptor::Color("00AA00".to_string()), StyleDescriptor::Size(2)]
    );
    assert_eq!(rules.rules[1].line_number, 3);
    Ok(())
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = RuleSource::load_from_file(dir.path().join("missing.fmt"));
    assert!(result.is_err());
}

#[test]
fn test_engine_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "x\tunderline")?;
    let source = RuleSource::load_from_file(file.path())?;
    let engine = RegexEngine::with_options(&source, AnnotateOptions { insert_line_breaks: true })?;

    assert!(engine.options().insert_line_breaks);
    assert_eq!(engine.compiled_rules().len(), 1);
    assert_eq!(engine.annotate("x\nx")?, "<u>x</u><br />\n<u>x</u>");
    Ok(())
}

#[test]
fn test_empty_rule_file_passes_text_through() -> Result<()> {
    let file = NamedTempFile::new()?;
    let source = RuleSource::load_from_file(file.path())?;
    let engine = RegexEngine::new(&source)?;
    assert_eq!(engine.annotate("unchanged <text>")?, "unchanged <text>");
    Ok(())
}

#[test]
fn test_non_utf8_rule_file_is_an_error() -> Result<()> {
    use synmark_core::{ErrorKind, SynmarkError};

    let mut file = NamedTempFile::new()?;
    file.write_all(b"a\tbold\ncaf\xe9\titalic\n")?;
    let err = RuleSource::load_from_file(file.path()).unwrap_err();
    let core = err.downcast_ref::<SynmarkError>().expect("core error in chain");
    assert_eq!(core.kind(), ErrorKind::InvalidEncoding);
    assert!(format!("{err:#}").contains("Rule line 2 is not valid UTF-8"));
    Ok(())
}
