//! HTML and Markdown translation commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use plaster_elements::{render_html, render_tree, Element};

use crate::config::{ConfigFile, OutputFormat};

/// Run the html command.
pub fn run_html(
    config: &ConfigFile,
    input: &Path,
    single: bool,
    format: Option<OutputFormat>,
) -> Result<()> {
    let source = read_input(input)?;
    let translator = super::translator(config);

    let output = if single {
        let element = translator
            .translate_html_single(&source)
            .with_context(|| format!("Failed to translate {}", input.display()))?;
        format_elements(std::slice::from_ref(&element), resolve(config, format))?
    } else {
        let elements = translator
            .translate_html(&source)
            .with_context(|| format!("Failed to translate {}", input.display()))?;
        format_elements(&elements, resolve(config, format))?
    };

    print!("{output}");
    Ok(())
}

/// Run the markdown command.
pub fn run_markdown(config: &ConfigFile, input: &Path, format: Option<OutputFormat>) -> Result<()> {
    let source = read_input(input)?;
    let translator = super::translator(config);

    let elements = translator
        .translate_markdown(&source)
        .with_context(|| format!("Failed to translate {}", input.display()))?;

    print!("{}", format_elements(&elements, resolve(config, format))?);
    Ok(())
}

fn resolve(config: &ConfigFile, format: Option<OutputFormat>) -> OutputFormat {
    format.unwrap_or(config.output.format)
}

/// Read a file, or stdin when the path is "-".
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }

    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

/// Print elements in the requested format.
pub fn format_elements(elements: &[Element], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Tree => render_tree(elements),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(elements).context("Failed to serialize elements")?;
            json.push('\n');
            json
        }
        OutputFormat::Html => {
            let mut html = render_html(elements);
            html.push('\n');
            html
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaster_elements::Translator;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_tree() {
        let elements = Translator::new()
            .translate_html(r#"<div classname="x"><p>hi</p></div>"#)
            .unwrap();

        let out = format_elements(&elements, OutputFormat::Tree).unwrap();

        assert_eq!(out, "<div> class=\"x\"\n  <p>\n    \"hi\"\n");
    }

    #[test]
    fn formats_json() {
        let elements = Translator::new().translate_html("<br>").unwrap();

        let out = format_elements(&elements, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{ "br": { "props": null, "children": [] } }])
        );
    }

    #[test]
    fn formats_html() {
        let elements = Translator::new()
            .translate_html(r#"<a href="/x">go</a>"#)
            .unwrap();

        let out = format_elements(&elements, OutputFormat::Html).unwrap();

        assert_eq!(out, "<a href=\"/x\">go</a>\n");
    }

    #[test]
    fn reads_input_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("frag.html");
        fs::write(&path, "<p>x</p>").unwrap();

        assert_eq!(read_input(&path).unwrap(), "<p>x</p>");
        assert!(read_input(&temp.path().join("missing.html")).is_err());
    }
}
