//! CLI subcommands.

pub mod check;
pub mod tags;
pub mod translate;

use plaster_elements::Translator;
use plaster_markup::CmarkConverter;

use crate::config::ConfigFile;

/// Build a translator honouring the configured Markdown extensions.
pub fn translator(config: &ConfigFile) -> Translator {
    Translator::new().with_converter(CmarkConverter::new(config.markdown))
}
