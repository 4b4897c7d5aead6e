use log::debug;

use crate::config::RevealConfig;
use crate::dom::{Document, Element};
use crate::error::{MissingElement, Result};

/// What a successful reveal changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revealed {
    /// `false` when the body already carried the marker class
    pub marked: bool,
}

/// Shows the configured table and marks its first body section for the fade-in.
///
/// Mutations happen in order and are not rolled back:
///
/// * an invalid `config` or a missing table leaves the document untouched;
/// * a table without a body section is left visible but unmarked.
pub fn reveal<D: Document>(document: &D, config: &RevealConfig) -> Result<Revealed> {
    config.validate()?;

    let table = document
        .element_by_id(&config.table_id)
        .ok_or_else(|| MissingElement::Table {
            id: config.table_id.clone(),
        })?;

    table.set_style_property("display", &config.display)?;
    debug!("#{} display set to {:?}", config.table_id, config.display);

    let body = table
        .first_descendant_by_tag(&config.body_tag)
        .ok_or_else(|| MissingElement::Body {
            table_id: config.table_id.clone(),
            tag: config.body_tag.clone(),
        })?;

    let marked = body.add_class(&config.marker_class)?;
    debug!(
        "#{} > {} class {:?} {}",
        config.table_id,
        config.body_tag,
        config.marker_class,
        if marked { "added" } else { "already present" }
    );

    Ok(Revealed { marked })
}
