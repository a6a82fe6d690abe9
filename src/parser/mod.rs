pub mod color;
pub mod style;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::document::SwatchSource;
use crate::swatch::{Rejected, Swatch};
use color::ColorError;

/// What to do with an element whose background color does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole pass; no swatches are returned.
    #[default]
    Abort,
    /// Record the element and keep going.
    Skip,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub swatches: Vec<Swatch>,
    pub rejected: Vec<Rejected>,
}

impl Extraction {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Single pass: select → read label/style → parse color. Output order is document order.
pub fn extract_swatches<S: SwatchSource + ?Sized>(
    source: &S,
    selector: &str,
    policy: MalformedPolicy,
) -> Result<Extraction> {
    let elements = source.swatch_elements(selector)?;
    debug!("{} elements matched {:?}", elements.len(), selector);

    let mut out = Extraction::default();
    for (index, el) in elements.into_iter().enumerate() {
        // The CSSOM getter reports an absent declaration as "".
        let value = el.background_color.as_deref().unwrap_or("");

        match color::parse_rgb(value) {
            Ok(color) => out.swatches.push(Swatch {
                name: el.label,
                color,
            }),
            Err(e) => match policy {
                MalformedPolicy::Abort => {
                    return Err(e).with_context(|| {
                        format!("element {} ({:?}) has no usable color", index, el.label)
                    });
                }
                MalformedPolicy::Skip => {
                    warn!("Skipping element {} ({:?}): {}", index, el.label, e);
                    out.rejected.push(Rejected {
                        index,
                        label: el.label,
                        error: e.to_string(),
                    });
                }
            },
        }
    }

    Ok(out)
}

/// Unwrap the color failure behind an aborted pass, if that is what stopped it.
pub fn color_error(err: &anyhow::Error) -> Option<&ColorError> {
    err.downcast_ref::<ColorError>()
}
