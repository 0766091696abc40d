//! Writing the rendered page to disk as PDF or SVG.

use std::fs;
use std::path::Path;

use crate::alignment::AlignmentSpec;
use crate::errors::OutputError;
use crate::render::{self, defaults};

/// File format of the written page, picked from the output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl OutputFormat {
    /// `.svg` (any case) writes SVG, every other path gets a PDF.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Pdf,
        }
    }
}

/// Convert rendered SVG to a single-page PDF of the same size.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, OutputError> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    // Metrics used for layout are Helvetica's; fall back to it for any text without a family.
    opt.font_family = defaults::FONT_FAMILY.to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt)
        .map_err(|e| OutputError::SvgParse(e.to_string()))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| OutputError::PdfConvert(format!("{e:?}")))
}

/// Render `spec` and write it to `path`, returning the number of bytes written.
///
/// The file is only created once the whole document has been produced.
pub fn write_document(path: &Path, spec: &AlignmentSpec) -> Result<usize, OutputError> {
    let format = OutputFormat::from_path(path);
    let svg = render::render_svg(spec);

    let bytes = match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Pdf => svg_to_pdf(&svg)?,
    };

    fs::write(path, &bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    crate::log::info!(
        path = %path.display(),
        format = ?format,
        bytes = bytes.len(),
        "wrote protractor"
    );

    Ok(bytes.len())
}
