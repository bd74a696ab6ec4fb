// ============================================================================
// COMPONENTS - Componentes de presentación registrados globalmente
// ============================================================================

pub mod pdf_report_header;
pub mod pdf_report_footer;

pub use pdf_report_header::PdfReportHeader;
pub use pdf_report_footer::PdfReportFooter;

use crate::error::AppResult;
use crate::registry::ComponentRegistryBuilder;

pub const PDF_REPORT_HEADER: &str = "PdfReportHeader";
pub const PDF_REPORT_FOOTER: &str = "PdfReportFooter";

/// Registrar la cabecera y el pie de informe
pub fn register_report_components(builder: &mut ComponentRegistryBuilder) -> AppResult<()> {
    builder.register(PDF_REPORT_HEADER, PdfReportHeader)?;
    builder.register(PDF_REPORT_FOOTER, PdfReportFooter)?;
    Ok(())
}
