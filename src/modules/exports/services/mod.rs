pub mod export_service;
pub mod pdf_renderer;
pub mod task_list;

pub use export_service::{ExportFile, ExportService};
pub use pdf_renderer::{pdf_filename, GeneratePdfRequest, PdfLineItem, PdfRenderer};
pub use task_list::{TaskListExporter, TaskRow, MAX_EXPORT_ROWS};
