// Exports module: CSV task lists and PDF quotes

pub mod controllers;
pub mod services;

pub use services::{ExportService, PdfRenderer, TaskListExporter};
