use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::quotes::models::QuoteTotals;
use crate::modules::quotes::services::QuoteCalculator;

// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 6.0;
// Lowest baseline a line may be written at
const FOOTER_MM: f32 = 30.0;
// Subtotal, tax and total are kept on one page
const TOTALS_LINES: usize = 3;

/// One item line on a quote PDF
#[derive(Debug, Clone, Deserialize)]
pub struct PdfLineItem {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Body of POST /quotes/generate-pdf
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    pub event_name: String,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub items: Option<Vec<PdfLineItem>>,
    /// Totals computed by the client; recomputed from the items when absent
    #[serde(default)]
    pub totals: Option<QuoteTotals>,
}

/// Renders quotes as printable invoices
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    calculator: QuoteCalculator,
    company_name: String,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Vertical position on the current page and the number of pages so far
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageLayout {
    y: f32,
    pages: usize,
}

impl PageLayout {
    fn new() -> Self {
        Self {
            y: PAGE_HEIGHT_MM - MARGIN_MM,
            pages: 1,
        }
    }

    /// Make room for `lines` consecutive lines, moving to a fresh page when
    /// the last of them would fall below the footer. Returns true on a page
    /// break.
    fn reserve(&mut self, lines: usize) -> bool {
        let needed = lines.saturating_sub(1) as f32 * LINE_HEIGHT_MM;
        if self.y - needed < FOOTER_MM {
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
            self.pages += 1;
            true
        } else {
            false
        }
    }
}

/// Writes lines top to bottom, starting a new page when one fills up
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    layout: PageLayout,
}

impl<'a> PageCursor<'a> {
    fn keep_together(&mut self, lines: usize) {
        if self.layout.reserve(lines) {
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", self.layout.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        self.keep_together(1);
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.layout.y), font);
        self.layout.y -= LINE_HEIGHT_MM;
    }

    fn gap(&mut self) {
        self.layout.y -= LINE_HEIGHT_MM / 2.0;
    }
}

impl PdfRenderer {
    pub fn new(calculator: QuoteCalculator, company_name: impl Into<String>) -> Self {
        Self {
            calculator,
            company_name: company_name.into(),
        }
    }

    /// Totals to print: the request's own when given, otherwise recomputed
    pub fn totals_for(
        &self,
        items: &[PdfLineItem],
        totals: Option<QuoteTotals>,
    ) -> Result<QuoteTotals> {
        if let Some(totals) = totals {
            return Ok(totals);
        }
        let line_totals = items
            .iter()
            .map(|item| self.calculator.line_total(item.quantity, item.price))
            .collect::<Result<Vec<Decimal>>>()?;
        self.calculator.quote_totals(line_totals.iter())
    }

    /// Text of the item line, e.g. `3 mesa x Round table @ $90.00 MXN = $270.00 MXN`
    pub fn item_line(&self, item: &PdfLineItem) -> Result<String> {
        let currency = self.calculator.currency();
        let total = self.calculator.line_total(item.quantity, item.price)?;
        let quantity = match item.unit.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(unit) => format!("{} {}", item.quantity, unit),
            None => item.quantity.to_string(),
        };

        Ok(format!(
            "{} x {} @ {} = {}",
            quantity,
            item.name,
            currency.format_amount(item.price),
            currency.format_amount(total)
        ))
    }

    /// Render the quote into PDF bytes
    pub fn render(&self, request: &GeneratePdfRequest, items: &[PdfLineItem]) -> Result<Vec<u8>> {
        let currency = self.calculator.currency();
        let totals = self.totals_for(items, request.totals)?;

        let title = format!("Quote - {}", request.event_name);
        let (doc, page, layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| AppError::pdf(format!("Failed to load font: {}", e)))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| AppError::pdf(format!("Failed to load font: {}", e)))?,
        };

        let mut cursor = PageCursor {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            layout: PageLayout::new(),
        };

        cursor.line(&self.company_name, 18.0, &fonts.bold);
        cursor.line("Event Quote", 14.0, &fonts.regular);
        cursor.gap();

        cursor.line(&format!("Event: {}", request.event_name), 11.0, &fonts.regular);
        if !request.date.trim().is_empty() {
            cursor.line(&format!("Date: {}", request.date), 11.0, &fonts.regular);
        }
        cursor.line(&format!("Guests: {}", request.guest_count), 11.0, &fonts.regular);
        cursor.gap();

        cursor.line("Items", 12.0, &fonts.bold);
        for item in items {
            cursor.line(&self.item_line(item)?, 10.0, &fonts.regular);
        }
        cursor.gap();

        cursor.keep_together(TOTALS_LINES);
        cursor.line(
            &format!("Subtotal: {}", currency.format_amount(totals.subtotal)),
            11.0,
            &fonts.regular,
        );
        cursor.line(
            &format!("Tax (16%): {}", currency.format_amount(totals.tax)),
            11.0,
            &fonts.regular,
        );
        cursor.line(
            &format!("Total: {}", currency.format_amount(totals.total)),
            13.0,
            &fonts.bold,
        );

        let pages = cursor.layout.pages;
        drop(cursor);

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| AppError::pdf(format!("Failed to write PDF: {}", e)))?;

        tracing::debug!(pages, bytes = bytes.len(), items = items.len(), "Quote PDF rendered");

        Ok(bytes)
    }
}

/// Attachment file name for a quote PDF, e.g. `quote-boda-ruiz.pdf`
pub fn pdf_filename(event_name: &str) -> String {
    let slug: String = event_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "quote.pdf".to_string()
    } else {
        format!("quote-{}.pdf", slug)
    }
}
