use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{AppError, Currency, Result};
use crate::modules::quotes::models::{
    derive_quantity, line_total, CatalogItem, LineItem, QuantityRule, QuoteTotals,
    SubmittedLineItem, SuggestedLineItem, SuggestedQuote, ValidatedQuote,
};

/// Tax applied to every quote subtotal (16%)
pub const TAX_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

/// Pricing for event quotes: quantity suggestions, line totals and quote totals.
///
/// Stateless apart from the currency, whose scale drives rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteCalculator {
    currency: Currency,
}

impl QuoteCalculator {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Suggested quantity for a guest count; 1 when no rule applies
    pub fn derive_quantity(&self, rule: Option<&QuantityRule>, guest_count: u32) -> u32 {
        derive_quantity(rule, guest_count)
    }

    /// quantity × unit_price
    pub fn line_total(&self, quantity: i64, unit_price: Decimal) -> Result<Decimal> {
        line_total(quantity, unit_price, self.currency)
    }

    /// Sum line totals into subtotal, tax and total.
    ///
    /// Holds `total == subtotal + tax` exactly and `tax == subtotal × 16%`
    /// up to currency rounding. Amounts that leave the decimal range are an
    /// `Internal` error.
    pub fn quote_totals<'a, I>(&self, line_totals: I) -> Result<QuoteTotals>
    where
        I: IntoIterator<Item = &'a Decimal>,
    {
        let overflow = || AppError::internal("Quote totals overflowed");

        let subtotal = line_totals
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, total| acc.checked_add(*total))
            .map(|sum| self.currency.round(sum))
            .ok_or_else(overflow)?;
        let tax = subtotal
            .checked_mul(TAX_RATE)
            .map(|tax| self.currency.round(tax))
            .ok_or_else(overflow)?;
        let total = subtotal.checked_add(tax).ok_or_else(overflow)?;

        Ok(QuoteTotals {
            subtotal,
            tax,
            total,
        })
    }

    /// Total divided across guests; `None` for an event without guests
    pub fn per_person(&self, totals: &QuoteTotals, guest_count: u32) -> Option<Decimal> {
        if guest_count == 0 {
            return None;
        }
        Some(self.currency.round(totals.total / Decimal::from(guest_count)))
    }

    /// Recompute client-submitted line items into authoritative totals.
    ///
    /// The unit price asserted by the client is used as-is. Amounts that
    /// overflow the decimal range fail the whole quote.
    pub fn validate_items(
        &self,
        items: &[SubmittedLineItem],
        guest_count: u32,
    ) -> Result<ValidatedQuote> {
        let items = items
            .iter()
            .map(|item| {
                let unit_price = item.asserted_unit_price();
                Ok(LineItem {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price,
                    total: self.line_total(item.quantity, unit_price)?,
                })
            })
            .collect::<Result<Vec<LineItem>>>()?;

        let totals = self.quote_totals(items.iter().map(|item| &item.total))?;

        debug!(
            items = items.len(),
            subtotal = %totals.subtotal,
            total = %totals.total,
            "Quote recomputed"
        );

        Ok(ValidatedQuote {
            valid: true,
            per_person_cost: self.per_person(&totals, guest_count),
            items,
            totals,
        })
    }

    /// Apply each catalog item's rule to the guest count.
    ///
    /// Items whose rule yields zero units do not apply to the event and are
    /// left out of the suggestion. Catalog prices that overflow the quote
    /// fail it the same way as in `validate_items`.
    pub fn suggest(&self, catalog: &[CatalogItem], guest_count: u32) -> Result<SuggestedQuote> {
        let mut items = Vec::with_capacity(catalog.len());
        for item in catalog {
            let quantity = self.derive_quantity(item.rule.as_ref(), guest_count);
            if quantity == 0 {
                continue;
            }
            items.push(SuggestedLineItem {
                id: item.id.clone(),
                name: item.name.clone(),
                unit: item.unit.clone(),
                category: item.category.clone(),
                quantity,
                unit_price: item.unit_price,
                total: self.line_total(i64::from(quantity), item.unit_price)?,
            });
        }

        let totals = self.quote_totals(items.iter().map(|item| &item.total))?;

        Ok(SuggestedQuote {
            guest_count,
            per_person_cost: self.per_person(&totals, guest_count),
            items,
            totals,
        })
    }
}
