//! GST breakdown: IGST for inter-state supply, CGST with SGST/UTGST otherwise.

use rust_decimal::Decimal;

use super::amounts::parse_amount;
use super::patterns::{TAX_AMOUNT_ONLY, TAX_COMPONENT, TAX_RATE_AFTER, TAX_RATE_BEFORE};

/// Tax fields of an invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxSummary {
    /// `IGST`, `CGST+SGST` or `CGST+UTGST`.
    pub tax_type: Option<String>,
    /// Combined rate in percent.
    pub rate: Option<Decimal>,
    /// Combined tax amount.
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Igst,
    Cgst,
    Sgst,
    Utgst,
}

impl Component {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "IGST" => Some(Self::Igst),
            "CGST" => Some(Self::Cgst),
            "SGST" => Some(Self::Sgst),
            "UTGST" => Some(Self::Utgst),
            _ => None,
        }
    }
}

/// First rate and amount seen for each component.
#[derive(Debug, Default)]
struct Components {
    seen: Vec<(Component, Option<Decimal>, Option<Decimal>)>,
}

impl Components {
    fn record(&mut self, kind: Component, rate: Option<Decimal>, amount: Option<Decimal>) {
        match self.seen.iter_mut().find(|(k, _, _)| *k == kind) {
            Some((_, r, a)) => {
                if r.is_none() {
                    *r = rate;
                }
                if a.is_none() {
                    *a = amount;
                }
            }
            None => self.seen.push((kind, rate, amount)),
        }
    }

    fn get(&self, kind: Component) -> Option<(Option<Decimal>, Option<Decimal>)> {
        self.seen
            .iter()
            .find(|(k, _, _)| *k == kind)
            .map(|(_, r, a)| (*r, *a))
    }
}

/// Extract the tax type, combined rate and combined amount.
pub fn extract_tax(text: &str) -> TaxSummary {
    let mut components = Components::default();

    for caps in TAX_COMPONENT.captures_iter(text) {
        if let Some(kind) = Component::parse(&caps[2]) {
            components.record(kind, parse_amount(&caps[1]), parse_amount(&caps[3]));
        }
    }

    // Layouts where rate and amount are printed apart
    for caps in TAX_RATE_BEFORE.captures_iter(text) {
        if let Some(kind) = Component::parse(&caps[2]) {
            components.record(kind, parse_amount(&caps[1]), None);
        }
    }
    for caps in TAX_RATE_AFTER.captures_iter(text) {
        if let Some(kind) = Component::parse(&caps[1]) {
            components.record(kind, parse_amount(&caps[2]), None);
        }
    }
    for caps in TAX_AMOUNT_ONLY.captures_iter(text) {
        if let Some(kind) = Component::parse(&caps[1]) {
            components.record(kind, None, parse_amount(&caps[2]));
        }
    }

    if let Some((rate, amount)) = components.get(Component::Igst) {
        return TaxSummary {
            tax_type: Some("IGST".to_string()),
            rate,
            amount,
        };
    }

    let Some((cgst_rate, cgst_amount)) = components.get(Component::Cgst) else {
        return TaxSummary::default();
    };

    let (label, state) = match (components.get(Component::Sgst), components.get(Component::Utgst)) {
        (Some(sgst), _) => ("CGST+SGST", Some(sgst)),
        (None, Some(utgst)) => ("CGST+UTGST", Some(utgst)),
        (None, None) => ("CGST", None),
    };
    let (state_rate, state_amount) = state.unwrap_or((Some(Decimal::ZERO), Some(Decimal::ZERO)));

    TaxSummary {
        tax_type: Some(label.to_string()),
        rate: cgst_rate.zip(state_rate).map(|(a, b)| a + b),
        amount: cgst_amount.zip(state_amount).map(|(a, b)| a + b),
    }
}
