//! Reference table of exchange-traded funds shown alongside the projection
//!
//! Display data only; nothing in the calculator reads it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceInstrument {
    pub symbol: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const REFERENCE_INSTRUMENTS: [ReferenceInstrument; 5] = [
    ReferenceInstrument { symbol: "0050", category: "Broad-Market", description: "Large Taiwanese companies" },
    ReferenceInstrument { symbol: "0056", category: "High-Dividend", description: "Stable dividends" },
    ReferenceInstrument { symbol: "00878", category: "High-Dividend", description: "Low volatility" },
    ReferenceInstrument { symbol: "VT", category: "Global Market", description: "Global diversification" },
    ReferenceInstrument { symbol: "VTI", category: "US Market", description: "Long-term growth" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table() {
        assert_eq!(REFERENCE_INSTRUMENTS.len(), 5);
        let symbols: Vec<_> = REFERENCE_INSTRUMENTS.iter().map(|i| i.symbol).collect();
        assert_eq!(symbols, vec!["0050", "0056", "00878", "VT", "VTI"]);
    }
}
