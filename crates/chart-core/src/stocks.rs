// File: crates/chart-core/src/stocks.rs
// Summary: In-memory stock catalog backing the list and detail screens.

use serde::{Deserialize, Serialize};

use crate::theme::{nice_color_for, GAIN, LOSS};
use crate::types::Rgba;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub company_name: String,
    pub price: f64,
    pub change_percent: f64,
    pub market_cap: String,
    pub pe_ratio: f64,
    pub volume: String,
    pub description: String,
}

impl Stock {
    #[allow(clippy::too_many_arguments)]
    fn new(
        symbol: &str,
        company_name: &str,
        price: f64,
        change_percent: f64,
        market_cap: &str,
        pe_ratio: f64,
        volume: &str,
        description: &str,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            price,
            change_percent,
            market_cap: market_cap.into(),
            pe_ratio,
            volume: volume.into(),
            description: description.into(),
        }
    }

    pub fn is_gaining(&self) -> bool { self.change_percent >= 0.0 }

    /// Colour for the change figure.
    pub fn change_color(&self) -> Rgba {
        if self.is_gaining() { GAIN } else { LOSS }
    }

    /// Card background on the list screen.
    pub fn card_color(&self) -> Rgba { nice_color_for(&self.symbol) }

    /// Lines shown on the detail screen.
    pub fn detail_lines(&self) -> Vec<String> {
        vec![
            format!("Symbol: {}", self.symbol),
            format!("Price: ${}", self.price),
            format!("Change: {}%", self.change_percent),
            format!("Market Cap: {}", self.market_cap),
            format!("P/E Ratio: {}", self.pe_ratio),
            format!("Volume: {}", self.volume),
            format!("Description: {}", self.description),
        ]
    }
}

pub fn catalog() -> Vec<Stock> {
    vec![
        Stock::new("AAPL", "Apple Inc.", 192.53, 1.25, "3.12T", 29.8, "12.5M",
            "Leading tech company specializing in consumer electronics and software."),
        Stock::new("MSFT", "Microsoft Corporation", 447.67, -0.85, "3.33T", 38.2, "8.9M",
            "Global leader in software, cloud computing, and AI solutions."),
        Stock::new("GOOGL", "Alphabet Inc.", 183.45, 2.10, "2.27T", 27.4, "15.3M",
            "Parent company of Google, focusing on search, ads, and cloud services."),
    ]
}

/// Look up `symbol`; unknown symbols fall back to the first stock.
pub fn find_or_first(stocks: &[Stock], symbol: &str) -> Option<Stock> {
    stocks
        .iter()
        .find(|s| s.symbol == symbol)
        .or_else(|| stocks.first())
        .cloned()
}
