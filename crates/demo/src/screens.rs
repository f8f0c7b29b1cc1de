// File: crates/demo/src/screens.rs
// Summary: Plain-text rendering of the stock list and stock detail screens.

use stockline_core::nav::Route;
use stockline_core::stocks::{find_or_first, Stock};

pub fn stock_card(stock: &Stock) -> String {
    let arrow = if stock.is_gaining() { "▲" } else { "▼" };
    let c = stock.card_color();
    format!(
        "[#{:02X}{:02X}{:02X}] {:<6} {:<24} ${:<8} {arrow} {}%",
        c.r, c.g, c.b, stock.symbol, stock.company_name, stock.price, stock.change_percent
    )
}

pub fn list_screen(stocks: &[Stock]) -> Vec<String> {
    std::iter::once("Stock Market".to_string())
        .chain(stocks.iter().map(stock_card))
        .collect()
}

pub fn detail_screen(stocks: &[Stock], symbol: &str) -> Vec<String> {
    match find_or_first(stocks, symbol) {
        Some(stock) => std::iter::once(format!("{}  [Back]", stock.company_name))
            .chain(stock.detail_lines())
            .collect(),
        None => vec!["No stocks available".to_string()],
    }
}

pub fn screen_for(route: &Route, stocks: &[Stock]) -> Vec<String> {
    match route {
        Route::StockList => list_screen(stocks),
        Route::StockDetail { symbol } => detail_screen(stocks, symbol),
    }
}
