// File: crates/chart-core/src/nav.rs
// Summary: Two-screen navigation (stock list -> stock detail) with a back stack.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const LIST_ROUTE: &str = "StockListScreen";
const DETAIL_ROUTE: &str = "StockDetailScreen";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    StockList,
    StockDetail { symbol: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown route '{0}'")]
pub struct UnknownRoute(pub String);

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::StockList => f.write_str(LIST_ROUTE),
            Route::StockDetail { symbol } => write!(f, "{DETAIL_ROUTE}/{symbol}"),
        }
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LIST_ROUTE {
            return Ok(Route::StockList);
        }
        match s.split_once('/') {
            // a missing symbol argument reads as empty, like an absent nav argument
            Some((DETAIL_ROUTE, symbol)) => Ok(Route::StockDetail { symbol: symbol.to_string() }),
            _ => Err(UnknownRoute(s.to_string())),
        }
    }
}

/// Back stack rooted at the stock list.
#[derive(Clone, Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self { Self::new() }
}

impl Navigator {
    pub fn new() -> Self {
        Self { stack: vec![Route::StockList] }
    }

    pub fn current(&self) -> &Route {
        // the start destination is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the top route. Returns false when already at the start destination.
    pub fn pop_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize { self.stack.len() }
}
