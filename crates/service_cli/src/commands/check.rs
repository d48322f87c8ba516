//! Check command implementation
//!
//! Validates configuration and market data without touching a portfolio.

use pricer_core::market_data::QuoteProvider;
use tracing::info;

use crate::config::RiskConfig;
use crate::output::{num, print_footer, print_header, print_row};
use crate::Result;

const COLUMNS: [(&str, usize); 3] = [("Ticker", 8), ("Price", 10), ("Vol", 8)];

/// Run the check command
pub fn run(config: &RiskConfig) -> Result<()> {
    let provider = config.quote_provider()?;
    println!("Configuration OK");
    println!("  Risk-free rate:  {}", config.risk_free_rate);
    println!("  Default ticker:  {}", config.default_ticker);
    println!(
        "  Monte Carlo:     {} trials, horizon {}",
        config.monte_carlo.n_sims, config.monte_carlo.horizon
    );
    println!(
        "  Margin:          rate {}, multiplier {}",
        config.margin.margin_rate, config.margin.contract_multiplier
    );

    print_header(&COLUMNS);
    for ticker in provider.instruments() {
        let quote = provider.quote(ticker)?;
        print_row(
            &COLUMNS,
            &[
                ticker.to_string(),
                num(quote.underlying_price(), 2),
                num(quote.volatility(), 4),
            ],
        );
    }
    print_footer(&COLUMNS);

    info!(quotes = provider.len(), "check complete");
    Ok(())
}
