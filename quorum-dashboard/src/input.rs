//! Stdin prompts for the market selector and ticker field.

use std::io::{self, Write};

use quorum::Market;

/// One requested fetch: the selected market plus the raw ticker text.
pub struct FetchAction {
    pub market: Market,
    pub symbol: String,
}

const DEFAULT_SYMBOL: &str = "MSFT";

/// Prompt for a market and ticker; `None` means the user asked to quit.
pub fn prompt_fetch() -> io::Result<Option<FetchAction>> {
    let Some(market) = prompt_market()? else {
        return Ok(None);
    };
    let symbol = prompt_symbol()?;
    Ok(Some(FetchAction { market, symbol }))
}

fn prompt_market() -> io::Result<Option<Market>> {
    loop {
        println!("\nSelect Market:");
        for (i, market) in Market::ALL.iter().enumerate() {
            println!("  [{}] {}", i + 1, market.label());
        }
        print!("Choice (1-{}, q to quit) [1]: ", Market::ALL.len());
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if trimmed.is_empty() {
            return Ok(Some(Market::ALL[0]));
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=Market::ALL.len()).contains(&n) => {
                return Ok(Some(Market::ALL[n - 1]));
            }
            _ => println!("Please enter a number between 1 and {}.", Market::ALL.len()),
        }
    }
}

fn prompt_symbol() -> io::Result<String> {
    print!("Enter Stock Ticker [{DEFAULT_SYMBOL}]: ");
    io::stdout().flush()?;

    let line = read_line()?.unwrap_or_default();
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(DEFAULT_SYMBOL.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Read one line from stdin; `None` on EOF.
fn read_line() -> io::Result<Option<String>> {
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf)?;
    if read == 0 { Ok(None) } else { Ok(Some(buf)) }
}
