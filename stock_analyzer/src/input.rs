//! Interactive collection of the stock count and ticker symbols.
//!
//! Input is read as whitespace-separated tokens, so `aapl msft` on one line answers two
//! ticker prompts. Prompts and notices go to the console writer; diagnostics go to the log.
use log::{debug, warn};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use stock_common::config::{AnalyzerConfig, StockCount};
use stock_common::tickers::Ticker;
use stock_common::{AnalyzerError, Result};

const BANNER: [&str; 2] = [
    "Hello user! Enter one or more stock tickers and this program will show you the relevent information.",
    "If you enter more than one ticker the information will be compared between the other stocks.",
];

/// Console dialogue producing the tickers of one run.
pub struct InputCollector<R, W> {
    reader: R,
    out: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    /// Wraps a console reader and writer.
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            pending: VecDeque::new(),
        }
    }

    /// Prints the banner, asks for the count and then for each ticker.
    pub fn collect(&mut self, config: &AnalyzerConfig) -> Result<Vec<Ticker>> {
        for line in BANNER {
            writeln!(self.out, "{}", line)?;
        }
        let count = self.read_count(config)?;
        self.read_tickers(count)
    }

    /// Asks for the number of stocks, clamping it to `max_stocks`.
    pub fn read_count(&mut self, config: &AnalyzerConfig) -> Result<usize> {
        loop {
            write!(self.out, "Number of stocks: ")?;
            self.out.flush()?;
            let token = self.next_token()?;
            let count = match token.parse::<i64>() {
                Ok(requested) => config.clamp_count(requested),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                    StockCount::Clamped(config.max_stocks)
                }
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => StockCount::Accepted(0),
                Err(e) => {
                    debug!("Rejected stock count {:?}: {}", token, e);
                    writeln!(self.out, "Please enter a whole number.")?;
                    continue;
                }
            };
            if let StockCount::Clamped(max) = count {
                warn!("Requested {} stocks, clamped to {}", token, max);
                writeln!(self.out, "Only {} stocks are allowed.", max)?;
            }
            return Ok(count.value());
        }
    }

    /// Asks for `count` tickers, upper-casing each.
    pub fn read_tickers(&mut self, count: usize) -> Result<Vec<Ticker>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let noun = if count == 1 { "ticker" } else { "tickers" };
        writeln!(self.out, "Please enter {} {} ", count, noun)?;

        let mut tickers = Vec::with_capacity(count);
        for i in 1..=count {
            write!(self.out, "Stock ticker {} : ", i)?;
            self.out.flush()?;
            tickers.push(self.next_token()?.parse()?);
        }
        debug!("Collected tickers: {:?}", tickers);
        Ok(tickers)
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(AnalyzerError::Input("unexpected end of input".to_string()));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
