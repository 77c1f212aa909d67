use crate::models::{CartLine, Category};

/// What happened on a quantity decrement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Quantity was above 1 and went down by one
    Decremented,
    /// Quantity is at 1 - the caller should confirm with the user and then
    /// call [`CartStore::remove`]
    NeedsConfirmation,
    /// Index didn't point at a line; nothing changed
    OutOfRange,
}

/// The shopping cart - an insertion-ordered list of lines
///
/// Owned by the app and handed to whichever screen needs it. All mutation
/// happens on the single UI thread, one interaction at a time, so there is no
/// locking here. Index arguments come from the current render pass; anything
/// out of range is a no-op by contract.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line with quantity 1
    ///
    /// No deduplication: adding the same item twice gives two independent
    /// lines, each with its own quantity.
    pub fn add(&mut self, category: Category, price: impl Into<String>) {
        self.lines.push(CartLine::new(category, price));
    }

    /// Delete the line at `index`; out of range is a no-op
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Wholesale replacement of the cart contents
    pub fn replace(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
    }

    /// Bump a line's quantity; no upper bound
    pub fn increase(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity += 1;
        }
    }

    /// Drop a line's quantity by one, unless it would go below 1
    ///
    /// Removal is not performed here: the UI confirms with the user first and
    /// then calls [`CartStore::remove`] itself.
    pub fn decrease(&mut self, index: usize) -> DecreaseOutcome {
        match self.lines.get_mut(index) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                DecreaseOutcome::Decremented
            }
            Some(_) => DecreaseOutcome::NeedsConfirmation,
            None => DecreaseOutcome::OutOfRange,
        }
    }

    /// Grand total as a string with exactly two decimals
    ///
    /// Price strings carry a currency symbol and may be arbitrary user input,
    /// so parsing is deliberately tolerant: strip everything but digits, dot
    /// and minus, and treat whatever still doesn't parse as 0.
    pub fn total(&self) -> String {
        let sum: f64 = self
            .lines
            .iter()
            .map(|line| {
                let numeric: String = line
                    .price
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                let price = numeric.parse::<f64>().unwrap_or(0.0);
                price * f64::from(line.quantity)
            })
            // fold from +0.0: `Sum<f64>` starts at -0.0, which would render an
            // empty cart as "-0.00"
            .fold(0.0, |acc, price| acc + price);

        format!("{:.2}", sum)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
