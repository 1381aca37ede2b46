use crate::Price;
use crate::Profit;

/// Best total profit from a quote history under perfect hindsight,
/// buying any number of units on any day and selling each at the
/// highest quote that follows.
///
/// Walking the history backwards carries the running maximum of the
/// suffix, so every quote settles against the best price still ahead
/// of it. A quote that is its own suffix maximum contributes nothing.
pub fn most_profit(quotes: &[Price]) -> Profit {
    quotes
        .iter()
        .rev()
        .fold((0, 0), |(best, total), &quote| {
            let best = best.max(quote);
            (best, total + Profit::from(best - quote))
        })
        .1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_market() {
        assert!(most_profit(&[1, 2, 3, 4, 5, 6]) == 15);
    }

    #[test]
    fn falling_market() {
        assert!(most_profit(&[6, 5, 4, 3, 2, 1]) == 0);
    }

    #[test]
    fn two_peaks() {
        assert!(most_profit(&[1, 6, 5, 10, 8, 7]) == 18);
    }

    #[test]
    fn no_quotes_no_profit() {
        assert!(most_profit(&[]) == 0);
    }

    #[test]
    fn one_quote_no_profit() {
        assert!(most_profit(&[100]) == 0);
    }

    #[test]
    fn flat_market() {
        assert!(most_profit(&[5, 5, 5, 5]) == 0);
    }

    #[test]
    fn sawtooth_sells_at_every_peak() {
        assert!(most_profit(&[2, 4, 2, 4]) == 4);
    }

    #[test]
    fn every_day_settles_at_the_next_peak() {
        assert!(most_profit(&[1, 2, 3, 1, 2, 3]) == 2 + 1 + 2 + 1);
    }
}
