//! Change-making at a ticket counter.
//!
//! A ticket costs 25. The clerk starts with an empty cash box and must give
//! exact change to every customer, in queue order, out of the bills already
//! taken.

use crate::error::RecordError;

/// A bill a customer can pay with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bill {
    /// Exact fare.
    TwentyFive,
    /// Needs 25 in change.
    Fifty,
    /// Needs 75 in change.
    Hundred,
}

impl TryFrom<u32> for Bill {
    type Error = RecordError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            25 => Ok(Self::TwentyFive),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            _ => Err(RecordError::UnknownBill { value }),
        }
    }
}

/// Bills held by the clerk, by denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CashBox {
    /// Number of 25 bills.
    pub twenty_fives: u32,
    /// Number of 50 bills.
    pub fifties: u32,
    /// Number of 100 bills.
    pub hundreds: u32,
}

impl CashBox {
    /// Take `bill` and hand out change. Returns `false`, leaving the box
    /// untouched, when change cannot be made.
    ///
    /// For 100, a 50 and a 25 are given back in preference to three 25s.
    pub fn accept(&mut self, bill: Bill) -> bool {
        match bill {
            Bill::TwentyFive => {
                self.twenty_fives += 1;
            }
            Bill::Fifty => {
                if self.twenty_fives == 0 {
                    return false;
                }
                self.twenty_fives -= 1;
                self.fifties += 1;
            }
            Bill::Hundred => {
                if self.fifties >= 1 && self.twenty_fives >= 1 {
                    self.fifties -= 1;
                    self.twenty_fives -= 1;
                } else if self.twenty_fives >= 3 {
                    self.twenty_fives -= 3;
                } else {
                    return false;
                }
                self.hundreds += 1;
            }
        }
        true
    }
}

/// Whether every customer in `queue` can be sold a ticket with correct change.
#[must_use]
pub fn sell_tickets(queue: &[Bill]) -> bool {
    let mut cash = CashBox::default();
    queue.iter().all(|&bill| cash.accept(bill))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bills(values: &[u32]) -> Vec<Bill> {
        values
            .iter()
            .map(|&v| Bill::try_from(v).unwrap())
            .collect()
    }

    #[test]
    fn test_sell_tickets() {
        assert!(sell_tickets(&bills(&[25, 25, 50])));
        assert!(sell_tickets(&bills(&[25, 25, 50, 100])));
        assert!(sell_tickets(&bills(&[25, 25, 25, 100])));
        assert!(!sell_tickets(&bills(&[25, 100])));
        assert!(!sell_tickets(&bills(&[50])));
        assert!(sell_tickets(&[]));
    }

    #[test]
    fn test_stops_at_first_failure() {
        assert!(!sell_tickets(&bills(&[25, 50, 50, 25, 25, 25])));
    }

    #[test]
    fn test_hundred_prefers_fifty() {
        let mut cash = CashBox::default();
        for bill in bills(&[25, 25, 25, 50]) {
            assert!(cash.accept(bill));
        }
        assert!(cash.accept(Bill::Hundred));
        assert_eq!(
            cash,
            CashBox {
                twenty_fives: 1,
                fifties: 0,
                hundreds: 1
            }
        );
    }

    #[test]
    fn test_failed_accept_leaves_box_untouched() {
        let mut cash = CashBox {
            twenty_fives: 2,
            fifties: 0,
            hundreds: 0,
        };
        assert!(!cash.accept(Bill::Hundred));
        assert_eq!(cash.twenty_fives, 2);
    }

    #[test]
    fn test_unknown_bill() {
        let err = Bill::try_from(20).unwrap_err();
        assert!(matches!(err, RecordError::UnknownBill { value: 20 }));
    }
}
