//! Assignment of parsed amounts to financial fields.
//!
//! Selection tables drop columns freely (minimum formation size is often
//! missing), so the count of numeric cells found decides which fields they
//! fill. Applicant listings use fixed positions.

use crate::amount::parse_amount;

/// Parsed amounts of a row, left to right, excluding the company cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmountSet(Vec<f64>);

impl AmountSet {
    /// Parses every cell except `skip`, keeping successes in order.
    #[must_use]
    pub fn from_cells(cells: &[String], skip: usize) -> Self {
        Self(
            cells
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != skip)
                .filter_map(|(_, cell)| parse_amount(cell))
                .collect(),
        )
    }

    /// Number of amounts parsed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no cell held a number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The amounts in cell order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for AmountSet {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Amount fields of an applicant listing row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApplicationAmounts {
    /// Planned fund size, from column 1.
    pub amount_planned: Option<f64>,
    /// Requested co-investment, from column 2.
    pub amount_requested: Option<f64>,
}

impl ApplicationAmounts {
    /// Reads the planned amount from column 1 and the requested amount from
    /// column 2.
    #[must_use]
    pub fn from_cells(cells: &[String]) -> Self {
        let at = |idx: usize| cells.get(idx).and_then(|cell| parse_amount(cell));
        Self {
            amount_planned: at(1),
            amount_requested: at(2),
        }
    }
}

/// Amount fields of a selection result row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionAmounts {
    /// Minimum fund size for the commitment to take effect.
    pub min_formation: Option<f64>,
    /// Government co-investment commitment.
    pub mo_tae: Option<f64>,
    /// Planned total fund size.
    pub fund_size: Option<f64>,
    /// Requested or awarded co-investment.
    pub request_amount: Option<f64>,
}

impl SelectionAmounts {
    /// Maps amounts to fields by how many there are.
    ///
    /// | count | fields |
    /// |---|---|
    /// | 4+ | `min_formation`, `mo_tae`, `fund_size`, `request_amount` |
    /// | 3 | `mo_tae`, `fund_size`, `request_amount` |
    /// | 2 | `mo_tae`, `fund_size` |
    /// | 1 | `mo_tae` |
    ///
    /// Amounts past the fourth are ignored.
    #[must_use]
    pub fn from_amounts(amounts: &AmountSet) -> Self {
        match *amounts.values() {
            [] => Self::default(),
            [mo_tae] => Self {
                mo_tae: Some(mo_tae),
                ..Self::default()
            },
            [mo_tae, fund_size] => Self {
                mo_tae: Some(mo_tae),
                fund_size: Some(fund_size),
                ..Self::default()
            },
            [mo_tae, fund_size, request_amount] => Self {
                min_formation: None,
                mo_tae: Some(mo_tae),
                fund_size: Some(fund_size),
                request_amount: Some(request_amount),
            },
            [min_formation, mo_tae, fund_size, request_amount, ..] => Self {
                min_formation: Some(min_formation),
                mo_tae: Some(mo_tae),
                fund_size: Some(fund_size),
                request_amount: Some(request_amount),
            },
        }
    }

    /// Divides every present field by `members`.
    #[must_use]
    pub fn prorated(self, members: usize) -> Self {
        let share = |value: Option<f64>| value.map(|v| prorate(v, members));
        Self {
            min_formation: share(self.min_formation),
            mo_tae: share(self.mo_tae),
            fund_size: share(self.fund_size),
            request_amount: share(self.request_amount),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn prorate(value: f64, members: usize) -> f64 {
    if members <= 1 {
        value
    } else {
        value / members as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    fn mapped(values: &[f64]) -> SelectionAmounts {
        SelectionAmounts::from_amounts(&AmountSet::from(values.to_vec()))
    }

    #[test]
    fn collects_amounts_around_company_cell() {
        let amounts = AmountSet::from_cells(&cells(&["VC", "10", "Alpha 2호", "-", "20"]), 2);
        assert_eq!(amounts.values(), &[10.0, 20.0]);
        assert_eq!(amounts.len(), 2);
    }

    #[test]
    fn company_cell_digits_are_not_amounts() {
        let amounts = AmountSet::from_cells(&cells(&["Alpha 2호 Capital"]), 0);
        assert!(amounts.is_empty());
    }

    #[test]
    fn maps_by_amount_count() {
        assert_eq!(mapped(&[]), SelectionAmounts::default());
        assert_eq!(
            mapped(&[1.0]),
            SelectionAmounts {
                mo_tae: Some(1.0),
                ..SelectionAmounts::default()
            }
        );
        assert_eq!(
            mapped(&[1.0, 2.0]),
            SelectionAmounts {
                mo_tae: Some(1.0),
                fund_size: Some(2.0),
                ..SelectionAmounts::default()
            }
        );
        assert_eq!(
            mapped(&[1.0, 2.0, 3.0]),
            SelectionAmounts {
                min_formation: None,
                mo_tae: Some(1.0),
                fund_size: Some(2.0),
                request_amount: Some(3.0),
            }
        );
        let four = SelectionAmounts {
            min_formation: Some(1.0),
            mo_tae: Some(2.0),
            fund_size: Some(3.0),
            request_amount: Some(4.0),
        };
        assert_eq!(mapped(&[1.0, 2.0, 3.0, 4.0]), four);
        assert_eq!(mapped(&[1.0, 2.0, 3.0, 4.0, 5.0]), four);
    }

    #[test]
    fn application_amounts_are_positional() {
        let amounts = ApplicationAmounts::from_cells(&cells(&["VC", "100", "50", "Alpha"]));
        assert_eq!(amounts.amount_planned, Some(100.0));
        assert_eq!(amounts.amount_requested, Some(50.0));

        let amounts = ApplicationAmounts::from_cells(&cells(&["VC", "", "1,500", "Alpha"]));
        assert_eq!(amounts.amount_planned, None);
        assert_eq!(amounts.amount_requested, Some(1500.0));
    }

    #[test]
    fn prorates_present_fields_only() {
        let split = mapped(&[5.0, 60.0]).prorated(2);
        assert_eq!(split.mo_tae, Some(2.5));
        assert_eq!(split.fund_size, Some(30.0));
        assert_eq!(split.request_amount, None);

        assert_eq!(mapped(&[9.0]).prorated(1).mo_tae, Some(9.0));
    }
}
