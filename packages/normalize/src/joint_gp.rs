//! Splitting consortium ("joint GP") company cells.
//!
//! A consortium is written as one cell listing every operator, separated by
//! line breaks, commas or slashes. Each line is split on commas if it has
//! any, otherwise on slashes, so names that legitimately contain a slash
//! survive when the line also uses commas.

/// The operators recovered from one company cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointGpGroup {
    original: String,
    members: Vec<String>,
}

impl JointGpGroup {
    /// Splits a company cell into its member operators.
    ///
    /// ```
    /// use fund_disclosure_normalize::joint_gp::JointGpGroup;
    ///
    /// let group = JointGpGroup::split("Alpha Capital, Beta Partners");
    /// assert_eq!(group.members(), ["Alpha Capital", "Beta Partners"]);
    /// assert!(group.is_joint());
    /// ```
    #[must_use]
    pub fn split(company: &str) -> Self {
        Self {
            original: company.to_owned(),
            members: split_joint_gp(company),
        }
    }

    /// The unsplit cell text.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Member names in cell order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when the cell held no names at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` when the cell named more than one operator.
    #[must_use]
    pub fn is_joint(&self) -> bool {
        self.members.len() > 1
    }
}

/// Splits a company cell into trimmed, non-empty operator names.
#[must_use]
pub fn split_joint_gp(company: &str) -> Vec<String> {
    company
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| {
            let delimiter = if line.contains(',') {
                Some(',')
            } else if line.contains('/') {
                Some('/')
            } else {
                None
            };
            match delimiter {
                Some(d) => line.split(d).collect::<Vec<_>>(),
                None => vec![line],
            }
        })
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
