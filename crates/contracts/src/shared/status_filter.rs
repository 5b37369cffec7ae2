use serde::{Deserialize, Serialize};

/// One selectable status chip of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFlag {
    Active,
    Inactive,
}

impl StatusFlag {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFlag::Active => "Activos",
            StatusFlag::Inactive => "Inactivos",
        }
    }
}

/// Multi-select status filter.
///
/// Selecting both flags or neither means the same thing: no `estado`
/// parameter is sent and the backend returns the union of all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusFilter {
    pub active: bool,
    pub inactive: bool,
}

impl StatusFilter {
    pub fn toggle(&mut self, flag: StatusFlag) {
        match flag {
            StatusFlag::Active => self.active = !self.active,
            StatusFlag::Inactive => self.inactive = !self.inactive,
        }
    }

    pub fn is_selected(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::Active => self.active,
            StatusFlag::Inactive => self.inactive,
        }
    }

    /// Value of the `estado` query parameter, `None` when nothing narrows the list
    pub fn as_query(&self) -> Option<u8> {
        match (self.active, self.inactive) {
            (true, false) => Some(1),
            (false, true) => Some(0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_and_neither_mean_no_filter() {
        let mut filter = StatusFilter::default();
        assert_eq!(filter.as_query(), None);

        filter.toggle(StatusFlag::Active);
        assert_eq!(filter.as_query(), Some(1));

        filter.toggle(StatusFlag::Inactive);
        assert_eq!(filter.as_query(), None);

        filter.toggle(StatusFlag::Active);
        assert_eq!(filter.as_query(), Some(0));
    }
}
