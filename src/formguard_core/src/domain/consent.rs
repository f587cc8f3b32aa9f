/// Whether the terms-acceptance checkbox (`_condiciones`) was ticked.
///
/// Browsers omit unchecked checkboxes entirely, so absence means "not
/// accepted". A present value counts as accepted unless it is empty or `"0"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentFlag(bool);

impl ConsentFlag {
    pub const ACCEPTED: Self = Self(true);
    pub const DECLINED: Self = Self(false);

    /// Parse the raw form value of the checkbox.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("0") => Self::DECLINED,
            Some(_) => Self::ACCEPTED,
        }
    }

    pub fn is_accepted(self) -> bool {
        self.0
    }
}

impl From<bool> for ConsentFlag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
