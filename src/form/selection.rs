/// The interpreted state of a dropdown value.
///
/// Dropdowns offer placeholder options such as `"none selected"` that look like
/// values but mean "nothing chosen". Validation must reject those explicitly,
/// not only the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Nothing was entered.
    Absent,
    /// A placeholder option was picked.
    Sentinel(&'a str),
    /// A real business value.
    Chosen(&'a str),
}

impl<'a> Selection<'a> {
    /// Classifies a raw value against an optional sentinel.
    pub fn classify(raw: &'a str, sentinel: Option<&str>) -> Self {
        if raw.is_empty() {
            Selection::Absent
        } else if sentinel == Some(raw) {
            Selection::Sentinel(raw)
        } else {
            Selection::Chosen(raw)
        }
    }

    pub fn chosen(self) -> Option<&'a str> {
        match self {
            Selection::Chosen(value) => Some(value),
            _ => None,
        }
    }
}
