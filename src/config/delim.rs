use std::borrow::Cow;

/// Text inserted between consecutive blocks. The length is always taken from
/// the text itself
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "String")]
pub struct Delim(Cow<'static, str>);

impl Delim {
    pub const fn new(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// NUL bytes can't be stored in the root window name, so they are dropped
impl From<String> for Delim {
    fn from(mut value: String) -> Self {
        value.retain(|c| c != '\0');
        Self(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Delim {
    fn from(value: Cow<'static, str>) -> Self {
        if value.contains('\0') {
            Self::from(value.into_owned())
        } else {
            Self(value)
        }
    }
}
