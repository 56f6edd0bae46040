use serde_json::Value;

/// What a resolver decided for one leaf conflict.
///
/// `Answer(Value::Null)` is a real answer: the merged value becomes `null`
/// and no further resolver runs. Only `Delegate` passes the conflict on.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The merged value for this position.
    Answer(Value),
    /// No opinion; ask the next resolver in the chain.
    Delegate,
}

impl Resolution {
    /// Answer with `value`.
    pub fn answer(value: impl Into<Value>) -> Self {
        Self::Answer(value.into())
    }

    /// Returns `true` if the resolver declined.
    pub fn is_delegate(&self) -> bool {
        matches!(self, Self::Delegate)
    }

    /// The answered value, or `None` for a delegation.
    pub fn into_answer(self) -> Option<Value> {
        match self {
            Self::Answer(value) => Some(value),
            Self::Delegate => None,
        }
    }
}

impl From<Value> for Resolution {
    fn from(value: Value) -> Self {
        Self::Answer(value)
    }
}

/// Payload-free marker a resolver can return to decline a conflict.
///
/// Converts into [`Resolution::Delegate`], so `Ok(Delegate.into())` reads
/// naturally inside a resolver body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Delegate;

impl From<Delegate> for Resolution {
    fn from(_: Delegate) -> Self {
        Resolution::Delegate
    }
}
