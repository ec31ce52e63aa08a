use thiserror::Error;

/// Errors raised while routing a control event.
#[derive(Error, Debug, PartialEq)]
pub enum DispatchError {
    /// No control with this id exists in the layout
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// The event carried a value of the wrong kind for the control
    #[error("Control {control} expects a {expected} value")]
    ValueMismatch {
        control: String,
        expected: &'static str,
    },
}
