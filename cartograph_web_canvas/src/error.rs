// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use cartograph_controller::SetupError;

/// Failure while mounting a map view into a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    /// A fatal controller setup condition.
    Setup(SetupError),
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no `document`.
    NoDocument,
    /// No element with the given id exists.
    CanvasNotFound(String),
    /// The element with the given id is not a `<canvas>`.
    NotACanvas(String),
    /// A DOM call threw; carries the exception message.
    Js(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => fmt::Display::fmt(err, f),
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::CanvasNotFound(id) => write!(f, "no element with id {id:?}"),
            Self::NotACanvas(id) => write!(f, "element {id:?} is not a canvas"),
            Self::Js(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl core::error::Error for MountError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Setup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SetupError> for MountError {
    fn from(err: SetupError) -> Self {
        Self::Setup(err)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let msg = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(msg)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<MountError> for wasm_bindgen::JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use core::error::Error;

    use cartograph_controller::SetupError;

    use super::MountError;

    #[test]
    fn setup_errors_are_wrapped_with_source() {
        let err = MountError::from(SetupError::MissingContext);
        assert_eq!(err, MountError::Setup(SetupError::MissingContext));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), SetupError::MissingContext.to_string());
    }

    #[test]
    fn messages_name_the_element() {
        let err = MountError::CanvasNotFound("visualMap".into());
        assert_eq!(err.to_string(), "no element with id \"visualMap\"");
        assert!(err.source().is_none());
    }
}
