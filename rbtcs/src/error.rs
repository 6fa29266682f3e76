// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from setting up and running the driver. The per cycle mapping from
/// sticks to drive commands never fails, these all come from the things
/// around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The gamepad backend could not be started.
    #[error("gamepad error: {0}")]
    Gamepad(String),

    /// The shutdown signal handler could not be installed.
    #[error("signal handler error: {0}")]
    Signal(String),
}
