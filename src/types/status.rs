//! Definition for the [`Status`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// Represents the operating status of a [`super::location::Location`].
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum Status {
    Open,
    Closed,
}
