//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu entry as served by the customer API
///
/// The core only counts available menus for the dashboard; menu
/// administration is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: i64,
    pub name: String,
    /// Current price in the smallest currency unit
    pub price: i64,
    pub available: bool,
}
