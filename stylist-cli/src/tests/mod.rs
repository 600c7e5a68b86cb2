//! Shared test harness modules for the stylist CLI.

use super::*;

mod helpers;
