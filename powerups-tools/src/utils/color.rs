// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colors for log and console output.

use std::fmt::{Debug, Display};

pub const GREY: &str = "\x1b[90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const RED: &str = "\x1b[31;1m";
pub const RESET: &str = "\x1b[0;0m";
pub const YELLOW: &str = "\x1b[33;1m";

pub trait Color {
    fn color(&self, color: &str) -> String;

    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn lavender(&self) -> String {
        self.color(LAVENDER)
    }
    fn mint(&self) -> String {
        self.color(MINT)
    }
    fn pink(&self) -> String {
        self.color(PINK)
    }
    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

impl<T: Display> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }
}

/// Same as [`Color`], but formats with [`Debug`].
pub trait DebugColor {
    fn debug_color(&self, color: &str) -> String;

    fn debug_lavender(&self) -> String {
        self.debug_color(LAVENDER)
    }
    fn debug_red(&self) -> String {
        self.debug_color(RED)
    }
}

impl<T: Debug> DebugColor for T {
    fn debug_color(&self, color: &str) -> String {
        format!("{color}{self:?}{RESET}")
    }
}
