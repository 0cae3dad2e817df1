// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the editor and its host window.

pub mod container;
pub mod editor;
