// SPDX-License-Identifier: MPL-2.0
//! Edit session bookkeeping: where the image came from, whether the user
//! touched it, and which load is current.

/// Where the currently loaded image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Supplied by the host as the existing avatar.
    Preloaded,
    /// Picked by the user from the file dialog.
    UserSupplied,
}

/// What caused a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTrigger {
    /// First render after an image finished loading.
    InitialLoad,
    /// Pan, zoom or rotate.
    Edit,
}

/// Identifies one load request; results carrying a stale ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub origin: ImageOrigin,
}

/// Derived, non-persisted session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditSession {
    origin: Option<ImageOrigin>,
    edited: bool,
}

impl EditSession {
    /// Session for a freshly loaded image.
    pub fn loaded(origin: ImageOrigin) -> Self {
        Self {
            origin: Some(origin),
            edited: false,
        }
    }

    pub fn origin(&self) -> Option<ImageOrigin> {
        self.origin
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn mark_edited(&mut self) {
        if self.origin.is_some() {
            self.edited = true;
        }
    }

    /// Whether a render caused by `trigger` should reach the host's change
    /// callback. A preloaded avatar stays silent until the user edits it.
    pub fn should_notify(&self, trigger: RenderTrigger) -> bool {
        match (self.origin, trigger) {
            (None, _) => false,
            (Some(ImageOrigin::UserSupplied), RenderTrigger::InitialLoad) => true,
            (Some(ImageOrigin::Preloaded), RenderTrigger::InitialLoad) => false,
            (Some(_), RenderTrigger::Edit) => self.edited,
        }
    }
}
