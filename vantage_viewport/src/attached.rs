// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Deref, DerefMut};

use vantage_present::Surface;

use crate::listeners::{InputHost, ListenerScope};
use crate::viewport::Viewport;

/// A [`Viewport`] together with the input listeners feeding it.
///
/// The listeners are detached before the viewport and its surface are
/// dropped, so no input can reach a torn-down surface.
pub struct AttachedViewport<S, H: InputHost> {
    // Field order is drop order.
    listeners: ListenerScope<H>,
    viewport: Viewport<S>,
}

impl<S, H: InputHost> core::fmt::Debug for AttachedViewport<S, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttachedViewport")
            .field("listeners", &self.listeners)
            .field("viewport", &self.viewport)
            .finish()
    }
}

impl<S: Surface, H: InputHost> AttachedViewport<S, H> {
    /// Attaches every input listener to `host` for the lifetime of `viewport`.
    ///
    /// If attaching fails, the listeners attached so far are detached and the
    /// viewport is dropped.
    pub fn attach(viewport: Viewport<S>, host: H) -> Result<Self, H::Error> {
        let listeners = ListenerScope::attach(host)?;
        Ok(Self {
            listeners,
            viewport,
        })
    }

    /// The attached listeners.
    #[must_use]
    pub fn listeners(&self) -> &ListenerScope<H> {
        &self.listeners
    }
}

impl<S, H: InputHost> Deref for AttachedViewport<S, H> {
    type Target = Viewport<S>;

    fn deref(&self) -> &Viewport<S> {
        &self.viewport
    }
}

impl<S, H: InputHost> DerefMut for AttachedViewport<S, H> {
    fn deref_mut(&mut self) -> &mut Viewport<S> {
        &mut self.viewport
    }
}
