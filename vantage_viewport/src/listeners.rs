// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped input listener registration.
//!
//! A viewport listens to pointer-down, pointer-move, pointer-up and wheel on
//! its surface for as long as it lives. [`ListenerScope`] attaches all four on
//! creation and detaches every one of them when dropped, including when
//! attaching fails part way through.

use alloc::vec::Vec;

/// Input listener slots a viewport needs on its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Pointer released.
    PointerUp,
    /// Wheel or trackpad scroll.
    Wheel,
}

impl ListenerKind {
    /// Every listener a viewport attaches, in attach order.
    pub const ALL: [Self; 4] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::Wheel,
    ];
}

/// Host able to register input listeners on a surface.
pub trait InputHost {
    /// Token returned by [`InputHost::attach`], consumed by [`InputHost::detach`].
    type Handle;
    /// Error reported when a listener cannot be attached.
    type Error;

    /// Registers a listener of `kind`.
    fn attach(&mut self, kind: ListenerKind) -> Result<Self::Handle, Self::Error>;

    /// Removes a listener previously registered with [`InputHost::attach`].
    fn detach(&mut self, handle: Self::Handle);
}

impl<H: InputHost + ?Sized> InputHost for &mut H {
    type Handle = H::Handle;
    type Error = H::Error;

    fn attach(&mut self, kind: ListenerKind) -> Result<Self::Handle, Self::Error> {
        (**self).attach(kind)
    }

    fn detach(&mut self, handle: Self::Handle) {
        (**self).detach(handle);
    }
}

/// Owns the listeners attached to an [`InputHost`] and detaches them on drop.
pub struct ListenerScope<H: InputHost> {
    host: H,
    handles: Vec<H::Handle>,
}

impl<H: InputHost> core::fmt::Debug for ListenerScope<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerScope")
            .field("attached", &self.handles.len())
            .finish_non_exhaustive()
    }
}

impl<H: InputHost> ListenerScope<H> {
    /// Attaches every [`ListenerKind`] to `host`.
    ///
    /// On error, listeners attached so far are detached before returning.
    pub fn attach(host: H) -> Result<Self, H::Error> {
        let mut scope = Self {
            host,
            handles: Vec::with_capacity(ListenerKind::ALL.len()),
        };
        for kind in ListenerKind::ALL {
            let handle = scope.host.attach(kind)?;
            scope.handles.push(handle);
        }
        log::debug!("attached {} input listeners", scope.handles.len());
        Ok(scope)
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if no listener is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The host the listeners are attached to.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: InputHost> Drop for ListenerScope<H> {
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        log::debug!("detaching {} input listeners", self.handles.len());
        for handle in self.handles.drain(..).rev() {
            self.host.detach(handle);
        }
    }
}
