//! Focus handling for modal dialogs.
//!
//! Controls inside a dialog register themselves with a [`FocusRing`] in the
//! order they are declared. The ring never caches which members are usable:
//! eligibility is checked every time a Tab press needs to wrap, so a button
//! that becomes disabled simply drops out of the cycle.

/// Position reserved in a [`FocusRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusSlot(u32);

/// Ordered registry of the focusable controls inside a dialog.
///
/// Slots are reserved in declaration order and filled in once the control
/// is mounted, so the cycle order does not depend on when elements appear.
#[derive(Debug, Clone)]
pub struct FocusRing<T> {
    members: Vec<(FocusSlot, Option<T>)>,
    next_slot: u32,
}

impl<T> Default for FocusRing<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            next_slot: 0,
        }
    }
}

impl<T> FocusRing<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self) -> FocusSlot {
        let slot = FocusSlot(self.next_slot);
        self.next_slot += 1;
        self.members.push((slot, None));
        slot
    }

    /// Fills a reserved slot. Released or unknown slots are ignored.
    pub fn attach(&mut self, slot: FocusSlot, member: T) {
        if let Some((_, m)) = self.members.iter_mut().find(|(s, _)| *s == slot) {
            *m = Some(member);
        }
    }

    pub fn register(&mut self, member: T) -> FocusSlot {
        let slot = self.reserve();
        self.attach(slot, member);
        slot
    }

    pub fn release(&mut self, slot: FocusSlot) {
        self.members.retain(|(s, _)| *s != slot);
    }

    /// Number of mounted members.
    pub fn len(&self) -> usize {
        self.members.iter().filter(|(_, m)| m.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the member focus has to jump to, if any.
    ///
    /// Tab on the last eligible member wraps to the first one, Shift+Tab on
    /// the first wraps to the last. In every other position the browser's
    /// own tab order applies and `None` is returned.
    pub fn wrap_target<E, A>(&self, backwards: bool, is_eligible: E, is_active: A) -> Option<&T>
    where
        E: Fn(&T) -> bool,
        A: Fn(&T) -> bool,
    {
        let mut eligible = self
            .members
            .iter()
            .filter_map(|(_, m)| m.as_ref())
            .filter(|m| is_eligible(*m));
        let first = eligible.next()?;
        let last = eligible.last().unwrap_or(first);
        let (edge, opposite) = if backwards {
            (first, last)
        } else {
            (last, first)
        };
        if is_active(edge) {
            Some(opposite)
        } else {
            None
        }
    }
}

/// Where a pointer click landed relative to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction<T> {
    /// The dialog must close.
    Close,
    /// Default tab handling must be suppressed and focus moved here.
    Focus(T),
    /// Nothing to do; let the event through.
    Pass,
}

/// State held for as long as a dialog is open.
///
/// Dropping or [closing](DialogSession::close) the session releases every
/// reference it holds; the caller gets back the element that had focus when
/// the dialog opened so it can hand focus back.
#[derive(Debug)]
pub struct DialogSession<T> {
    previously_focused: Option<T>,
    ring: FocusRing<T>,
}

impl<T: Clone> DialogSession<T> {
    pub fn open(previously_focused: Option<T>) -> Self {
        Self {
            previously_focused,
            ring: FocusRing::new(),
        }
    }

    pub fn ring(&self) -> &FocusRing<T> {
        &self.ring
    }

    pub fn ring_mut(&mut self) -> &mut FocusRing<T> {
        &mut self.ring
    }

    pub fn handle_key<E, A>(
        &self,
        key: &str,
        shift: bool,
        is_eligible: E,
        is_active: A,
    ) -> DialogAction<T>
    where
        E: Fn(&T) -> bool,
        A: Fn(&T) -> bool,
    {
        match key {
            "Escape" => DialogAction::Close,
            "Tab" => self
                .ring
                .wrap_target(shift, is_eligible, is_active)
                .cloned()
                .map_or(DialogAction::Pass, DialogAction::Focus),
            _ => DialogAction::Pass,
        }
    }

    pub fn handle_click(&self, target: ClickTarget) -> DialogAction<T> {
        match target {
            ClickTarget::Backdrop => DialogAction::Close,
            ClickTarget::Content => DialogAction::Pass,
        }
    }

    /// Ends the session, returning the element focus should go back to.
    pub fn close(self) -> Option<T> {
        self.previously_focused
    }

    /// Like [`close`](DialogSession::close) for sessions living behind a
    /// shared handle that cannot be moved out of.
    pub fn take_restore_target(&mut self) -> Option<T> {
        self.ring = FocusRing::new();
        self.previously_focused.take()
    }
}
