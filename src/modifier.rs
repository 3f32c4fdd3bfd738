//! Feature modifiers and their timing-policy scheduling
//!
//! A modifier is a unit of secondary behavior attached to one feature
//! (measurement labels, overlays, ...). Whether a given invocation actually
//! runs the modifier body is decided by a small per-instance state machine
//! driven by the modifier's [`TimingPolicy`]. Scheduling counters are
//! private to each instance; nothing is shared between modifiers.

use async_trait::async_trait;

use crate::axis::AxisType;
use crate::bounds::Bounds;
use crate::error::{PlanError, PlanResult};
use crate::renderer::SceneRenderer;

/// When, relative to its feature's draw, a modifier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingPolicy {
    /// Runs unconditionally before the feature draws.
    RunBefore,
    /// Runs unconditionally after the feature draws.
    #[default]
    RunAfter,
    /// Runs after the feature draws, but only on every `period`-th
    /// invocation (the 1st period-1 invocations are skipped, the
    /// `period`-th fires, and so on). A period of 0 is invalid.
    Cyclic(u32),
    /// Runs after the feature draws, but only from the `offset + 1`-th
    /// invocation onward; from then on behaves like [`RunAfter`].
    Delayed(u32),
}

impl TimingPolicy {
    /// The invocation group this policy belongs to.
    pub fn group(self) -> TimingGroup {
        match self {
            TimingPolicy::RunBefore => TimingGroup::Before,
            TimingPolicy::RunAfter => TimingGroup::After,
            TimingPolicy::Cyclic(_) => TimingGroup::Cyclic,
            TimingPolicy::Delayed(_) => TimingGroup::Delayed,
        }
    }
}

/// Invocation groups, in the fixed order the orchestrator runs them:
/// Before -> [feature draws] -> After -> Cyclic -> Delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingGroup {
    Before,
    After,
    Cyclic,
    Delayed,
}

impl TimingGroup {
    /// The groups run after a feature draws, in order.
    pub const AFTER_FILL: [TimingGroup; 3] =
        [TimingGroup::After, TimingGroup::Cyclic, TimingGroup::Delayed];
}

/// A unit of secondary behavior attached to a feature.
///
/// `T` is the feature's payload type; the modifier sees the same data the
/// feature draws from.
#[async_trait(?Send)]
pub trait Modifier<T> {
    /// Adds this modifier's secondary content to the scene.
    async fn apply(
        &mut self,
        data: &T,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()>;

    /// Bounds of content this modifier contributed, if any.
    fn extents(&self) -> Option<Bounds> {
        None
    }

    /// Releases per-render state.
    fn clean(&mut self) {}
}

/// A modifier paired with its timing policy and private scheduling
/// counters.
///
/// The counters are mutable per-instance state and are deliberately not
/// part of any equality or copy semantics; cloning schedulers around would
/// silently share firing history between unrelated features.
pub struct ScheduledModifier<T> {
    policy: TimingPolicy,
    countdown: u32,
    remaining_delay: i64,
    inner: Box<dyn Modifier<T>>,
}

impl<T> ScheduledModifier<T> {
    /// Wraps a modifier with a timing policy.
    ///
    /// Rejects `Cyclic(0)`: a zero period can never fire and would divide
    /// by zero in the countdown arithmetic.
    pub fn new(policy: TimingPolicy, inner: Box<dyn Modifier<T>>) -> PlanResult<Self> {
        if let TimingPolicy::Cyclic(0) = policy {
            return Err(PlanError::InvalidModifierConfiguration);
        }
        Ok(Self {
            policy,
            countdown: 0,
            remaining_delay: Self::initial_delay(policy),
            inner,
        })
    }

    fn initial_delay(policy: TimingPolicy) -> i64 {
        match policy {
            // Widened so the full u32 offset range stays gated.
            TimingPolicy::Delayed(offset) => i64::from(offset) + 1,
            _ => 0,
        }
    }

    pub fn policy(&self) -> TimingPolicy {
        self.policy
    }

    /// Advances the scheduling state machine by one invocation and reports
    /// whether the modifier body fires this time.
    pub fn advance(&mut self) -> bool {
        match self.policy {
            TimingPolicy::RunBefore | TimingPolicy::RunAfter => true,
            TimingPolicy::Cyclic(period) => {
                self.countdown = (self.countdown + 1) % period;
                self.countdown == 0
            }
            TimingPolicy::Delayed(_) => {
                self.remaining_delay = self.remaining_delay.saturating_sub(1);
                self.remaining_delay <= 0
            }
        }
    }

    /// One scheduled invocation: advances the counters and, if the policy
    /// fires, runs the modifier body.
    pub async fn invoke(
        &mut self,
        data: &T,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        if self.advance() {
            self.inner.apply(data, axis, renderer).await?;
        }
        Ok(())
    }

    pub fn extents(&self) -> Option<Bounds> {
        self.inner.extents()
    }

    /// Rewinds the scheduling counters to their initial values and cleans
    /// the wrapped modifier. Called between independent batch items so no
    /// firing history leaks across renders.
    pub fn reset(&mut self) {
        self.countdown = 0;
        self.remaining_delay = Self::initial_delay(self.policy);
        self.inner.clean();
    }
}

/// The ordered modifier list owned by one feature.
pub struct ModifierStack<T> {
    entries: Vec<ScheduledModifier<T>>,
}

impl<T> ModifierStack<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replaces (not appends to) the modifier list.
    pub fn set(&mut self, entries: Vec<ScheduledModifier<T>>) {
        self.entries = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every modifier of the given group, in list order.
    pub async fn apply_group(
        &mut self,
        group: TimingGroup,
        data: &T,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.policy().group() == group)
        {
            entry.invoke(data, axis, renderer).await?;
        }
        Ok(())
    }

    /// Union of all modifier-contributed bounds, if any modifier
    /// contributed.
    pub fn extents(&self) -> Option<Bounds> {
        let mut result = Bounds::EMPTY;
        let mut contributed = false;
        for entry in &self.entries {
            if let Some(bounds) = entry.extents() {
                result.encapsulate(&bounds);
                contributed = true;
            }
        }
        contributed.then_some(result)
    }

    /// Resets every scheduler to its initial state.
    pub fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.reset();
        }
    }
}

impl<T> Default for ModifierStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
