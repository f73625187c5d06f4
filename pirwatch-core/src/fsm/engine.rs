//! Table-driven state machine interpreter
//!
//! The engine owns the current state and a domain context `C`. The
//! transition table is a `'static` slice shared by every instance of a
//! machine kind; guards borrow the context immutably and actions borrow
//! it mutably, so a guard cannot have side effects on the context.
//!
//! ```ignore
//! const TABLE: &[Transition<Light, Ctx>] = &[
//!     Transition::new(Light::Off, Ctx::switch_closed, Light::On, Ctx::power_on),
//!     Transition::new(Light::On, Ctx::switch_open, Light::Off, Ctx::power_off),
//! ];
//!
//! let mut fsm = Fsm::new(TABLE, Ctx::default())?;
//! loop {
//!     fsm.step();
//! }
//! ```

use super::error::FsmError;

/// Guard predicate over the machine context
pub type Guard<C> = fn(&C) -> bool;

/// Action fired when a guard holds
pub type Action<C> = fn(&mut C);

/// One record of a transition table
pub struct Transition<S, C> {
    /// State the transition leaves from
    pub origin: S,
    /// Condition that must hold for the transition to fire
    pub guard: Guard<C>,
    /// State the machine enters
    pub destination: S,
    /// Side effects performed when the transition fires
    pub action: Action<C>,
}

impl<S, C> Transition<S, C> {
    /// Create a transition record
    pub const fn new(origin: S, guard: Guard<C>, destination: S, action: Action<C>) -> Self {
        Self {
            origin,
            guard,
            destination,
            action,
        }
    }
}

impl<S: Copy, C> Clone for Transition<S, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, C> Copy for Transition<S, C> {}

/// Result of a single interpreter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step<S> {
    /// No guard held; the machine stays where it was
    Stayed(S),
    /// A transition fired and its action ran
    Fired {
        /// State before the step
        from: S,
        /// State after the step
        to: S,
    },
}

impl<S: Copy> Step<S> {
    /// Check if a transition fired
    pub fn fired(&self) -> bool {
        matches!(self, Step::Fired { .. })
    }

    /// State the machine is in after this step
    pub fn state(&self) -> S {
        match *self {
            Step::Stayed(state) => state,
            Step::Fired { to, .. } => to,
        }
    }
}

/// Run-to-completion state machine
///
/// `step` takes `&mut self`, so an instance cannot be stepped re-entrantly
/// or from two contexts at once.
pub struct Fsm<S: 'static, C: 'static> {
    state: S,
    table: &'static [Transition<S, C>],
    context: C,
}

impl<S: Copy + PartialEq + 'static, C: 'static> Fsm<S, C> {
    /// Bind a transition table and start in the origin of its first record
    pub fn new(table: &'static [Transition<S, C>], context: C) -> Result<Self, FsmError> {
        let first = table.first().ok_or(FsmError::EmptyTable)?;

        Ok(Self {
            state: first.origin,
            table,
            context,
        })
    }

    /// Bind a transition table and start in `initial`
    ///
    /// `initial` must appear somewhere in the table.
    pub fn with_initial_state(
        table: &'static [Transition<S, C>],
        initial: S,
        context: C,
    ) -> Result<Self, FsmError> {
        let mut fsm = Self::new(table, context)?;
        fsm.set_state(initial)?;
        Ok(fsm)
    }

    /// Run one interpreter pass
    ///
    /// Evaluates the guards of the current state in table order. The first
    /// guard that holds fires its action, then the machine moves to the
    /// transition's destination. At most one transition fires per call.
    pub fn step(&mut self) -> Step<S> {
        let from = self.state;

        let fired = self
            .table
            .iter()
            .filter(|t| t.origin == from)
            .find(|t| (t.guard)(&self.context));

        match fired {
            Some(transition) => {
                (transition.action)(&mut self.context);
                self.state = transition.destination;
                Step::Fired {
                    from,
                    to: transition.destination,
                }
            }
            None => Step::Stayed(from),
        }
    }

    /// Force the current state without running any action
    pub fn set_state(&mut self, state: S) -> Result<(), FsmError> {
        if !self.has_state(state) {
            return Err(FsmError::UnknownState);
        }
        self.state = state;
        Ok(())
    }

    /// Check if `state` appears as origin or destination in the table
    pub fn has_state(&self, state: S) -> bool {
        self.table
            .iter()
            .any(|t| t.origin == state || t.destination == state)
    }

    /// Get the current state
    pub fn state(&self) -> S {
        self.state
    }

    /// Get the transition table
    pub fn table(&self) -> &'static [Transition<S, C>] {
        self.table
    }

    /// Get the machine context
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Get mutable access to the machine context
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Yellow,
        Maintenance,
    }

    #[derive(Debug, Default)]
    struct Signal {
        go: bool,
        slow: bool,
        stop: bool,
        actions: u32,
        last_action: Option<&'static str>,
    }

    impl Signal {
        fn go(&self) -> bool {
            self.go
        }

        fn slow(&self) -> bool {
            self.slow
        }

        fn stop(&self) -> bool {
            self.stop
        }

        fn always(&self) -> bool {
            true
        }

        fn on_green(&mut self) {
            self.actions += 1;
            self.last_action = Some("green");
        }

        fn on_yellow(&mut self) {
            self.actions += 1;
            self.last_action = Some("yellow");
        }

        fn on_red(&mut self) {
            self.actions += 1;
            self.last_action = Some("red");
        }

        fn on_fast_red(&mut self) {
            self.actions += 1;
            self.last_action = Some("fast-red");
        }
    }

    const TABLE: &[Transition<Light, Signal>] = &[
        Transition::new(Light::Red, Signal::go, Light::Green, Signal::on_green),
        Transition::new(Light::Green, Signal::stop, Light::Red, Signal::on_fast_red),
        Transition::new(Light::Green, Signal::slow, Light::Yellow, Signal::on_yellow),
        Transition::new(Light::Yellow, Signal::always, Light::Red, Signal::on_red),
    ];

    const EMPTY: &[Transition<Light, Signal>] = &[];

    #[test]
    fn test_starts_in_first_origin() {
        let fsm = Fsm::new(TABLE, Signal::default()).unwrap();
        assert_eq!(fsm.state(), Light::Red);
        assert_eq!(fsm.context().actions, 0);
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = Fsm::new(EMPTY, Signal::default());
        assert!(matches!(result, Err(FsmError::EmptyTable)));
    }

    #[test]
    fn test_no_guard_stays() {
        let mut fsm = Fsm::new(TABLE, Signal::default()).unwrap();

        let step = fsm.step();
        assert_eq!(step, Step::Stayed(Light::Red));
        assert!(!step.fired());
        assert_eq!(fsm.state(), Light::Red);
        assert_eq!(fsm.context().actions, 0);
    }

    #[test]
    fn test_guard_fires_action_once() {
        let mut fsm = Fsm::new(TABLE, Signal::default()).unwrap();
        fsm.context_mut().go = true;

        let step = fsm.step();
        assert_eq!(
            step,
            Step::Fired {
                from: Light::Red,
                to: Light::Green
            }
        );
        assert_eq!(step.state(), Light::Green);
        assert_eq!(fsm.context().actions, 1);
        assert_eq!(fsm.context().last_action, Some("green"));

        // Green has no transition on `go`
        fsm.step();
        assert_eq!(fsm.state(), Light::Green);
        assert_eq!(fsm.context().actions, 1);
    }

    #[test]
    fn test_first_true_guard_wins() {
        let mut fsm = Fsm::with_initial_state(TABLE, Light::Green, Signal::default()).unwrap();
        fsm.context_mut().stop = true;
        fsm.context_mut().slow = true;

        fsm.step();
        assert_eq!(fsm.state(), Light::Red);
        assert_eq!(fsm.context().last_action, Some("fast-red"));
    }

    #[test]
    fn test_one_transition_per_step() {
        let mut fsm = Fsm::with_initial_state(TABLE, Light::Green, Signal::default()).unwrap();
        fsm.context_mut().slow = true;

        // Yellow -> Red is unconditional but must wait for the next step
        fsm.step();
        assert_eq!(fsm.state(), Light::Yellow);

        fsm.step();
        assert_eq!(fsm.state(), Light::Red);
        assert_eq!(fsm.context().actions, 2);
    }

    #[test]
    fn test_unknown_initial_state_rejected() {
        let result = Fsm::with_initial_state(TABLE, Light::Maintenance, Signal::default());
        assert!(matches!(result, Err(FsmError::UnknownState)));
    }

    #[test]
    fn test_set_state() {
        let mut fsm = Fsm::new(TABLE, Signal::default()).unwrap();

        assert_eq!(fsm.set_state(Light::Maintenance), Err(FsmError::UnknownState));
        assert_eq!(fsm.state(), Light::Red);

        assert_eq!(fsm.set_state(Light::Yellow), Ok(()));
        assert_eq!(fsm.state(), Light::Yellow);
        assert_eq!(fsm.context().actions, 0);
    }

    #[test]
    fn test_has_state() {
        let fsm = Fsm::new(TABLE, Signal::default()).unwrap();
        assert!(fsm.has_state(Light::Red));
        assert!(fsm.has_state(Light::Yellow));
        assert!(!fsm.has_state(Light::Maintenance));
        assert_eq!(fsm.table().len(), 4);
    }

    proptest! {
        #[test]
        fn prop_state_stays_in_table(inputs in proptest::collection::vec(any::<(bool, bool, bool)>(), 0..64)) {
            let mut fsm = Fsm::new(TABLE, Signal::default()).unwrap();

            for (go, slow, stop) in inputs {
                let ctx = fsm.context_mut();
                ctx.go = go;
                ctx.slow = slow;
                ctx.stop = stop;

                let step = fsm.step();
                prop_assert!(fsm.has_state(fsm.state()));
                prop_assert_eq!(step.state(), fsm.state());
            }
        }

        #[test]
        fn prop_stayed_step_has_no_effect(start in 0usize..3) {
            let initial = [Light::Red, Light::Green, Light::Yellow][start];
            let mut fsm = Fsm::with_initial_state(TABLE, initial, Signal::default()).unwrap();

            // Yellow is unconditional, so only Red and Green can stay put
            if initial != Light::Yellow {
                let step = fsm.step();
                prop_assert_eq!(step, Step::Stayed(initial));
                prop_assert_eq!(fsm.context().actions, 0);
            }
        }
    }
}
