//! Sample processing with split configuration and state

/// Processing block
///
/// Single input, single output.
///
/// For a given filter configuration `C` and state `S` the trait is implemented
/// through [`Split<&C, S>`] which borrows the configuration and owns the state.
pub trait Process<X: Copy, Y = X> {
    /// Update the state with a new input and obtain an output
    fn process(&mut self, x: X) -> Y;

    /// Process a block of inputs into a block of outputs
    ///
    /// Input and output must be of the same size.
    fn block(&mut self, x: &[X], y: &mut [Y]) {
        debug_assert_eq!(x.len(), y.len());
        for (x, y) in x.iter().zip(y) {
            *y = self.process(*x);
        }
    }
}

/// Process a block in place.
pub trait Inplace<X: Copy>: Process<X> {
    /// Process an input block into the same data as output
    fn inplace(&mut self, xy: &mut [X]) {
        for xy in xy.iter_mut() {
            *xy = self.process(*xy);
        }
    }
}

/// Processing with the state passed in explicitly
///
/// Implemented by designs. Designs are immutable and may be shared by any
/// number of states.
pub trait SplitProcess<X: Copy, Y = X, S: ?Sized = ()> {
    /// Process an input into an output, updating `state`
    fn process(&self, state: &mut S, x: X) -> Y;

    /// Process a block of inputs
    fn block(&self, state: &mut S, x: &[X], y: &mut [Y]) {
        debug_assert_eq!(x.len(), y.len());
        for (x, y) in x.iter().zip(y) {
            *y = self.process(state, *x);
        }
    }
}

/// Inplace processing with explicit state
pub trait SplitInplace<X: Copy, S: ?Sized = ()>: SplitProcess<X, X, S> {
    /// Process an input block into the same data as output
    fn inplace(&self, state: &mut S, xy: &mut [X]) {
        for xy in xy.iter_mut() {
            *xy = self.process(state, *xy);
        }
    }
}

impl<X: Copy, Y, T: Process<X, Y> + ?Sized> Process<X, Y> for &mut T {
    fn process(&mut self, x: X) -> Y {
        (*self).process(x)
    }

    fn block(&mut self, x: &[X], y: &mut [Y]) {
        (*self).block(x, y)
    }
}

impl<X: Copy, T: Inplace<X> + ?Sized> Inplace<X> for &mut T {
    fn inplace(&mut self, xy: &mut [X]) {
        (*self).inplace(xy)
    }
}

/// A stateful processor with split configuration and state
///
/// The configuration is usually a borrowed design, the state is owned.
#[derive(Debug, Copy, Clone, Default)]
pub struct Split<C, S> {
    /// Processor configuration
    pub config: C,
    /// Processor state
    pub state: S,
}

impl<C, S> Split<C, S> {
    /// Create a new Split
    pub const fn new(config: C, state: S) -> Self {
        Self { config, state }
    }

    /// Processor state
    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<C, S: Default> Split<C, S> {
    /// Reset the state to its default (zero)
    pub fn reset(&mut self) {
        self.state = S::default();
    }
}

impl<X: Copy, Y, S, C: SplitProcess<X, Y, S> + ?Sized> Process<X, Y> for Split<&C, S> {
    fn process(&mut self, x: X) -> Y {
        self.config.process(&mut self.state, x)
    }

    fn block(&mut self, x: &[X], y: &mut [Y]) {
        self.config.block(&mut self.state, x, y)
    }
}

impl<X: Copy, S, C: SplitInplace<X, S> + ?Sized> Inplace<X> for Split<&C, S> {
    fn inplace(&mut self, xy: &mut [X]) {
        self.config.inplace(&mut self.state, xy);
    }
}
