//! examples of usage of RustedCalculus
/// power, trig and logarithm walkthroughs, task documents, saving steps
pub mod calculus_examples;
