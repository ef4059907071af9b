//! Mock implementations of interpreter traits.
