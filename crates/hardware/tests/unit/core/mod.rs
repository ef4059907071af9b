/// Register file, memory and call stack.
pub mod arch;


/// Property-based tests over the machine state.
pub mod properties;
