//! Lifecycle of an engine handle

/// `Uninitialized → Ready` on the first successful load. A failed load leaves
/// `Failed(reason)`, which a later load may replace.
#[derive(Debug)]
pub enum EngineState<E> {
	Uninitialized,
	Ready(E),
	Failed(String),
}

impl<E> Default for EngineState<E> {
	fn default() -> Self {
		EngineState::Uninitialized
	}
}

impl<E> EngineState<E> {
	pub fn is_ready(&self) -> bool {
		matches!(self, EngineState::Ready(_))
	}

	pub fn engine_mut(&mut self) -> Option<&mut E> {
		match self {
			EngineState::Ready(engine) => Some(engine),
			_ => None,
		}
	}

	/// Reason of the last failed load, if any
	pub fn failure(&self) -> Option<&str> {
		match self {
			EngineState::Failed(reason) => Some(reason),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transitions() {
		let mut state: EngineState<u8> = EngineState::default();
		assert!(!state.is_ready());
		assert!(state.engine_mut().is_none());

		state = EngineState::Failed("no artifact".into());
		assert_eq!(state.failure(), Some("no artifact"));
		assert!(state.engine_mut().is_none());

		state = EngineState::Ready(7);
		assert!(state.is_ready());
		assert_eq!(state.engine_mut().copied(), Some(7));
		assert!(state.failure().is_none());
	}
}
