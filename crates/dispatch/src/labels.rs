//! Scoped debug labels attached to queues and command buffers.
//!
//! Each key owns a strict LIFO stack of begun labels plus one insert slot.
//! Begin and end never match identifiers; `end` pops whatever is on top. The
//! insert slot is visible above the stack until the next begin or end clears it.
//!
//! Command-buffer stacks persist across recording sessions until the owner
//! calls [`LabelMaps::reset`] or [`LabelMaps::erase_command_buffer`].

use rustc_hash::FxHashMap as HashMap;

/// A named, colored annotation. An empty name marks the "no label" state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
	pub name: String,
	pub color: [f32; 4],
}

impl Label {
	pub fn new(name: impl Into<String>, color: [f32; 4]) -> Self {
		Self {
			name: name.into(),
			color,
		}
	}

	/// Returns true for the sentinel "no label" state.
	pub fn is_empty(&self) -> bool {
		self.name.is_empty()
	}

	fn reset(&mut self) {
		*self = Self::default();
	}
}

/// Label state for one queue or command buffer.
#[derive(Debug, Clone, Default)]
pub struct LabelStack {
	labels: Vec<Label>,
	insert: Label,
}

impl LabelStack {
	/// Pushes `label` and clears the insert slot.
	pub fn begin(&mut self, label: Label) {
		self.labels.push(label);
		self.insert.reset();
	}

	/// Pops the top label if any, and always clears the insert slot.
	pub fn end(&mut self) {
		self.labels.pop();
		self.insert.reset();
	}

	/// Replaces the insert slot.
	pub fn insert(&mut self, label: Label) {
		self.insert = label;
	}

	/// Clears both the stack and the insert slot.
	pub fn reset(&mut self) {
		self.labels.clear();
		self.insert.reset();
	}

	/// Number of labels that [`export`](Self::export) would yield.
	pub fn len(&self) -> usize {
		self.labels.len() + usize::from(!self.insert.is_empty())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns labels most recent first: the insert slot (if set), then the
	/// stack from top to bottom.
	pub fn export(&self) -> Vec<Label> {
		let mut out = Vec::with_capacity(self.len());
		if !self.insert.is_empty() {
			out.push(self.insert.clone());
		}
		out.extend(self.labels.iter().rev().cloned());
		out
	}
}

/// Which keyed label map an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelTarget {
	Queue(u64),
	CommandBuffer(u64),
}

/// Queue and command-buffer label stacks, keyed by handle.
#[derive(Debug, Default)]
pub struct LabelMaps {
	queues: HashMap<u64, LabelStack>,
	command_buffers: HashMap<u64, LabelStack>,
}

impl LabelMaps {
	fn map(&self, target: LabelTarget) -> (&HashMap<u64, LabelStack>, u64) {
		match target {
			LabelTarget::Queue(key) => (&self.queues, key),
			LabelTarget::CommandBuffer(key) => (&self.command_buffers, key),
		}
	}

	fn map_mut(&mut self, target: LabelTarget) -> (&mut HashMap<u64, LabelStack>, u64) {
		match target {
			LabelTarget::Queue(key) => (&mut self.queues, key),
			LabelTarget::CommandBuffer(key) => (&mut self.command_buffers, key),
		}
	}

	fn get_mut(&mut self, target: LabelTarget) -> Option<&mut LabelStack> {
		let (map, key) = self.map_mut(target);
		map.get_mut(&key)
	}

	fn get_or_create(&mut self, target: LabelTarget) -> &mut LabelStack {
		let (map, key) = self.map_mut(target);
		map.entry(key).or_default()
	}

	/// Opens a label scope. Ignored when `label` is absent or unnamed.
	pub fn begin(&mut self, target: LabelTarget, label: Option<Label>) {
		let Some(label) = label.filter(|l| !l.is_empty()) else {
			return;
		};
		self.get_or_create(target).begin(label);
	}

	/// Closes the innermost label scope. Ignored when the key has no stack.
	pub fn end(&mut self, target: LabelTarget) {
		if let Some(stack) = self.get_mut(target) {
			stack.end();
		}
	}

	/// Sets the insert slot. An absent label clears it.
	pub fn insert(&mut self, target: LabelTarget, label: Option<Label>) {
		self.get_or_create(target).insert(label.unwrap_or_default());
	}

	/// Clears the stack and insert slot without dropping the key.
	pub fn reset(&mut self, target: LabelTarget) {
		if let Some(stack) = self.get_mut(target) {
			stack.reset();
		}
	}

	/// Drops a command buffer's label state entirely.
	pub fn erase_command_buffer(&mut self, command_buffer: u64) {
		self.command_buffers.remove(&command_buffer);
	}

	/// Exports the labels for `target`, most recent first.
	pub fn export(&self, target: LabelTarget) -> Vec<Label> {
		let (map, key) = self.map(target);
		map.get(&key).map(LabelStack::export).unwrap_or_default()
	}

	/// Returns true when a stack exists for `target`.
	pub fn contains(&self, target: LabelTarget) -> bool {
		let (map, key) = self.map(target);
		map.contains_key(&key)
	}
}
