//! Pool of reusable scratch byte buffers.

use parking_lot::Mutex;
use scopeguard::ScopeGuard;

/// Pool of scratch buffers.
///
/// A buffer is checked out with [`BufferPool::acquire`] and goes back into the pool when the returned guard is dropped,
/// including on early returns and panics.
pub struct BufferPool {
	buffers:     Mutex<Vec<Vec<u8>>>,
	max_pooled:  usize,
}

impl BufferPool {
	/// Default number of buffers kept around.
	pub const DEFAULT_MAX_POOLED: usize = 8;

	pub const fn new(max_pooled: usize) -> Self {
		Self { buffers: parking_lot::const_mutex(Vec::new()), max_pooled }
	}

	/// Check out an empty buffer.
	pub fn acquire(&self) -> ScopeGuard<Vec<u8>, impl FnOnce(Vec<u8>) + '_> {
		let buffer = self.buffers.lock().pop().unwrap_or_default();
		scopeguard::guard(buffer, move |buffer| self.release(buffer))
	}

	/// Check out a buffer of `len` zeroed bytes.
	pub fn acquire_zeroed(&self, len: usize) -> ScopeGuard<Vec<u8>, impl FnOnce(Vec<u8>) + '_> {
		let mut buffer = self.acquire();
		buffer.resize(len, 0);
		buffer
	}

	/// Number of buffers currently waiting in the pool.
	pub fn pooled(&self) -> usize {
		self.buffers.lock().len()
	}

	fn release(&self, mut buffer: Vec<u8>) {
		buffer.clear();
		let mut buffers = self.buffers.lock();
		if buffers.len() < self.max_pooled {
			buffers.push(buffer);
		}
	}
}

impl Default for BufferPool {
	fn default() -> Self {
		Self::new(Self::DEFAULT_MAX_POOLED)
	}
}
