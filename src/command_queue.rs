//! Commands waiting for the engine loop
//!
//! Command sources (network handler, IR remote, buttons) push into a shared
//! [`CommandQueue`], usually a `static`. The loop owning the engine drains it
//! between ticks with [`LightEngine::process_pending`].
//!
//! The queue is guarded by `critical-section`, so it can be filled from
//! interrupt handlers.
//!
//! [`LightEngine::process_pending`]: crate::LightEngine::process_pending

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::Command;

/// Queue was full, carries the dropped command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub Command);

/// A batch did not fit, nothing was queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSendError {
    /// Free slots at the time of the attempt
    pub free: usize,
}

/// Fixed-capacity FIFO of pending commands
pub struct CommandQueue<const SIZE: usize> {
    pending: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue one command, dropping it if the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.pending
                .borrow_ref_mut(cs)
                .push_back(command)
                .map_err(|command| {
                    #[cfg(feature = "esp32-log")]
                    println!("[CommandQueue.try_send] queue full, dropped {:?}", command);
                    TrySendError(command)
                })
        })
    }

    /// Queue a batch of commands, either all of them or none
    ///
    /// Used for expanded JSON payloads: the engine must never see half of
    /// one. The batch is queued in a single critical section, so commands
    /// from other sources cannot interleave with it.
    pub fn try_send_all(&self, commands: &[Command]) -> Result<(), BatchSendError> {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow_ref_mut(cs);
            let free = SIZE - pending.len();
            if commands.len() > free {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[CommandQueue.try_send_all] queue full, dropped {} commands",
                    commands.len()
                );
                return Err(BatchSendError { free });
            }
            for command in commands {
                // Capacity checked above
                let _ = pending.push_back(*command);
            }
            Ok(())
        })
    }

    /// Take the oldest pending command
    pub fn pop(&self) -> Option<Command> {
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).pop_front())
    }

    /// Number of pending commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
