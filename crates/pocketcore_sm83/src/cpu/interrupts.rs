use bitflags::bitflags;

use super::{Bus, Cpu};

/// Interrupt-enable register address.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt-request (flag) register address.
pub const IF_ADDR: u16 = 0xFF0F;

/// Cycle cost of one interrupt dispatch.
pub const DISPATCH_CYCLES: u32 = 20;

/// Service addresses, indexed by interrupt bit number.
const VECTORS: [u16; 5] = [0x0040, 0x0048, 0x0050, 0x0058, 0x0060];

bitflags! {
    /// The five interrupt request/enable bits.
    ///
    /// Bit order is priority order: the lowest-numbered pending bit wins.
    /// The same layout is used by both the IE and IF registers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IntFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl Cpu {
    /// Check for a pending maskable interrupt and dispatch it.
    ///
    /// Returns `Some(cycles)` when an interrupt was taken. Also implements
    /// the HALT wake-up case: a pending interrupt with IME clear wakes the
    /// CPU without servicing anything.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let enabled = IntFlags::from_bits_truncate(bus.read8(IE_ADDR));
        let requested = IntFlags::from_bits_truncate(bus.read8(IF_ADDR));
        let pending = enabled & requested;
        if pending.is_empty() {
            return None;
        }

        if self.halted && !self.ime {
            // Wake from HALT without dispatching.
            self.halted = false;
            return None;
        }

        if !self.ime {
            return None;
        }

        self.halted = false;

        // Highest priority = lowest set bit.
        let index = pending.bits().trailing_zeros() as usize;

        // Acknowledge: clear only the winning request bit, leaving the
        // others (and any bits outside the low five) untouched.
        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !(1 << index));

        // The handler must not be interrupted until it re-enables IME.
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;

        let pc = self.regs.pc;
        self.push16(bus, pc);
        self.regs.pc = VECTORS[index];

        log::debug!(
            "interrupt dispatch: source {index} -> {target:#06X} (from PC={pc:#06X})",
            index = index,
            target = self.regs.pc,
            pc = pc,
        );

        Some(DISPATCH_CYCLES)
    }

    /// Apply the delayed IME change requested by EI.
    ///
    /// EI only takes effect after the instruction following it has
    /// completed, so the enable travels through a two-stage latch that is
    /// advanced once per executed instruction.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
