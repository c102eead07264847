//! SM83 CPU core: register file, opcode tables, decode/execute driver and
//! interrupt controller.
//!
//! The core owns no memory of its own. Every access goes through the [`Bus`]
//! trait supplied to [`Cpu::step`], and the caller advances the rest of the
//! machine by the cycle count each step reports.

mod alu;
mod exec;
pub mod interrupts;
pub mod opcode;
mod regs;

#[cfg(test)]
mod tests;

pub use regs::{Flag, Reg16, Reg8, Registers};

use opcode::{Instruction, Op, BASE};

/// Abstraction over the memory bus.
///
/// Both methods must be total over the full 16-bit address space; routing
/// to cartridge, work RAM, video RAM or IO registers is the bus's concern
/// and invisible to the core.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

/// Fatal conditions surfaced by the execution engine.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// One of the eleven reserved base opcodes was fetched. Continuing
    /// would silently mask a cartridge-compatibility bug, so the step
    /// fails instead; no register (including PC) has been modified.
    #[error("unknown opcode {opcode:#04X} at PC={pc:#06X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}

/// SM83 CPU core.
///
/// One call to [`Cpu::step`] executes exactly one instruction (or one
/// interrupt dispatch) to completion and returns the number of T-cycles
/// consumed. There is no partial execution: bus accesses happen
/// synchronously inside the step and the aggregate cost is charged at the
/// end.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Set and cleared by EI/DI/RETI and by
    /// interrupt dispatch.
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Exited when a joypad input line goes low,
    /// observed via reads from P1 ($FF00).
    stopped: bool,
    /// Set by HALT when IME is clear with an interrupt already pending:
    /// the next opcode fetch fails to advance PC once.
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Immediate operand bytes of the current instruction, little endian.
    fetched: u16,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            fetched: 0,
        };
        cpu.reset();
        cpu
    }

    /// Reset to the documented post-boot-ROM state.
    ///
    /// These are the register values the DMG boot ROM leaves behind when it
    /// hands control to cartridge code at 0x0100.
    pub fn reset(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.halt_bug = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.fetched = 0;
    }

    #[inline]
    pub(crate) fn push16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        // Stack grows downward; the low byte ends up at the lower address.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, (value >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, value as u8);
    }

    #[inline]
    pub(crate) fn pop16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    /// Execute a single instruction (or interrupt dispatch) and return the
    /// number of T-cycles consumed.
    ///
    /// Control flow per step: STOP wait, interrupt check, HALT wait, then
    /// fetch/decode/execute. Fetching one of the reserved opcode holes
    /// fails with [`CpuError::UnknownOpcode`] before any state changes.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if self.stopped {
            let p1 = bus.read8(0xFF00);
            if (p1 & 0x0F) != 0x0F {
                self.stopped = false;
            }
            return Ok(4);
        }

        if let Some(cycles) = self.service_interrupt(bus) {
            return Ok(cycles);
        }

        if self.halted {
            // A stream of NOP-like cycles until an interrupt wakes us.
            return Ok(4);
        }

        let pc = self.regs.pc;
        let opcode = bus.read8(pc);
        let instr = BASE.lookup(opcode);

        if instr.op == Op::Unknown {
            return Err(CpuError::UnknownOpcode { opcode, pc });
        }

        // Immediate bytes follow the opcode, little endian. With the HALT
        // bug active the opcode fetch did not advance PC, so the operand
        // window (and the next opcode) shifts back by one byte.
        let operand_base = if self.halt_bug {
            pc
        } else {
            pc.wrapping_add(1)
        };
        let mut fetched: u16 = 0;
        for index in 0..instr.length {
            let byte = bus.read8(operand_base.wrapping_add(index as u16));
            fetched |= (byte as u16) << (8 * index);
        }
        self.fetched = fetched;

        if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc = pc.wrapping_add(instr.length as u16);
        } else {
            self.regs.pc = pc.wrapping_add(1 + instr.length as u16);
        }

        #[cfg(feature = "cpu-trace")]
        log::trace!(
            "{pc:04X}  {opcode:02X}  {name:<16} AF={af:04X} BC={bc:04X} DE={de:04X} HL={hl:04X} SP={sp:04X}",
            name = self.disassemble(instr),
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            sp = self.regs.sp,
        );

        let cycles = instr.cycles + self.execute(bus, instr);
        self.apply_ime_delay();
        Ok(cycles)
    }

    /// Render a descriptor's mnemonic with the current immediate
    /// substituted for its placeholders. Diagnostic only.
    pub fn disassemble(&self, instr: &Instruction) -> String {
        instr
            .name
            .replace("{d16}", &format!("{:04X}h", self.fetched))
            .replace("{a16}", &format!("{:04X}h", self.fetched))
            .replace("{d8}", &format!("{:02X}h", self.fetched as u8))
            .replace("{a8}", &format!("{:02X}h", self.fetched as u8))
    }
}
