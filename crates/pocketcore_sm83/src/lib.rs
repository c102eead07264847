pub mod cpu;

pub use cpu::interrupts::{IntFlags, DISPATCH_CYCLES, IE_ADDR, IF_ADDR};
pub use cpu::opcode::{Cond, Instruction, Op, Operand};
pub use cpu::{Bus, Cpu, CpuError, Flag, Reg16, Reg8, Registers};
