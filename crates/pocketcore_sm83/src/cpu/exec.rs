use super::interrupts::{IE_ADDR, IF_ADDR};
use super::opcode::{Cond, Instruction, Op, Operand, EXTENDED};
use super::regs::Flag;
use super::{Bus, Cpu};

/// Condition carried by a descriptor operand, `Always` when the slot holds
/// anything else.
fn cond_of(operand: Operand) -> Cond {
    match operand {
        Operand::Cond(cond) => cond,
        _ => Cond::Always,
    }
}

/// Literal carried by a `Fixed` operand (RST target, CB bit index).
fn fixed_of(operand: Operand) -> u8 {
    match operand {
        Operand::Fixed(value) => value,
        _ => 0,
    }
}

impl Cpu {
    pub(super) fn check_cond(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::Z => self.regs.flag(Flag::Z),
            Cond::Nz => !self.regs.flag(Flag::Z),
            Cond::C => self.regs.flag(Flag::C),
            Cond::Nc => !self.regs.flag(Flag::C),
        }
    }

    /// Resolve an operand descriptor to an 8-bit value.
    ///
    /// Post-increment/decrement addressing adjusts HL as a side effect of
    /// the access itself, so loads and stores share the behavior.
    fn read_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> u8 {
        match operand {
            Operand::R8(reg) => self.regs.read8(reg),
            Operand::Mem(reg) => bus.read8(self.regs.read16(reg)),
            Operand::MemHlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                bus.read8(hl)
            }
            Operand::MemHlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                bus.read8(hl)
            }
            Operand::MemImm => bus.read8(self.fetched),
            Operand::HighImm => bus.read8(0xFF00 | (self.fetched & 0x00FF)),
            Operand::HighC => bus.read8(0xFF00 | self.regs.c as u16),
            Operand::Imm8 => self.fetched as u8,
            // Table construction never pairs other operands with an 8-bit read.
            _ => 0,
        }
    }

    /// Resolve an operand descriptor to an 8-bit destination and store into it.
    fn write_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand, value: u8) {
        match operand {
            Operand::R8(reg) => self.regs.write8(reg, value),
            Operand::Mem(reg) => bus.write8(self.regs.read16(reg), value),
            Operand::MemHlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                bus.write8(hl, value);
            }
            Operand::MemHlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                bus.write8(hl, value);
            }
            Operand::MemImm => bus.write8(self.fetched, value),
            Operand::HighImm => bus.write8(0xFF00 | (self.fetched & 0x00FF), value),
            Operand::HighC => bus.write8(0xFF00 | self.regs.c as u16, value),
            _ => {}
        }
    }

    /// Resolve an operand descriptor to a 16-bit value.
    fn read_operand16(&self, operand: Operand) -> u16 {
        match operand {
            Operand::R16(reg) => self.regs.read16(reg),
            Operand::Imm16 => self.fetched,
            _ => 0,
        }
    }

    /// Run the operation selected by `instr` and return the extra cycles
    /// consumed beyond the descriptor's base cost.
    ///
    /// Extras are non-zero only for taken conditional control flow and for
    /// the CB prefix dispatch, which adds the extended descriptor's cost on
    /// top of its own.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) -> u32 {
        match instr.op {
            Op::Nop => 0,

            Op::Stop => {
                self.stopped = true;
                0
            }

            Op::Halt => {
                let pending = bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & 0x1F;
                if !self.ime && pending != 0 {
                    // HALT bug: the CPU fails to halt and the next opcode
                    // fetch does not advance PC.
                    self.halt_bug = true;
                } else {
                    self.halted = true;
                }
                0
            }

            Op::Di => {
                self.ime = false;
                self.ime_enable_pending = false;
                self.ime_enable_delay = false;
                0
            }

            Op::Ei => {
                self.ime_enable_pending = true;
                0
            }

            Op::Ld8 => {
                let value = self.read_operand8(bus, instr.src);
                self.write_operand8(bus, instr.dst, value);
                0
            }

            Op::Ld16 => {
                let value = self.read_operand16(instr.src);
                match instr.dst {
                    Operand::R16(reg) => self.regs.write16(reg, value),
                    Operand::MemImm => {
                        // 16-bit store: low byte at the lower address.
                        let addr = self.fetched;
                        bus.write8(addr, value as u8);
                        bus.write8(addr.wrapping_add(1), (value >> 8) as u8);
                    }
                    _ => {}
                }
                0
            }

            Op::LdHlSpOff => {
                let result = self.alu_add16_signed(self.regs.sp, self.fetched as u8);
                self.regs.set_hl(result);
                0
            }

            Op::Inc8 => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_inc8(value);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Dec8 => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_dec8(value);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Inc16 => {
                if let Operand::R16(reg) = instr.dst {
                    let value = self.regs.read16(reg).wrapping_add(1);
                    self.regs.write16(reg, value);
                }
                0
            }

            Op::Dec16 => {
                if let Operand::R16(reg) = instr.dst {
                    let value = self.regs.read16(reg).wrapping_sub(1);
                    self.regs.write16(reg, value);
                }
                0
            }

            Op::Add => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_add(value, false);
                0
            }

            Op::Adc => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_add(value, true);
                0
            }

            Op::Sub => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_sub(value, false);
                0
            }

            Op::Sbc => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_sub(value, true);
                0
            }

            Op::And => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_and(value);
                0
            }

            Op::Xor => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_xor(value);
                0
            }

            Op::Or => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_or(value);
                0
            }

            Op::Cp => {
                let value = self.read_operand8(bus, instr.src);
                self.alu_cp(value);
                0
            }

            Op::AddHl => {
                let value = self.read_operand16(instr.src);
                self.alu_add16_hl(value);
                0
            }

            Op::AddSp => {
                self.regs.sp = self.alu_add16_signed(self.regs.sp, self.fetched as u8);
                0
            }

            Op::Daa => {
                self.alu_daa();
                0
            }

            Op::Cpl => {
                self.regs.a = !self.regs.a;
                self.regs.set_flag(Flag::N, true);
                self.regs.set_flag(Flag::H, true);
                0
            }

            Op::Scf => {
                self.regs.set_flag(Flag::N, false);
                self.regs.set_flag(Flag::H, false);
                self.regs.set_flag(Flag::C, true);
                0
            }

            Op::Ccf => {
                let carry = self.regs.flag(Flag::C);
                self.regs.set_flag(Flag::N, false);
                self.regs.set_flag(Flag::H, false);
                self.regs.set_flag(Flag::C, !carry);
                0
            }

            Op::Rlca => {
                let result = self.alu_rlc(self.regs.a, false);
                self.regs.a = result;
                0
            }

            Op::Rla => {
                let result = self.alu_rl(self.regs.a, false);
                self.regs.a = result;
                0
            }

            Op::Rrca => {
                let result = self.alu_rrc(self.regs.a, false);
                self.regs.a = result;
                0
            }

            Op::Rra => {
                let result = self.alu_rr(self.regs.a, false);
                self.regs.a = result;
                0
            }

            Op::Jr => {
                let cond = cond_of(instr.dst);
                if self.check_cond(cond) {
                    let offset = self.fetched as u8 as i8;
                    self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
                    if cond == Cond::Always { 0 } else { 4 }
                } else {
                    0
                }
            }

            Op::Jp => {
                let cond = cond_of(instr.dst);
                if self.check_cond(cond) {
                    self.regs.pc = self.fetched;
                    if cond == Cond::Always { 0 } else { 4 }
                } else {
                    0
                }
            }

            Op::JpHl => {
                self.regs.pc = self.regs.hl();
                0
            }

            Op::Call => {
                let cond = cond_of(instr.dst);
                if self.check_cond(cond) {
                    let ret = self.regs.pc;
                    self.push16(bus, ret);
                    self.regs.pc = self.fetched;
                    if cond == Cond::Always { 0 } else { 12 }
                } else {
                    0
                }
            }

            Op::Ret => {
                let cond = cond_of(instr.dst);
                if self.check_cond(cond) {
                    self.regs.pc = self.pop16(bus);
                    if cond == Cond::Always { 0 } else { 12 }
                } else {
                    0
                }
            }

            Op::Reti => {
                self.regs.pc = self.pop16(bus);
                // Unlike EI, RETI enables interrupts without the one
                // instruction delay.
                self.ime = true;
                self.ime_enable_pending = false;
                self.ime_enable_delay = false;
                0
            }

            Op::Rst => {
                let target = fixed_of(instr.dst) as u16;
                let ret = self.regs.pc;
                self.push16(bus, ret);
                self.regs.pc = target;
                0
            }

            Op::Push => {
                let value = self.read_operand16(instr.src);
                self.push16(bus, value);
                0
            }

            Op::Pop => {
                let value = self.pop16(bus);
                if let Operand::R16(reg) = instr.dst {
                    // POP AF forces the low nibble of F to zero via set_af.
                    self.regs.write16(reg, value);
                }
                0
            }

            Op::Prefix => {
                let secondary = bus.read8(self.regs.pc);
                self.regs.pc = self.regs.pc.wrapping_add(1);
                let ext = EXTENDED.lookup(secondary);
                ext.cycles + self.execute(bus, ext)
            }

            Op::Rlc => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_rlc(value, true);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Rrc => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_rrc(value, true);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Rl => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_rl(value, true);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Rr => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_rr(value, true);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Sla => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_sla(value);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Sra => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_sra(value);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Swap => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_swap(value);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Srl => {
                let value = self.read_operand8(bus, instr.dst);
                let result = self.alu_srl(value);
                self.write_operand8(bus, instr.dst, result);
                0
            }

            Op::Bit => {
                let value = self.read_operand8(bus, instr.dst);
                self.alu_bit(value, fixed_of(instr.src));
                0
            }

            Op::Res => {
                let value = self.read_operand8(bus, instr.dst);
                self.write_operand8(bus, instr.dst, value & !(1 << fixed_of(instr.src)));
                0
            }

            Op::Set => {
                let value = self.read_operand8(bus, instr.dst);
                self.write_operand8(bus, instr.dst, value | (1 << fixed_of(instr.src)));
                0
            }

            // `step` refuses Unknown descriptors before execution.
            Op::Unknown => 0,
        }
    }
}
