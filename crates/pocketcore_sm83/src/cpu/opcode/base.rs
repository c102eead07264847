//! The base opcode table (0x00–0xFF).
//!
//! Entries are listed in opcode order, one row of sixteen per block. The
//! eleven reserved slots (D3 DB DD E3 E4 EB EC ED F4 FC FD) are populated
//! with the fatal `Op::Unknown` descriptor so the table stays total.

use super::{Cond, Instruction, Op, Operand, OpcodeTable, TableBuilder};
use crate::cpu::regs::{Reg16, Reg8};

const NONE: Operand = Operand::None;
const A: Operand = Operand::R8(Reg8::A);
const B: Operand = Operand::R8(Reg8::B);
const C: Operand = Operand::R8(Reg8::C);
const D: Operand = Operand::R8(Reg8::D);
const E: Operand = Operand::R8(Reg8::E);
const H: Operand = Operand::R8(Reg8::H);
const L: Operand = Operand::R8(Reg8::L);
const AF: Operand = Operand::R16(Reg16::Af);
const BC: Operand = Operand::R16(Reg16::Bc);
const DE: Operand = Operand::R16(Reg16::De);
const HL: Operand = Operand::R16(Reg16::Hl);
const SP: Operand = Operand::R16(Reg16::Sp);
const M_BC: Operand = Operand::Mem(Reg16::Bc);
const M_DE: Operand = Operand::Mem(Reg16::De);
const M_HL: Operand = Operand::Mem(Reg16::Hl);
const M_HLI: Operand = Operand::MemHlInc;
const M_HLD: Operand = Operand::MemHlDec;
const M_A16: Operand = Operand::MemImm;
const H_A8: Operand = Operand::HighImm;
const H_C: Operand = Operand::HighC;
const D8: Operand = Operand::Imm8;
const D16: Operand = Operand::Imm16;
const ALWAYS: Operand = Operand::Cond(Cond::Always);
const IS_Z: Operand = Operand::Cond(Cond::Z);
const IS_NZ: Operand = Operand::Cond(Cond::Nz);
const IS_C: Operand = Operand::Cond(Cond::C);
const IS_NC: Operand = Operand::Cond(Cond::Nc);

fn i(
    name: &'static str,
    cycles: u32,
    length: u8,
    dst: Operand,
    src: Operand,
    op: Op,
) -> Instruction {
    Instruction {
        name,
        cycles,
        length,
        dst,
        src,
        op,
    }
}

/// Descriptor for the reserved opcode holes.
fn hole() -> Instruction {
    i("UNKNOWN", 0, 0, NONE, NONE, Op::Unknown)
}

pub(super) fn table() -> OpcodeTable {
    let mut t = TableBuilder::new("base");

    t.set(0x00, i("NOP", 4, 0, NONE, NONE, Op::Nop));
    t.set(0x01, i("LD BC, {d16}", 12, 2, BC, D16, Op::Ld16));
    t.set(0x02, i("LD (BC), A", 8, 0, M_BC, A, Op::Ld8));
    t.set(0x03, i("INC BC", 8, 0, BC, NONE, Op::Inc16));
    t.set(0x04, i("INC B", 4, 0, B, NONE, Op::Inc8));
    t.set(0x05, i("DEC B", 4, 0, B, NONE, Op::Dec8));
    t.set(0x06, i("LD B, {d8}", 8, 1, B, D8, Op::Ld8));
    t.set(0x07, i("RLCA", 4, 0, A, NONE, Op::Rlca));
    t.set(0x08, i("LD ({a16}), SP", 20, 2, M_A16, SP, Op::Ld16));
    t.set(0x09, i("ADD HL, BC", 8, 0, HL, BC, Op::AddHl));
    t.set(0x0A, i("LD A, (BC)", 8, 0, A, M_BC, Op::Ld8));
    t.set(0x0B, i("DEC BC", 8, 0, BC, NONE, Op::Dec16));
    t.set(0x0C, i("INC C", 4, 0, C, NONE, Op::Inc8));
    t.set(0x0D, i("DEC C", 4, 0, C, NONE, Op::Dec8));
    t.set(0x0E, i("LD C, {d8}", 8, 1, C, D8, Op::Ld8));
    t.set(0x0F, i("RRCA", 4, 0, A, NONE, Op::Rrca));

    t.set(0x10, i("STOP", 4, 1, NONE, NONE, Op::Stop));
    t.set(0x11, i("LD DE, {d16}", 12, 2, DE, D16, Op::Ld16));
    t.set(0x12, i("LD (DE), A", 8, 0, M_DE, A, Op::Ld8));
    t.set(0x13, i("INC DE", 8, 0, DE, NONE, Op::Inc16));
    t.set(0x14, i("INC D", 4, 0, D, NONE, Op::Inc8));
    t.set(0x15, i("DEC D", 4, 0, D, NONE, Op::Dec8));
    t.set(0x16, i("LD D, {d8}", 8, 1, D, D8, Op::Ld8));
    t.set(0x17, i("RLA", 4, 0, A, NONE, Op::Rla));
    t.set(0x18, i("JR {d8}", 12, 1, ALWAYS, D8, Op::Jr));
    t.set(0x19, i("ADD HL, DE", 8, 0, HL, DE, Op::AddHl));
    t.set(0x1A, i("LD A, (DE)", 8, 0, A, M_DE, Op::Ld8));
    t.set(0x1B, i("DEC DE", 8, 0, DE, NONE, Op::Dec16));
    t.set(0x1C, i("INC E", 4, 0, E, NONE, Op::Inc8));
    t.set(0x1D, i("DEC E", 4, 0, E, NONE, Op::Dec8));
    t.set(0x1E, i("LD E, {d8}", 8, 1, E, D8, Op::Ld8));
    t.set(0x1F, i("RRA", 4, 0, A, NONE, Op::Rra));

    t.set(0x20, i("JR NZ, {d8}", 8, 1, IS_NZ, D8, Op::Jr));
    t.set(0x21, i("LD HL, {d16}", 12, 2, HL, D16, Op::Ld16));
    t.set(0x22, i("LD (HL+), A", 8, 0, M_HLI, A, Op::Ld8));
    t.set(0x23, i("INC HL", 8, 0, HL, NONE, Op::Inc16));
    t.set(0x24, i("INC H", 4, 0, H, NONE, Op::Inc8));
    t.set(0x25, i("DEC H", 4, 0, H, NONE, Op::Dec8));
    t.set(0x26, i("LD H, {d8}", 8, 1, H, D8, Op::Ld8));
    t.set(0x27, i("DAA", 4, 0, A, NONE, Op::Daa));
    t.set(0x28, i("JR Z, {d8}", 8, 1, IS_Z, D8, Op::Jr));
    t.set(0x29, i("ADD HL, HL", 8, 0, HL, HL, Op::AddHl));
    t.set(0x2A, i("LD A, (HL+)", 8, 0, A, M_HLI, Op::Ld8));
    t.set(0x2B, i("DEC HL", 8, 0, HL, NONE, Op::Dec16));
    t.set(0x2C, i("INC L", 4, 0, L, NONE, Op::Inc8));
    t.set(0x2D, i("DEC L", 4, 0, L, NONE, Op::Dec8));
    t.set(0x2E, i("LD L, {d8}", 8, 1, L, D8, Op::Ld8));
    t.set(0x2F, i("CPL", 4, 0, A, NONE, Op::Cpl));

    t.set(0x30, i("JR NC, {d8}", 8, 1, IS_NC, D8, Op::Jr));
    t.set(0x31, i("LD SP, {d16}", 12, 2, SP, D16, Op::Ld16));
    t.set(0x32, i("LD (HL-), A", 8, 0, M_HLD, A, Op::Ld8));
    t.set(0x33, i("INC SP", 8, 0, SP, NONE, Op::Inc16));
    t.set(0x34, i("INC (HL)", 12, 0, M_HL, NONE, Op::Inc8));
    t.set(0x35, i("DEC (HL)", 12, 0, M_HL, NONE, Op::Dec8));
    t.set(0x36, i("LD (HL), {d8}", 12, 1, M_HL, D8, Op::Ld8));
    t.set(0x37, i("SCF", 4, 0, NONE, NONE, Op::Scf));
    t.set(0x38, i("JR C, {d8}", 8, 1, IS_C, D8, Op::Jr));
    t.set(0x39, i("ADD HL, SP", 8, 0, HL, SP, Op::AddHl));
    t.set(0x3A, i("LD A, (HL-)", 8, 0, A, M_HLD, Op::Ld8));
    t.set(0x3B, i("DEC SP", 8, 0, SP, NONE, Op::Dec16));
    t.set(0x3C, i("INC A", 4, 0, A, NONE, Op::Inc8));
    t.set(0x3D, i("DEC A", 4, 0, A, NONE, Op::Dec8));
    t.set(0x3E, i("LD A, {d8}", 8, 1, A, D8, Op::Ld8));
    t.set(0x3F, i("CCF", 4, 0, NONE, NONE, Op::Ccf));

    t.set(0x40, i("LD B, B", 4, 0, B, B, Op::Ld8));
    t.set(0x41, i("LD B, C", 4, 0, B, C, Op::Ld8));
    t.set(0x42, i("LD B, D", 4, 0, B, D, Op::Ld8));
    t.set(0x43, i("LD B, E", 4, 0, B, E, Op::Ld8));
    t.set(0x44, i("LD B, H", 4, 0, B, H, Op::Ld8));
    t.set(0x45, i("LD B, L", 4, 0, B, L, Op::Ld8));
    t.set(0x46, i("LD B, (HL)", 8, 0, B, M_HL, Op::Ld8));
    t.set(0x47, i("LD B, A", 4, 0, B, A, Op::Ld8));
    t.set(0x48, i("LD C, B", 4, 0, C, B, Op::Ld8));
    t.set(0x49, i("LD C, C", 4, 0, C, C, Op::Ld8));
    t.set(0x4A, i("LD C, D", 4, 0, C, D, Op::Ld8));
    t.set(0x4B, i("LD C, E", 4, 0, C, E, Op::Ld8));
    t.set(0x4C, i("LD C, H", 4, 0, C, H, Op::Ld8));
    t.set(0x4D, i("LD C, L", 4, 0, C, L, Op::Ld8));
    t.set(0x4E, i("LD C, (HL)", 8, 0, C, M_HL, Op::Ld8));
    t.set(0x4F, i("LD C, A", 4, 0, C, A, Op::Ld8));

    t.set(0x50, i("LD D, B", 4, 0, D, B, Op::Ld8));
    t.set(0x51, i("LD D, C", 4, 0, D, C, Op::Ld8));
    t.set(0x52, i("LD D, D", 4, 0, D, D, Op::Ld8));
    t.set(0x53, i("LD D, E", 4, 0, D, E, Op::Ld8));
    t.set(0x54, i("LD D, H", 4, 0, D, H, Op::Ld8));
    t.set(0x55, i("LD D, L", 4, 0, D, L, Op::Ld8));
    t.set(0x56, i("LD D, (HL)", 8, 0, D, M_HL, Op::Ld8));
    t.set(0x57, i("LD D, A", 4, 0, D, A, Op::Ld8));
    t.set(0x58, i("LD E, B", 4, 0, E, B, Op::Ld8));
    t.set(0x59, i("LD E, C", 4, 0, E, C, Op::Ld8));
    t.set(0x5A, i("LD E, D", 4, 0, E, D, Op::Ld8));
    t.set(0x5B, i("LD E, E", 4, 0, E, E, Op::Ld8));
    t.set(0x5C, i("LD E, H", 4, 0, E, H, Op::Ld8));
    t.set(0x5D, i("LD E, L", 4, 0, E, L, Op::Ld8));
    t.set(0x5E, i("LD E, (HL)", 8, 0, E, M_HL, Op::Ld8));
    t.set(0x5F, i("LD E, A", 4, 0, E, A, Op::Ld8));

    t.set(0x60, i("LD H, B", 4, 0, H, B, Op::Ld8));
    t.set(0x61, i("LD H, C", 4, 0, H, C, Op::Ld8));
    t.set(0x62, i("LD H, D", 4, 0, H, D, Op::Ld8));
    t.set(0x63, i("LD H, E", 4, 0, H, E, Op::Ld8));
    t.set(0x64, i("LD H, H", 4, 0, H, H, Op::Ld8));
    t.set(0x65, i("LD H, L", 4, 0, H, L, Op::Ld8));
    t.set(0x66, i("LD H, (HL)", 8, 0, H, M_HL, Op::Ld8));
    t.set(0x67, i("LD H, A", 4, 0, H, A, Op::Ld8));
    t.set(0x68, i("LD L, B", 4, 0, L, B, Op::Ld8));
    t.set(0x69, i("LD L, C", 4, 0, L, C, Op::Ld8));
    t.set(0x6A, i("LD L, D", 4, 0, L, D, Op::Ld8));
    t.set(0x6B, i("LD L, E", 4, 0, L, E, Op::Ld8));
    t.set(0x6C, i("LD L, H", 4, 0, L, H, Op::Ld8));
    t.set(0x6D, i("LD L, L", 4, 0, L, L, Op::Ld8));
    t.set(0x6E, i("LD L, (HL)", 8, 0, L, M_HL, Op::Ld8));
    t.set(0x6F, i("LD L, A", 4, 0, L, A, Op::Ld8));

    t.set(0x70, i("LD (HL), B", 8, 0, M_HL, B, Op::Ld8));
    t.set(0x71, i("LD (HL), C", 8, 0, M_HL, C, Op::Ld8));
    t.set(0x72, i("LD (HL), D", 8, 0, M_HL, D, Op::Ld8));
    t.set(0x73, i("LD (HL), E", 8, 0, M_HL, E, Op::Ld8));
    t.set(0x74, i("LD (HL), H", 8, 0, M_HL, H, Op::Ld8));
    t.set(0x75, i("LD (HL), L", 8, 0, M_HL, L, Op::Ld8));
    t.set(0x76, i("HALT", 4, 0, NONE, NONE, Op::Halt));
    t.set(0x77, i("LD (HL), A", 8, 0, M_HL, A, Op::Ld8));
    t.set(0x78, i("LD A, B", 4, 0, A, B, Op::Ld8));
    t.set(0x79, i("LD A, C", 4, 0, A, C, Op::Ld8));
    t.set(0x7A, i("LD A, D", 4, 0, A, D, Op::Ld8));
    t.set(0x7B, i("LD A, E", 4, 0, A, E, Op::Ld8));
    t.set(0x7C, i("LD A, H", 4, 0, A, H, Op::Ld8));
    t.set(0x7D, i("LD A, L", 4, 0, A, L, Op::Ld8));
    t.set(0x7E, i("LD A, (HL)", 8, 0, A, M_HL, Op::Ld8));
    t.set(0x7F, i("LD A, A", 4, 0, A, A, Op::Ld8));

    t.set(0x80, i("ADD A, B", 4, 0, A, B, Op::Add));
    t.set(0x81, i("ADD A, C", 4, 0, A, C, Op::Add));
    t.set(0x82, i("ADD A, D", 4, 0, A, D, Op::Add));
    t.set(0x83, i("ADD A, E", 4, 0, A, E, Op::Add));
    t.set(0x84, i("ADD A, H", 4, 0, A, H, Op::Add));
    t.set(0x85, i("ADD A, L", 4, 0, A, L, Op::Add));
    t.set(0x86, i("ADD A, (HL)", 8, 0, A, M_HL, Op::Add));
    t.set(0x87, i("ADD A, A", 4, 0, A, A, Op::Add));
    t.set(0x88, i("ADC A, B", 4, 0, A, B, Op::Adc));
    t.set(0x89, i("ADC A, C", 4, 0, A, C, Op::Adc));
    t.set(0x8A, i("ADC A, D", 4, 0, A, D, Op::Adc));
    t.set(0x8B, i("ADC A, E", 4, 0, A, E, Op::Adc));
    t.set(0x8C, i("ADC A, H", 4, 0, A, H, Op::Adc));
    t.set(0x8D, i("ADC A, L", 4, 0, A, L, Op::Adc));
    t.set(0x8E, i("ADC A, (HL)", 8, 0, A, M_HL, Op::Adc));
    t.set(0x8F, i("ADC A, A", 4, 0, A, A, Op::Adc));

    t.set(0x90, i("SUB B", 4, 0, A, B, Op::Sub));
    t.set(0x91, i("SUB C", 4, 0, A, C, Op::Sub));
    t.set(0x92, i("SUB D", 4, 0, A, D, Op::Sub));
    t.set(0x93, i("SUB E", 4, 0, A, E, Op::Sub));
    t.set(0x94, i("SUB H", 4, 0, A, H, Op::Sub));
    t.set(0x95, i("SUB L", 4, 0, A, L, Op::Sub));
    t.set(0x96, i("SUB (HL)", 8, 0, A, M_HL, Op::Sub));
    t.set(0x97, i("SUB A", 4, 0, A, A, Op::Sub));
    t.set(0x98, i("SBC A, B", 4, 0, A, B, Op::Sbc));
    t.set(0x99, i("SBC A, C", 4, 0, A, C, Op::Sbc));
    t.set(0x9A, i("SBC A, D", 4, 0, A, D, Op::Sbc));
    t.set(0x9B, i("SBC A, E", 4, 0, A, E, Op::Sbc));
    t.set(0x9C, i("SBC A, H", 4, 0, A, H, Op::Sbc));
    t.set(0x9D, i("SBC A, L", 4, 0, A, L, Op::Sbc));
    t.set(0x9E, i("SBC A, (HL)", 8, 0, A, M_HL, Op::Sbc));
    t.set(0x9F, i("SBC A, A", 4, 0, A, A, Op::Sbc));

    t.set(0xA0, i("AND B", 4, 0, A, B, Op::And));
    t.set(0xA1, i("AND C", 4, 0, A, C, Op::And));
    t.set(0xA2, i("AND D", 4, 0, A, D, Op::And));
    t.set(0xA3, i("AND E", 4, 0, A, E, Op::And));
    t.set(0xA4, i("AND H", 4, 0, A, H, Op::And));
    t.set(0xA5, i("AND L", 4, 0, A, L, Op::And));
    t.set(0xA6, i("AND (HL)", 8, 0, A, M_HL, Op::And));
    t.set(0xA7, i("AND A", 4, 0, A, A, Op::And));
    t.set(0xA8, i("XOR B", 4, 0, A, B, Op::Xor));
    t.set(0xA9, i("XOR C", 4, 0, A, C, Op::Xor));
    t.set(0xAA, i("XOR D", 4, 0, A, D, Op::Xor));
    t.set(0xAB, i("XOR E", 4, 0, A, E, Op::Xor));
    t.set(0xAC, i("XOR H", 4, 0, A, H, Op::Xor));
    t.set(0xAD, i("XOR L", 4, 0, A, L, Op::Xor));
    t.set(0xAE, i("XOR (HL)", 8, 0, A, M_HL, Op::Xor));
    t.set(0xAF, i("XOR A", 4, 0, A, A, Op::Xor));

    t.set(0xB0, i("OR B", 4, 0, A, B, Op::Or));
    t.set(0xB1, i("OR C", 4, 0, A, C, Op::Or));
    t.set(0xB2, i("OR D", 4, 0, A, D, Op::Or));
    t.set(0xB3, i("OR E", 4, 0, A, E, Op::Or));
    t.set(0xB4, i("OR H", 4, 0, A, H, Op::Or));
    t.set(0xB5, i("OR L", 4, 0, A, L, Op::Or));
    t.set(0xB6, i("OR (HL)", 8, 0, A, M_HL, Op::Or));
    t.set(0xB7, i("OR A", 4, 0, A, A, Op::Or));
    t.set(0xB8, i("CP B", 4, 0, A, B, Op::Cp));
    t.set(0xB9, i("CP C", 4, 0, A, C, Op::Cp));
    t.set(0xBA, i("CP D", 4, 0, A, D, Op::Cp));
    t.set(0xBB, i("CP E", 4, 0, A, E, Op::Cp));
    t.set(0xBC, i("CP H", 4, 0, A, H, Op::Cp));
    t.set(0xBD, i("CP L", 4, 0, A, L, Op::Cp));
    t.set(0xBE, i("CP (HL)", 8, 0, A, M_HL, Op::Cp));
    t.set(0xBF, i("CP A", 4, 0, A, A, Op::Cp));

    t.set(0xC0, i("RET NZ", 8, 0, IS_NZ, NONE, Op::Ret));
    t.set(0xC1, i("POP BC", 12, 0, BC, NONE, Op::Pop));
    t.set(0xC2, i("JP NZ, {a16}", 12, 2, IS_NZ, D16, Op::Jp));
    t.set(0xC3, i("JP {a16}", 16, 2, ALWAYS, D16, Op::Jp));
    t.set(0xC4, i("CALL NZ, {a16}", 12, 2, IS_NZ, D16, Op::Call));
    t.set(0xC5, i("PUSH BC", 16, 0, NONE, BC, Op::Push));
    t.set(0xC6, i("ADD A, {d8}", 8, 1, A, D8, Op::Add));
    t.set(0xC7, i("RST 00h", 16, 0, Operand::Fixed(0x00), NONE, Op::Rst));
    t.set(0xC8, i("RET Z", 8, 0, IS_Z, NONE, Op::Ret));
    t.set(0xC9, i("RET", 16, 0, ALWAYS, NONE, Op::Ret));
    t.set(0xCA, i("JP Z, {a16}", 12, 2, IS_Z, D16, Op::Jp));
    t.set(0xCB, i("PREFIX CB", 4, 0, NONE, NONE, Op::Prefix));
    t.set(0xCC, i("CALL Z, {a16}", 12, 2, IS_Z, D16, Op::Call));
    t.set(0xCD, i("CALL {a16}", 24, 2, ALWAYS, D16, Op::Call));
    t.set(0xCE, i("ADC A, {d8}", 8, 1, A, D8, Op::Adc));
    t.set(0xCF, i("RST 08h", 16, 0, Operand::Fixed(0x08), NONE, Op::Rst));

    t.set(0xD0, i("RET NC", 8, 0, IS_NC, NONE, Op::Ret));
    t.set(0xD1, i("POP DE", 12, 0, DE, NONE, Op::Pop));
    t.set(0xD2, i("JP NC, {a16}", 12, 2, IS_NC, D16, Op::Jp));
    t.set(0xD3, hole());
    t.set(0xD4, i("CALL NC, {a16}", 12, 2, IS_NC, D16, Op::Call));
    t.set(0xD5, i("PUSH DE", 16, 0, NONE, DE, Op::Push));
    t.set(0xD6, i("SUB {d8}", 8, 1, A, D8, Op::Sub));
    t.set(0xD7, i("RST 10h", 16, 0, Operand::Fixed(0x10), NONE, Op::Rst));
    t.set(0xD8, i("RET C", 8, 0, IS_C, NONE, Op::Ret));
    t.set(0xD9, i("RETI", 16, 0, NONE, NONE, Op::Reti));
    t.set(0xDA, i("JP C, {a16}", 12, 2, IS_C, D16, Op::Jp));
    t.set(0xDB, hole());
    t.set(0xDC, i("CALL C, {a16}", 12, 2, IS_C, D16, Op::Call));
    t.set(0xDD, hole());
    t.set(0xDE, i("SBC A, {d8}", 8, 1, A, D8, Op::Sbc));
    t.set(0xDF, i("RST 18h", 16, 0, Operand::Fixed(0x18), NONE, Op::Rst));

    t.set(0xE0, i("LDH ({a8}), A", 12, 1, H_A8, A, Op::Ld8));
    t.set(0xE1, i("POP HL", 12, 0, HL, NONE, Op::Pop));
    t.set(0xE2, i("LD (C), A", 8, 0, H_C, A, Op::Ld8));
    t.set(0xE3, hole());
    t.set(0xE4, hole());
    t.set(0xE5, i("PUSH HL", 16, 0, NONE, HL, Op::Push));
    t.set(0xE6, i("AND {d8}", 8, 1, A, D8, Op::And));
    t.set(0xE7, i("RST 20h", 16, 0, Operand::Fixed(0x20), NONE, Op::Rst));
    t.set(0xE8, i("ADD SP, {d8}", 16, 1, SP, D8, Op::AddSp));
    t.set(0xE9, i("JP HL", 4, 0, NONE, HL, Op::JpHl));
    t.set(0xEA, i("LD ({a16}), A", 16, 2, M_A16, A, Op::Ld8));
    t.set(0xEB, hole());
    t.set(0xEC, hole());
    t.set(0xED, hole());
    t.set(0xEE, i("XOR {d8}", 8, 1, A, D8, Op::Xor));
    t.set(0xEF, i("RST 28h", 16, 0, Operand::Fixed(0x28), NONE, Op::Rst));

    t.set(0xF0, i("LDH A, ({a8})", 12, 1, A, H_A8, Op::Ld8));
    t.set(0xF1, i("POP AF", 12, 0, AF, NONE, Op::Pop));
    t.set(0xF2, i("LD A, (C)", 8, 0, A, H_C, Op::Ld8));
    t.set(0xF3, i("DI", 4, 0, NONE, NONE, Op::Di));
    t.set(0xF4, hole());
    t.set(0xF5, i("PUSH AF", 16, 0, NONE, AF, Op::Push));
    t.set(0xF6, i("OR {d8}", 8, 1, A, D8, Op::Or));
    t.set(0xF7, i("RST 30h", 16, 0, Operand::Fixed(0x30), NONE, Op::Rst));
    t.set(0xF8, i("LD HL, SP+{d8}", 12, 1, HL, D8, Op::LdHlSpOff));
    t.set(0xF9, i("LD SP, HL", 8, 0, SP, HL, Op::Ld16));
    t.set(0xFA, i("LD A, ({a16})", 16, 2, A, M_A16, Op::Ld8));
    t.set(0xFB, i("EI", 4, 0, NONE, NONE, Op::Ei));
    t.set(0xFC, hole());
    t.set(0xFD, hole());
    t.set(0xFE, i("CP {d8}", 8, 1, A, D8, Op::Cp));
    t.set(0xFF, i("RST 38h", 16, 0, Operand::Fixed(0x38), NONE, Op::Rst));

    t.build()
}
