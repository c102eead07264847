//! The extended opcode table, reached via base opcode 0xCB.
//!
//! Cycle costs here exclude the 4-cycle prefix fetch charged by the base
//! table's 0xCB entry: register forms cost 4, (HL) forms 12, except
//! BIT b,(HL) which costs 8.

use super::{Instruction, Op, Operand, OpcodeTable, TableBuilder};
use crate::cpu::regs::{Reg16, Reg8};

const A: Operand = Operand::R8(Reg8::A);
const B: Operand = Operand::R8(Reg8::B);
const C: Operand = Operand::R8(Reg8::C);
const D: Operand = Operand::R8(Reg8::D);
const E: Operand = Operand::R8(Reg8::E);
const H: Operand = Operand::R8(Reg8::H);
const L: Operand = Operand::R8(Reg8::L);
const M_HL: Operand = Operand::Mem(Reg16::Hl);

fn i(name: &'static str, cycles: u32, dst: Operand, src: Operand, op: Op) -> Instruction {
    Instruction {
        name,
        cycles,
        length: 0,
        dst,
        src,
        op,
    }
}

fn bit(b: u8) -> Operand {
    Operand::Fixed(b)
}

pub(super) fn table() -> OpcodeTable {
    let mut t = TableBuilder::new("extended");

    t.set(0x00, i("RLC B", 4, B, Operand::None, Op::Rlc));
    t.set(0x01, i("RLC C", 4, C, Operand::None, Op::Rlc));
    t.set(0x02, i("RLC D", 4, D, Operand::None, Op::Rlc));
    t.set(0x03, i("RLC E", 4, E, Operand::None, Op::Rlc));
    t.set(0x04, i("RLC H", 4, H, Operand::None, Op::Rlc));
    t.set(0x05, i("RLC L", 4, L, Operand::None, Op::Rlc));
    t.set(0x06, i("RLC (HL)", 12, M_HL, Operand::None, Op::Rlc));
    t.set(0x07, i("RLC A", 4, A, Operand::None, Op::Rlc));
    t.set(0x08, i("RRC B", 4, B, Operand::None, Op::Rrc));
    t.set(0x09, i("RRC C", 4, C, Operand::None, Op::Rrc));
    t.set(0x0A, i("RRC D", 4, D, Operand::None, Op::Rrc));
    t.set(0x0B, i("RRC E", 4, E, Operand::None, Op::Rrc));
    t.set(0x0C, i("RRC H", 4, H, Operand::None, Op::Rrc));
    t.set(0x0D, i("RRC L", 4, L, Operand::None, Op::Rrc));
    t.set(0x0E, i("RRC (HL)", 12, M_HL, Operand::None, Op::Rrc));
    t.set(0x0F, i("RRC A", 4, A, Operand::None, Op::Rrc));

    t.set(0x10, i("RL B", 4, B, Operand::None, Op::Rl));
    t.set(0x11, i("RL C", 4, C, Operand::None, Op::Rl));
    t.set(0x12, i("RL D", 4, D, Operand::None, Op::Rl));
    t.set(0x13, i("RL E", 4, E, Operand::None, Op::Rl));
    t.set(0x14, i("RL H", 4, H, Operand::None, Op::Rl));
    t.set(0x15, i("RL L", 4, L, Operand::None, Op::Rl));
    t.set(0x16, i("RL (HL)", 12, M_HL, Operand::None, Op::Rl));
    t.set(0x17, i("RL A", 4, A, Operand::None, Op::Rl));
    t.set(0x18, i("RR B", 4, B, Operand::None, Op::Rr));
    t.set(0x19, i("RR C", 4, C, Operand::None, Op::Rr));
    t.set(0x1A, i("RR D", 4, D, Operand::None, Op::Rr));
    t.set(0x1B, i("RR E", 4, E, Operand::None, Op::Rr));
    t.set(0x1C, i("RR H", 4, H, Operand::None, Op::Rr));
    t.set(0x1D, i("RR L", 4, L, Operand::None, Op::Rr));
    t.set(0x1E, i("RR (HL)", 12, M_HL, Operand::None, Op::Rr));
    t.set(0x1F, i("RR A", 4, A, Operand::None, Op::Rr));

    t.set(0x20, i("SLA B", 4, B, Operand::None, Op::Sla));
    t.set(0x21, i("SLA C", 4, C, Operand::None, Op::Sla));
    t.set(0x22, i("SLA D", 4, D, Operand::None, Op::Sla));
    t.set(0x23, i("SLA E", 4, E, Operand::None, Op::Sla));
    t.set(0x24, i("SLA H", 4, H, Operand::None, Op::Sla));
    t.set(0x25, i("SLA L", 4, L, Operand::None, Op::Sla));
    t.set(0x26, i("SLA (HL)", 12, M_HL, Operand::None, Op::Sla));
    t.set(0x27, i("SLA A", 4, A, Operand::None, Op::Sla));
    t.set(0x28, i("SRA B", 4, B, Operand::None, Op::Sra));
    t.set(0x29, i("SRA C", 4, C, Operand::None, Op::Sra));
    t.set(0x2A, i("SRA D", 4, D, Operand::None, Op::Sra));
    t.set(0x2B, i("SRA E", 4, E, Operand::None, Op::Sra));
    t.set(0x2C, i("SRA H", 4, H, Operand::None, Op::Sra));
    t.set(0x2D, i("SRA L", 4, L, Operand::None, Op::Sra));
    t.set(0x2E, i("SRA (HL)", 12, M_HL, Operand::None, Op::Sra));
    t.set(0x2F, i("SRA A", 4, A, Operand::None, Op::Sra));

    t.set(0x30, i("SWAP B", 4, B, Operand::None, Op::Swap));
    t.set(0x31, i("SWAP C", 4, C, Operand::None, Op::Swap));
    t.set(0x32, i("SWAP D", 4, D, Operand::None, Op::Swap));
    t.set(0x33, i("SWAP E", 4, E, Operand::None, Op::Swap));
    t.set(0x34, i("SWAP H", 4, H, Operand::None, Op::Swap));
    t.set(0x35, i("SWAP L", 4, L, Operand::None, Op::Swap));
    t.set(0x36, i("SWAP (HL)", 12, M_HL, Operand::None, Op::Swap));
    t.set(0x37, i("SWAP A", 4, A, Operand::None, Op::Swap));
    t.set(0x38, i("SRL B", 4, B, Operand::None, Op::Srl));
    t.set(0x39, i("SRL C", 4, C, Operand::None, Op::Srl));
    t.set(0x3A, i("SRL D", 4, D, Operand::None, Op::Srl));
    t.set(0x3B, i("SRL E", 4, E, Operand::None, Op::Srl));
    t.set(0x3C, i("SRL H", 4, H, Operand::None, Op::Srl));
    t.set(0x3D, i("SRL L", 4, L, Operand::None, Op::Srl));
    t.set(0x3E, i("SRL (HL)", 12, M_HL, Operand::None, Op::Srl));
    t.set(0x3F, i("SRL A", 4, A, Operand::None, Op::Srl));

    t.set(0x40, i("BIT 0, B", 4, B, bit(0), Op::Bit));
    t.set(0x41, i("BIT 0, C", 4, C, bit(0), Op::Bit));
    t.set(0x42, i("BIT 0, D", 4, D, bit(0), Op::Bit));
    t.set(0x43, i("BIT 0, E", 4, E, bit(0), Op::Bit));
    t.set(0x44, i("BIT 0, H", 4, H, bit(0), Op::Bit));
    t.set(0x45, i("BIT 0, L", 4, L, bit(0), Op::Bit));
    t.set(0x46, i("BIT 0, (HL)", 8, M_HL, bit(0), Op::Bit));
    t.set(0x47, i("BIT 0, A", 4, A, bit(0), Op::Bit));
    t.set(0x48, i("BIT 1, B", 4, B, bit(1), Op::Bit));
    t.set(0x49, i("BIT 1, C", 4, C, bit(1), Op::Bit));
    t.set(0x4A, i("BIT 1, D", 4, D, bit(1), Op::Bit));
    t.set(0x4B, i("BIT 1, E", 4, E, bit(1), Op::Bit));
    t.set(0x4C, i("BIT 1, H", 4, H, bit(1), Op::Bit));
    t.set(0x4D, i("BIT 1, L", 4, L, bit(1), Op::Bit));
    t.set(0x4E, i("BIT 1, (HL)", 8, M_HL, bit(1), Op::Bit));
    t.set(0x4F, i("BIT 1, A", 4, A, bit(1), Op::Bit));

    t.set(0x50, i("BIT 2, B", 4, B, bit(2), Op::Bit));
    t.set(0x51, i("BIT 2, C", 4, C, bit(2), Op::Bit));
    t.set(0x52, i("BIT 2, D", 4, D, bit(2), Op::Bit));
    t.set(0x53, i("BIT 2, E", 4, E, bit(2), Op::Bit));
    t.set(0x54, i("BIT 2, H", 4, H, bit(2), Op::Bit));
    t.set(0x55, i("BIT 2, L", 4, L, bit(2), Op::Bit));
    t.set(0x56, i("BIT 2, (HL)", 8, M_HL, bit(2), Op::Bit));
    t.set(0x57, i("BIT 2, A", 4, A, bit(2), Op::Bit));
    t.set(0x58, i("BIT 3, B", 4, B, bit(3), Op::Bit));
    t.set(0x59, i("BIT 3, C", 4, C, bit(3), Op::Bit));
    t.set(0x5A, i("BIT 3, D", 4, D, bit(3), Op::Bit));
    t.set(0x5B, i("BIT 3, E", 4, E, bit(3), Op::Bit));
    t.set(0x5C, i("BIT 3, H", 4, H, bit(3), Op::Bit));
    t.set(0x5D, i("BIT 3, L", 4, L, bit(3), Op::Bit));
    t.set(0x5E, i("BIT 3, (HL)", 8, M_HL, bit(3), Op::Bit));
    t.set(0x5F, i("BIT 3, A", 4, A, bit(3), Op::Bit));

    t.set(0x60, i("BIT 4, B", 4, B, bit(4), Op::Bit));
    t.set(0x61, i("BIT 4, C", 4, C, bit(4), Op::Bit));
    t.set(0x62, i("BIT 4, D", 4, D, bit(4), Op::Bit));
    t.set(0x63, i("BIT 4, E", 4, E, bit(4), Op::Bit));
    t.set(0x64, i("BIT 4, H", 4, H, bit(4), Op::Bit));
    t.set(0x65, i("BIT 4, L", 4, L, bit(4), Op::Bit));
    t.set(0x66, i("BIT 4, (HL)", 8, M_HL, bit(4), Op::Bit));
    t.set(0x67, i("BIT 4, A", 4, A, bit(4), Op::Bit));
    t.set(0x68, i("BIT 5, B", 4, B, bit(5), Op::Bit));
    t.set(0x69, i("BIT 5, C", 4, C, bit(5), Op::Bit));
    t.set(0x6A, i("BIT 5, D", 4, D, bit(5), Op::Bit));
    t.set(0x6B, i("BIT 5, E", 4, E, bit(5), Op::Bit));
    t.set(0x6C, i("BIT 5, H", 4, H, bit(5), Op::Bit));
    t.set(0x6D, i("BIT 5, L", 4, L, bit(5), Op::Bit));
    t.set(0x6E, i("BIT 5, (HL)", 8, M_HL, bit(5), Op::Bit));
    t.set(0x6F, i("BIT 5, A", 4, A, bit(5), Op::Bit));

    t.set(0x70, i("BIT 6, B", 4, B, bit(6), Op::Bit));
    t.set(0x71, i("BIT 6, C", 4, C, bit(6), Op::Bit));
    t.set(0x72, i("BIT 6, D", 4, D, bit(6), Op::Bit));
    t.set(0x73, i("BIT 6, E", 4, E, bit(6), Op::Bit));
    t.set(0x74, i("BIT 6, H", 4, H, bit(6), Op::Bit));
    t.set(0x75, i("BIT 6, L", 4, L, bit(6), Op::Bit));
    t.set(0x76, i("BIT 6, (HL)", 8, M_HL, bit(6), Op::Bit));
    t.set(0x77, i("BIT 6, A", 4, A, bit(6), Op::Bit));
    t.set(0x78, i("BIT 7, B", 4, B, bit(7), Op::Bit));
    t.set(0x79, i("BIT 7, C", 4, C, bit(7), Op::Bit));
    t.set(0x7A, i("BIT 7, D", 4, D, bit(7), Op::Bit));
    t.set(0x7B, i("BIT 7, E", 4, E, bit(7), Op::Bit));
    t.set(0x7C, i("BIT 7, H", 4, H, bit(7), Op::Bit));
    t.set(0x7D, i("BIT 7, L", 4, L, bit(7), Op::Bit));
    t.set(0x7E, i("BIT 7, (HL)", 8, M_HL, bit(7), Op::Bit));
    t.set(0x7F, i("BIT 7, A", 4, A, bit(7), Op::Bit));

    t.set(0x80, i("RES 0, B", 4, B, bit(0), Op::Res));
    t.set(0x81, i("RES 0, C", 4, C, bit(0), Op::Res));
    t.set(0x82, i("RES 0, D", 4, D, bit(0), Op::Res));
    t.set(0x83, i("RES 0, E", 4, E, bit(0), Op::Res));
    t.set(0x84, i("RES 0, H", 4, H, bit(0), Op::Res));
    t.set(0x85, i("RES 0, L", 4, L, bit(0), Op::Res));
    t.set(0x86, i("RES 0, (HL)", 12, M_HL, bit(0), Op::Res));
    t.set(0x87, i("RES 0, A", 4, A, bit(0), Op::Res));
    t.set(0x88, i("RES 1, B", 4, B, bit(1), Op::Res));
    t.set(0x89, i("RES 1, C", 4, C, bit(1), Op::Res));
    t.set(0x8A, i("RES 1, D", 4, D, bit(1), Op::Res));
    t.set(0x8B, i("RES 1, E", 4, E, bit(1), Op::Res));
    t.set(0x8C, i("RES 1, H", 4, H, bit(1), Op::Res));
    t.set(0x8D, i("RES 1, L", 4, L, bit(1), Op::Res));
    t.set(0x8E, i("RES 1, (HL)", 12, M_HL, bit(1), Op::Res));
    t.set(0x8F, i("RES 1, A", 4, A, bit(1), Op::Res));

    t.set(0x90, i("RES 2, B", 4, B, bit(2), Op::Res));
    t.set(0x91, i("RES 2, C", 4, C, bit(2), Op::Res));
    t.set(0x92, i("RES 2, D", 4, D, bit(2), Op::Res));
    t.set(0x93, i("RES 2, E", 4, E, bit(2), Op::Res));
    t.set(0x94, i("RES 2, H", 4, H, bit(2), Op::Res));
    t.set(0x95, i("RES 2, L", 4, L, bit(2), Op::Res));
    t.set(0x96, i("RES 2, (HL)", 12, M_HL, bit(2), Op::Res));
    t.set(0x97, i("RES 2, A", 4, A, bit(2), Op::Res));
    t.set(0x98, i("RES 3, B", 4, B, bit(3), Op::Res));
    t.set(0x99, i("RES 3, C", 4, C, bit(3), Op::Res));
    t.set(0x9A, i("RES 3, D", 4, D, bit(3), Op::Res));
    t.set(0x9B, i("RES 3, E", 4, E, bit(3), Op::Res));
    t.set(0x9C, i("RES 3, H", 4, H, bit(3), Op::Res));
    t.set(0x9D, i("RES 3, L", 4, L, bit(3), Op::Res));
    t.set(0x9E, i("RES 3, (HL)", 12, M_HL, bit(3), Op::Res));
    t.set(0x9F, i("RES 3, A", 4, A, bit(3), Op::Res));

    t.set(0xA0, i("RES 4, B", 4, B, bit(4), Op::Res));
    t.set(0xA1, i("RES 4, C", 4, C, bit(4), Op::Res));
    t.set(0xA2, i("RES 4, D", 4, D, bit(4), Op::Res));
    t.set(0xA3, i("RES 4, E", 4, E, bit(4), Op::Res));
    t.set(0xA4, i("RES 4, H", 4, H, bit(4), Op::Res));
    t.set(0xA5, i("RES 4, L", 4, L, bit(4), Op::Res));
    t.set(0xA6, i("RES 4, (HL)", 12, M_HL, bit(4), Op::Res));
    t.set(0xA7, i("RES 4, A", 4, A, bit(4), Op::Res));
    t.set(0xA8, i("RES 5, B", 4, B, bit(5), Op::Res));
    t.set(0xA9, i("RES 5, C", 4, C, bit(5), Op::Res));
    t.set(0xAA, i("RES 5, D", 4, D, bit(5), Op::Res));
    t.set(0xAB, i("RES 5, E", 4, E, bit(5), Op::Res));
    t.set(0xAC, i("RES 5, H", 4, H, bit(5), Op::Res));
    t.set(0xAD, i("RES 5, L", 4, L, bit(5), Op::Res));
    t.set(0xAE, i("RES 5, (HL)", 12, M_HL, bit(5), Op::Res));
    t.set(0xAF, i("RES 5, A", 4, A, bit(5), Op::Res));

    t.set(0xB0, i("RES 6, B", 4, B, bit(6), Op::Res));
    t.set(0xB1, i("RES 6, C", 4, C, bit(6), Op::Res));
    t.set(0xB2, i("RES 6, D", 4, D, bit(6), Op::Res));
    t.set(0xB3, i("RES 6, E", 4, E, bit(6), Op::Res));
    t.set(0xB4, i("RES 6, H", 4, H, bit(6), Op::Res));
    t.set(0xB5, i("RES 6, L", 4, L, bit(6), Op::Res));
    t.set(0xB6, i("RES 6, (HL)", 12, M_HL, bit(6), Op::Res));
    t.set(0xB7, i("RES 6, A", 4, A, bit(6), Op::Res));
    t.set(0xB8, i("RES 7, B", 4, B, bit(7), Op::Res));
    t.set(0xB9, i("RES 7, C", 4, C, bit(7), Op::Res));
    t.set(0xBA, i("RES 7, D", 4, D, bit(7), Op::Res));
    t.set(0xBB, i("RES 7, E", 4, E, bit(7), Op::Res));
    t.set(0xBC, i("RES 7, H", 4, H, bit(7), Op::Res));
    t.set(0xBD, i("RES 7, L", 4, L, bit(7), Op::Res));
    t.set(0xBE, i("RES 7, (HL)", 12, M_HL, bit(7), Op::Res));
    t.set(0xBF, i("RES 7, A", 4, A, bit(7), Op::Res));

    t.set(0xC0, i("SET 0, B", 4, B, bit(0), Op::Set));
    t.set(0xC1, i("SET 0, C", 4, C, bit(0), Op::Set));
    t.set(0xC2, i("SET 0, D", 4, D, bit(0), Op::Set));
    t.set(0xC3, i("SET 0, E", 4, E, bit(0), Op::Set));
    t.set(0xC4, i("SET 0, H", 4, H, bit(0), Op::Set));
    t.set(0xC5, i("SET 0, L", 4, L, bit(0), Op::Set));
    t.set(0xC6, i("SET 0, (HL)", 12, M_HL, bit(0), Op::Set));
    t.set(0xC7, i("SET 0, A", 4, A, bit(0), Op::Set));
    t.set(0xC8, i("SET 1, B", 4, B, bit(1), Op::Set));
    t.set(0xC9, i("SET 1, C", 4, C, bit(1), Op::Set));
    t.set(0xCA, i("SET 1, D", 4, D, bit(1), Op::Set));
    t.set(0xCB, i("SET 1, E", 4, E, bit(1), Op::Set));
    t.set(0xCC, i("SET 1, H", 4, H, bit(1), Op::Set));
    t.set(0xCD, i("SET 1, L", 4, L, bit(1), Op::Set));
    t.set(0xCE, i("SET 1, (HL)", 12, M_HL, bit(1), Op::Set));
    t.set(0xCF, i("SET 1, A", 4, A, bit(1), Op::Set));

    t.set(0xD0, i("SET 2, B", 4, B, bit(2), Op::Set));
    t.set(0xD1, i("SET 2, C", 4, C, bit(2), Op::Set));
    t.set(0xD2, i("SET 2, D", 4, D, bit(2), Op::Set));
    t.set(0xD3, i("SET 2, E", 4, E, bit(2), Op::Set));
    t.set(0xD4, i("SET 2, H", 4, H, bit(2), Op::Set));
    t.set(0xD5, i("SET 2, L", 4, L, bit(2), Op::Set));
    t.set(0xD6, i("SET 2, (HL)", 12, M_HL, bit(2), Op::Set));
    t.set(0xD7, i("SET 2, A", 4, A, bit(2), Op::Set));
    t.set(0xD8, i("SET 3, B", 4, B, bit(3), Op::Set));
    t.set(0xD9, i("SET 3, C", 4, C, bit(3), Op::Set));
    t.set(0xDA, i("SET 3, D", 4, D, bit(3), Op::Set));
    t.set(0xDB, i("SET 3, E", 4, E, bit(3), Op::Set));
    t.set(0xDC, i("SET 3, H", 4, H, bit(3), Op::Set));
    t.set(0xDD, i("SET 3, L", 4, L, bit(3), Op::Set));
    t.set(0xDE, i("SET 3, (HL)", 12, M_HL, bit(3), Op::Set));
    t.set(0xDF, i("SET 3, A", 4, A, bit(3), Op::Set));

    t.set(0xE0, i("SET 4, B", 4, B, bit(4), Op::Set));
    t.set(0xE1, i("SET 4, C", 4, C, bit(4), Op::Set));
    t.set(0xE2, i("SET 4, D", 4, D, bit(4), Op::Set));
    t.set(0xE3, i("SET 4, E", 4, E, bit(4), Op::Set));
    t.set(0xE4, i("SET 4, H", 4, H, bit(4), Op::Set));
    t.set(0xE5, i("SET 4, L", 4, L, bit(4), Op::Set));
    t.set(0xE6, i("SET 4, (HL)", 12, M_HL, bit(4), Op::Set));
    t.set(0xE7, i("SET 4, A", 4, A, bit(4), Op::Set));
    t.set(0xE8, i("SET 5, B", 4, B, bit(5), Op::Set));
    t.set(0xE9, i("SET 5, C", 4, C, bit(5), Op::Set));
    t.set(0xEA, i("SET 5, D", 4, D, bit(5), Op::Set));
    t.set(0xEB, i("SET 5, E", 4, E, bit(5), Op::Set));
    t.set(0xEC, i("SET 5, H", 4, H, bit(5), Op::Set));
    t.set(0xED, i("SET 5, L", 4, L, bit(5), Op::Set));
    t.set(0xEE, i("SET 5, (HL)", 12, M_HL, bit(5), Op::Set));
    t.set(0xEF, i("SET 5, A", 4, A, bit(5), Op::Set));

    t.set(0xF0, i("SET 6, B", 4, B, bit(6), Op::Set));
    t.set(0xF1, i("SET 6, C", 4, C, bit(6), Op::Set));
    t.set(0xF2, i("SET 6, D", 4, D, bit(6), Op::Set));
    t.set(0xF3, i("SET 6, E", 4, E, bit(6), Op::Set));
    t.set(0xF4, i("SET 6, H", 4, H, bit(6), Op::Set));
    t.set(0xF5, i("SET 6, L", 4, L, bit(6), Op::Set));
    t.set(0xF6, i("SET 6, (HL)", 12, M_HL, bit(6), Op::Set));
    t.set(0xF7, i("SET 6, A", 4, A, bit(6), Op::Set));
    t.set(0xF8, i("SET 7, B", 4, B, bit(7), Op::Set));
    t.set(0xF9, i("SET 7, C", 4, C, bit(7), Op::Set));
    t.set(0xFA, i("SET 7, D", 4, D, bit(7), Op::Set));
    t.set(0xFB, i("SET 7, E", 4, E, bit(7), Op::Set));
    t.set(0xFC, i("SET 7, H", 4, H, bit(7), Op::Set));
    t.set(0xFD, i("SET 7, L", 4, L, bit(7), Op::Set));
    t.set(0xFE, i("SET 7, (HL)", 12, M_HL, bit(7), Op::Set));
    t.set(0xFF, i("SET 7, A", 4, A, bit(7), Op::Set));

    t.build()
}
