use super::interrupts::{IntFlags, DISPATCH_CYCLES, IE_ADDR, IF_ADDR};
use super::opcode::{Op, BASE, EXTENDED};
use super::*;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh CPU and bus with `program` poked in at the reset PC (0x0100).
fn with_program(program: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::default();
    for (index, byte) in program.iter().enumerate() {
        bus.memory[0x0100 + index] = *byte;
    }
    (Cpu::new(), bus)
}

fn step_ok(cpu: &mut Cpu, bus: &mut TestBus) -> u32 {
    cpu.step(bus).expect("unexpected unknown opcode")
}

// ---------------------------------------------------------------------------
// Register file
// ---------------------------------------------------------------------------

#[test]
fn register_pair_views_agree_for_all_values() {
    let mut regs = Registers::default();

    for value in 0..=0xFFFFu16 {
        regs.set_bc(value);
        assert_eq!(regs.b, (value >> 8) as u8);
        assert_eq!(regs.c, value as u8);
        assert_eq!(regs.bc(), value);

        regs.set_de(value);
        assert_eq!(regs.d, (value >> 8) as u8);
        assert_eq!(regs.e, value as u8);
        assert_eq!(regs.de(), value);

        regs.set_hl(value);
        assert_eq!(regs.h, (value >> 8) as u8);
        assert_eq!(regs.l, value as u8);
        assert_eq!(regs.hl(), value);

        // The low nibble of F does not exist: AF agrees modulo that mask.
        regs.set_af(value);
        assert_eq!(regs.a, (value >> 8) as u8);
        assert_eq!(regs.f, (value & 0x00F0) as u8);
        assert_eq!(regs.af(), value & 0xFFF0);
    }
}

#[test]
fn eight_bit_writes_show_through_pair_views() {
    let mut regs = Registers::default();
    regs.h = 0x12;
    regs.l = 0x34;
    assert_eq!(regs.hl(), 0x1234);
    regs.b = 0xAB;
    regs.c = 0xCD;
    assert_eq!(regs.bc(), 0xABCD);
}

#[test]
fn set_flag_leaves_other_bits_alone() {
    let mut regs = Registers::default();
    regs.set_flag(Flag::Z, true);
    regs.set_flag(Flag::C, true);
    assert_eq!(regs.f, 0x90);
    regs.set_flag(Flag::Z, false);
    assert_eq!(regs.f, 0x10);
    assert!(regs.flag(Flag::C));
    assert!(!regs.flag(Flag::N));
}

#[test]
fn reset_applies_post_boot_state() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
}

// ---------------------------------------------------------------------------
// ALU flags
// ---------------------------------------------------------------------------

#[test]
fn add_sets_half_carry_at_bit_3() {
    let (mut cpu, mut bus) = with_program(&[0xC6, 0x01]); // ADD A, 0x01
    cpu.regs.a = 0x0F;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
}

#[test]
fn add_overflow_sets_zero_and_carry() {
    let (mut cpu, mut bus) = with_program(&[0xC6, 0x01]); // ADD A, 0x01
    cpu.regs.a = 0xFF;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::N));
}

#[test]
fn adc_includes_carry_in() {
    let (mut cpu, mut bus) = with_program(&[0xCE, 0x00]); // ADC A, 0x00
    cpu.regs.a = 0xFF;
    cpu.regs.set_flag(Flag::C, true);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::H));
}

#[test]
fn cp_equal_sets_z_and_preserves_a() {
    let (mut cpu, mut bus) = with_program(&[0xFE, 0x10]); // CP 0x10
    cpu.regs.a = 0x10;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn sub_borrow_sets_carry_and_half() {
    let (mut cpu, mut bus) = with_program(&[0xD6, 0x01]); // SUB 0x01
    cpu.regs.a = 0x10;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.regs.flag(Flag::H)); // borrow out of bit 4
    assert!(!cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::N));
}

#[test]
fn add_hl_half_carry_boundary_is_bit_11() {
    let (mut cpu, mut bus) = with_program(&[0x09]); // ADD HL, BC
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    let z_before = cpu.regs.flag(Flag::Z);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::N));
    // Z is untouched by the 16-bit add.
    assert_eq!(cpu.regs.flag(Flag::Z), z_before);
}

#[test]
fn inc_dec_never_touch_carry() {
    let (mut cpu, mut bus) = with_program(&[0x3C, 0x3D]); // INC A / DEC A
    cpu.regs.set_flag(Flag::C, true);
    cpu.regs.a = 0xFF;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn add_sp_signed_flags_come_from_low_byte() {
    // Positive offset crossing both boundaries.
    let (mut cpu, mut bus) = with_program(&[0xE8, 0x01]); // ADD SP, +1
    cpu.regs.sp = 0x00FF;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(cpu.regs.sp, 0x0100);
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));

    // Negative offset: flags still from the unsigned low-byte sums.
    let (mut cpu, mut bus) = with_program(&[0xE8, 0xFF]); // ADD SP, -1
    cpu.regs.sp = 0x0000;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.sp, 0xFFFF);
    assert!(!cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn ld_hl_sp_offset_matches_add_sp_flags() {
    let (mut cpu, mut bus) = with_program(&[0xF8, 0x02]); // LD HL, SP+2
    cpu.regs.sp = 0xFFFE;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

/// ADD then DAA over every pair of two-digit BCD values must match manual
/// decimal addition, including the carry-out cases.
#[test]
fn daa_corrects_every_bcd_addition() {
    for x in 0..100u32 {
        for y in 0..100u32 {
            let a = (((x / 10) << 4) | (x % 10)) as u8;
            let b = (((y / 10) << 4) | (y % 10)) as u8;

            let (mut cpu, mut bus) = with_program(&[0xC6, b, 0x27]); // ADD A, b / DAA
            cpu.regs.a = a;
            step_ok(&mut cpu, &mut bus);
            step_ok(&mut cpu, &mut bus);

            let sum = x + y;
            let expected = ((((sum / 10) % 10) << 4) | (sum % 10)) as u8;
            assert_eq!(
                cpu.regs.a, expected,
                "DAA after {x:02} + {y:02}: got {:#04X}, want {:#04X}",
                cpu.regs.a, expected
            );
            assert_eq!(cpu.regs.flag(Flag::C), sum > 99, "carry after {x:02} + {y:02}");
            assert_eq!(cpu.regs.flag(Flag::Z), expected == 0);
            assert!(!cpu.regs.flag(Flag::H), "H must be cleared by DAA");
        }
    }
}

/// SUB then DAA over every pair of two-digit BCD values must match manual
/// decimal subtraction with borrow.
#[test]
fn daa_corrects_every_bcd_subtraction() {
    for x in 0..100u32 {
        for y in 0..100u32 {
            let a = (((x / 10) << 4) | (x % 10)) as u8;
            let b = (((y / 10) << 4) | (y % 10)) as u8;

            let (mut cpu, mut bus) = with_program(&[0xD6, b, 0x27]); // SUB b / DAA
            cpu.regs.a = a;
            step_ok(&mut cpu, &mut bus);
            step_ok(&mut cpu, &mut bus);

            let diff = (100 + x - y) % 100;
            let expected = (((diff / 10) << 4) | (diff % 10)) as u8;
            assert_eq!(
                cpu.regs.a, expected,
                "DAA after {x:02} - {y:02}: got {:#04X}, want {:#04X}",
                cpu.regs.a, expected
            );
            assert_eq!(cpu.regs.flag(Flag::C), x < y, "borrow after {x:02} - {y:02}");
        }
    }
}

// ---------------------------------------------------------------------------
// Loads, stack, addressing modes
// ---------------------------------------------------------------------------

#[test]
fn ld_post_increment_and_decrement_adjust_hl() {
    let (mut cpu, mut bus) = with_program(&[0x2A, 0x32]); // LD A,(HL+) / LD (HL-),A
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x42;

    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.regs.hl(), 0xC001);

    step_ok(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC001], 0x42);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn high_page_loads_use_ff00_base() {
    let (mut cpu, mut bus) = with_program(&[0xE0, 0x80, 0xF0, 0x81, 0xE2, 0xF2]);
    cpu.regs.a = 0x5A;
    bus.memory[0xFF81] = 0xA5;

    let cycles = step_ok(&mut cpu, &mut bus); // LDH (0x80), A
    assert_eq!(cycles, 12);
    assert_eq!(bus.memory[0xFF80], 0x5A);

    step_ok(&mut cpu, &mut bus); // LDH A, (0x81)
    assert_eq!(cpu.regs.a, 0xA5);

    cpu.regs.c = 0x90;
    cpu.regs.a = 0x77;
    let cycles = step_ok(&mut cpu, &mut bus); // LD (C), A
    assert_eq!(cycles, 8);
    assert_eq!(bus.memory[0xFF90], 0x77);

    bus.memory[0xFF90] = 0x99;
    step_ok(&mut cpu, &mut bus); // LD A, (C)
    assert_eq!(cpu.regs.a, 0x99);
}

#[test]
fn ld_a16_indirect_and_sp_store() {
    let (mut cpu, mut bus) = with_program(&[0xEA, 0x00, 0xC1, 0x08, 0x10, 0xC1]);
    cpu.regs.a = 0x3C;
    cpu.regs.sp = 0xBEEF;

    let cycles = step_ok(&mut cpu, &mut bus); // LD (0xC100), A
    assert_eq!(cycles, 16);
    assert_eq!(bus.memory[0xC100], 0x3C);

    let cycles = step_ok(&mut cpu, &mut bus); // LD (0xC110), SP
    assert_eq!(cycles, 20);
    assert_eq!(bus.memory[0xC110], 0xEF);
    assert_eq!(bus.memory[0xC111], 0xBE);
}

#[test]
fn push_moves_sp_by_two_with_low_byte_at_lower_address() {
    let (mut cpu, mut bus) = with_program(&[0xC5, 0xD1]); // PUSH BC / POP DE
    cpu.regs.set_bc(0x1234);

    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x34);
    assert_eq!(bus.memory[0xFFFD], 0x12);

    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn pop_af_forces_low_nibble_to_zero() {
    let (mut cpu, mut bus) = with_program(&[0xF1]); // POP AF
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0xFF; // would-be F
    bus.memory[0xC001] = 0x12; // A
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

// ---------------------------------------------------------------------------
// Control flow and cycle accounting
// ---------------------------------------------------------------------------

#[test]
fn conditional_jr_costs_four_more_when_taken() {
    // JR NZ, +2 with Z set: not taken.
    let (mut cpu, mut bus) = with_program(&[0x20, 0x02]);
    cpu.regs.set_flag(Flag::Z, true);
    let untaken = step_ok(&mut cpu, &mut bus);
    assert_eq!(untaken, 8);
    assert_eq!(cpu.regs.pc, 0x0102);

    // Same opcode with Z clear: taken.
    let (mut cpu, mut bus) = with_program(&[0x20, 0x02]);
    cpu.regs.set_flag(Flag::Z, false);
    let taken = step_ok(&mut cpu, &mut bus);
    assert_eq!(taken, 12);
    assert_eq!(cpu.regs.pc, 0x0104);

    assert_eq!(taken - untaken, 4);
}

#[test]
fn jr_offset_is_signed() {
    let (mut cpu, mut bus) = with_program(&[0x18, 0xFE]); // JR -2: jump to itself
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn conditional_jp_call_ret_cycle_pairs() {
    // JP Z taken/not taken: 16 vs 12.
    let (mut cpu, mut bus) = with_program(&[0xCA, 0x00, 0x02]);
    cpu.regs.set_flag(Flag::Z, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0200);

    let (mut cpu, mut bus) = with_program(&[0xCA, 0x00, 0x02]);
    cpu.regs.set_flag(Flag::Z, false);
    assert_eq!(step_ok(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0103);

    // CALL NC taken/not taken: 24 vs 12.
    let (mut cpu, mut bus) = with_program(&[0xD4, 0x00, 0x02]);
    cpu.regs.set_flag(Flag::C, false);
    assert_eq!(step_ok(&mut cpu, &mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0200);

    let (mut cpu, mut bus) = with_program(&[0xD4, 0x00, 0x02]);
    cpu.regs.set_flag(Flag::C, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0103);

    // RET C taken/not taken: 20 vs 8.
    let (mut cpu, mut bus) = with_program(&[0xD8]);
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0x00;
    bus.memory[0xC001] = 0x02;
    cpu.regs.set_flag(Flag::C, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0200);

    let (mut cpu, mut bus) = with_program(&[0xD8]);
    cpu.regs.set_flag(Flag::C, false);
    assert_eq!(step_ok(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0101);
}

#[test]
fn call_pushes_return_address_and_ret_pops_it() {
    let (mut cpu, mut bus) = with_program(&[0xCD, 0x00, 0x02]); // CALL 0x0200
    bus.memory[0x0200] = 0xC9; // RET
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 24);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x03); // return address 0x0103, low first
    assert_eq!(bus.memory[0xFFFD], 0x01);

    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_calls_its_fixed_target() {
    let (mut cpu, mut bus) = with_program(&[0xEF]); // RST 28h
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xFFFC], 0x01);
    assert_eq!(bus.memory[0xFFFD], 0x01); // pushed 0x0101
}

#[test]
fn jp_hl_jumps_through_the_register() {
    let (mut cpu, mut bus) = with_program(&[0xE9]); // JP HL
    cpu.regs.set_hl(0x4321);
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 4);
    assert_eq!(cpu.regs.pc, 0x4321);
}

// ---------------------------------------------------------------------------
// Extended (CB-prefixed) operations
// ---------------------------------------------------------------------------

#[test]
fn cb_swap_exchanges_nibbles() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0x37]); // SWAP A
    cpu.regs.a = 0xF1;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 8); // 4 prefix + 4 register form
    assert_eq!(cpu.regs.a, 0x1F);
    assert!(!cpu.regs.flag(Flag::Z));

    let (mut cpu, mut bus) = with_program(&[0xCB, 0x37]);
    cpu.regs.a = 0x00;
    step_ok(&mut cpu, &mut bus);
    assert!(cpu.regs.flag(Flag::Z));
}

#[test]
fn cb_rotates_and_shifts() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0x00]); // RLC B
    cpu.regs.b = 0x80;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x01);
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));

    let (mut cpu, mut bus) = with_program(&[0xCB, 0x1A]); // RR D
    cpu.regs.d = 0x01;
    cpu.regs.set_flag(Flag::C, false);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.d, 0x00);
    assert!(cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::Z));

    let (mut cpu, mut bus) = with_program(&[0xCB, 0x28]); // SRA B
    cpu.regs.b = 0x81;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0xC0); // bit 7 preserved
    assert!(cpu.regs.flag(Flag::C));

    let (mut cpu, mut bus) = with_program(&[0xCB, 0x38]); // SRL B
    cpu.regs.b = 0x81;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x40);
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn cb_bit_res_set_on_register_and_memory() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0x7C]); // BIT 7, H
    cpu.regs.h = 0x80;
    cpu.regs.set_flag(Flag::C, true);
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 8);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::C)); // C untouched by BIT

    let (mut cpu, mut bus) = with_program(&[0xCB, 0x46]); // BIT 0, (HL)
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x00;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 12); // 4 prefix + 8
    assert!(cpu.regs.flag(Flag::Z));

    let (mut cpu, mut bus) = with_program(&[0xCB, 0x86, 0xCB, 0xC6]); // RES 0,(HL) / SET 0,(HL)
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xFF;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 16); // 4 prefix + 12
    assert_eq!(bus.memory[0xC000], 0xFE);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC000], 0xFF);
}

#[test]
fn rotate_a_forms_always_clear_z() {
    let (mut cpu, mut bus) = with_program(&[0x07]); // RLCA
    cpu.regs.a = 0x00;
    cpu.regs.set_flag(Flag::Z, true);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(!cpu.regs.flag(Flag::Z));

    let (mut cpu, mut bus) = with_program(&[0x17]); // RLA
    cpu.regs.a = 0x80;
    cpu.regs.set_flag(Flag::C, true);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));
}

// ---------------------------------------------------------------------------
// Interrupts
// ---------------------------------------------------------------------------

#[test]
fn interrupt_priority_is_fixed_descending() {
    init_logger();

    let (mut cpu, mut bus) = with_program(&[]);
    bus.memory[IE_ADDR as usize] = IntFlags::all().bits();
    bus.memory[IF_ADDR as usize] = IntFlags::all().bits();

    let expected_vectors = [0x0040u16, 0x0048, 0x0050, 0x0058, 0x0060];
    for (index, vector) in expected_vectors.iter().enumerate() {
        cpu.ime = true;
        let cycles = step_ok(&mut cpu, &mut bus);
        assert_eq!(cycles, DISPATCH_CYCLES);
        assert_eq!(cpu.regs.pc, *vector, "dispatch {index} went to the wrong vector");
        // Only the serviced bit is cleared.
        assert_eq!(bus.memory[IF_ADDR as usize], 0x1F & !((1u8 << (index + 1)) - 1));
        assert!(!cpu.ime);
    }
    assert_eq!(bus.memory[IF_ADDR as usize], 0x00);
}

#[test]
fn interrupt_dispatch_pushes_pc_and_blocks_reentry() {
    let (mut cpu, mut bus) = with_program(&[]);
    bus.memory[0x0040] = 0x00; // NOP at the VBlank vector
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;
    cpu.ime = true;

    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, DISPATCH_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x00); // pushed 0x0100
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert!(!cpu.ime);

    // New requests arriving before the handler re-enables IME must wait.
    bus.memory[IE_ADDR as usize] = 0x1F;
    bus.memory[IF_ADDR as usize] = 0x1F;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 4); // the NOP at 0x0040, not a second dispatch
    assert_eq!(cpu.regs.pc, 0x0041);
}

#[test]
fn masked_requests_are_not_serviced() {
    let (mut cpu, mut bus) = with_program(&[0x00]);
    bus.memory[IE_ADDR as usize] = 0x00;
    bus.memory[IF_ADDR as usize] = 0x1F;
    cpu.ime = true;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 4); // plain NOP
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(bus.memory[IF_ADDR as usize], 0x1F);
}

#[test]
fn ei_enables_after_the_following_instruction() {
    let (mut cpu, mut bus) = with_program(&[0xFB, 0x00, 0x00]); // EI / NOP / NOP
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;

    step_ok(&mut cpu, &mut bus); // EI
    assert!(!cpu.ime);
    step_ok(&mut cpu, &mut bus); // NOP; IME becomes set at its end
    assert!(cpu.ime);
    let cycles = step_ok(&mut cpu, &mut bus); // dispatch, not the second NOP
    assert_eq!(cycles, DISPATCH_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn di_cancels_a_pending_enable() {
    let (mut cpu, mut bus) = with_program(&[0xFB, 0xF3, 0x00]); // EI / DI / NOP
    step_ok(&mut cpu, &mut bus);
    step_ok(&mut cpu, &mut bus);
    step_ok(&mut cpu, &mut bus);
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_ime_immediately() {
    let (mut cpu, mut bus) = with_program(&[0xD9]); // RETI
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0x00;
    bus.memory[0xC001] = 0x02;
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert!(cpu.ime);
}

// ---------------------------------------------------------------------------
// HALT and STOP
// ---------------------------------------------------------------------------

#[test]
fn halt_idles_until_an_interrupt_is_dispatched() {
    let (mut cpu, mut bus) = with_program(&[0x76]); // HALT
    cpu.ime = true;
    step_ok(&mut cpu, &mut bus);
    assert!(cpu.halted);

    // No pending interrupt: 4-cycle idle steps, PC pinned.
    for _ in 0..3 {
        assert_eq!(step_ok(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.regs.pc, 0x0101);
    }

    bus.memory[IE_ADDR as usize] = IntFlags::TIMER.bits();
    bus.memory[IF_ADDR as usize] = IntFlags::TIMER.bits();
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, DISPATCH_CYCLES);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0050);
}

#[test]
fn halt_with_ime_clear_wakes_without_service() {
    let (mut cpu, mut bus) = with_program(&[0x76, 0x00]); // HALT / NOP
    step_ok(&mut cpu, &mut bus);
    assert!(cpu.halted);

    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;
    // Wakes and immediately executes the NOP; the request stays set.
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 4);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(bus.memory[IF_ADDR as usize], 0x01);
}

#[test]
fn halt_bug_executes_the_next_byte_twice() {
    let (mut cpu, mut bus) = with_program(&[0x76, 0x3C]); // HALT / INC A
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;
    cpu.regs.a = 0;

    step_ok(&mut cpu, &mut bus); // HALT with IME=0 and a pending request
    assert!(!cpu.halted);

    step_ok(&mut cpu, &mut bus); // INC A, PC not advanced
    assert_eq!(cpu.regs.a, 1);
    assert_eq!(cpu.regs.pc, 0x0101);

    step_ok(&mut cpu, &mut bus); // INC A again, PC advances normally
    assert_eq!(cpu.regs.a, 2);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn stop_waits_for_a_joypad_line() {
    let (mut cpu, mut bus) = with_program(&[0x10, 0x00, 0x3C]); // STOP / (pad) / INC A
    bus.memory[0xFF00] = 0xFF; // no input line low
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0102);

    for _ in 0..3 {
        assert_eq!(step_ok(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.regs.pc, 0x0102);
        assert_eq!(cpu.regs.a, 0x01); // nothing executed
    }

    bus.memory[0xFF00] = 0xFE; // a button line goes low
    step_ok(&mut cpu, &mut bus); // wake step
    step_ok(&mut cpu, &mut bus); // INC A
    assert_eq!(cpu.regs.a, 0x02);
    assert_eq!(cpu.regs.pc, 0x0103);
}

// ---------------------------------------------------------------------------
// Unknown opcodes and table construction
// ---------------------------------------------------------------------------

const RESERVED_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

#[test]
fn reserved_opcodes_fail_without_mutating_registers() {
    for opcode in RESERVED_OPCODES {
        let (mut cpu, mut bus) = with_program(&[opcode]);
        let before = cpu.regs;
        let err = cpu.step(&mut bus).unwrap_err();
        assert_eq!(
            err,
            CpuError::UnknownOpcode {
                opcode,
                pc: 0x0100
            }
        );
        assert_eq!(cpu.regs, before, "opcode {opcode:#04X} mutated registers");
    }
}

#[test]
fn both_tables_are_fully_populated() {
    let mut holes = Vec::new();
    for opcode in 0..=0xFFu8 {
        let instr = BASE.lookup(opcode);
        if instr.op == Op::Unknown {
            holes.push(opcode);
        } else {
            assert!(!instr.name.is_empty());
            assert!(instr.cycles >= 4, "opcode {opcode:#04X} has no base cost");
            assert!(instr.length <= 2);
        }
    }
    assert_eq!(holes, RESERVED_OPCODES.to_vec());

    for opcode in 0..=0xFFu8 {
        let instr = EXTENDED.lookup(opcode);
        assert_ne!(instr.op, Op::Unknown);
        assert!(!instr.name.is_empty());
        assert!(instr.cycles >= 4);
        assert_eq!(instr.length, 0);
    }
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn load_then_add_immediate_scenario() {
    init_logger();

    // LD A, 0x05 / ADD A, 0x03 starting from reset.
    let (mut cpu, mut bus) = with_program(&[0x3E, 0x05, 0xC6, 0x03]);

    let first = step_ok(&mut cpu, &mut bus);
    assert_eq!(first, 8);
    assert_eq!(cpu.regs.a, 0x05);
    assert_eq!(cpu.regs.pc, 0x0102);

    let second = step_ok(&mut cpu, &mut bus);
    assert_eq!(second, 8);
    assert_eq!(cpu.regs.a, 0x08);
    assert_eq!(cpu.regs.pc, 0x0104);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn ld_r_r_copies_between_views() {
    let (mut cpu, mut bus) = with_program(&[0x44, 0x4D, 0x70]); // LD B,H / LD C,L / LD (HL),B
    cpu.regs.set_hl(0xC0DE);
    step_ok(&mut cpu, &mut bus);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.bc(), 0xC0DE);
    let cycles = step_ok(&mut cpu, &mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(bus.memory[0xC0DE], 0xC0);
}

#[test]
fn disassemble_substitutes_immediates() {
    let (mut cpu, mut bus) = with_program(&[0x01, 0x34, 0x12]); // LD BC, 0x1234
    step_ok(&mut cpu, &mut bus);
    let instr = BASE.lookup(0x01);
    assert_eq!(cpu.disassemble(instr), "LD BC, 1234h");
}
