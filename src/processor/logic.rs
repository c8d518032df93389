use num::FromPrimitive;
use std::io;
use std::num::Wrapping;

use super::Machine;
use crate::io::IoRegister;
use crate::trace::Tracer;
use crate::{constants, Instruction, Opcode};

fn branch(machine: &mut Machine, target: Wrapping<u32>) {
    machine.pc = target.0 & constants::PC_MASK;
}

pub(super) fn execute<T: Tracer>(
    machine: &mut Machine,
    instruction: &Instruction,
    tracer: &mut T,
) -> io::Result<()> {
    let opcode = Opcode::from_u32(instruction.opcode);

    let rd = Wrapping(machine.registers.get(instruction.rd));
    let rs = Wrapping(machine.registers.get(instruction.rs));
    let rt = Wrapping(machine.registers.get(instruction.rt));
    let rm = Wrapping(machine.registers.get(instruction.rm));

    let rs_i = rs.0 as i32;
    let rt_i = rt.0 as i32;
    let shift = rt.0 & constants::SHIFT_AMOUNT_MASK;

    let mut jumped = false;

    if let Some(opcode) = opcode {
        match opcode {
            Opcode::ADD => {
                machine.registers.set(instruction.rd, (rs + rt + rm).0);
            }

            Opcode::SUB => {
                machine.registers.set(instruction.rd, (rs - rt - rm).0);
            }

            Opcode::MAC => {
                machine.registers.set(instruction.rd, (rs * rt + rm).0);
            }

            Opcode::AND => {
                machine.registers.set(instruction.rd, rs.0 & rt.0 & rm.0);
            }

            Opcode::OR => {
                machine.registers.set(instruction.rd, rs.0 | rt.0 | rm.0);
            }

            Opcode::XOR => {
                machine.registers.set(instruction.rd, rs.0 ^ rt.0 ^ rm.0);
            }

            Opcode::SLL => {
                machine.registers.set(instruction.rd, rs.0 << shift);
            }

            Opcode::SRA => {
                machine.registers.set(instruction.rd, (rs_i >> shift) as u32);
            }

            Opcode::SRL => {
                machine.registers.set(instruction.rd, rs.0 >> shift);
            }

            Opcode::BEQ => {
                if rs.0 == rt.0 {
                    branch(machine, rm);
                    jumped = true;
                }
            }

            Opcode::BNE => {
                if rs.0 != rt.0 {
                    branch(machine, rm);
                    jumped = true;
                }
            }

            Opcode::BLT => {
                if rs_i < rt_i {
                    branch(machine, rm);
                    jumped = true;
                }
            }

            Opcode::BGT => {
                if rs_i > rt_i {
                    branch(machine, rm);
                    jumped = true;
                }
            }

            Opcode::BLE => {
                if rs_i <= rt_i {
                    branch(machine, rm);
                    jumped = true;
                }
            }

            Opcode::BGE => {
                if rs_i >= rt_i {
                    branch(machine, rm);
                    jumped = true;
                }
            }

            Opcode::JAL => {
                // The link is written before the target is read, so a jump
                // through the link register lands on the next instruction.
                machine
                    .registers
                    .set(instruction.rd, machine.pc.wrapping_add(1));
                let target = Wrapping(machine.registers.get(instruction.rm));
                branch(machine, target);
                jumped = true;
            }

            Opcode::LW => {
                if let Some(word) = machine.dmem.get((rs + rt).0) {
                    machine
                        .registers
                        .set(instruction.rd, word.wrapping_add(rm.0));
                }
            }

            Opcode::SW => {
                machine.dmem.set((rs + rt).0, (rd + rm).0);
            }

            Opcode::RETI => {
                machine.pc = machine.io.irqreturn & constants::PC_MASK;
                machine.in_interrupt = false;
                jumped = true;
            }

            Opcode::IN => {
                if let Some(register) = IoRegister::from_u32((rs + rt).0) {
                    let value = machine.io.read(register, machine.cycle);
                    machine.registers.set(instruction.rd, value);
                    let observed = machine.registers.get(instruction.rd);
                    tracer.io_read(machine.cycle, register, observed)?;
                } else {
                    machine.registers.set(instruction.rd, 0);
                }
            }

            Opcode::OUT => {
                if let Some(register) = IoRegister::from_u32((rs + rt).0) {
                    machine.io.write(register, rm.0);
                    tracer.io_write(machine.cycle, register, rm.0)?;
                }
            }

            Opcode::HALT => {
                machine.halted = true;
            }
        }
    }
    // Unrecognized opcode patterns execute as no-ops.

    if !jumped && !machine.halted {
        machine.pc = machine.pc.wrapping_add(1) & constants::PC_MASK;
    }

    Ok(())
}
