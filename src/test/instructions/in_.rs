use super::*;

#[test]
fn reads_cycle_counter() {
    let machine = run_machine!([
        instr!(ADD, ZERO, ZERO, ZERO, ZERO, 0, 0),
        instr!(IN, T0, IMM1, ZERO, ZERO, 8, 0),
        halt!(),
    ]);

    assert_eq!(machine.register(RegisterId::T0), 1);
}

#[test]
fn reads_back_written_port() {
    let machine = run_machine!([
        instr!(OUT, ZERO, ZERO, IMM1, IMM2, 9, 0xAB),
        instr!(IN, T0, IMM1, ZERO, ZERO, 9, 0),
        halt!(),
    ]);

    assert_eq!(machine.register(RegisterId::T0), 0xAB);
}

#[test]
fn reserved_port_reads_zero() {
    let machine = run_machine!(
        [instr!(IN, T0, IMM1, ZERO, ZERO, 18, 0), halt!()],
        [T0 = 5]
    );

    assert_eq!(machine.register(RegisterId::T0), 0);
}

#[test]
fn out_of_range_port_reads_zero() {
    let machine = run_machine!(
        [instr!(IN, T0, IMM1, ZERO, ZERO, 40, 0), halt!()],
        [T0 = 5]
    );

    assert_eq!(machine.register(RegisterId::T0), 0);
}
