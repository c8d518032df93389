use super::*;

#[test]
fn immediate_operands() {
    let machine = run_machine!([instr!(ADD, T0, IMM1, IMM2, ZERO, 20, 22), halt!()]);

    assert_eq!(machine.register(RegisterId::T0), 42);
}

#[test]
fn three_source_registers() {
    let machine = run_machine!(
        [instr!(ADD, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 1, A1 = 2, A2 = 3]
    );

    assert_eq!(machine.register(RegisterId::V0), 6);
}

#[test]
fn wrapping_overflow() {
    let machine = run_machine!(
        [instr!(ADD, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 0xFFFF_FFFFu32, A1 = 2]
    );

    assert_eq!(machine.register(RegisterId::V0), 1);
}
