use super::*;

#[test]
fn three_source_registers() {
    let machine = run_machine!(
        [instr!(SUB, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 10, A1 = 3, A2 = 2]
    );

    assert_eq!(machine.register(RegisterId::V0), 5);
}

#[test]
fn wrapping_below_zero() {
    let machine = run_machine!(
        [instr!(SUB, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 1, A1 = 2]
    );

    assert_eq!(machine.register(RegisterId::V0), 0xFFFF_FFFF);
}
