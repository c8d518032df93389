use super::*;

#[test]
fn shifts_left() {
    let machine = run_machine!(
        [instr!(SLL, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 0b1011u32, A1 = 4]
    );

    assert_eq!(machine.register(RegisterId::V0), 0b1011_0000);
}

#[test]
fn amount_uses_low_five_bits() {
    let machine = run_machine!(
        [instr!(SLL, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 1, A1 = 33]
    );

    assert_eq!(machine.register(RegisterId::V0), 2);
}
