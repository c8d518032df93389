use super::*;

#[test]
fn comparison_is_signed() {
    let machine = run_machine!(
        [instr!(BLT, ZERO, A0, A1, T0, 0, 0), halt!(), halt!()],
        [A0 = 0xFFFF_FFFFu32, A1 = 1, T0 = 0x20]
    );

    assert_eq!(machine.pc(), 0x20);
}

#[test]
fn not_taken_when_greater() {
    let machine = run_machine!(
        [instr!(BLT, ZERO, A0, A1, T0, 0, 0), halt!(), halt!()],
        [A0 = 1, A1 = 0xFFFF_FFFFu32, T0 = 2]
    );

    assert_eq!(machine.pc(), 1);
}
