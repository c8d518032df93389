use super::*;

#[test]
fn comparison_is_signed() {
    let machine = run_machine!(
        [instr!(BGT, ZERO, A0, A1, S0, 0, 0), halt!(), halt!()],
        [A0 = 1, A1 = 0xFFFF_FFFFu32, S0 = 2]
    );

    assert_eq!(machine.pc(), 2);
}

#[test]
fn not_taken_when_equal() {
    let machine = run_machine!(
        [instr!(BGT, ZERO, A0, A1, S0, 0, 0), halt!(), halt!()],
        [A0 = 3, A1 = 3, S0 = 2]
    );

    assert_eq!(machine.pc(), 1);
}
