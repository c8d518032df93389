use super::*;

#[test]
fn taken() {
    let machine = run_machine!(
        [instr!(BNE, ZERO, A0, A1, S0, 0, 0), halt!(), halt!()],
        [A0 = 5, A1 = 6, S0 = 2]
    );

    assert_eq!(machine.pc(), 2);
}

#[test]
fn not_taken() {
    let machine = run_machine!(
        [instr!(BNE, ZERO, A0, A1, S0, 0, 0), halt!(), halt!()],
        [A0 = 5, A1 = 5, S0 = 2]
    );

    assert_eq!(machine.pc(), 1);
}
